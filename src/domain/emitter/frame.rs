//! Packet frame types.

use serde::{Serialize, Serializer};

/// Discriminator carried in the packet `type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FrameType {
    /// Plain event.
    #[default]
    Regular,
    /// Event whose payload needs binary-safe handling.
    Binary,
}

impl FrameType {
    /// Returns the integer code used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            FrameType::Regular => 2,
            FrameType::Binary => 5,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FrameType::Binary)
    }
}

impl Serialize for FrameType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_regular() {
        assert_eq!(FrameType::default(), FrameType::Regular);
    }

    #[test]
    fn codes_match_wire_values() {
        assert_eq!(FrameType::Regular.code(), 2);
        assert_eq!(FrameType::Binary.code(), 5);
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&FrameType::Binary).unwrap(), "5");
    }
}
