//! Addressing state accumulated by the emitter between emissions.

use super::flags::{Flag, FlagSet};
use super::frame::FrameType;
use super::rooms::{IntoRooms, RoomSet};

/// Namespace used when none is set.
pub const DEFAULT_NAMESPACE: &str = "/";

/// Rooms, exclusions, flags, namespace and frame type for the next emission.
///
/// The state describes a single emission. It returns to its default after a
/// successful emit or an explicit [`EmissionState::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionState {
    pub rooms: RoomSet,
    pub except_rooms: RoomSet,
    pub flags: FlagSet,
    pub namespace: String,
    pub frame_type: FrameType,
}

impl EmissionState {
    pub fn new() -> Self {
        Self {
            rooms: RoomSet::new(),
            except_rooms: RoomSet::new(),
            flags: FlagSet::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            frame_type: FrameType::Regular,
        }
    }

    pub fn add_rooms(&mut self, rooms: impl IntoRooms) {
        self.rooms.extend(rooms);
    }

    pub fn add_except_rooms(&mut self, rooms: impl IntoRooms) {
        self.except_rooms.extend(rooms);
    }

    /// Overwrites the namespace. No format validation is applied.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = namespace.into();
    }

    pub fn set_flag(&mut self, flag: Flag) {
        self.flags.set(flag);
    }

    pub fn set_frame_type(&mut self, frame_type: FrameType) {
        self.frame_type = frame_type;
    }

    /// Returns every field to its default.
    pub fn reset(&mut self) {
        self.rooms.clear();
        self.except_rooms.clear();
        self.flags.clear();
        self.namespace = DEFAULT_NAMESPACE.to_string();
        self.frame_type = FrameType::Regular;
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for EmissionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_default() {
        let state = EmissionState::new();
        assert!(state.rooms.is_empty());
        assert!(state.except_rooms.is_empty());
        assert!(state.flags.is_empty());
        assert_eq!(state.namespace, "/");
        assert_eq!(state.frame_type, FrameType::Regular);
    }

    #[test]
    fn namespace_last_write_wins() {
        let mut state = EmissionState::new();
        state.set_namespace("/chat");
        state.set_namespace("admin");
        assert_eq!(state.namespace, "admin");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = EmissionState::new();
        state.add_rooms(["a", "b"]);
        state.add_except_rooms("c");
        state.set_flag(Flag::Volatile);
        state.set_namespace("/chat");
        state.set_frame_type(FrameType::Binary);
        assert!(!state.is_default());

        state.reset();

        assert!(state.is_default());
    }
}
