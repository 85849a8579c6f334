//! Emission flags.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::EmitterError;

/// Boolean modifier on an emission, interpreted by the receiving servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Force JSON stringification at delivery time.
    Json,
    /// Delivery may be dropped if the client is not ready.
    Volatile,
    /// Exclude the originating socket.
    Broadcast,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Json, Flag::Volatile, Flag::Broadcast];

    /// Returns the name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Json => "json",
            Flag::Volatile => "volatile",
            Flag::Broadcast => "broadcast",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = EmitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| EmitterError::invalid_flag(s))
    }
}

/// Set of flags, in the order they were first set.
///
/// Serialized as a map of flag name to `true`, e.g. `{"volatile": true}`.
/// An empty set serializes as an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet(Vec<Flag>);

impl FlagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets a flag. Setting a flag twice has no further effect.
    pub fn set(&mut self, flag: Flag) {
        if !self.0.contains(&flag) {
            self.0.push(flag);
        }
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.0.iter().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for flag in &self.0 {
            map.serialize_entry(flag.as_str(), &true)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use proptest::prelude::*;

    #[test]
    fn parses_known_flags() {
        assert_eq!("json".parse::<Flag>().unwrap(), Flag::Json);
        assert_eq!("volatile".parse::<Flag>().unwrap(), Flag::Volatile);
        assert_eq!("broadcast".parse::<Flag>().unwrap(), Flag::Broadcast);
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = "wtf".parse::<Flag>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfiguration);
    }

    #[test]
    fn flag_names_are_case_sensitive() {
        assert!("Broadcast".parse::<Flag>().is_err());
    }

    #[test]
    fn empty_set_serializes_as_empty_map() {
        let flags = FlagSet::new();
        assert_eq!(serde_json::to_string(&flags).unwrap(), "{}");
    }

    #[test]
    fn set_serializes_in_insertion_order() {
        let mut flags = FlagSet::new();
        flags.set(Flag::Volatile);
        flags.set(Flag::Json);
        assert_eq!(
            serde_json::to_string(&flags).unwrap(),
            r#"{"volatile":true,"json":true}"#
        );
    }

    proptest! {
        #[test]
        fn setting_a_flag_is_idempotent(indices in proptest::collection::vec(0usize..3, 1..10)) {
            let mut once = FlagSet::new();
            let mut twice = FlagSet::new();
            for i in indices {
                once.set(Flag::ALL[i]);
                twice.set(Flag::ALL[i]);
                twice.set(Flag::ALL[i]);
            }
            prop_assert_eq!(once, twice);
        }
    }
}
