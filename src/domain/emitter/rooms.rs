//! Room addressing.
//!
//! A room is a named subset of the sockets connected to a namespace.
//! Rooms are compared by exact value: `"Lobby"` and `"lobby"` are two rooms.

use serde::Serialize;

/// Ordered, duplicate-free collection of room identifiers.
///
/// Rooms keep the order in which they were first added. Adding a room that
/// is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoomSet(Vec<String>);

impl RoomSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds every room produced by `rooms`, skipping ones already present.
    pub fn extend(&mut self, rooms: impl IntoRooms) {
        for room in rooms.into_rooms() {
            self.insert(room);
        }
    }

    /// Adds a single room. Returns `false` if it was already present.
    pub fn insert(&mut self, room: String) -> bool {
        if self.contains(&room) {
            return false;
        }
        self.0.push(room);
        true
    }

    pub fn contains(&self, room: &str) -> bool {
        self.0.iter().any(|r| r == room)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the rooms as a plain list, in insertion order.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<R: IntoRooms> FromIterator<R> for RoomSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut set = RoomSet::new();
        for rooms in iter {
            set.extend(rooms);
        }
        set
    }
}

/// Conversion into a flat list of room identifiers.
///
/// Accepts a single identifier or any (possibly nested) sequence of
/// identifiers. Nested sequences are flattened depth first.
///
/// ```
/// use socketio_emitter::domain::emitter::IntoRooms;
///
/// assert_eq!("a".into_rooms(), vec!["a"]);
/// assert_eq!(vec![vec!["a", "b"], vec!["c"]].into_rooms(), vec!["a", "b", "c"]);
/// ```
pub trait IntoRooms {
    fn into_rooms(self) -> Vec<String>;
}

impl IntoRooms for &str {
    fn into_rooms(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoRooms for String {
    fn into_rooms(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoRooms for &String {
    fn into_rooms(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: IntoRooms> IntoRooms for Vec<T> {
    fn into_rooms(self) -> Vec<String> {
        self.into_iter().flat_map(IntoRooms::into_rooms).collect()
    }
}

impl<T: IntoRooms + Clone> IntoRooms for &[T] {
    fn into_rooms(self) -> Vec<String> {
        self.iter().cloned().flat_map(IntoRooms::into_rooms).collect()
    }
}

impl<T: IntoRooms + Clone> IntoRooms for &Vec<T> {
    fn into_rooms(self) -> Vec<String> {
        self.as_slice().into_rooms()
    }
}

impl<T: IntoRooms, const N: usize> IntoRooms for [T; N] {
    fn into_rooms(self) -> Vec<String> {
        self.into_iter().flat_map(IntoRooms::into_rooms).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_room_is_added() {
        let mut rooms = RoomSet::new();
        rooms.extend("room1");
        assert_eq!(rooms.to_vec(), vec!["room1"]);
    }

    #[test]
    fn duplicate_room_is_ignored() {
        let mut rooms = RoomSet::new();
        rooms.extend("room1");
        rooms.extend(String::from("room1"));
        assert_eq!(rooms.len(), 1);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut rooms = RoomSet::new();
        rooms.extend(["Lobby", "lobby"]);
        assert_eq!(rooms.to_vec(), vec!["Lobby", "lobby"]);
    }

    #[test]
    fn nested_sequences_are_flattened_in_order() {
        let mut rooms = RoomSet::new();
        rooms.extend(vec![vec!["a", "b"], vec!["b", "c"]]);
        assert_eq!(rooms.to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn slices_and_arrays_are_accepted() {
        let names = vec!["x".to_string(), "y".to_string()];
        let mut rooms = RoomSet::new();
        rooms.extend(names.as_slice());
        rooms.extend(&names);
        rooms.extend(["z"]);
        assert_eq!(rooms.to_vec(), vec!["x", "y", "z"]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let rooms: RoomSet = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&rooms).unwrap(), r#"["a","b"]"#);
    }

    proptest! {
        #[test]
        fn rooms_are_distinct_in_first_seen_order(names in proptest::collection::vec("[a-c]{1,2}", 0..20)) {
            let mut rooms = RoomSet::new();
            for name in &names {
                rooms.extend(name);
            }

            let mut expected: Vec<String> = Vec::new();
            for name in names {
                if !expected.contains(&name) {
                    expected.push(name);
                }
            }
            prop_assert_eq!(rooms.to_vec(), expected);
        }
    }
}
