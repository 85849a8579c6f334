//! Bus channel naming.
//!
//! | Channel | Format |
//! |---------|--------|
//! | Event, no room | `{prefix}#{nsp}#` |
//! | Event, per room | `{prefix}#{nsp}#{room}#` |
//! | Cluster request | `{prefix}-request#{nsp}#` |
//!
//! These names must match what the subscribed servers listen on exactly.

/// Default channel prefix.
pub const DEFAULT_PREFIX: &str = "socket.io";

/// Builds channel names for a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelNames {
    prefix: String,
}

impl ChannelNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Channel for events addressed to a whole namespace.
    pub fn event_channel(&self, namespace: &str) -> String {
        format!("{}#{}#", self.prefix, namespace)
    }

    /// Channel for events addressed to one room of a namespace.
    pub fn room_channel(&self, namespace: &str, room: &str) -> String {
        format!("{}{}#", self.event_channel(namespace), room)
    }

    /// Channel for cluster requests (server-side emit, remote join/leave/disconnect).
    pub fn request_channel(&self, namespace: &str) -> String {
        format!("{}-request#{}#", self.prefix, namespace)
    }
}

impl Default for ChannelNames {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_channel_without_room() {
        let names = ChannelNames::default();
        assert_eq!(names.event_channel("/"), "socket.io#/#");
    }

    #[test]
    fn room_channel_appends_room_and_separator() {
        let names = ChannelNames::default();
        assert_eq!(names.room_channel("/chat", "room1"), "socket.io#/chat#room1#");
    }

    #[test]
    fn request_channel_uses_request_suffix() {
        let names = ChannelNames::new("app");
        assert_eq!(names.request_channel("/admin"), "app-request#/admin#");
    }
}
