//! Cluster request messages.
//!
//! Requests travel as JSON on the request channel and are handled by the
//! servers themselves rather than delivered to clients.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::domain::foundation::EmitterError;

use super::rooms::RoomSet;

/// Request kind, serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    RemoteJoin,
    RemoteLeave,
    RemoteDisconnect,
    ServerSideEmit,
}

impl RequestType {
    pub fn code(&self) -> u8 {
        match self {
            RequestType::RemoteJoin => 2,
            RequestType::RemoteLeave => 3,
            RequestType::RemoteDisconnect => 4,
            RequestType::ServerSideEmit => 6,
        }
    }
}

impl Serialize for RequestType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Socket selection for remote requests, taken from the current addressing state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocketFilter {
    pub rooms: RoomSet,
    pub except: RoomSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerSideEmitRequest {
    pub uid: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteRoomsRequest {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub opts: SocketFilter,
    pub rooms: RoomSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteDisconnectRequest {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub opts: SocketFilter,
    pub close: bool,
}

/// A request addressed to every server in the cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ControlMessage {
    ServerSideEmit(ServerSideEmitRequest),
    RemoteJoin(RemoteRoomsRequest),
    RemoteLeave(RemoteRoomsRequest),
    RemoteDisconnect(RemoteDisconnectRequest),
}

impl ControlMessage {
    /// Asks every server to emit `[event, args...]` to its own listeners.
    pub fn server_side_emit(uid: impl Into<String>, event: impl Into<String>, args: Vec<Value>) -> Self {
        let mut data = Vec::with_capacity(args.len() + 1);
        data.push(Value::String(event.into()));
        data.extend(args);
        ControlMessage::ServerSideEmit(ServerSideEmitRequest {
            uid: uid.into(),
            request_type: RequestType::ServerSideEmit,
            data,
        })
    }

    /// Makes the sockets matching `opts` join `rooms`.
    pub fn remote_join(opts: SocketFilter, rooms: RoomSet) -> Self {
        ControlMessage::RemoteJoin(RemoteRoomsRequest {
            request_type: RequestType::RemoteJoin,
            opts,
            rooms,
        })
    }

    /// Makes the sockets matching `opts` leave `rooms`.
    pub fn remote_leave(opts: SocketFilter, rooms: RoomSet) -> Self {
        ControlMessage::RemoteLeave(RemoteRoomsRequest {
            request_type: RequestType::RemoteLeave,
            opts,
            rooms,
        })
    }

    /// Disconnects the sockets matching `opts`. With `close`, the underlying
    /// connection is closed as well.
    pub fn remote_disconnect(opts: SocketFilter, close: bool) -> Self {
        ControlMessage::RemoteDisconnect(RemoteDisconnectRequest {
            request_type: RequestType::RemoteDisconnect,
            opts,
            close,
        })
    }

    pub fn request_type(&self) -> RequestType {
        match self {
            ControlMessage::ServerSideEmit(r) => r.request_type,
            ControlMessage::RemoteJoin(r) | ControlMessage::RemoteLeave(r) => r.request_type,
            ControlMessage::RemoteDisconnect(r) => r.request_type,
        }
    }

    /// Encodes the request as JSON bytes.
    pub fn encode(&self) -> Result<Vec<u8>, EmitterError> {
        Ok(serde_json::to_vec(self)?)
    }
}
