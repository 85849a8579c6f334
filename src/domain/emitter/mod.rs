//! Emitter domain - the wire vocabulary shared with the Socket.IO servers.
//!
//! Everything here is pure: building packets, naming channels, encoding
//! requests. Publishing lives behind the [`MessagePublisher`] port.
//!
//! [`MessagePublisher`]: crate::ports::MessagePublisher

mod channel;
mod control;
mod flags;
mod frame;
mod packet;
mod rooms;
mod state;

pub use channel::{ChannelNames, DEFAULT_PREFIX};
pub use control::{
    ControlMessage, RemoteDisconnectRequest, RemoteRoomsRequest, RequestType,
    ServerSideEmitRequest, SocketFilter,
};
pub use flags::{Flag, FlagSet};
pub use frame::FrameType;
pub use packet::{encode_event, patch_binary_markers, EmitOptions, EventPacket, EMITTER_UID};
pub use rooms::{IntoRooms, RoomSet};
pub use state::{EmissionState, DEFAULT_NAMESPACE};
