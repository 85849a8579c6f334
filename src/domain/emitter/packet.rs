//! Event packet encoding.
//!
//! An event is published as the MessagePack encoding of the 3-tuple
//! `(uid, packet, options)`:
//!
//! ```text
//! ["emitter", {"type": 2, "data": ["msg", "hello"], "nsp": "/chat"},
//!             {"rooms": ["room1"], "except": [], "flags": {}}]
//! ```
//!
//! Structs are encoded as maps keyed by field name so the receiving servers
//! can look fields up by name.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::EmitterError;

use super::flags::FlagSet;
use super::frame::FrameType;
use super::rooms::RoomSet;
use super::state::EmissionState;

/// Identifier embedded in every packet so servers can tell emitter traffic
/// apart from traffic relayed by their peers.
pub const EMITTER_UID: &str = "emitter";

/// Payload delivered to matching clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPacket {
    #[serde(rename = "type")]
    pub frame_type: FrameType,
    pub data: Vec<Value>,
    pub nsp: String,
}

impl EventPacket {
    /// Builds a packet whose data is `[event, args...]`.
    pub fn new(
        frame_type: FrameType,
        event: impl Into<String>,
        args: Vec<Value>,
        nsp: impl Into<String>,
    ) -> Self {
        let mut data = Vec::with_capacity(args.len() + 1);
        data.push(Value::String(event.into()));
        data.extend(args);
        Self {
            frame_type,
            data,
            nsp: nsp.into(),
        }
    }
}

/// Routing metadata the receiving servers use to select sockets.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmitOptions<'a> {
    pub rooms: &'a RoomSet,
    pub except: &'a RoomSet,
    pub flags: &'a FlagSet,
}

impl<'a> From<&'a EmissionState> for EmitOptions<'a> {
    fn from(state: &'a EmissionState) -> Self {
        Self {
            rooms: &state.rooms,
            except: &state.except_rooms,
            flags: &state.flags,
        }
    }
}

/// Packs `(uid, packet, options)` into a MessagePack message.
///
/// Binary frames go through [`patch_binary_markers`] before being returned.
pub fn encode_event(
    uid: &str,
    packet: &EventPacket,
    options: EmitOptions<'_>,
) -> Result<Vec<u8>, EmitterError> {
    let message = rmp_serde::to_vec_named(&(uid, packet, options))?;

    if packet.frame_type.is_binary() {
        return Ok(patch_binary_markers(message));
    }
    Ok(message)
}

/// Rewrites the MessagePack markers that the server-side decoder expects to
/// differ for binary frames: every `0xDA` becomes `0xD8` and every `0xDB`
/// becomes `0xD9`.
///
/// The substitution runs over raw bytes, not over the decoded structure, so
/// payload bytes that happen to equal `0xDA` or `0xDB` are rewritten too.
/// Existing consumers depend on this exact behavior.
pub fn patch_binary_markers(mut message: Vec<u8>) -> Vec<u8> {
    for byte in message.iter_mut() {
        *byte = match *byte {
            0xDA => 0xD8,
            0xDB => 0xD9,
            other => other,
        };
    }
    message
}
