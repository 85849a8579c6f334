//! Emitter - builds Socket.IO broadcast packets and publishes them on the bus.
//!
//! The emitter is a mutable builder. Addressing calls (`to`, `except`, `of`,
//! flags, frame type) accumulate state for the next [`Emitter::emit`], which
//! publishes and then resets the state, so rooms never bleed into the next
//! event.
//!
//! Cluster requests (`server_side_emit`, `sockets_join`, `sockets_leave`,
//! `disconnect_sockets`) read the current rooms and exclusions but leave the
//! state as it is.
//!
//! # Delivery
//!
//! Publishing is fire-and-forget. An event addressed to N rooms is published
//! N times, once per room channel, in room order. If one of those publishes
//! fails, the remaining rooms are skipped, the error is returned, and the
//! state is kept so the caller can inspect or retry it. Rooms published before
//! the failure have already been delivered.
//!
//! # Concurrency
//!
//! Builder methods take `&mut self`, so one emitter serves one call sequence
//! at a time. Share the publisher, not the emitter: create one emitter per
//! task over the same `Arc<dyn MessagePublisher>`.

use std::sync::Arc;

use serde_json::Value;

use crate::config::EmitterConfig;
use crate::domain::emitter::{
    encode_event, ChannelNames, ControlMessage, EmissionState, EmitOptions, EventPacket, Flag,
    FrameType, IntoRooms, RoomSet, SocketFilter, DEFAULT_PREFIX, EMITTER_UID,
};
use crate::domain::foundation::EmitterError;
use crate::ports::MessagePublisher;

/// Publisher-side Socket.IO emitter.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(RedisMessageBus::connect(&config.redis).await?);
/// let mut emitter = Emitter::new(bus);
///
/// emitter
///     .of("/chat")
///     .to("room1")
///     .emit("msg", vec![json!("hello")])
///     .await?;
/// ```
pub struct Emitter {
    publisher: Arc<dyn MessagePublisher>,
    channels: ChannelNames,
    state: EmissionState,
}

impl Emitter {
    /// Creates an emitter using the default `socket.io` prefix.
    pub fn new(publisher: Arc<dyn MessagePublisher>) -> Self {
        Self::with_prefix(publisher, DEFAULT_PREFIX)
    }

    /// Creates an emitter publishing on channels named after `prefix`.
    pub fn with_prefix(publisher: Arc<dyn MessagePublisher>, prefix: impl Into<String>) -> Self {
        Self {
            publisher,
            channels: ChannelNames::new(prefix),
            state: EmissionState::new(),
        }
    }

    /// Creates an emitter from loaded configuration.
    pub fn from_config(config: &EmitterConfig, publisher: Arc<dyn MessagePublisher>) -> Self {
        Self::with_prefix(publisher, config.prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        self.channels.prefix()
    }

    /// Current addressing state for the next emission.
    pub fn state(&self) -> &EmissionState {
        &self.state
    }

    // === Addressing ===

    /// Targets one or more rooms. Rooms already targeted are ignored.
    pub fn in_rooms(&mut self, rooms: impl IntoRooms) -> &mut Self {
        self.state.add_rooms(rooms);
        self
    }

    /// Alias for [`Emitter::in_rooms`].
    pub fn to(&mut self, rooms: impl IntoRooms) -> &mut Self {
        self.in_rooms(rooms)
    }

    /// Excludes sockets in one or more rooms.
    pub fn except(&mut self, rooms: impl IntoRooms) -> &mut Self {
        self.state.add_except_rooms(rooms);
        self
    }

    /// Selects the namespace. The last call wins.
    pub fn of(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.state.set_namespace(namespace);
        self
    }

    /// Sets a flag by its wire name.
    ///
    /// # Errors
    ///
    /// Returns `EmitterError::InvalidFlag` for anything other than
    /// `json`, `volatile` or `broadcast`. The state is left unchanged.
    pub fn flag(&mut self, name: &str) -> Result<&mut Self, EmitterError> {
        let flag = name.parse::<Flag>()?;
        Ok(self.set_flag(flag))
    }

    pub fn set_flag(&mut self, flag: Flag) -> &mut Self {
        self.state.set_flag(flag);
        self
    }

    pub fn with_json(&mut self) -> &mut Self {
        self.set_flag(Flag::Json)
    }

    pub fn with_volatile(&mut self) -> &mut Self {
        self.set_flag(Flag::Volatile)
    }

    pub fn with_broadcast(&mut self) -> &mut Self {
        self.set_flag(Flag::Broadcast)
    }

    /// Sets the frame type of the next event.
    pub fn frame_type(&mut self, frame_type: FrameType) -> &mut Self {
        self.state.set_frame_type(frame_type);
        self
    }

    /// Returns the addressing state to its defaults.
    pub fn reset(&mut self) -> &mut Self {
        self.state.reset();
        self
    }

    // === Events ===

    /// Publishes `[event, args...]` to the sockets matching the current state,
    /// then resets the state.
    ///
    /// With no rooms the event goes to `{prefix}#{nsp}#`; otherwise it is
    /// published once per room on `{prefix}#{nsp}#{room}#`.
    ///
    /// # Errors
    ///
    /// - `EmitterError::Pack` if the payload cannot be packed; nothing is published.
    /// - `EmitterError::Publish` on the first failed publish; later rooms are
    ///   skipped and the state is not reset.
    pub async fn emit(
        &mut self,
        event: impl Into<String>,
        args: Vec<Value>,
    ) -> Result<&mut Self, EmitterError> {
        let packet = EventPacket::new(
            self.state.frame_type,
            event,
            args,
            self.state.namespace.clone(),
        );
        let message = encode_event(EMITTER_UID, &packet, EmitOptions::from(&self.state))?;

        if self.state.rooms.is_empty() {
            let channel = self.channels.event_channel(&self.state.namespace);
            self.publish(&channel, message).await?;
        } else {
            for (delivered, room) in self.state.rooms.iter().enumerate() {
                let channel = self.channels.room_channel(&self.state.namespace, room);
                if let Err(e) = self.publish(&channel, message.clone()).await {
                    tracing::warn!(
                        "Fan-out aborted after {} of {} rooms",
                        delivered,
                        self.state.rooms.len()
                    );
                    return Err(e);
                }
            }
        }

        self.state.reset();
        Ok(self)
    }

    // === Cluster requests ===

    /// Asks every server in the cluster to emit `[event, args...]` to its own
    /// server-side listeners. Clients are not addressed.
    pub async fn server_side_emit(
        &mut self,
        event: impl Into<String>,
        args: Vec<Value>,
    ) -> Result<&mut Self, EmitterError> {
        let request = ControlMessage::server_side_emit(EMITTER_UID, event, args);
        self.send_request(request).await?;
        Ok(self)
    }

    /// Makes the sockets matching the current rooms and exclusions join `rooms`.
    pub async fn sockets_join(&mut self, rooms: impl IntoRooms) -> Result<&mut Self, EmitterError> {
        let request = ControlMessage::remote_join(self.socket_filter(), collect_rooms(rooms));
        self.send_request(request).await?;
        Ok(self)
    }

    /// Makes the sockets matching the current rooms and exclusions leave `rooms`.
    pub async fn sockets_leave(&mut self, rooms: impl IntoRooms) -> Result<&mut Self, EmitterError> {
        let request = ControlMessage::remote_leave(self.socket_filter(), collect_rooms(rooms));
        self.send_request(request).await?;
        Ok(self)
    }

    /// Disconnects the sockets matching the current rooms and exclusions.
    ///
    /// With `close`, the underlying transport connection is closed too;
    /// otherwise only the namespace session ends.
    pub async fn disconnect_sockets(&mut self, close: bool) -> Result<&mut Self, EmitterError> {
        let request = ControlMessage::remote_disconnect(self.socket_filter(), close);
        self.send_request(request).await?;
        Ok(self)
    }

    fn socket_filter(&self) -> SocketFilter {
        SocketFilter {
            rooms: self.state.rooms.clone(),
            except: self.state.except_rooms.clone(),
        }
    }

    async fn send_request(&self, request: ControlMessage) -> Result<(), EmitterError> {
        let channel = self.channels.request_channel(&self.state.namespace);
        let payload = request.encode()?;
        self.publish(&channel, payload).await
    }

    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), EmitterError> {
        tracing::debug!("Publishing {} bytes to {}", payload.len(), channel);

        self.publisher.publish(channel, payload).await.map_err(|e| {
            tracing::warn!("Publish to {} failed: {}", channel, e);
            EmitterError::from(e)
        })
    }
}

/// Join/leave targets keep duplicates out but are sent as given otherwise.
fn collect_rooms(rooms: impl IntoRooms) -> RoomSet {
    let mut set = RoomSet::new();
    set.extend(rooms);
    set
}
