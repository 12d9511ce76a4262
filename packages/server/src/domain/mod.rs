//! Domain layer: presence state and the abstractions the use cases depend on.
//!
//! - `value_object`: identifiers and colors
//! - `entity`: `Occupant` and `ChatMessage`
//! - `color`: the color allocator
//! - `registry`: the room registry (membership state)
//! - `event`: inbound and outbound events, independent of the wire format
//! - `repository` / `message_pusher`: traits implemented by the infrastructure layer

pub mod color;
pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use color::{FALLBACK_COLOR, PALETTE, assign_color};
pub use entity::{ChatMessage, Occupant};
pub use error::MessagePushError;
pub use event::{InboundEvent, OutboundEvent};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use registry::{JoinOutcome, RoomRegistry, RoomSnapshot};
pub use repository::RoomRepository;
pub use value_object::{Color, ConnectionId, MessageId, RoomId};
