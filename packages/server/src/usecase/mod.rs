//! UseCase layer.
//!
//! Binds the room registry, the presence broadcaster and the message relay to
//! the lifecycle of a connection.

mod connect_client;
mod disconnect_client;
mod error;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod presence;
mod send_message;
mod session;

#[cfg(test)]
mod testing;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use presence::PresenceBroadcaster;
pub use send_message::SendMessageUseCase;
pub use session::{ConnectionLifecycle, ConnectionSession, ConnectionState};
