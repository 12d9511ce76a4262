//! UseCase errors.

use thiserror::Error;

/// Error of `GetRoomDetailUseCase`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("Room '{0}' has no occupants")]
    RoomNotFound(String),
}
