//! Shared application state.

use std::sync::Arc;

use crate::usecase::{ConnectionLifecycle, GetRoomDetailUseCase, GetRoomsUseCase};

/// Shared application state
pub struct AppState {
    /// Per-connection lifecycle (join / message / disconnect)
    pub connection_lifecycle: Arc<ConnectionLifecycle>,
    /// Room list query
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// Room detail query
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}
