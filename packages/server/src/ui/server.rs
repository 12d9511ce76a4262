//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use irori_shared::time::Clock;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository,
    },
    usecase::{
        ConnectClientUseCase, ConnectionLifecycle, DisconnectClientUseCase, GetRoomDetailUseCase,
        GetRoomsUseCase, JoinRoomUseCase, PresenceBroadcaster, SendMessageUseCase,
    },
};

use super::{
    handler::{get_room_detail, get_rooms, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// # Example
///
/// ```ignore
/// let server = Server::in_memory(Arc::new(SystemClock));
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    connection_lifecycle: Arc<ConnectionLifecycle>,
    get_rooms_usecase: Arc<GetRoomsUseCase>,
    get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `connection_lifecycle` - Use cases driven by each connection
    /// * `get_rooms_usecase` - UseCase for getting rooms list
    /// * `get_room_detail_usecase` - UseCase for getting room detail
    pub fn new(
        connection_lifecycle: Arc<ConnectionLifecycle>,
        get_rooms_usecase: Arc<GetRoomsUseCase>,
        get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    ) -> Self {
        Self {
            connection_lifecycle,
            get_rooms_usecase,
            get_room_detail_usecase,
        }
    }

    /// Wire a server backed by the in-memory room registry and the WebSocket
    /// message pusher.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        // 1. Repository (owns the room registry)
        let repository = Arc::new(InMemoryRoomRepository::default());

        // 2. MessagePusher
        let message_pusher = Arc::new(WebSocketMessagePusher::default());

        // 3. Presence broadcaster
        let presence = Arc::new(PresenceBroadcaster::new(
            repository.clone(),
            message_pusher.clone(),
        ));

        // 4. UseCases
        let connection_lifecycle = Arc::new(ConnectionLifecycle::new(
            Arc::new(ConnectClientUseCase::new(message_pusher.clone())),
            Arc::new(JoinRoomUseCase::new(repository.clone(), presence.clone())),
            Arc::new(SendMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock,
            )),
            Arc::new(DisconnectClientUseCase::new(
                repository.clone(),
                message_pusher,
                presence,
            )),
        ));
        let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(repository.clone()));
        let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(repository));

        Self::new(
            connection_lifecycle,
            get_rooms_usecase,
            get_room_detail_usecase,
        )
    }

    fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            connection_lifecycle: self.connection_lifecycle,
            get_rooms_usecase: self.get_rooms_usecase,
            get_room_detail_usecase: self.get_room_detail_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/api/socket", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the WebSocket chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "WebSocket chat server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/api/socket", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until a shutdown signal arrives.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
