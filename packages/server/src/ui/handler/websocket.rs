//! WebSocket connection handler.
//!
//! Each upgraded socket gets an outbound queue drained by a writer task and a
//! receive loop that feeds decoded events into its `ConnectionSession`.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    infrastructure::dto::conversion::decode_client_event, ui::state::AppState,
    usecase::ConnectionSession,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the outbound queue into the WebSocket sink.
///
/// The task ends when the queue is closed or the socket can no longer be
/// written to.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();

    let mut session = state.connection_lifecycle.open(tx).await;
    let mut send_task = pusher_loop(rx, sender);

    receive_loop(&mut receiver, &mut session, &mut send_task).await;
    send_task.abort();

    session.close().await;
}

/// Handle inbound frames until the peer closes, the socket fails, or the
/// writer task stops.
///
/// Only the wait for the next frame races the writer task; an event that has
/// been received is always handled to completion.
async fn receive_loop(
    receiver: &mut SplitStream<WebSocket>,
    session: &mut ConnectionSession,
    send_task: &mut JoinHandle<()>,
) {
    loop {
        let msg = tokio::select! {
            msg = receiver.next() => msg,
            _ = &mut *send_task => {
                tracing::debug!("Writer for '{}' stopped", session.connection_id());
                break;
            }
        };

        let msg = match msg {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => {
                tracing::warn!("WebSocket error on '{}': {}", session.connection_id(), e);
                break;
            }
            None => break,
        };

        match msg {
            Message::Text(text) => match decode_client_event(text.as_str()) {
                Ok(event) => session.handle(event).await,
                Err(e) => tracing::warn!(
                    "Ignoring malformed frame from '{}': {}",
                    session.connection_id(),
                    e
                ),
            },
            Message::Ping(_) => {
                tracing::debug!("Received ping");
                // Ping/pong is handled automatically by the WebSocket protocol
            }
            Message::Close(_) => {
                tracing::info!("Connection '{}' requested close", session.connection_id());
                break;
            }
            _ => {}
        }
    }
}
