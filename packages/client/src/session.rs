//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use irori_server::infrastructure::dto::websocket::{
    ClientEvent, JoinRoomPayload, SendMessagePayload, ServerEvent,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use super::{
    error::ClientError,
    formatter::MessageFormatter,
    runner::ClientOptions,
    ui::{prompt, redisplay_prompt},
};

/// Render one server frame for the terminal
fn render_frame(text: &str, me: &str) -> String {
    match serde_json::from_str::<ServerEvent>(text) {
        Ok(ServerEvent::UsersUpdate(users)) => MessageFormatter::format_roster(&users, me),
        Ok(ServerEvent::UserJoined(notice)) => MessageFormatter::format_user_joined(&notice.user),
        Ok(ServerEvent::UserLeft(notice)) => MessageFormatter::format_user_left(&notice.user),
        Ok(ServerEvent::Message(message)) => MessageFormatter::format_chat_message(&message, me),
        Err(e) => {
            tracing::debug!("Unrecognized server frame: {}", e);
            MessageFormatter::format_raw_message(text)
        }
    }
}

/// Run one connected session: join the room, then relay input and output
/// until the user exits (`Ok`) or the connection drops (`Err`)
pub async fn run_client_session(options: &ClientOptions) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(options.url.as_str())
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}' in room '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
        options.user, options.room
    );

    let (mut write, mut read) = ws_stream.split();

    let join = ClientEvent::JoinRoom(JoinRoomPayload {
        room: options.room.clone(),
        user: options.user.clone(),
    });
    let json = serde_json::to_string(&join)?;
    write
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    let prompt_text = prompt(&options.user, &options.room);

    // Spawn a task to handle incoming events
    let me = options.user.clone();
    let prompt_for_read = prompt_text.clone();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    print!("{}", render_frame(text.as_str(), &me));
                    redisplay_prompt(&prompt_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // rustyline is synchronous, so it gets its own thread
    let prompt_for_input = prompt_text.clone();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt_for_input) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Forward input lines as message events; returns true on a write error
    let room = options.room.clone();
    let user = options.user.clone();
    let mut write_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            let event = ClientEvent::Message(SendMessagePayload {
                room: room.clone(),
                user: user.clone(),
                message: line,
            });

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send message: {}", e);
                return true;
            }
        }

        // Input closed: say goodbye so the server runs the leave path now
        write.send(Message::Close(None)).await.ok();
        false
    });

    tokio::select! {
        _ = &mut read_task => {
            write_task.abort();
            Err(ClientError::ConnectionLost)
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(true) {
                Err(ClientError::ConnectionLost)
            } else {
                Ok(())
            }
        }
    }
}
