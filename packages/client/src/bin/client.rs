//! Terminal chat client for Irori rooms.
//!
//! Joins a room, prints the roster and presence notices, and sends each
//! entered line as a chat message. Reconnects on connection loss (max 5
//! attempts with 5 second interval), re-joining the same room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin irori-client -- --room ABCD --user Alice
//! cargo run --bin irori-client -- -r ABCD -n Bob
//! ```

use clap::Parser;

use irori_client::{ClientOptions, run_client};
use irori_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "irori-client")]
#[command(about = "Room-based WebSocket chat client", long_about = None)]
struct Args {
    /// Room code to join
    #[arg(short = 'r', long)]
    room: String,

    /// Display name shown to the room
    #[arg(short = 'n', long)]
    user: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/api/socket")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let options = ClientOptions {
        url: args.url,
        room: args.room,
        user: args.user,
    };

    if let Err(e) = run_client(options).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
