//! Room-based WebSocket chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin irori-server
//! cargo run --bin irori-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use irori_server::ui::Server;
use irori_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "irori-server")]
#[command(about = "Room-based WebSocket chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // The room registry and every use case are built before the listener
    // accepts its first connection.
    let server = Server::in_memory(Arc::new(SystemClock));

    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
