//! WebSocket chat server: routing, handlers and startup.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
