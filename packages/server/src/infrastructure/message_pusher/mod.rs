//! Message pushing (notification) implementations.
//!
//! - `websocket`: pushes encoded frames to per-connection WebSocket queues

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
