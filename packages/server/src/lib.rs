//! Room-based real-time chat server.
//!
//! Clients join a named room under a display name, exchange messages and see
//! a live roster of the room's occupants. Events travel over WebSocket.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
