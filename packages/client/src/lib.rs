//! Terminal client for Irori rooms.

pub mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use runner::{ClientOptions, run_client};
