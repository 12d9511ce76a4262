//! UI utilities for the client.

use std::io::Write;

/// Prompt shown while waiting for input
pub fn prompt(user: &str, room: &str) -> String {
    format!("{}@{}> ", user, room)
}

/// Redisplay the prompt after printing an incoming event
pub fn redisplay_prompt(prompt: &str) {
    print!("{}", prompt);
    std::io::stdout().flush().ok();
}
