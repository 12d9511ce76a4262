//! Color allocator.
//!
//! A new occupant's color is `PALETTE[n % PALETTE.len()]` where `n` is the
//! number of occupants already in the target room.

use super::value_object::Color;

pub const PALETTE: [Color; 8] = [
    Color::from_static("bg-blue-500"),
    Color::from_static("bg-purple-500"),
    Color::from_static("bg-green-500"),
    Color::from_static("bg-orange-500"),
    Color::from_static("bg-pink-500"),
    Color::from_static("bg-indigo-500"),
    Color::from_static("bg-teal-500"),
    Color::from_static("bg-red-500"),
];

/// Color of messages sent by a connection that has not joined any room.
pub const FALLBACK_COLOR: Color = Color::from_static("bg-gray-500");

/// Pick the color for a new occupant of a room that currently holds
/// `occupant_count` occupants.
pub fn assign_color(occupant_count: usize) -> Color {
    PALETTE[occupant_count % PALETTE.len()]
}
