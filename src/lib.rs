//! Chess rules engine with a random opponent.
//!
//! The engine plays pseudo-legal chess on a mailbox board: moves are checked
//! against each piece's movement rules, and king safety only matters when
//! deciding whether the side to move is checkmated.

pub mod ai;
pub mod config;
pub mod engine;
pub mod models;
pub mod selfplay;
