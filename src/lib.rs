//! Guided workout player.
//!
//! Loads a workout (sections of exercises with sets, reps and rest times),
//! flattens it into steps and plays them through a phase state machine with
//! elapsed, rest and sprite-frame timers. The `wplay` binary wraps it in a
//! ratatui terminal UI.

pub mod cli;
pub mod config;
pub mod player;
pub mod theme;
pub mod workout;

pub use config::Config;
