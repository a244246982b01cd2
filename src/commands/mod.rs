//! Subcommand handlers for the `wplay` binary.

pub mod config;
pub mod inspect;
pub mod play;
