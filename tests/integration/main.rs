//! Integration tests for wplay

mod helpers;

mod cli_test;
mod engine_test;
mod playback_test;
mod properties_test;
mod sequencer_test;
