//! Workout player module
//!
//! Plays a workout set by set in the terminal.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `sequencer`: flattens sections and rounds into playable steps
//! - `session`: the Preview / Active / Rest / Complete state machine
//! - `timer`: deadline-based tickers driven by the host loop's clock
//! - `animator`: sprite frame cycling per mounted view
//! - `engine`: owns the session and every timer, fires deadlines in order
//! - `input/`: keyboard and mouse routing to intents
//! - `render/`: ratatui views (header, exercise, rest, controls, modals)
//! - `native`: terminal setup and the event loop
//!
//! # Usage
//!
//! ```no_run
//! use workout_player::player::{play_workout, PlaybackResult, PlayerOptions};
//! use workout_player::theme::Theme;
//! use workout_player::workout::load_workout;
//!
//! let workout = load_workout("legs.json").unwrap();
//! match play_workout(&workout, &PlayerOptions::default(), &Theme::default()).unwrap() {
//!     PlaybackResult::Completed { summary, .. } => {
//!         println!("Done in {}s", summary.total_elapsed_seconds)
//!     }
//!     PlaybackResult::Exited { .. } => println!("Stopped early"),
//! }
//! ```

pub mod animator;
pub mod engine;
pub mod error;
pub mod input;
mod native;
pub mod progress;
pub mod render;
pub mod sequencer;
pub mod session;
pub mod state;
pub mod timer;

pub use engine::{PlayerEngine, PlayerOptions, ViewKind};
pub use error::PlayerError;
pub use native::{
    play_workout, run_player, CrosstermEvents, EventSource, PlaybackResult, ScriptedEvents,
};
pub use session::{Session, SessionState, Transition};
pub use state::{Command, CompletionSummary, Phase, PlayerEvent, Stamped};
