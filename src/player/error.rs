//! Player errors.

use crate::workout::WorkoutError;

/// Errors that can occur before or while mounting the player.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Nothing to play: the workout has no exercises")]
    NothingToPlay,

    #[error(transparent)]
    Workout(#[from] WorkoutError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
