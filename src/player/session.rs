//! Session state machine.
//!
//! `Session` owns the flattened steps and the `SessionState`. State is only
//! changed through the named transitions below; renderers get `&SessionState`.
//!
//! ```text
//! Preview --advance--> Active --advance--> Rest --advance/countdown--> Active
//!                        |                                               |
//!                        +--(last set)--> next step Active ... --> Complete
//! ```

use crate::player::error::PlayerError;
use crate::player::progress::progress_percent;
use crate::player::sequencer::Step;
use crate::player::state::{Command, Phase, Stamped};

/// Mutable session state, read-only outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_step_index: usize,
    current_set: u32,
    phase: Phase,
    is_paused: bool,
    rest_seconds_left: u32,
    total_elapsed_seconds: u64,
}

impl SessionState {
    fn new(autostart: bool) -> Self {
        Self {
            current_step_index: 0,
            current_set: 1,
            phase: if autostart {
                Phase::Active
            } else {
                Phase::Preview
            },
            is_paused: false,
            rest_seconds_left: 0,
            total_elapsed_seconds: 0,
        }
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Seconds left in the current rest. Only meaningful in `Phase::Rest`.
    pub fn rest_seconds_left(&self) -> u32 {
        self.rest_seconds_left
    }

    pub fn total_elapsed_seconds(&self) -> u64 {
        self.total_elapsed_seconds
    }
}

/// What a command or timer fire changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Preview -> Active
    Started,
    /// Active -> Rest after finishing `set`
    RestStarted { set: u32, rest_seconds: u32 },
    /// Rest -> Active, now on `set`
    RestFinished { set: u32 },
    /// Moved to step `index`, set 1
    StepStarted { index: usize },
    /// Last step done
    Completed,
    Paused,
    Resumed,
}

/// The session state machine.
#[derive(Debug, Clone)]
pub struct Session {
    steps: Vec<Step>,
    state: SessionState,
}

impl Session {
    /// Create a session over `steps`.
    ///
    /// An empty step list is rejected up front so nothing downstream ever
    /// reads step data that does not exist.
    pub fn new(steps: Vec<Step>, autostart: bool) -> Result<Self, PlayerError> {
        if steps.is_empty() {
            return Err(PlayerError::NothingToPlay);
        }
        Ok(Self {
            steps,
            state: SessionState::new(autostart),
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// The step being played (the last step once complete).
    pub fn current_step(&self) -> &Step {
        &self.steps[self.state.current_step_index]
    }

    /// Progress for the header bar, 100 once complete.
    pub fn progress_percent(&self) -> u8 {
        if self.state.phase == Phase::Complete {
            return 100;
        }
        progress_percent(
            self.state.current_step_index,
            self.state.current_set,
            self.current_step().sets(),
            self.steps.len(),
        )
    }

    /// Apply a user command.
    ///
    /// Returns `None` when the command is stale (its observed phase is no
    /// longer current) or has no effect in this phase.
    pub fn apply(&mut self, stamped: Stamped) -> Option<Transition> {
        if stamped.observed != self.state.phase {
            tracing::debug!(
                command = ?stamped.command,
                observed = %stamped.observed,
                phase = %self.state.phase,
                "Dropping stale command"
            );
            return None;
        }

        let transition = match stamped.command {
            Command::Advance => self.advance(),
            Command::SkipExercise => self.skip_exercise(),
            Command::TogglePause => self.toggle_pause(),
        };
        if let Some(t) = transition {
            tracing::debug!(transition = ?t, step = self.state.current_step_index, "Session transition");
        }
        transition
    }

    fn advance(&mut self) -> Option<Transition> {
        match self.state.phase {
            Phase::Preview => {
                self.state.phase = Phase::Active;
                Some(Transition::Started)
            }
            Phase::Active => {
                let step = self.current_step();
                if self.state.current_set < step.sets() {
                    let rest_seconds = step.rest_seconds();
                    self.state.rest_seconds_left = rest_seconds;
                    self.state.phase = Phase::Rest;
                    Some(Transition::RestStarted {
                        set: self.state.current_set,
                        rest_seconds,
                    })
                } else {
                    Some(self.move_to_next_step())
                }
            }
            Phase::Rest => self.finish_rest(),
            Phase::Complete => None,
        }
    }

    fn skip_exercise(&mut self) -> Option<Transition> {
        match self.state.phase {
            Phase::Active | Phase::Rest => Some(self.move_to_next_step()),
            Phase::Preview | Phase::Complete => None,
        }
    }

    fn toggle_pause(&mut self) -> Option<Transition> {
        if self.state.phase.is_terminal() {
            return None;
        }
        self.state.is_paused = !self.state.is_paused;
        Some(if self.state.is_paused {
            Transition::Paused
        } else {
            Transition::Resumed
        })
    }

    /// Rest -> Active. No-op outside `Rest`, which makes the countdown and a
    /// manual skip safe to race.
    fn finish_rest(&mut self) -> Option<Transition> {
        if self.state.phase != Phase::Rest {
            return None;
        }
        self.state.rest_seconds_left = 0;
        self.state.current_set = (self.state.current_set + 1).min(self.current_step().sets());
        self.state.phase = Phase::Active;
        Some(Transition::RestFinished {
            set: self.state.current_set,
        })
    }

    fn move_to_next_step(&mut self) -> Transition {
        self.state.rest_seconds_left = 0;
        if self.state.current_step_index + 1 < self.steps.len() {
            self.state.current_step_index += 1;
            self.state.current_set = 1;
            self.state.phase = Phase::Active;
            Transition::StepStarted {
                index: self.state.current_step_index,
            }
        } else {
            self.state.phase = Phase::Complete;
            self.state.is_paused = false;
            Transition::Completed
        }
    }

    /// One second of session time. Returns whether it was counted.
    pub fn tick_elapsed(&mut self) -> bool {
        if self.state.is_paused || self.state.phase.is_terminal() {
            return false;
        }
        self.state.total_elapsed_seconds += 1;
        true
    }

    /// One second of rest countdown.
    ///
    /// The tick that brings the countdown to zero (or finds it already at
    /// zero) finishes the rest. Never decrements below zero.
    pub fn tick_rest(&mut self) -> Option<Transition> {
        if self.state.phase != Phase::Rest || self.state.is_paused {
            return None;
        }
        if self.state.rest_seconds_left <= 1 {
            let transition = self.finish_rest();
            tracing::debug!(transition = ?transition, "Rest countdown finished");
            transition
        } else {
            self.state.rest_seconds_left -= 1;
            None
        }
    }
}
