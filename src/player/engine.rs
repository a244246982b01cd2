//! Player engine.
//!
//! Owns the session state machine together with every timer that can change
//! it: the elapsed-time ticker, the rest countdown and the frame animator of
//! the currently mounted view. The host loop feeds it stamped commands and
//! the current instant; the engine fires due deadlines in order and keeps
//! each timer running only while its phase allows it.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::player::animator::{ExerciseIdentity, FrameAnimator};
use crate::player::error::PlayerError;
use crate::player::sequencer::{flatten, Step};
use crate::player::session::{Session, SessionState, Transition};
use crate::player::state::{CompletionSummary, Phase, PlayerEvent, Stamped};
use crate::player::timer::{earliest, Ticker};
use crate::workout::{Gender, Workout};

/// Elapsed time and rest countdowns count whole seconds.
const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Settings the host passes when mounting the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    /// Skip the preview and start the first set immediately
    pub autostart: bool,
    /// Initial image variant
    pub gender: Gender,
    /// Interval between sprite frames
    pub frame_interval: Duration,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            autostart: false,
            gender: Gender::Male,
            frame_interval: FrameAnimator::DEFAULT_INTERVAL,
        }
    }
}

/// Which view is on screen. Each view mounts its own animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Exercise,
    Rest,
    Summary,
}

impl ViewKind {
    fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Preview | Phase::Active => ViewKind::Exercise,
            Phase::Rest => ViewKind::Rest,
            Phase::Complete => ViewKind::Summary,
        }
    }
}

#[derive(Debug)]
struct MountedView {
    kind: ViewKind,
    animator: Option<FrameAnimator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerSlot {
    Elapsed,
    Rest,
    Frame,
}

/// The running player.
#[derive(Debug)]
pub struct PlayerEngine {
    workout_name: String,
    total_exercises: usize,
    session: Session,
    elapsed_timer: Ticker,
    rest_timer: Ticker,
    view: MountedView,
    gender: Gender,
    frame_interval: Duration,
    events: Vec<PlayerEvent>,
}

impl PlayerEngine {
    /// Flatten `workout` and start a session.
    ///
    /// Fails with `PlayerError::NothingToPlay` when the workout has no steps.
    pub fn mount(
        workout: &Workout,
        options: &PlayerOptions,
        now: Instant,
    ) -> Result<Self, PlayerError> {
        let session = Session::new(flatten(workout), options.autostart)?;

        let mut engine = Self {
            workout_name: workout.workout_name.clone(),
            total_exercises: workout.total_exercises(),
            session,
            elapsed_timer: Ticker::new("elapsed", CLOCK_TICK),
            rest_timer: Ticker::new("rest", CLOCK_TICK),
            view: MountedView {
                kind: ViewKind::Summary,
                animator: None,
            },
            gender: options.gender,
            frame_interval: options.frame_interval,
            events: Vec::new(),
        };
        engine.sync(now);

        tracing::info!(
            workout = %engine.workout_name,
            steps = engine.session.total_steps(),
            autostart = options.autostart,
            "Player mounted"
        );
        Ok(engine)
    }

    pub fn workout_name(&self) -> &str {
        &self.workout_name
    }

    /// Exercises in the workout, section repeats not counted.
    pub fn total_exercises(&self) -> usize {
        self.total_exercises
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn current_step(&self) -> &Step {
        self.session.current_step()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn view_kind(&self) -> ViewKind {
        self.view.kind
    }

    /// Animator of the mounted view, if it shows an image.
    pub fn animator(&self) -> Option<&FrameAnimator> {
        self.view.animator.as_ref()
    }

    /// Number of timers currently scheduled.
    pub fn running_timers(&self) -> usize {
        self.tickers().filter(|t| t.is_running()).count()
    }

    /// Earliest scheduled deadline, used as the host loop's poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(self.tickers())
    }

    /// Apply a user command stamped with the phase the user saw.
    pub fn dispatch(&mut self, stamped: Stamped, now: Instant) -> Option<Transition> {
        let transition = self.session.apply(stamped)?;
        self.after_transition(transition, now);
        Some(transition)
    }

    /// Switch the image variant; the animator restarts from frame 0.
    pub fn toggle_gender(&mut self, now: Instant) {
        self.gender = self.gender.toggled();
        tracing::debug!(gender = %self.gender, "Gender variant toggled");
        self.sync_view(now);
    }

    /// Fire every deadline at or before `now`, oldest first.
    ///
    /// Transitions caused by a fire are applied at the fire's scheduled
    /// instant, so catching up after a stall gives the same result as
    /// ticking in real time. Returns the number of fires processed.
    pub fn advance_to(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(slot) = self.earliest_due(now) {
            fired += 1;
            match slot {
                TimerSlot::Elapsed => {
                    if self.elapsed_timer.fire(now).is_some() {
                        self.session.tick_elapsed();
                    }
                }
                TimerSlot::Rest => {
                    if let Some(at) = self.rest_timer.fire(now) {
                        if let Some(transition) = self.session.tick_rest() {
                            self.after_transition(transition, at);
                        }
                    }
                }
                TimerSlot::Frame => {
                    if let Some(animator) = self.view.animator.as_mut() {
                        animator.fire(now);
                    }
                }
            }
        }
        fired
    }

    /// Record that the user confirmed leaving the player.
    pub fn request_exit(&mut self) {
        tracing::info!(
            phase = %self.phase(),
            elapsed = self.state().total_elapsed_seconds(),
            "Exit confirmed"
        );
        self.events.push(PlayerEvent::ExitRequested);
    }

    /// Drain events for the host.
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Tear down every timer and return the final state.
    pub fn unmount(mut self) -> SessionState {
        self.elapsed_timer.cancel();
        self.rest_timer.cancel();
        self.view.animator = None;
        tracing::debug!("Player unmounted");
        self.session.state().clone()
    }

    fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        [Some(&self.elapsed_timer), Some(&self.rest_timer)]
            .into_iter()
            .chain(std::iter::once(self.view.animator.as_ref().map(|a| a.ticker())))
            .flatten()
    }

    fn earliest_due(&self, now: Instant) -> Option<TimerSlot> {
        let frame_due = self
            .view
            .animator
            .as_ref()
            .and_then(|a| a.ticker().due_at());
        [
            (TimerSlot::Elapsed, self.elapsed_timer.due_at()),
            (TimerSlot::Rest, self.rest_timer.due_at()),
            (TimerSlot::Frame, frame_due),
        ]
        .into_iter()
        .filter_map(|(slot, due)| due.filter(|d| *d <= now).map(|d| (slot, d)))
        .min_by_key(|(_, due)| *due)
        .map(|(slot, _)| slot)
    }

    fn after_transition(&mut self, transition: Transition, at: Instant) {
        self.sync(at);
        if transition == Transition::Completed {
            let summary = CompletionSummary {
                workout_name: self.workout_name.clone(),
                total_elapsed_seconds: self.state().total_elapsed_seconds(),
                total_exercises: self.total_exercises,
                total_steps: self.session.total_steps(),
                finished_at: Local::now(),
            };
            tracing::info!(
                elapsed = summary.total_elapsed_seconds,
                exercises = summary.total_exercises,
                "Workout complete"
            );
            self.events.push(PlayerEvent::Completed(summary));
        }
    }

    /// Bring timers and the mounted view in line with the session state.
    fn sync(&mut self, at: Instant) {
        let state = self.session.state();
        let running = !state.is_paused() && !state.phase().is_terminal();
        let resting = running && state.phase() == Phase::Rest;

        self.elapsed_timer.set_running(running, at);
        self.rest_timer.set_running(resting, at);
        self.sync_view(at);
    }

    fn sync_view(&mut self, at: Instant) {
        let phase = self.phase();
        let kind = ViewKind::for_phase(phase);
        let step = self.session.current_step();
        let identity = ExerciseIdentity {
            step_index: self.state().current_step_index(),
            slug: step.slug().map(str::to_string),
            gender: self.gender,
        };
        let frames = step.exercise.frame_count();

        if kind != self.view.kind {
            tracing::debug!(from = ?self.view.kind, to = ?kind, "Switching view");
            let animator = match kind {
                ViewKind::Exercise | ViewKind::Rest => Some(FrameAnimator::new(
                    identity.clone(),
                    frames,
                    self.frame_interval,
                )),
                ViewKind::Summary => None,
            };
            // Replacing the view drops the previous animator and its ticker
            self.view = MountedView { kind, animator };
        }

        if let Some(animator) = self.view.animator.as_mut() {
            animator.set_identity(identity, frames, at);
            let playing = match kind {
                ViewKind::Exercise => phase == Phase::Active,
                ViewKind::Rest => true,
                ViewKind::Summary => false,
            };
            animator.set_playing(playing, at);
        }
    }
}
