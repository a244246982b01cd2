//! Native terminal player.
//!
//! Runs the player engine in the terminal: raw mode, alternate screen and
//! mouse capture for the lifetime of the session. The loop sleeps in
//! `event::poll` until the next timer deadline or the next input event,
//! whichever comes first.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::player::engine::{PlayerEngine, PlayerOptions};
use crate::player::error::PlayerError;
use crate::player::input::{InputRouter, Intent};
use crate::player::render::{render_player, ControlsLayout};
use crate::player::state::{CompletionSummary, PlayerEvent};
use crate::theme::Theme;
use crate::workout::Workout;

/// Poll timeout when no timer is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How a playback session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackResult {
    /// The workout was finished
    Completed {
        summary: CompletionSummary,
        /// Session note typed by the user, if any
        note: Option<String>,
    },
    /// The user confirmed leaving before the end
    Exited { elapsed_seconds: u64 },
}

/// Source of terminal events for the player loop.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Replays a fixed list of events; fails once the list runs out.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        self.events.pop_front().map(Some).ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted")
        })
    }
}

/// Restores the terminal when dropped, including on early returns.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                Err(e)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Play a workout in the terminal.
///
/// The workout is validated and the engine mounted before the terminal is
/// touched, so an unplayable workout fails with a plain error message.
pub fn play_workout(
    workout: &Workout,
    options: &PlayerOptions,
    theme: &Theme,
) -> Result<PlaybackResult, PlayerError> {
    workout.validate()?;
    let mut engine = PlayerEngine::mount(workout, options, Instant::now())?;

    let result = {
        let mut guard = TerminalGuard::enter()?;
        run_player(&mut guard.terminal, &mut engine, theme, &mut CrosstermEvents)
    };

    let final_state = engine.unmount();
    tracing::debug!(
        phase = %final_state.phase(),
        elapsed = final_state.total_elapsed_seconds(),
        "Playback finished"
    );
    result
}

/// The player loop, generic over backend and event source.
pub fn run_player<B: Backend>(
    terminal: &mut Terminal<B>,
    engine: &mut PlayerEngine,
    theme: &Theme,
    events: &mut impl EventSource,
) -> Result<PlaybackResult, PlayerError> {
    let mut router = InputRouter::new();
    let mut controls = ControlsLayout::default();
    let mut completed: Option<CompletionSummary> = None;

    loop {
        engine.advance_to(Instant::now());
        for event in engine.take_events() {
            match event {
                PlayerEvent::Completed(summary) => completed = Some(summary),
                PlayerEvent::ExitRequested => {
                    return Ok(finish(completed, &router, engine));
                }
            }
        }

        terminal.draw(|frame| controls = render_player(frame, engine, &router, theme))?;
        // Commands are stamped with what the user was looking at
        let rendered = engine.phase();

        let timeout = engine
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);
        let Some(event) = events.next_event(timeout)? else {
            continue;
        };

        let now = Instant::now();
        engine.advance_to(now);
        match router.route(&event, rendered, &controls) {
            Intent::None => {}
            Intent::Session(command) => {
                engine.dispatch(command.observed_in(rendered), now);
            }
            Intent::ToggleGender => engine.toggle_gender(now),
            Intent::ExitConfirmed => engine.request_exit(),
            Intent::CloseSummary => {
                if completed.is_some() {
                    return Ok(finish(completed, &router, engine));
                }
            }
        }
    }
}

fn finish(
    completed: Option<CompletionSummary>,
    router: &InputRouter,
    engine: &PlayerEngine,
) -> PlaybackResult {
    match completed {
        Some(summary) => PlaybackResult::Completed {
            summary,
            note: Some(router.note().to_string()).filter(|n| !n.is_empty()),
        },
        None => PlaybackResult::Exited {
            elapsed_seconds: engine.state().total_elapsed_seconds(),
        },
    }
}
