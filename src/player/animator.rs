//! Sprite frame animator.
//!
//! Cycles the visible frame of a multi-frame exercise image on a fixed
//! interval. Each view that shows an image owns its own animator, so
//! dropping the view drops the ticker with it.

use std::time::{Duration, Instant};

use crate::player::timer::Ticker;
use crate::workout::Gender;

/// What the animator is currently showing. A change resets the frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExerciseIdentity {
    pub step_index: usize,
    pub slug: Option<String>,
    pub gender: Gender,
}

/// Lookup key handed to the image resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageKey {
    pub slug: String,
    pub gender: Gender,
    pub frame: u8,
}

/// Cycles a frame index in `0..frames` while playing.
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    identity: ExerciseIdentity,
    frames: u8,
    frame: u8,
    playing: bool,
    ticker: Ticker,
}

impl FrameAnimator {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    /// Create a stopped animator on frame 0. `frames` is clamped to 1..=3.
    pub fn new(identity: ExerciseIdentity, frames: u8, interval: Duration) -> Self {
        Self {
            identity,
            frames: frames.clamp(1, 3),
            frame: 0,
            playing: false,
            ticker: Ticker::new("frame", interval),
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn frames(&self) -> u8 {
        self.frames
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn identity(&self) -> &ExerciseIdentity {
        &self.identity
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Start or freeze the animation. Freezing keeps the current frame.
    pub fn set_playing(&mut self, playing: bool, at: Instant) {
        self.playing = playing;
        self.sync_ticker(at);
    }

    /// Point the animator at a (possibly) different exercise.
    ///
    /// A new identity always restarts from frame 0 with a fresh interval.
    pub fn set_identity(&mut self, identity: ExerciseIdentity, frames: u8, at: Instant) {
        if identity == self.identity {
            return;
        }
        tracing::trace!(step = identity.step_index, gender = %identity.gender, "Animator reset");
        self.identity = identity;
        self.frames = frames.clamp(1, 3);
        self.frame = 0;
        self.ticker.cancel();
        self.sync_ticker(at);
    }

    /// Advance one frame if the ticker is due.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        let at = self.ticker.fire(now)?;
        self.frame = (self.frame + 1) % self.frames;
        tracing::trace!(frame = self.frame, "Frame tick");
        Some(at)
    }

    /// Key for the image resolver; `None` for exercises without an image.
    pub fn image_key(&self) -> Option<ImageKey> {
        self.identity.slug.as_ref().map(|slug| ImageKey {
            slug: slug.clone(),
            gender: self.identity.gender,
            frame: self.frame,
        })
    }

    fn sync_ticker(&mut self, at: Instant) {
        self.ticker.set_running(self.playing && self.frames > 1, at);
    }
}
