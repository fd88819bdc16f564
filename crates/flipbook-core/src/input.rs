//! Translation of raw input into store commands.
//!
//! Nothing here decides whether a command is valid; the store rejects what
//! it cannot do.

use crate::spreads::spread_containing;
use crate::store::{FlipDirection, ViewerStore};

/// Horizontal travel, in logical pixels, that separates a swipe from a tap.
pub const SWIPE_THRESHOLD: f32 = 60.0;

/// A request for the viewer store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartFlip(FlipDirection),
    GoTo(usize),
}

impl Command {
    /// Run the command against `store`. Returns whether the state changed.
    pub fn apply(self, store: &mut ViewerStore) -> bool {
        match self {
            Command::StartFlip(direction) => store.start_flip(direction),
            Command::GoTo(spread) => {
                let before = store.state();
                store.go_to(i64::try_from(spread).unwrap_or(i64::MAX));
                store.state() != before
            }
        }
    }
}

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

/// Tracks the pointer or touch gesture in progress.
#[derive(Debug, Default, Clone)]
pub struct InputController {
    swipe_start_x: Option<f32>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture_start(&mut self, x: f32) {
        self.swipe_start_x = Some(x);
    }

    /// Finish the gesture at `x`. Short drags and taps produce nothing.
    pub fn gesture_end(&mut self, x: f32) -> Option<Command> {
        let start = self.swipe_start_x.take()?;
        let delta = x - start;
        if delta > SWIPE_THRESHOLD {
            Some(Command::StartFlip(FlipDirection::Prev))
        } else if delta < -SWIPE_THRESHOLD {
            Some(Command::StartFlip(FlipDirection::Next))
        } else {
            None
        }
    }

    pub fn gesture_cancel(&mut self) {
        self.swipe_start_x = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.swipe_start_x.is_some()
    }

    pub fn key(&self, key: NavKey) -> Command {
        match key {
            NavKey::ArrowLeft => Command::StartFlip(FlipDirection::Prev),
            NavKey::ArrowRight => Command::StartFlip(FlipDirection::Next),
        }
    }

    pub fn thumbnail(&self, page_index: usize) -> Command {
        Command::GoTo(spread_containing(page_index))
    }
}

/// Enabled state of the explicit previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl NavButtons {
    pub fn for_store(store: &ViewerStore) -> Self {
        Self {
            prev_enabled: store.can_flip(FlipDirection::Prev),
            next_enabled: store.can_flip(FlipDirection::Next),
        }
    }
}
