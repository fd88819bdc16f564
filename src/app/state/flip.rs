use flipbook_core::FlipDirection;
use std::time::{Duration, Instant};

/// Clock for the page turn currently on screen.
///
/// The viewer store knows nothing about time; this is the animation layer
/// that eventually reports completion back to it.
#[derive(Debug, Clone, Copy)]
pub struct FlipAnimation {
    pub(in crate::app) direction: FlipDirection,
    pub(in crate::app) started_at: Instant,
    pub(in crate::app) duration: Duration,
    pub(in crate::app) progress: f32,
}

impl FlipAnimation {
    pub(in crate::app) fn start(
        direction: FlipDirection,
        now: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            direction,
            started_at: now,
            duration,
            progress: 0.0,
        }
    }

    /// Advance to `now`. Returns `true` once the turn has fully played.
    pub(in crate::app) fn advance(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let start = Instant::now();
        let mut anim = FlipAnimation::start(FlipDirection::Next, start, Duration::from_millis(400));
        assert!(!anim.advance(start + Duration::from_millis(100)));
        assert!((anim.progress - 0.25).abs() < 1e-3);
        assert!(anim.advance(start + Duration::from_millis(400)));
        assert_eq!(anim.progress, 1.0);
    }

    #[test]
    fn clock_going_backwards_keeps_progress_at_zero() {
        let start = Instant::now() + Duration::from_secs(5);
        let mut anim = FlipAnimation::start(FlipDirection::Prev, start, Duration::from_millis(400));
        assert!(!anim.advance(Instant::now()));
        assert_eq!(anim.progress, 0.0);
    }
}
