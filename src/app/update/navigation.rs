use super::super::messages::Message;
use super::super::state::{App, FlipAnimation};
use super::Effect;
use flipbook_core::{Command, FlipDirection, NavKey, preload_urls, project};
use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_next_spread(&mut self) {
        self.dispatch(Command::StartFlip(FlipDirection::Next));
    }

    pub(super) fn handle_previous_spread(&mut self) {
        self.dispatch(Command::StartFlip(FlipDirection::Prev));
    }

    pub(super) fn handle_thumbnail_selected(&mut self, page_idx: usize) {
        let command = self.viewer.input.thumbnail(page_idx);
        self.dispatch(command);
    }

    pub(super) fn handle_arrow_key(&mut self, key: NavKey) {
        let command = self.viewer.input.key(key);
        self.dispatch(command);
    }

    pub(super) fn handle_gesture_start(&mut self, x: f32) {
        self.viewer.input.gesture_start(x);
    }

    pub(super) fn handle_gesture_end(&mut self, x: f32) {
        if let Some(command) = self.viewer.input.gesture_end(x) {
            self.dispatch(command);
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let finished = self
            .viewer
            .animation
            .as_mut()
            .map(|animation| animation.advance(now))
            .unwrap_or(false);
        if finished {
            effects.extend(self.reduce(Message::FlipAnimationFinished));
        }
    }

    pub(super) fn handle_flip_finished(&mut self) {
        if let Some(animation) = self.viewer.animation.take() {
            debug!(
                direction = %animation.direction,
                elapsed_ms = animation.started_at.elapsed().as_millis() as u64,
                "Page turn animation finished"
            );
        }
        self.viewer.store.end_flip();
    }

    /// Hand a command to the store and start the turn animation if it
    /// began a flip.
    pub(super) fn dispatch(&mut self, command: Command) {
        if !command.apply(&mut self.viewer.store) {
            debug!(?command, "Command had no effect");
            return;
        }
        let state = self.viewer.store.state();
        let Some(direction) = state.flip_direction else {
            info!(spread = state.current_spread + 1, "Jumped to spread");
            return;
        };

        let frame = project(&state, &self.viewer.spreads);
        if frame.is_stalled(&state) {
            warn!(%direction, "No page to turn; committing flip immediately");
            self.viewer.store.end_flip();
            return;
        }
        self.viewer.animation = Some(FlipAnimation::start(
            direction,
            Instant::now(),
            self.config.flip_duration(),
        ));
        info!(
            %direction,
            from = state.current_spread + 1,
            to = state.target_spread + 1,
            "Turning page"
        );
    }

    /// Work to do once the viewer comes to rest on a spread: load what is
    /// visible, warm the neighbours, keep the thumbnail strip in view.
    pub(in crate::app) fn settle_effects(&mut self) -> Vec<Effect> {
        let Some(spread_idx) = self.viewer.take_settled() else {
            return Vec::new();
        };
        let Some(spread) = self.viewer.spreads.get(spread_idx) else {
            return Vec::new();
        };

        let mut wanted: Vec<String> = spread.pages().map(|page| page.image_url.clone()).collect();
        if self.config.preload_neighbours {
            wanted.extend(preload_urls(spread_idx, &self.viewer.spreads));
        }
        let fresh: Vec<String> = wanted
            .into_iter()
            .filter(|url| self.images.begin(url))
            .collect();

        let mut effects = Vec::new();
        if !fresh.is_empty() {
            debug!(spread = spread_idx + 1, count = fresh.len(), "Requesting page images");
            effects.push(Effect::LoadImages(fresh));
        }
        effects.push(Effect::SnapThumbnails(self.thumbnail_offset(spread_idx)));
        effects
    }

    fn thumbnail_offset(&self, spread_idx: usize) -> RelativeOffset {
        let last_spread = self.viewer.spreads.len().saturating_sub(1);
        let x = if last_spread == 0 {
            0.0
        } else {
            spread_idx as f32 / last_spread as f32
        };
        RelativeOffset { x, y: 0.0 }
    }
}
