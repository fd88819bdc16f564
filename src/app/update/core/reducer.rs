use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::catalog::Catalog;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextSpread => self.handle_next_spread(),
            Message::PreviousSpread => self.handle_previous_spread(),
            Message::ThumbnailSelected(page_idx) => self.handle_thumbnail_selected(page_idx),
            Message::ToggleThumbnails => {
                self.config.show_thumbnails = !self.config.show_thumbnails;
            }
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::ReloadCatalog => self.handle_reload_catalog(&mut effects),
            Message::CatalogReloaded(catalog) => self.handle_catalog_reloaded(catalog),
            Message::CatalogReloadFailed(error) => {
                warn!("Catalog reload failed: {error}");
                self.reloading = false;
                self.reload_error = Some(error);
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
            Message::KeyPressed { key, modifiers } => {
                if let Some(nav_key) = Self::nav_key_for(&key, modifiers) {
                    self.handle_arrow_key(nav_key);
                } else if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::CursorMoved { x } => self.cursor_x = Some(x),
            Message::PointerPressed => {
                if let Some(x) = self.cursor_x {
                    self.handle_gesture_start(x);
                }
            }
            Message::PointerReleased => match self.cursor_x {
                Some(x) => self.handle_gesture_end(x),
                None => self.viewer.input.gesture_cancel(),
            },
            Message::PointerLeft => {
                self.cursor_x = None;
                self.viewer.input.gesture_cancel();
            }
            Message::FingerPressed { x } => self.handle_gesture_start(x),
            Message::FingerLifted { x } => self.handle_gesture_end(x),
            Message::FingerLost => self.viewer.input.gesture_cancel(),
            Message::PageImageLoaded {
                url,
                generation,
                result,
            } => {
                self.images.finish(url, generation, result);
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::FlipAnimationFinished => self.handle_flip_finished(),
        }

        effects.extend(self.settle_effects());
        effects
    }

    fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            crate::config::ThemeMode::Day => crate::config::ThemeMode::Night,
            crate::config::ThemeMode::Night => crate::config::ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Theme toggled");
    }

    fn handle_reload_catalog(&mut self, effects: &mut Vec<Effect>) {
        if self.reloading {
            return;
        }
        self.reloading = true;
        self.reload_error = None;
        effects.push(Effect::ReloadCatalog(self.catalog.source.clone()));
    }

    fn handle_catalog_reloaded(&mut self, catalog: Catalog) {
        self.reloading = false;
        self.reload_error = None;
        self.images.clear();
        self.viewer.replace_pages(&catalog.pages);
        info!(
            title = %catalog.title,
            spreads = self.viewer.spreads.len(),
            spread = self.viewer.store.state().current_spread,
            "Catalog reloaded"
        );
        self.catalog = catalog;
    }
}
