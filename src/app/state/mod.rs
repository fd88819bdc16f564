mod constants;
mod flip;
mod viewer;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::images::ImageCache;
use iced::Task;
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use flip::FlipAnimation;
pub(in crate::app) use viewer::ViewerSession;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) catalog: Catalog,
    pub(super) viewer: ViewerSession,
    pub(super) images: ImageCache,
    pub(super) http: reqwest::Client,
    pub(super) cursor_x: Option<f32>,
    pub(super) reloading: bool,
    pub(super) reload_error: Option<String>,
}

impl App {
    pub fn bootstrap(catalog: Catalog, config: AppConfig) -> (Self, Task<Message>) {
        let viewer = ViewerSession::new(&catalog.pages);
        info!(
            title = %catalog.title,
            pages = viewer.page_count(),
            spreads = viewer.spreads.len(),
            "Viewer mounted"
        );
        let mut app = App {
            config,
            catalog,
            viewer,
            images: ImageCache::new(),
            http: reqwest::Client::new(),
            cursor_x: None,
            reloading: false,
            reload_error: None,
        };
        let effects = app.settle_effects();
        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    pub fn title(&self) -> String {
        format!("{} - Catalog Viewer", self.catalog.title)
    }
}
