mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use iced::{Size, Theme, window};

/// Helper to launch the viewer with an already loaded catalog.
pub fn run_app(catalog: Catalog, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, crate::config::ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(catalog, config))
}
