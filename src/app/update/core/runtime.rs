use super::super::super::messages::Message;
use super::super::super::state::{App, THUMBNAIL_SCROLL_ID};
use super::super::Effect;
use crate::catalog::load_catalog;
use crate::images::load_page_image;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::window;
use tracing::info;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadImages(urls) => {
                let timeout = self.config.fetch_timeout();
                let generation = self.images.generation();
                Task::batch(urls.into_iter().map(|url| {
                    let client = self.http.clone();
                    let requested = url.clone();
                    Task::perform(
                        async move { load_page_image(client, requested, timeout).await },
                        move |result| Message::PageImageLoaded {
                            url: url.clone(),
                            generation,
                            result: result.map_err(|err| format!("{err:#}")),
                        },
                    )
                }))
            }
            Effect::SnapThumbnails(offset) => {
                if !self.config.show_thumbnails {
                    return Task::none();
                }
                iced::widget::scrollable::snap_to(THUMBNAIL_SCROLL_ID.clone(), offset)
            }
            Effect::ReloadCatalog(path) => {
                info!(path = %path.display(), "Reloading catalog");
                Task::perform(async move { load_catalog(&path) }, |result| match result {
                    Ok(catalog) => Message::CatalogReloaded(catalog),
                    Err(err) => Message::CatalogReloadFailed(format!("{err:#}")),
                })
            }
            Effect::QuitSafely => {
                info!("Closing catalog viewer");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            return Some(Message::CursorMoved { x: position.x });
        }
        Event::Mouse(mouse::Event::CursorLeft) => return Some(Message::PointerLeft),
        _ => {}
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::FingerPressed { x: position.x })
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::FingerLifted { x: position.x })
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::FingerLost),
        _ => None,
    }
}
