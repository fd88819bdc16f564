use crate::catalog::Catalog;
use crate::images::DecodedPage;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and by background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    NextSpread,
    PreviousSpread,
    ThumbnailSelected(usize),
    ToggleThumbnails,
    ToggleTheme,
    ReloadCatalog,
    CatalogReloaded(Catalog),
    CatalogReloadFailed(String),
    SafeQuit,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    CursorMoved {
        x: f32,
    },
    PointerPressed,
    PointerReleased,
    PointerLeft,
    FingerPressed {
        x: f32,
    },
    FingerLifted {
        x: f32,
    },
    FingerLost,
    PageImageLoaded {
        url: String,
        generation: u64,
        result: Result<DecodedPage, String>,
    },
    Tick(Instant),
    FlipAnimationFinished,
}
