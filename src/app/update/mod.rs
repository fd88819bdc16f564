use iced::widget::scrollable::RelativeOffset;
use std::path::PathBuf;

mod core;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    LoadImages(Vec<String>),
    SnapThumbnails(RelativeOffset),
    ReloadCatalog(PathBuf),
    QuitSafely,
}
