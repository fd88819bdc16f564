use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Layout constants for the viewer chrome.
pub(crate) const THUMBNAIL_WIDTH_PX: f32 = 56.0;
pub(crate) const THUMBNAIL_HEIGHT_PX: f32 = 76.0;
pub(crate) const THUMBNAIL_SPACING_PX: f32 = 6.0;
pub(crate) const BOOK_PADDING_PX: f32 = 16.0;
pub(crate) const LEAF_PORTIONS: u16 = 1000;
pub(crate) const ANIMATION_FRAME_MS: u64 = 16;
pub(crate) static THUMBNAIL_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("thumbnail-strip"));
