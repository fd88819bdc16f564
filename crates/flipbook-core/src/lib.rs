//! Core of the catalog page-flip viewer.
//!
//! Everything here is synchronous and free of any GUI toolkit: the spread
//! pagination rule, the viewer state machine, the adjacent-spread preload
//! set, the input translation layer and the frame projection used by the
//! renderer. The desktop shell drives these pieces from its update loop.

pub mod input;
pub mod page;
pub mod preload;
pub mod render;
pub mod spreads;
pub mod store;

pub use input::{Command, InputController, NavButtons, NavKey, SWIPE_THRESHOLD};
pub use page::{Page, PageSide, Spread};
pub use preload::preload_urls;
pub use render::{
    FlipFace, FlipGeometry, FlipOverlay, SpreadLayout, ViewerFrame, flip_geometry, project,
};
pub use spreads::{build_spreads, spread_containing, spread_count};
pub use store::{FlipDirection, ListenerId, ViewerState, ViewerStore};
