//! Projection of viewer state onto what should be on screen.
//!
//! While idle the current spread is drawn as is. While flipping the target
//! spread is drawn underneath and a single page leaf turns over it: its front
//! face is the page being vacated, its back face the page being revealed.
//! Turning forward lifts the right leaf onto the left half; turning back
//! lifts the left leaf onto the right half.

use crate::page::{Page, PageSide, Spread};
use crate::store::{FlipDirection, ViewerState};

/// Static arrangement of one spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadLayout<'a> {
    Empty,
    Single { page: &'a Page, side: PageSide },
    Facing { left: &'a Page, right: &'a Page },
}

impl<'a> SpreadLayout<'a> {
    pub fn of(spread: Option<&'a Spread>) -> Self {
        let Some(spread) = spread else {
            return SpreadLayout::Empty;
        };
        match (spread.left_page(), spread.right_page()) {
            (Some(left), Some(right)) => SpreadLayout::Facing { left, right },
            (Some(page), None) => SpreadLayout::Single {
                page,
                side: PageSide::Left,
            },
            (None, Some(page)) => SpreadLayout::Single {
                page,
                side: PageSide::Right,
            },
            (None, None) => SpreadLayout::Empty,
        }
    }

    pub fn page_on(&self, side: PageSide) -> Option<&'a Page> {
        match (*self, side) {
            (SpreadLayout::Facing { left, .. }, PageSide::Left) => Some(left),
            (SpreadLayout::Facing { right, .. }, PageSide::Right) => Some(right),
            (SpreadLayout::Single { page, side: at }, wanted) if at == wanted => Some(page),
            _ => None,
        }
    }
}

/// The turning leaf drawn over the background while flipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipOverlay<'a> {
    pub direction: FlipDirection,
    pub front: &'a Page,
    pub back: Option<&'a Page>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerFrame<'a> {
    pub background: SpreadLayout<'a>,
    pub overlay: Option<FlipOverlay<'a>>,
    pub shown_spread: usize,
    pub spread_count: usize,
}

impl ViewerFrame<'_> {
    /// A flip is pending but has no leaf to animate, so nothing will ever
    /// report its completion.
    pub fn is_stalled(&self, state: &ViewerState) -> bool {
        state.is_flipping && self.overlay.is_none()
    }
}

pub fn project<'a>(state: &ViewerState, spreads: &'a [Spread]) -> ViewerFrame<'a> {
    let spread_count = spreads.len();
    match (state.is_flipping, state.flip_direction) {
        (true, Some(direction)) => {
            let leaving = spreads.get(state.current_spread);
            let entering = spreads.get(state.target_spread);
            let (front, back) = match direction {
                FlipDirection::Next => (
                    leaving.and_then(Spread::rightmost),
                    entering.and_then(Spread::leftmost),
                ),
                FlipDirection::Prev => (
                    leaving.and_then(Spread::leftmost),
                    entering.and_then(Spread::rightmost),
                ),
            };
            ViewerFrame {
                background: SpreadLayout::of(entering),
                overlay: front.map(|front| FlipOverlay {
                    direction,
                    front,
                    back,
                }),
                shown_spread: state.target_spread,
                spread_count,
            }
        }
        _ => ViewerFrame {
            background: SpreadLayout::of(spreads.get(state.current_spread)),
            overlay: None,
            shown_spread: state.current_spread,
            spread_count,
        },
    }
}

/// Which face of the turning leaf is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipFace {
    Front,
    Back,
}

/// Placement of the turning leaf at one instant of the animation.
///
/// The leaf is hinged on the spine: on the right half it is anchored to its
/// left edge, on the left half to its right edge. `scale` is the projected
/// width as a fraction of a full page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipGeometry {
    pub face: FlipFace,
    pub side: PageSide,
    pub scale: f32,
}

/// Leaf geometry for linear animation `progress` in `0.0..=1.0`.
pub fn flip_geometry(direction: FlipDirection, progress: f32) -> FlipGeometry {
    let t = ease_in_out(progress.clamp(0.0, 1.0));
    let angle = t * std::f32::consts::PI;
    let face = if t < 0.5 {
        FlipFace::Front
    } else {
        FlipFace::Back
    };
    let side = match (direction, face) {
        (FlipDirection::Next, FlipFace::Front) | (FlipDirection::Prev, FlipFace::Back) => {
            PageSide::Right
        }
        (FlipDirection::Next, FlipFace::Back) | (FlipDirection::Prev, FlipFace::Front) => {
            PageSide::Left
        }
    };
    FlipGeometry {
        face,
        side,
        scale: angle.cos().abs(),
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreads::build_spreads;
    use crate::store::ViewerStore;

    fn spreads(n: usize) -> Vec<Spread> {
        let pages: Vec<Page> = (0..n)
            .map(|i| Page::new(format!("p{i}"), format!("{i}.jpg"), i as i64))
            .collect();
        build_spreads(&pages)
    }

    fn id(page: Option<&Page>) -> Option<&str> {
        page.map(|p| p.id.as_str())
    }

    #[test]
    fn idle_shows_current_spread_without_overlay() {
        let spreads = spreads(5);
        let mut store = ViewerStore::new(spreads.len());
        store.go_to(1);
        let frame = project(&store.state(), &spreads);
        assert!(frame.overlay.is_none());
        assert_eq!(frame.shown_spread, 1);
        assert_eq!(id(frame.background.page_on(PageSide::Left)), Some("p1"));
        assert_eq!(id(frame.background.page_on(PageSide::Right)), Some("p2"));
    }

    #[test]
    fn cover_sits_on_the_right() {
        let spreads = spreads(3);
        let frame = project(&ViewerState::default(), &spreads);
        assert_eq!(id(frame.background.page_on(PageSide::Right)), Some("p0"));
        assert_eq!(frame.background.page_on(PageSide::Left), None);
    }

    #[test]
    fn forward_flip_lifts_right_leaf_onto_new_left_page() {
        let spreads = spreads(7);
        let mut store = ViewerStore::new(spreads.len());
        store.go_to(1);
        store.start_flip(FlipDirection::Next);

        let frame = project(&store.state(), &spreads);
        assert_eq!(frame.shown_spread, 2);
        assert_eq!(id(frame.background.page_on(PageSide::Left)), Some("p3"));
        let overlay = frame.overlay.unwrap();
        assert_eq!(overlay.direction, FlipDirection::Next);
        assert_eq!(overlay.front.id, "p2");
        assert_eq!(id(overlay.back), Some("p3"));
    }

    #[test]
    fn backward_flip_lifts_left_leaf_onto_new_right_page() {
        let spreads = spreads(7);
        let mut store = ViewerStore::new(spreads.len());
        store.go_to(2);
        store.start_flip(FlipDirection::Prev);

        let overlay = project(&store.state(), &spreads).overlay.unwrap();
        assert_eq!(overlay.front.id, "p3");
        assert_eq!(id(overlay.back), Some("p2"));
    }

    #[test]
    fn single_spreads_use_their_only_page_on_both_faces() {
        let spreads = spreads(4);
        let mut store = ViewerStore::new(spreads.len());
        store.start_flip(FlipDirection::Next);
        let overlay = project(&store.state(), &spreads).overlay.unwrap();
        assert_eq!(overlay.front.id, "p0");
        assert_eq!(id(overlay.back), Some("p1"));

        store.end_flip();
        store.go_to(2);
        store.start_flip(FlipDirection::Prev);
        let overlay = project(&store.state(), &spreads).overlay.unwrap();
        assert_eq!(overlay.front.id, "p3");
        assert_eq!(id(overlay.back), Some("p2"));
    }

    #[test]
    fn missing_front_page_suppresses_overlay() {
        let state = ViewerState {
            current_spread: 5,
            is_flipping: true,
            flip_direction: Some(FlipDirection::Next),
            target_spread: 1,
        };
        let spreads = spreads(3);
        let frame = project(&state, &spreads);
        assert!(frame.overlay.is_none());
        assert!(frame.is_stalled(&state));
    }

    #[test]
    fn empty_catalog_projects_empty_layout() {
        let frame = project(&ViewerState::default(), &[]);
        assert_eq!(frame.background, SpreadLayout::Empty);
        assert_eq!(frame.spread_count, 0);
    }

    #[test]
    fn forward_leaf_travels_from_right_to_left() {
        let start = flip_geometry(FlipDirection::Next, 0.0);
        assert_eq!(start.face, FlipFace::Front);
        assert_eq!(start.side, PageSide::Right);
        assert!((start.scale - 1.0).abs() < 1e-6);

        let middle = flip_geometry(FlipDirection::Next, 0.5);
        assert!(middle.scale < 1e-3);

        let end = flip_geometry(FlipDirection::Next, 1.0);
        assert_eq!(end.face, FlipFace::Back);
        assert_eq!(end.side, PageSide::Left);
        assert!((end.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn backward_leaf_travels_from_left_to_right() {
        let early = flip_geometry(FlipDirection::Prev, 0.2);
        assert_eq!(early.face, FlipFace::Front);
        assert_eq!(early.side, PageSide::Left);
        let late = flip_geometry(FlipDirection::Prev, 0.8);
        assert_eq!(late.face, FlipFace::Back);
        assert_eq!(late.side, PageSide::Right);
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(
            flip_geometry(FlipDirection::Next, -3.0),
            flip_geometry(FlipDirection::Next, 0.0)
        );
        assert_eq!(
            flip_geometry(FlipDirection::Next, 9.0),
            flip_geometry(FlipDirection::Next, 1.0)
        );
    }
}
