//! Viewer state machine.
//!
//! Two states: idle (`is_flipping == false`) and flipping. At most one flip
//! is in flight; commands that arrive while flipping are rejected, not
//! queued. The store has no clock: the animation layer calls
//! [`ViewerStore::end_flip`] when the turn has visually finished.

use tracing::debug;

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Next,
    Prev,
}

impl std::fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FlipDirection::Next => "next",
            FlipDirection::Prev => "prev",
        };
        write!(f, "{}", label)
    }
}

/// Snapshot of the viewer position.
///
/// While flipping, `current_spread` is the spread being left and
/// `target_spread` the one being entered. `flip_direction` is set exactly
/// when `is_flipping` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    pub current_spread: usize,
    pub is_flipping: bool,
    pub flip_direction: Option<FlipDirection>,
    pub target_spread: usize,
}

/// Handle returned by [`ViewerStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ViewerState)>;

/// Single-owner viewer state with change notification.
pub struct ViewerStore {
    state: ViewerState,
    spread_count: usize,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl ViewerStore {
    pub fn new(spread_count: usize) -> Self {
        Self {
            state: ViewerState::default(),
            spread_count,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn spread_count(&self) -> usize {
        self.spread_count
    }

    pub fn last_index(&self) -> usize {
        self.spread_count.saturating_sub(1)
    }

    /// Begin a turn towards the adjacent spread.
    ///
    /// Returns `false` without touching state when a flip is already running
    /// or the viewer sits on the boundary in that direction.
    pub fn start_flip(&mut self, direction: FlipDirection) -> bool {
        if self.state.is_flipping {
            debug!(%direction, "Flip rejected: another flip is in progress");
            return false;
        }
        let current = self.state.current_spread;
        let candidate = match direction {
            FlipDirection::Next => (current + 1).min(self.last_index()),
            FlipDirection::Prev => current.saturating_sub(1),
        };
        if candidate == current {
            debug!(%direction, spread = current, "Flip rejected at boundary");
            return false;
        }

        self.state.is_flipping = true;
        self.state.flip_direction = Some(direction);
        self.state.target_spread = candidate;
        debug!(%direction, from = current, to = candidate, "Flip started");
        self.notify();
        true
    }

    /// Commit the running flip. No-op when idle.
    pub fn end_flip(&mut self) {
        if !self.state.is_flipping {
            return;
        }
        self.state.current_spread = self.state.target_spread;
        self.state.is_flipping = false;
        self.state.flip_direction = None;
        debug!(spread = self.state.current_spread, "Flip finished");
        self.notify();
    }

    /// Jump straight to a spread without animation.
    ///
    /// Ignored while flipping. Out-of-range indices are clamped.
    pub fn go_to(&mut self, spread_index: i64) {
        if self.state.is_flipping {
            debug!(spread_index, "Jump ignored while flipping");
            return;
        }
        let clamped = self.clamp_index(spread_index);
        if clamped == self.state.current_spread {
            return;
        }
        self.state.current_spread = clamped;
        self.state.target_spread = clamped;
        debug!(requested = spread_index, spread = clamped, "Jumped to spread");
        self.notify();
    }

    /// Whether a flip in `direction` would be accepted right now.
    pub fn can_flip(&self, direction: FlipDirection) -> bool {
        if self.state.is_flipping {
            return false;
        }
        match direction {
            FlipDirection::Next => self.state.current_spread < self.last_index(),
            FlipDirection::Prev => self.state.current_spread > 0,
        }
    }

    /// Re-bound the store after the page list was replaced.
    ///
    /// A running flip is committed first so the viewer never keeps an
    /// overlay that refers to spreads of the previous list.
    pub fn reset_spreads(&mut self, spread_count: usize) {
        let before = self.state;
        self.spread_count = spread_count;
        if self.state.is_flipping {
            self.state.current_spread = self.state.target_spread;
            self.state.is_flipping = false;
            self.state.flip_direction = None;
        }
        let last = self.last_index();
        self.state.current_spread = self.state.current_spread.min(last);
        self.state.target_spread = self.state.current_spread;
        debug!(
            spread_count,
            spread = self.state.current_spread,
            "Viewer re-bounded to new spread list"
        );
        if self.state != before {
            self.notify();
        }
    }

    /// Register a listener called after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewerState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn clamp_index(&self, index: i64) -> usize {
        if index <= 0 {
            0
        } else {
            usize::try_from(index)
                .unwrap_or(usize::MAX)
                .min(self.last_index())
        }
    }

    fn notify(&mut self) {
        let state = self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state);
        }
    }
}

impl std::fmt::Debug for ViewerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerStore")
            .field("state", &self.state)
            .field("spread_count", &self.spread_count)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn assert_invariants(store: &ViewerStore) {
        let state = store.state();
        assert!(state.current_spread <= store.last_index());
        assert!(state.target_spread <= store.last_index());
        assert_eq!(state.flip_direction.is_some(), state.is_flipping);
    }

    #[test]
    fn starts_idle_on_first_spread() {
        let store = ViewerStore::new(4);
        assert_eq!(store.state(), ViewerState::default());
        assert_invariants(&store);
    }

    #[test]
    fn flip_round_trip_lands_on_recorded_target() {
        let mut store = ViewerStore::new(4);
        assert!(store.start_flip(FlipDirection::Next));
        let recorded = store.state().target_spread;
        assert_eq!(recorded, 1);
        assert_eq!(store.state().current_spread, 0);
        assert_eq!(store.state().flip_direction, Some(FlipDirection::Next));
        assert_invariants(&store);

        store.end_flip();
        let state = store.state();
        assert!(!state.is_flipping);
        assert_eq!(state.current_spread, recorded);
        assert_eq!(state.flip_direction, None);
        assert_invariants(&store);
    }

    #[test]
    fn second_start_flip_is_rejected_without_change() {
        let mut store = ViewerStore::new(5);
        store.go_to(2);
        assert!(store.start_flip(FlipDirection::Next));
        let during = store.state();

        assert!(!store.start_flip(FlipDirection::Prev));
        assert!(!store.start_flip(FlipDirection::Next));
        assert_eq!(store.state(), during);
    }

    #[test]
    fn boundaries_reject_flips() {
        let mut store = ViewerStore::new(4);
        assert!(!store.start_flip(FlipDirection::Prev));
        assert_eq!(store.state(), ViewerState::default());

        store.go_to(3);
        let before = store.state();
        assert!(!store.start_flip(FlipDirection::Next));
        assert_eq!(store.state(), before);
    }

    #[test]
    fn prev_flip_moves_back_one_spread() {
        let mut store = ViewerStore::new(4);
        store.go_to(2);
        assert!(store.start_flip(FlipDirection::Prev));
        assert_eq!(store.state().target_spread, 1);
        store.end_flip();
        assert_eq!(store.state().current_spread, 1);
    }

    #[test]
    fn go_to_clamps_and_is_idempotent() {
        let mut store = ViewerStore::new(4);
        let notified = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&notified);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.go_to(10);
        assert_eq!(store.state().current_spread, 3);
        assert_eq!(store.state().target_spread, 3);
        assert_eq!(*notified.borrow(), 1);

        store.go_to(10);
        assert_eq!(*notified.borrow(), 1);

        store.go_to(-7);
        assert_eq!(store.state().current_spread, 0);
        store.go_to(i64::MAX);
        assert_eq!(store.state().current_spread, 3);
        assert_invariants(&store);
    }

    #[test]
    fn go_to_is_ignored_mid_flip() {
        let mut store = ViewerStore::new(6);
        assert!(store.start_flip(FlipDirection::Next));
        let during = store.state();
        store.go_to(4);
        assert_eq!(store.state(), during);
    }

    #[test]
    fn end_flip_when_idle_does_nothing() {
        let mut store = ViewerStore::new(3);
        let notified = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&notified);
        store.subscribe(move |_| *flag.borrow_mut() = true);
        store.end_flip();
        assert_eq!(store.state(), ViewerState::default());
        assert!(!*notified.borrow());
    }

    #[test]
    fn empty_store_never_moves() {
        let mut store = ViewerStore::new(0);
        assert!(!store.start_flip(FlipDirection::Next));
        assert!(!store.start_flip(FlipDirection::Prev));
        store.go_to(5);
        assert_eq!(store.state(), ViewerState::default());
    }

    #[test]
    fn listeners_see_each_transition_in_order() {
        let mut store = ViewerStore::new(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(*state));

        store.start_flip(FlipDirection::Next);
        store.start_flip(FlipDirection::Next);
        store.end_flip();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_flipping);
        assert_eq!(seen[0].target_spread, 1);
        assert!(!seen[1].is_flipping);
        assert_eq!(seen[1].current_spread, 1);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = ViewerStore::new(3);
        let calls = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.go_to(2);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn can_flip_mirrors_the_guards() {
        let mut store = ViewerStore::new(3);
        assert!(!store.can_flip(FlipDirection::Prev));
        assert!(store.can_flip(FlipDirection::Next));
        store.start_flip(FlipDirection::Next);
        assert!(!store.can_flip(FlipDirection::Next));
        assert!(!store.can_flip(FlipDirection::Prev));
        store.end_flip();
        assert!(store.can_flip(FlipDirection::Prev));
    }

    #[test]
    fn reset_spreads_commits_flip_and_clamps() {
        let mut store = ViewerStore::new(6);
        store.go_to(4);
        assert!(store.start_flip(FlipDirection::Next));

        store.reset_spreads(3);
        let state = store.state();
        assert!(!state.is_flipping);
        assert_eq!(state.current_spread, 2);
        assert_eq!(state.target_spread, 2);
        assert_invariants(&store);

        store.reset_spreads(0);
        assert_eq!(store.state(), ViewerState::default());
    }
}
