use super::flip::FlipAnimation;
use flipbook_core::{InputController, Page, Spread, ViewerStore, build_spreads};
use std::cell::Cell;
use std::rc::Rc;

/// Everything one mounted viewer owns: the spreads derived from the page
/// list, the state machine, the in-progress gesture and the running turn.
pub struct ViewerSession {
    pub(in crate::app) spreads: Vec<Spread>,
    pub(in crate::app) store: ViewerStore,
    pub(in crate::app) input: InputController,
    pub(in crate::app) animation: Option<FlipAnimation>,
    settled: Rc<Cell<Option<usize>>>,
}

impl ViewerSession {
    pub(in crate::app) fn new(pages: &[Page]) -> Self {
        let spreads = build_spreads(pages);
        let mut store = ViewerStore::new(spreads.len());
        let settled = Rc::new(Cell::new(Some(0)));
        let sink = Rc::clone(&settled);
        store.subscribe(move |state| {
            if !state.is_flipping {
                sink.set(Some(state.current_spread));
            }
        });
        Self {
            spreads,
            store,
            input: InputController::new(),
            animation: None,
            settled,
        }
    }

    /// Swap in a new page list, keeping the position where possible.
    pub(in crate::app) fn replace_pages(&mut self, pages: &[Page]) {
        self.spreads = build_spreads(pages);
        self.animation = None;
        self.input.gesture_cancel();
        self.store.reset_spreads(self.spreads.len());
        self.settled.set(Some(self.store.state().current_spread));
    }

    /// Spread the viewer came to rest on since the last call, if any.
    pub(in crate::app) fn take_settled(&self) -> Option<usize> {
        self.settled.take()
    }

    pub(in crate::app) fn page_count(&self) -> usize {
        self.spreads.iter().map(|spread| spread.pages().count()).sum()
    }
}
