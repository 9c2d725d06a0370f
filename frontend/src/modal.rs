use std::rc::Rc;

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalLayer {
    Portfolio,
    ReelViewer,
}

/// State object stored with each pushed history entry.
#[derive(Serialize)]
struct HistoryMarker {
    modal: ModalLayer,
}

/// The page-wide stack of open overlays. Every layer is paired with exactly one
/// browser history entry, so the platform back action peels one layer at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalStack {
    layers: Vec<ModalLayer>,
}

pub enum ModalAction {
    Opened(ModalLayer),
    HistoryPopped,
}

impl Reducible for ModalStack {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ModalAction::Opened(layer) => next.layers.push(layer),
            ModalAction::HistoryPopped => {
                // A popstate with nothing open belongs to someone else.
                if next.layers.pop().is_none() {
                    return self;
                }
            }
        }
        next.into()
    }
}

impl ModalStack {
    pub fn top(&self) -> Option<ModalLayer> {
        self.layers.last().copied()
    }

    pub fn is_top(&self, layer: ModalLayer) -> bool {
        self.top() == Some(layer)
    }

    pub fn is_open(&self, layer: ModalLayer) -> bool {
        self.layers.contains(&layer)
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn locks_scroll(&self) -> bool {
        !self.layers.is_empty()
    }
}

pub trait NavigationHistory {
    fn push_entry(&self, layer: ModalLayer);
    fn go_back(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserHistory;

impl NavigationHistory for BrowserHistory {
    fn push_entry(&self, layer: ModalLayer) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let href = window.location().href().ok();
        let state = serde_wasm_bindgen::to_value(&HistoryMarker { modal: layer }).unwrap_or(JsValue::NULL);
        match window.history() {
            Ok(history) => {
                if history.push_state_with_url(&state, "", href.as_deref()).is_err() {
                    warn!("pushState rejected for {:?}", layer);
                }
            }
            Err(_) => warn!("history unavailable, {:?} cannot be closed with back", layer),
        }
    }

    fn go_back(&self) {
        if let Some(Ok(history)) = web_sys::window().map(|w| w.history()) {
            let _ = history.back();
        }
    }
}

/// Opens and closes overlays. Closing never touches the stack directly: it asks
/// the history to step back and the resulting popstate pops the layer, which keeps
/// UI-driven and back-button-driven closes on the same path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalController<H = BrowserHistory> {
    history: H,
}

impl<H: NavigationHistory> ModalController<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    pub fn open(&self, layer: ModalLayer, dispatch: impl Fn(ModalAction)) {
        debug!("modal open: {:?}", layer);
        self.history.push_entry(layer);
        dispatch(ModalAction::Opened(layer));
    }

    pub fn close(&self, stack: &ModalStack) {
        if let Some(layer) = stack.top() {
            debug!("modal close requested: {:?}", layer);
            self.history.go_back();
        }
    }

    /// Escape closes the top overlay. Other keys belong to the open overlay itself.
    pub fn on_key(&self, key: &str, stack: &ModalStack) {
        if key == "Escape" {
            self.close(stack);
        }
    }
}

/// Handle shared through context so any section can open or close overlays.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
    pub stack: UseReducerHandle<ModalStack>,
    controller: ModalController,
}

impl ModalContext {
    pub fn new(stack: UseReducerHandle<ModalStack>) -> Self {
        Self {
            stack,
            controller: ModalController::new(BrowserHistory),
        }
    }

    pub fn open(&self, layer: ModalLayer) {
        let stack = self.stack.clone();
        self.controller.open(layer, move |action| stack.dispatch(action));
    }

    pub fn close(&self) {
        self.controller.close(&self.stack);
    }

    pub fn on_key(&self, key: &str) {
        self.controller.on_key(key, &self.stack);
    }

    pub fn on_popstate(&self) {
        self.stack.dispatch(ModalAction::HistoryPopped);
    }
}

#[hook]
pub fn use_modals() -> ModalContext {
    use_context::<ModalContext>().expect("use_modals called outside the ModalContext provider")
}

/// Applies or lifts the body scroll lock.
pub fn set_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mimics the browser: `go_back` drops one entry and, if one of ours, fires popstate.
    #[derive(Default)]
    struct FakeHistory {
        entries: RefCell<Vec<ModalLayer>>,
        pending_pops: RefCell<u32>,
        left_page: RefCell<bool>,
    }

    impl NavigationHistory for &FakeHistory {
        fn push_entry(&self, layer: ModalLayer) {
            self.entries.borrow_mut().push(layer);
        }

        fn go_back(&self) {
            if self.entries.borrow_mut().pop().is_some() {
                *self.pending_pops.borrow_mut() += 1;
            } else {
                *self.left_page.borrow_mut() = true;
            }
        }
    }

    fn deliver_popstates(history: &FakeHistory, stack: Rc<ModalStack>) -> Rc<ModalStack> {
        let mut stack = stack;
        let pops = std::mem::take(&mut *history.pending_pops.borrow_mut());
        for _ in 0..pops {
            stack = stack.reduce(ModalAction::HistoryPopped);
        }
        stack
    }

    fn open(controller: &ModalController<&FakeHistory>, stack: Rc<ModalStack>, layer: ModalLayer) -> Rc<ModalStack> {
        let next = RefCell::new(stack);
        controller.open(layer, |action| {
            let current = next.borrow().clone();
            *next.borrow_mut() = current.reduce(action);
        });
        next.into_inner()
    }

    #[test]
    fn opening_pushes_exactly_one_history_entry() {
        let history = FakeHistory::default();
        let controller = ModalController::new(&history);
        let stack = open(&controller, Rc::new(ModalStack::default()), ModalLayer::Portfolio);

        assert_eq!(history.entries.borrow().len(), 1);
        assert_eq!(stack.depth(), 1);
        assert!(stack.locks_scroll());
        assert!(stack.is_top(ModalLayer::Portfolio));
    }

    #[test]
    fn back_closes_one_layer_and_stays_on_page() {
        let history = FakeHistory::default();
        let controller = ModalController::new(&history);
        let stack = open(&controller, Rc::new(ModalStack::default()), ModalLayer::Portfolio);
        let stack = open(&controller, stack, ModalLayer::ReelViewer);

        controller.close(&stack);
        let stack = deliver_popstates(&history, stack);

        assert_eq!(stack.depth(), 1);
        assert!(stack.is_top(ModalLayer::Portfolio));
        assert!(!*history.left_page.borrow());

        controller.close(&stack);
        let stack = deliver_popstates(&history, stack);
        assert_eq!(stack.depth(), 0);
        assert!(!stack.locks_scroll());
        assert!(!*history.left_page.borrow());
    }

    #[test]
    fn close_with_nothing_open_never_navigates() {
        let history = FakeHistory::default();
        let controller = ModalController::new(&history);
        let stack = ModalStack::default();

        controller.close(&stack);

        assert!(!*history.left_page.borrow());
        assert_eq!(*history.pending_pops.borrow(), 0);
    }

    #[test]
    fn escape_steps_back_once_per_open_layer() {
        let history = FakeHistory::default();
        let controller = ModalController::new(&history);
        let stack = open(&controller, Rc::new(ModalStack::default()), ModalLayer::Portfolio);
        let stack = open(&controller, stack, ModalLayer::ReelViewer);

        controller.on_key("Escape", &stack);
        assert_eq!(*history.pending_pops.borrow(), 1);
        let stack = deliver_popstates(&history, stack);
        assert!(stack.is_top(ModalLayer::Portfolio));

        controller.on_key("ArrowLeft", &stack);
        assert_eq!(*history.pending_pops.borrow(), 0);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn escape_with_nothing_open_is_ignored() {
        let history = FakeHistory::default();
        let controller = ModalController::new(&history);

        controller.on_key("Escape", &ModalStack::default());

        assert_eq!(*history.pending_pops.borrow(), 0);
        assert!(!*history.left_page.borrow());
    }

    #[test]
    fn stray_popstate_keeps_the_same_state() {
        let stack = Rc::new(ModalStack::default());
        let after = stack.clone().reduce(ModalAction::HistoryPopped);
        assert!(Rc::ptr_eq(&stack, &after));
    }

    #[test]
    fn history_marker_names_the_layer() {
        let marker = HistoryMarker { modal: ModalLayer::ReelViewer };
        assert_eq!(serde_json::to_string(&marker).unwrap(), r#"{"modal":"reel-viewer"}"#);
    }
}
