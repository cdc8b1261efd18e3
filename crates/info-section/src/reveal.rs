//! One-shot scroll reveal: a section starts hidden and becomes visible the
//! first time it intersects the viewport, after which it is never observed again.

use std::cell::Cell;
use std::rc::Rc;

use leptos::logging::log;
use leptos::prelude::*;

use crate::observer::{Intersection, VisibilityObserver};

/// Markers applied while a section waits to be revealed
pub const HIDDEN_CLASSES: &str = "opacity-0 translate-y-8";
/// Markers applied once a section has been revealed
pub const VISIBLE_CLASSES: &str = "opacity-100 translate-y-0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Next state after an intersection report. `Visible` is terminal.
    pub fn on_intersection(self, intersection: Intersection) -> RevealState {
        match self {
            RevealState::Hidden if intersection.is_intersecting => RevealState::Visible,
            state => state,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }

    pub fn classes(self) -> &'static str {
        match self {
            RevealState::Hidden => HIDDEN_CLASSES,
            RevealState::Visible => VISIBLE_CLASSES,
        }
    }
}

struct WatchState {
    state: Cell<RevealState>,
    attached: Cell<bool>,
}

/// Observer subscription for one revealing node.
///
/// `on_reveal` runs at most once. Dropping the watch (or calling `detach`)
/// unobserves the node if that has not happened yet; callbacks that arrive
/// afterwards are ignored.
pub struct RevealWatch<O: VisibilityObserver> {
    observer: O,
    node: O::Node,
    shared: Rc<WatchState>,
}

impl<O: VisibilityObserver> RevealWatch<O> {
    /// Start watching `node`. Returns `None` without observing anything when
    /// the node is not available.
    pub fn attach(observer: O, node: Option<O::Node>, on_reveal: impl Fn() + 'static) -> Option<Self> {
        let node = node?;
        let shared = Rc::new(WatchState {
            state: Cell::new(RevealState::Hidden),
            attached: Cell::new(true),
        });

        let callback = {
            let observer = observer.clone();
            let node = node.clone();
            let shared = Rc::clone(&shared);
            Rc::new(move |intersection: Intersection| {
                if !shared.attached.get() {
                    return;
                }
                let previous = shared.state.get();
                let next = previous.on_intersection(intersection);
                if next == previous {
                    return;
                }
                shared.state.set(next);
                shared.attached.set(false);
                observer.unobserve(&node);
                on_reveal();
            })
        };

        observer.observe(&node, callback);
        Some(Self { observer, node, shared })
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> RevealState {
        self.shared.state.get()
    }

    #[cfg(test)]
    pub(crate) fn is_attached(&self) -> bool {
        self.shared.attached.get()
    }

    pub fn detach(&self) {
        if self.shared.attached.replace(false) {
            self.observer.unobserve(&self.node);
        }
    }
}

impl<O: VisibilityObserver> Drop for RevealWatch<O> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Watch `node` for the current reactive owner and flip `set_state` to
/// `Visible` on the first intersection. Cleaning up the owner detaches the
/// watch. Returns whether a watch was installed.
pub fn attach_reveal<O: VisibilityObserver>(
    observer: O,
    node: Option<O::Node>,
    set_state: WriteSignal<RevealState>,
) -> bool {
    let Some(watch) = RevealWatch::attach(observer, node, move || set_state.set(RevealState::Visible)) else {
        return false;
    };

    let watch = StoredValue::new_local(Some(watch));
    on_cleanup(move || {
        // Dropping the watch unobserves the node
        let _ = watch.try_update_value(Option::take);
    });
    true
}

/// Reveal state of a node, attached once the node is mounted.
///
/// `node` is read inside an effect, so a `NodeRef` getter re-attaches when the
/// element appears. Nothing is attached once the state is `Visible`.
pub fn use_reveal<O: VisibilityObserver>(
    observer: O,
    node: impl Fn() -> Option<O::Node> + 'static,
) -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::Hidden);

    Effect::new(move |_| {
        if state.get_untracked().is_visible() {
            return;
        }
        if !attach_reveal(observer.clone(), node(), set_state) {
            log!("section has no element to observe yet");
        }
    });

    state
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use crate::observer::{Intersection, IntersectionCallback, VisibilityObserver};

    /// Synchronous observer; tests fire intersections by hand
    #[derive(Clone, Default)]
    pub struct FakeObserver {
        callbacks: Rc<RefCell<HashMap<u32, IntersectionCallback>>>,
        unobserved: Rc<RefCell<Vec<u32>>>,
    }

    impl FakeObserver {
        pub fn fire(&self, node: u32, is_intersecting: bool) {
            let callback = self.callbacks.borrow().get(&node).cloned();
            if let Some(callback) = callback {
                callback(Intersection { is_intersecting });
            }
        }

        /// Deliver to a callback even after unobserve, like a queued browser event
        pub fn fire_stale(&self, callback: &IntersectionCallback, is_intersecting: bool) {
            callback(Intersection { is_intersecting });
        }

        pub fn callback(&self, node: u32) -> Option<IntersectionCallback> {
            self.callbacks.borrow().get(&node).cloned()
        }

        pub fn is_observing(&self, node: u32) -> bool {
            self.callbacks.borrow().contains_key(&node)
        }

        pub fn unobserve_count(&self, node: u32) -> usize {
            self.unobserved.borrow().iter().filter(|n| **n == node).count()
        }
    }

    impl VisibilityObserver for FakeObserver {
        type Node = u32;

        fn observe(&self, node: &u32, callback: IntersectionCallback) {
            self.callbacks.borrow_mut().insert(*node, callback);
        }

        fn unobserve(&self, node: &u32) {
            self.callbacks.borrow_mut().remove(node);
            self.unobserved.borrow_mut().push(*node);
        }
    }
}
