//! Viewport visibility observation
//! Uses IntersectionObserver in the browser, anything implementing the trait elsewhere

use std::rc::Rc;

/// One visibility change reported for an observed node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// The node crossed the observer's threshold into the viewport
    pub is_intersecting: bool,
}

pub type IntersectionCallback = Rc<dyn Fn(Intersection)>;

/// Something that reports when nodes enter or leave the viewport.
///
/// Callbacks are delivered on the UI thread. After `unobserve` returns no
/// further callbacks are delivered for that node.
pub trait VisibilityObserver: Clone + 'static {
    type Node: Clone + 'static;

    fn observe(&self, node: &Self::Node, callback: IntersectionCallback);
    fn unobserve(&self, node: &Self::Node);
}

#[cfg(feature = "hydrate")]
pub use dom::DomObserver;

#[cfg(feature = "hydrate")]
mod dom {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::logging::warn;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{Intersection, IntersectionCallback, VisibilityObserver};

    type EntriesClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    struct Watch {
        native: IntersectionObserver,
        // Dropping the closure invalidates the JS callback, so it lives as long as the observer
        _callback: EntriesClosure,
    }

    /// `VisibilityObserver` backed by the browser's IntersectionObserver.
    ///
    /// Each observed node gets its own native observer so callbacks stay per node.
    #[derive(Clone)]
    pub struct DomObserver {
        threshold: f64,
        watches: Rc<RefCell<Vec<(Element, Watch)>>>,
    }

    impl DomObserver {
        pub fn new(threshold: f64) -> Self {
            Self {
                threshold,
                watches: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl VisibilityObserver for DomObserver {
        type Node = Element;

        fn observe(&self, node: &Element, callback: IntersectionCallback) {
            let closure: EntriesClosure = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    callback(Intersection {
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(self.threshold));

            let native = match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
                Ok(native) => native,
                Err(err) => {
                    warn!("IntersectionObserver unavailable: {err:?}");
                    return;
                }
            };
            native.observe(node);

            self.watches.borrow_mut().push((
                node.clone(),
                Watch {
                    native,
                    _callback: closure,
                },
            ));
        }

        fn unobserve(&self, node: &Element) {
            // Take the watch out before touching JS so a re-entrant callback can't hit a held borrow
            let removed = {
                let mut watches = self.watches.borrow_mut();
                watches
                    .iter()
                    .position(|(el, _)| el == node)
                    .map(|idx| watches.swap_remove(idx))
            };

            if let Some((el, watch)) = removed {
                watch.native.unobserve(&el);
                // Drain queued entries so nothing calls into the closure after it is dropped
                let _ = watch.native.take_records();
                watch.native.disconnect();
            }
        }
    }

}
