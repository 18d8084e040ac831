//! Mounts the reveal scheduler on an `IntersectionObserver`.
//!
//! An element's [`ElementId`] is its position in the registration scan;
//! observer entries are mapped back by element identity, so the page markup
//! is left untouched.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ElementId, IntersectionSample, RevealConfig, RevealScheduler};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::error::WebResult;

struct RevealBinding {
    scheduler: RevealScheduler,
    elements: Vec<Element>,
    visible_class: String,
}

impl RevealBinding {
    /// Observer callback: decide, then add the class to newly revealed nodes.
    fn on_intersections(&mut self, entries: &Array) {
        let samples: Vec<IntersectionSample> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(IntersectionObserverEntry::is_intersecting)
            .filter_map(|entry| {
                Some(IntersectionSample {
                    id: registration_id(&self.elements, &entry.target())?,
                    ratio: entry.intersection_ratio(),
                })
            })
            .collect();

        let revealed = self.scheduler.observe_batch(&samples);
        self.apply(&revealed);
    }

    fn apply(&self, ids: &[ElementId]) {
        for id in ids {
            let Some(element) = usize::try_from(id.0).ok().and_then(|i| self.elements.get(i)) else {
                continue;
            };
            if let Err(err) = element.class_list().add_1(&self.visible_class) {
                tracing::warn!(error = ?err, "could not mark element visible");
            }
        }
    }
}

/// Id of `item`: its index in the registration order.
fn registration_id<T: PartialEq>(registered: &[T], item: &T) -> Option<ElementId> {
    let index = registered.iter().position(|el| el == item)?;
    u32::try_from(index).ok().map(ElementId)
}

/// Registers every matching element and starts observing.
///
/// Without `IntersectionObserver` support everything is revealed at once.
pub fn mount(config: &RevealConfig) -> WebResult<()> {
    let document = dom::document()?;
    let elements = dom::query_all(&document, &config.selector)?;

    let mut scheduler = RevealScheduler::new(config);
    scheduler.register((0u32..).zip(&elements).map(|(i, _)| ElementId(i)));

    if elements.is_empty() {
        tracing::debug!(selector = %config.selector, "no revealable elements");
        return Ok(());
    }

    let binding = Rc::new(RefCell::new(RevealBinding {
        scheduler,
        elements,
        visible_class: config.visible_class.clone(),
    }));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin.to_css());

    let on_entries = Rc::clone(&binding);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            on_entries.borrow_mut().on_intersections(&entries);
        },
    );

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            tracing::warn!(error = ?err, "IntersectionObserver unavailable, revealing everything");
            let mut binding = binding.borrow_mut();
            let all = binding.scheduler.reveal_all();
            binding.apply(&all);
            return Ok(());
        }
    };
    // The observer holds the callback for the page lifetime.
    callback.forget();

    let binding = binding.borrow();
    for element in &binding.elements {
        observer.observe(element);
    }
    tracing::debug!(count = binding.elements.len(), "reveal observer started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_id_follows_scan_order() {
        let scanned = ["hero", "about", "work"];
        assert_eq!(registration_id(&scanned, &"hero"), Some(ElementId(0)));
        assert_eq!(registration_id(&scanned, &"work"), Some(ElementId(2)));
        assert_eq!(registration_id(&scanned, &"footer"), None);
    }
}
