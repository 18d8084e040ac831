//! Mobile menu toggle and smooth in-page scrolling.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::nav::{anchor_target, NavMenu};
use wasm_bindgen::JsValue;
use web_sys::{
    Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom;
use crate::error::WebResult;

const OPEN_CLASS: &str = "open";

/// Wires the menu toggle; every `[data-scroll]` click closes the menu.
pub fn mount() -> WebResult<()> {
    let document = dom::document()?;
    let toggle = dom::require(&document, ".nav__toggle")?;
    let list = dom::require(&document, ".nav__list")?;
    let menu = Rc::new(Cell::new(NavMenu::new()));

    {
        let menu = Rc::clone(&menu);
        let list = list.clone();
        let button = toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            let mut state = menu.get();
            let open = state.toggle();
            menu.set(state);
            apply(&list, &button, open);
        })?;
    }

    for link in dom::query_all(&document, "[data-scroll]")? {
        let menu = Rc::clone(&menu);
        let list = list.clone();
        let button = toggle.clone();
        dom::listen(&link, "click", move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            apply(&list, &button, false);
        })?;
    }
    Ok(())
}

fn apply(list: &Element, toggle: &Element, open: bool) {
    let classes = list.class_list();
    let result = if open {
        classes.add_1(OPEN_CLASS)
    } else {
        classes.remove_1(OPEN_CLASS)
    }
    .and_then(|()| toggle.set_attribute("aria-expanded", if open { "true" } else { "false" }));
    if let Err(err) = result {
        tracing::warn!(error = ?err, "could not update menu state");
    }
}

/// Smooth scrolling for in-page `[data-scroll]` anchors.
pub fn mount_anchors(window: &Window) -> WebResult<()> {
    let document = dom::document()?;
    for link in dom::query_all(&document, r##"a[href^="#"][data-scroll]"##)? {
        let window = window.clone();
        let document = document.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event: Event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            event.prevent_default();
            scroll_to(&window, &target, id);
        })?;
    }
    Ok(())
}

fn scroll_to(window: &Window, target: &Element, id: &str) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    let pushed = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}"))));
    if let Err(err) = pushed {
        tracing::debug!(error = ?err, "history push failed");
    }
}
