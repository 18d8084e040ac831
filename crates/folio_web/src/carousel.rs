//! Prev/next paging for `.carousel__track`.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::Carousel;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::error::WebResult;

/// Wires the carousel buttons. An empty track is left alone.
pub fn mount() -> WebResult<()> {
    let document = dom::document()?;
    let track = dom::require(&document, ".carousel__track")?;
    let slides: Rc<Vec<HtmlElement>> = Rc::new(
        dom::query_all_in(&track, ".slide")?
            .into_iter()
            .filter_map(|el| dom::cast(el, "slide").ok())
            .collect(),
    );
    if slides.is_empty() {
        tracing::debug!("carousel has no slides");
        return Ok(());
    }
    let state = Rc::new(Cell::new(Carousel::new(slides.len())));

    for (selector, forward) in [(".carousel__prev", false), (".carousel__next", true)] {
        let Some(button) = document.query_selector(selector)? else {
            continue;
        };
        let state = Rc::clone(&state);
        let slides = Rc::clone(&slides);
        let track = track.clone();
        dom::listen(&button, "click", move |_| {
            let mut carousel = state.get();
            let index = if forward { carousel.next() } else { carousel.prev() };
            state.set(carousel);
            if let Some(slide) = index.and_then(|i| slides.get(i)) {
                scroll_track(&track, slide);
            }
        })?;
    }
    Ok(())
}

fn scroll_track(track: &Element, slide: &HtmlElement) {
    let options = ScrollToOptions::new();
    options.set_left(f64::from(slide.offset_left()));
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_to_with_scroll_to_options(&options);
}
