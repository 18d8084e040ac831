//! Tilt cards and magnetic buttons.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::pointer::{self, MAGNETIC_RESET};
use folio_core::{Coalesced, PointerConfig, Tilt};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Window};

use crate::dom;
use crate::error::WebResult;
use crate::frame::{self, RafScheduler};

/// A card and the tilt waiting for its next frame.
struct TiltFrame {
    card: Element,
    pending: Rc<RefCell<Coalesced<Tilt>>>,
}

/// Wires `.tilt` and `.magnetic` elements.
///
/// Tilt writes wait for the next frame, one pending frame per card.
pub fn mount(window: &Window, config: &PointerConfig) -> WebResult<()> {
    let document = dom::document()?;

    for card in dom::query_all(&document, ".tilt")? {
        let pending = Rc::new(RefCell::new(Coalesced::new()));
        let state = TiltFrame {
            card: card.clone(),
            pending: Rc::clone(&pending),
        };
        let mut scheduler = frame::idle_loop(window.clone(), state, apply_tilt);

        let el = card.clone();
        let cfg = config.clone();
        let on_move = Rc::clone(&pending);
        dom::listen(&card, "mousemove", move |event| {
            if let Some((x, y)) = client_point(&event) {
                let tilt = pointer::tilt(dom::client_rect(&el), x, y, &cfg);
                on_move.borrow_mut().submit(tilt, &mut scheduler);
            }
        })?;
        let el = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            pending.borrow_mut().cancel();
            set_transform(&el, &Tilt::RESET.to_css());
        })?;
    }

    for button in dom::query_all(&document, ".magnetic")? {
        let el = button.clone();
        let cfg = config.clone();
        dom::listen(&button, "mousemove", move |event| {
            if let Some((x, y)) = client_point(&event) {
                let offset = pointer::magnetic(dom::client_rect(&el), x, y, &cfg);
                set_transform(&el, &offset);
            }
        })?;
        let el = button.clone();
        dom::listen(&button, "mouseleave", move |_| set_transform(&el, MAGNETIC_RESET))?;
    }
    Ok(())
}

fn apply_tilt(target: &mut TiltFrame, _now: f64, _scheduler: &mut RafScheduler) {
    let next = target.pending.borrow_mut().take();
    if let Some(tilt) = next {
        set_transform(&target.card, &tilt.to_css());
    }
}

fn client_point(event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn set_transform(element: &Element, value: &str) {
    if let Err(err) = dom::set_style(element, "transform", value) {
        tracing::debug!(error = %err, "transform not applied");
    }
}
