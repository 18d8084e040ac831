//! `requestAnimationFrame` as a [`FrameScheduler`].
//!
//! A frame loop owns its state and one JS callback. Each tick the callback
//! hands the state and the scheduler to the tick function, which asks for the
//! next frame or lets the loop end. The browser pauses the loop while the page
//! is hidden.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{WebError, WebResult};

type FrameCallback = Closure<dyn FnMut(f64)>;
type CallbackSlot = Rc<RefCell<Option<FrameCallback>>>;

/// Schedules the loop's callback for the next repaint.
#[derive(Clone)]
pub struct RafScheduler {
    window: Window,
    slot: CallbackSlot,
    pending: Rc<Cell<bool>>,
}

impl FrameScheduler for RafScheduler {
    fn request_tick(&mut self) -> bool {
        if self.pending.get() {
            return false;
        }
        let slot = self.slot.borrow();
        let Some(callback) = slot.as_ref() else {
            return false;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(_) => {
                self.pending.set(true);
                true
            }
            Err(err) => {
                tracing::warn!(error = ?err, "requestAnimationFrame failed");
                false
            }
        }
    }
}

/// Starts a frame loop. `tick` gets the state, the frame timestamp (ms), and
/// the scheduler; the loop continues only while `tick` requests frames.
///
/// The callback references itself through the scheduler, so a loop lives
/// until the page unloads.
pub fn start_loop<T, F>(window: Window, state: T, tick: F) -> WebResult<()>
where
    T: 'static,
    F: FnMut(&mut T, f64, &mut RafScheduler) + 'static,
{
    let mut scheduler = idle_loop(window, state, tick);
    if scheduler.request_tick() {
        Ok(())
    } else {
        Err(WebError::Js("requestAnimationFrame refused the first tick".to_owned()))
    }
}

/// Builds a frame loop without scheduling anything. Each
/// [`FrameScheduler::request_tick`] on the returned scheduler (or a clone)
/// runs `tick` once on the next frame.
pub fn idle_loop<T, F>(window: Window, state: T, mut tick: F) -> RafScheduler
where
    T: 'static,
    F: FnMut(&mut T, f64, &mut RafScheduler) + 'static,
{
    let slot: CallbackSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window,
        slot: Rc::clone(&slot),
        pending: Rc::new(Cell::new(false)),
    };

    let mut state = state;
    let mut inner = scheduler.clone();
    let callback = FrameCallback::new(move |now: f64| {
        inner.pending.set(false);
        tick(&mut state, now, &mut inner);
    });
    *slot.borrow_mut() = Some(callback);
    scheduler
}
