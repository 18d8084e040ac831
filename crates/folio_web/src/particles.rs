//! Mounts the particle field on `#particles`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ParticleConfig, ParticleField};
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;
use crate::dom;
use crate::error::WebResult;
use crate::frame::{self, RafScheduler};

type SharedField = Rc<RefCell<ParticleField<CanvasSurface>>>;

/// Binds the field to the canvas, the resize event, and the frame loop.
pub fn mount(window: &Window, config: &ParticleConfig) -> WebResult<()> {
    let document = dom::document()?;
    let canvas: HtmlCanvasElement =
        dom::cast(dom::require_id(&document, "particles")?, "canvas#particles")?;
    let surface = CanvasSurface::new(canvas)?;

    let mut field = ParticleField::new(surface, config.clone(), seed());
    field.init(dom::viewport(window)?);
    tracing::debug!(particles = field.len(), "particle field ready");
    let field: SharedField = Rc::new(RefCell::new(field));

    let on_resize = Rc::clone(&field);
    let resize_window = window.clone();
    dom::listen(window, "resize", move |_| handle_resize(&resize_window, &on_resize))?;

    frame::start_loop(window.clone(), field, tick)
}

/// Resize handler: new surface size, new particle set.
fn handle_resize(window: &Window, field: &SharedField) {
    match dom::viewport(window) {
        Ok(viewport) => field.borrow_mut().init(viewport),
        Err(err) => tracing::warn!(error = %err, "viewport size unavailable"),
    }
}

/// Frame callback. The field requests the next frame itself.
fn tick(field: &mut SharedField, _now: f64, scheduler: &mut RafScheduler) {
    field.borrow_mut().frame(scheduler);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
