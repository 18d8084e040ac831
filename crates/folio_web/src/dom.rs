//! DOM lookup and event helpers.
//!
//! Lookups return [`WebError::Missing`] instead of panicking so each
//! component can bail out on its own.

use folio_core::{Rect, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::{WebError, WebResult};

/// The global window.
pub fn window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::Missing("window"))
}

/// The window's document.
pub fn document() -> WebResult<Document> {
    window()?.document().ok_or(WebError::Missing("document"))
}

/// First match of `selector` under `root`, if any.
pub fn query(root: &Element, selector: &str) -> WebResult<Option<Element>> {
    Ok(root.query_selector(selector)?)
}

/// First match of `selector` in the document, required.
pub fn require(document: &Document, selector: &'static str) -> WebResult<Element> {
    document
        .query_selector(selector)?
        .ok_or(WebError::Missing(selector))
}

/// Element by id, required.
pub fn require_id(document: &Document, id: &'static str) -> WebResult<Element> {
    document.get_element_by_id(id).ok_or(WebError::Missing(id))
}

/// Every element matching `selector` in the document.
pub fn query_all(document: &Document, selector: &str) -> WebResult<Vec<Element>> {
    collect(&document.query_selector_all(selector)?)
}

/// Every element matching `selector` under `root`.
pub fn query_all_in(root: &Element, selector: &str) -> WebResult<Vec<Element>> {
    collect(&root.query_selector_all(selector)?)
}

fn collect(list: &web_sys::NodeList) -> WebResult<Vec<Element>> {
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Downcasts to a concrete element type.
pub fn cast<T: JsCast>(element: Element, what: &'static str) -> WebResult<T> {
    element.dyn_into::<T>().map_err(|_| WebError::Missing(what))
}

/// Attaches `handler` to `event` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> WebResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener: never removed.
    closure.forget();
    Ok(())
}

/// Current inner size of the window.
pub fn viewport(window: &Window) -> WebResult<Viewport> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

/// Bounding client rect of an element.
pub fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Runs `callback` once after `delay_ms`.
pub fn set_timeout<F>(window: &Window, delay_ms: u32, callback: F) -> WebResult<()>
where
    F: FnOnce() + 'static,
{
    let closure: JsValue = Closure::once_into_js(callback);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay)?;
    Ok(())
}

/// Sets an inline style property.
pub fn set_style(element: &Element, property: &str, value: &str) -> WebResult<()> {
    let element: &web_sys::HtmlElement = element
        .dyn_ref()
        .ok_or(WebError::Missing("html element"))?;
    element.style().set_property(property, value)?;
    Ok(())
}
