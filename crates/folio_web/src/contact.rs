//! Contact form: inline validation and the simulated send.

use folio_core::contact::ContactConfig;
use folio_core::{ContactForm, Field};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::dom;
use crate::error::WebResult;

/// Handles `.contact-form` submissions.
pub fn mount(window: &Window, config: &ContactConfig) -> WebResult<()> {
    let document = dom::document()?;
    let form: HtmlFormElement = dom::cast(dom::require(&document, ".contact-form")?, "form.contact-form")?;
    let status = dom::query(&form, ".form-status")?;

    let window = window.clone();
    let config = config.clone();
    let target = form.clone();
    dom::listen(&target, "submit", move |event: Event| {
        event.prevent_default();
        submit(&window, &document, &form, status.as_ref(), &config);
    })
}

fn submit(
    window: &Window,
    document: &Document,
    form: &HtmlFormElement,
    status: Option<&Element>,
    config: &ContactConfig,
) {
    let values = ContactForm::new(
        &field_value(document, Field::Name),
        &field_value(document, Field::Email),
        &field_value(document, Field::Message),
    );
    let validation = values.validate();
    for (field, message) in validation.messages() {
        if let Some(slot) = error_slot(document, field) {
            slot.set_text_content(Some(message));
        }
    }
    if !validation.is_ok() {
        tracing::debug!("contact form rejected");
        return;
    }

    let Some(status) = status.cloned() else {
        form.reset();
        return;
    };
    status.set_text_content(Some(&config.sending_message));
    let form = form.clone();
    let sent = config.sent_message.clone();
    let scheduled = dom::set_timeout(window, config.send_delay_ms, move || {
        status.set_text_content(Some(&sent));
        form.reset();
    });
    if let Err(err) = scheduled {
        tracing::warn!(error = %err, "send timer not scheduled");
    }
}

/// Current value of an input or textarea; empty when absent.
fn field_value(document: &Document, field: Field) -> String {
    let Some(element) = document.get_element_by_id(field.id()) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// The `.error` placeholder inside the field's `.field` wrapper.
fn error_slot(document: &Document, field: Field) -> Option<Element> {
    let input = document.get_element_by_id(field.id())?;
    let wrapper = input.closest(".field").ok()??;
    wrapper.query_selector(".error").ok()?
}
