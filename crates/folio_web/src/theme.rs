//! Theme restore and toggle on `<html data-theme>`.

use folio_core::{FolioError, FolioResult, PreferenceStore, ThemeController};
use web_sys::{Element, Storage, Window};

use crate::dom;
use crate::error::{WebError, WebResult};

const THEME_ATTRIBUTE: &str = "data-theme";

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Opens local storage. Fails in private modes that disable it.
    pub fn open(window: &Window) -> WebResult<Self> {
        let storage = window
            .local_storage()?
            .ok_or(WebError::Missing("localStorage"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> FolioResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| FolioError::Storage(format!("{err:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| FolioError::Storage(format!("{err:?}")))
    }
}

/// Applies the saved theme and wires `.theme-toggle`.
pub fn mount(window: &Window) -> WebResult<()> {
    let document = dom::document()?;
    let root: Element = document
        .document_element()
        .ok_or(WebError::Missing("document element"))?;

    let controller = ThemeController::new(LocalStorage::open(window)?);
    if let Some(saved) = controller.restore()? {
        root.set_attribute(THEME_ATTRIBUTE, &saved)?;
    }

    let Some(toggle) = document.query_selector(".theme-toggle")? else {
        return Ok(());
    };
    let mut controller = controller;
    dom::listen(&toggle, "click", move |_| {
        let current = root.get_attribute(THEME_ATTRIBUTE);
        match controller.toggle(current.as_deref()) {
            Ok(next) => {
                if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, next.as_str()) {
                    tracing::warn!(error = ?err, "could not apply theme");
                }
            }
            Err(err) => tracing::warn!(error = %err, "theme not saved"),
        }
    })
}
