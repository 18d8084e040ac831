//! # Web Error Types
//!
//! Errors raised while mounting a component onto the page.

use folio_core::FolioError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while binding to the DOM.
#[derive(Error, Debug)]
pub enum WebError {
    /// A core operation failed.
    #[error(transparent)]
    Core(#[from] FolioError),

    /// A browser API threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// An element the component needs is absent (or of the wrong kind).
    #[error("missing element: {0}")]
    Missing(&'static str),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Result type for DOM binding.
pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_names_the_element() {
        assert_eq!(WebError::Missing(".nav__toggle").to_string(), "missing element: .nav__toggle");
    }

    #[test]
    fn test_core_errors_pass_through() {
        let err: WebError = FolioError::Storage("quota".to_owned()).into();
        assert!(matches!(err, WebError::Core(FolioError::Storage(_))));
    }
}
