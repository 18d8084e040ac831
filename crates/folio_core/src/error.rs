//! # Folio Error Types
//!
//! Errors raised by config loading and preference storage.

use thiserror::Error;

/// Errors that can occur in the page logic.
#[derive(Error, Debug)]
pub enum FolioError {
    /// A config value is out of its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The config text is not valid TOML for [`crate::FolioConfig`].
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The preference store rejected a read or write.
    #[error("preference store failure: {0}")]
    Storage(String),
}

/// Result type for page logic operations.
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_errors_convert() {
        let err: FolioError = toml::from_str::<toml::Table>("= broken").unwrap_err().into();
        assert!(matches!(err, FolioError::ConfigParse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
