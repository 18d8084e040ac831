//! Page configuration.
//!
//! Every section has defaults matching the shipped page, so an empty document
//! is a valid config:
//!
//! ```toml
//! log_level = "debug"
//!
//! [particles]
//! max_particles = 80
//!
//! [reveal]
//! threshold = 0.25
//! root_margin = { bottom = -20.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::CounterConfig;
use crate::contact::ContactConfig;
use crate::error::{FolioError, FolioResult};
use crate::particles::ParticleConfig;
use crate::pointer::PointerConfig;
use crate::reveal::RevealConfig;

/// Log levels accepted by `log_level`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Complete page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Maximum log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Particle field.
    pub particles: ParticleConfig,
    /// Scroll reveal.
    pub reveal: RevealConfig,
    /// Count-up counters.
    pub counter: CounterConfig,
    /// Tilt and magnetic hover.
    pub pointer: PointerConfig,
    /// Contact form.
    pub contact: ContactConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            particles: ParticleConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            pointer: PointerConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::ConfigParse`] for malformed TOML and
    /// [`FolioError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> FolioResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`] naming the first bad value.
    pub fn validate(&self) -> FolioResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(FolioError::InvalidConfig(format!(
                "log_level must be one of {LOG_LEVELS:?}, got {:?}",
                self.log_level
            )));
        }
        self.particles.validate()?;
        self.reveal.validate()?;
        self.counter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(FolioConfig::from_toml_str("").unwrap(), FolioConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = FolioConfig::from_toml_str(
            r#"
            log_level = "debug"

            [particles]
            max_particles = 80

            [reveal]
            threshold = 0.25
            root_margin = { bottom = -20.0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.particles.max_particles, 80);
        assert!((config.particles.density - 18_000.0).abs() < f64::EPSILON);
        assert!((config.reveal.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.reveal.root_margin.to_css(), "0px 0px -20% 0px");
        assert_eq!(config.reveal.selector, ".reveal");
    }

    #[test]
    fn test_malformed_toml() {
        let err = FolioConfig::from_toml_str("particles = [").unwrap_err();
        assert!(matches!(err, FolioError::ConfigParse(_)));
    }

    #[test]
    fn test_out_of_range() {
        let err = FolioConfig::from_toml_str("[particles]\ndensity = 0.0").unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let err = FolioConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }
}
