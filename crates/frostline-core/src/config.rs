//! Configuration for checked classification.
//!
//! The freezing threshold is fixed at 0 °C and is not configurable. What a
//! caller can choose is how readings that are not finite numbers are treated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FrostError, Result};

/// Treatment of NaN and infinite readings by [`crate::Classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonFinitePolicy {
    /// Classify like [`crate::is_frozen_water`]: `-inf` frozen, `+inf` and
    /// NaN liquid.
    Classify,
    /// Reject NaN, classify the infinities.
    #[default]
    RejectNan,
    /// Reject NaN and both infinities.
    RejectNonFinite,
}

impl NonFinitePolicy {
    /// Checks `celsius` against this policy.
    ///
    /// # Errors
    /// Returns [`FrostError::NotANumber`] or [`FrostError::Infinite`] when
    /// the policy rejects the value.
    pub fn admit(self, celsius: f64) -> Result<f64> {
        match self {
            Self::Classify => Ok(celsius),
            Self::RejectNan | Self::RejectNonFinite if celsius.is_nan() => {
                Err(FrostError::NotANumber)
            }
            Self::RejectNonFinite if celsius.is_infinite() => {
                Err(FrostError::Infinite { value: celsius })
            }
            Self::RejectNan | Self::RejectNonFinite => Ok(celsius),
        }
    }
}

/// Classifier configuration.
///
/// ```rust
/// use frostline_core::{ClassifierConfig, NonFinitePolicy};
///
/// let config = ClassifierConfig::builder()
///     .non_finite(NonFinitePolicy::RejectNonFinite)
///     .log_rejections(false)
///     .build();
/// assert_eq!(config.non_finite(), NonFinitePolicy::RejectNonFinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Treatment of NaN and infinite readings.
    #[serde(default)]
    non_finite: NonFinitePolicy,

    /// Emit a `warn` event for each rejected reading.
    #[serde(default = "default_log_rejections")]
    log_rejections: bool,
}

const fn default_log_rejections() -> bool {
    true
}

impl ClassifierConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub const fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::new()
    }

    /// Treatment of NaN and infinite readings.
    #[must_use]
    pub const fn non_finite(&self) -> NonFinitePolicy {
        self.non_finite
    }

    /// Whether rejected readings are logged.
    #[must_use]
    pub const fn log_rejections(&self) -> bool {
        self.log_rejections
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// Returns [`FrostError::Config`] on malformed TOML, unknown keys, or an
    /// unknown policy name.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FrostError::config(format!("failed to parse config: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`FrostError::Io`] if the file cannot be read and
    /// [`FrostError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), policy = ?config.non_finite, "loaded classifier config");
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    /// Returns [`FrostError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| FrostError::config(format!("failed to serialize config: {e}")))
    }
}

impl Default for ClassifierConfig {
    /// Rejects NaN, classifies infinities, logs rejections.
    fn default() -> Self {
        ClassifierConfigBuilder::new().build()
    }
}

/// Builder for [`ClassifierConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfigBuilder {
    config: ClassifierConfig,
}

impl ClassifierConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: ClassifierConfig {
                non_finite: NonFinitePolicy::RejectNan,
                log_rejections: true,
            },
        }
    }

    /// Treatment of NaN and infinite readings.
    ///
    /// Default: [`NonFinitePolicy::RejectNan`]
    #[must_use]
    pub const fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.config.non_finite = policy;
        self
    }

    /// Emit a `warn` event for each rejected reading.
    ///
    /// Default: `true`
    #[must_use]
    pub const fn log_rejections(mut self, value: bool) -> Self {
        self.config.log_rejections = value;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub const fn build(self) -> ClassifierConfig {
        self.config
    }
}

impl Default for ClassifierConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
