//! Error types for frostline-core.
//!
//! The freezing predicate itself is total and never fails. Only the checked
//! classifier, text parsing, and configuration loading can return errors.

/// Result type alias for frostline operations.
pub type Result<T> = std::result::Result<T, FrostError>;

/// Error type for the fallible frostline surfaces.
#[derive(Debug, thiserror::Error)]
pub enum FrostError {
    /// A NaN reading was rejected by the classifier policy.
    #[error("temperature is not a number")]
    NotANumber,

    /// An infinite reading was rejected by the classifier policy.
    #[error("temperature is infinite: {value}")]
    Infinite {
        /// The rejected value (`+inf` or `-inf`).
        value: f64,
    },

    /// Text could not be read as a Celsius temperature.
    #[error("invalid temperature: {0}")]
    Parse(String),

    /// Configuration text could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(String),

    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FrostError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if the classifier rejected a NaN or infinite reading.
    #[must_use]
    pub const fn is_non_finite(&self) -> bool {
        matches!(self, Self::NotANumber | Self::Infinite { .. })
    }
}
