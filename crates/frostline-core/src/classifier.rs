//! Checked classification of untrusted readings.

use crate::config::{ClassifierConfig, NonFinitePolicy};
use crate::error::Result;
use crate::phase::{self, WaterPhase};

/// Classifies readings, applying a [`NonFinitePolicy`] first.
///
/// Finite readings always classify successfully and agree with
/// [`crate::is_frozen_water`]. The classifier holds no mutable state and can
/// be copied into any number of threads.
///
/// ```rust
/// use frostline_core::{Classifier, WaterPhase};
///
/// let classifier = Classifier::default();
/// assert_eq!(classifier.check(-15.0)?, WaterPhase::Frozen);
/// assert!(classifier.check(f64::NAN).is_err());
/// # Ok::<(), frostline_core::FrostError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Creates a classifier with the given configuration.
    #[must_use]
    pub const fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Creates a classifier with default settings and the given policy.
    #[must_use]
    pub const fn with_policy(policy: NonFinitePolicy) -> Self {
        Self::new(ClassifierConfig::builder().non_finite(policy).build())
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies `celsius`.
    ///
    /// # Errors
    /// Returns [`crate::FrostError::NotANumber`] or
    /// [`crate::FrostError::Infinite`] when the configured policy rejects
    /// the reading.
    pub fn check(&self, celsius: f64) -> Result<WaterPhase> {
        let celsius = self.config.non_finite().admit(celsius).inspect_err(|e| {
            if self.config.log_rejections() {
                tracing::warn!(
                    celsius,
                    policy = ?self.config.non_finite(),
                    "rejected reading: {e}"
                );
            }
        })?;

        let phase = phase::classify(celsius);
        tracing::trace!(celsius, %phase, "classified reading");
        Ok(phase)
    }

    /// Checked form of [`crate::is_frozen_water`].
    ///
    /// # Errors
    /// Same as [`Classifier::check`].
    pub fn is_frozen(&self, celsius: f64) -> Result<bool> {
        self.check(celsius).map(|phase| phase.is_frozen())
    }
}
