//! The freezing predicate and its named result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Freezing point of water in Celsius.
///
/// Water at or below this temperature is considered frozen. There is no
/// hysteresis band around it.
pub const FREEZING_POINT_C: f64 = 0.0;

/// Returns whether water at `celsius` degrees is frozen.
///
/// True exactly when `celsius <= 0.0`, so the boundary belongs to the frozen
/// side. The function is total over `f64` and follows IEEE-754 comparison:
/// `-inf` is frozen, `+inf` is not, and NaN is never frozen because NaN
/// compares false against everything. Use [`crate::Classifier`] to reject
/// non-finite readings instead.
///
/// ```rust
/// use frostline_core::is_frozen_water;
///
/// assert!(is_frozen_water(-15.0));
/// assert!(is_frozen_water(0.0));
/// assert!(!is_frozen_water(15.0));
/// ```
#[must_use]
#[inline]
pub const fn is_frozen_water(celsius: f64) -> bool {
    celsius <= FREEZING_POINT_C
}

/// Classifies a reading into a [`WaterPhase`].
///
/// Agrees with [`is_frozen_water`] for every input, NaN included.
#[must_use]
pub const fn classify(celsius: f64) -> WaterPhase {
    WaterPhase::from_frozen(is_frozen_water(celsius))
}

/// Phase of water at a given temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterPhase {
    /// At or below the freezing point.
    Frozen,
    /// Above the freezing point.
    Liquid,
}

impl WaterPhase {
    /// Maps the predicate's boolean onto a phase.
    #[must_use]
    pub const fn from_frozen(frozen: bool) -> Self {
        if frozen { Self::Frozen } else { Self::Liquid }
    }

    /// Returns `true` for [`WaterPhase::Frozen`].
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        matches!(self, Self::Frozen)
    }
}

impl From<WaterPhase> for bool {
    fn from(phase: WaterPhase) -> Self {
        phase.is_frozen()
    }
}

impl fmt::Display for WaterPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frozen => write!(f, "frozen"),
            Self::Liquid => write!(f, "liquid"),
        }
    }
}
