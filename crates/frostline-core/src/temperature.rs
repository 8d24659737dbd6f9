//! Celsius temperature value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FrostError;
use crate::phase::{self, WaterPhase};

/// Unit suffixes accepted after the number, longest first.
const UNIT_SUFFIXES: [&str; 6] = ["°C", "ºC", "°c", "ºc", "C", "c"];

/// A temperature in degrees Celsius.
///
/// Transparent over `f64`: any value is representable, including NaN and
/// the infinities. Serializes as the bare number, so non-finite values only
/// survive formats that can encode them. JSON writes NaN and the infinities
/// as `null`, which does not deserialize back into a `Celsius`.
///
/// ```rust
/// use frostline_core::{Celsius, WaterPhase};
///
/// let reading: Celsius = "-15ºC".parse()?;
/// assert!(reading.is_frozen_water());
/// assert_eq!(reading.phase(), WaterPhase::Frozen);
/// # Ok::<(), frostline_core::FrostError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

impl Celsius {
    /// The freezing point of water.
    pub const FREEZING_POINT: Self = Self(phase::FREEZING_POINT_C);

    /// Creates a new temperature.
    #[must_use]
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Returns the raw value in degrees.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` unless the value is NaN or infinite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// See [`crate::is_frozen_water`].
    #[must_use]
    pub const fn is_frozen_water(self) -> bool {
        phase::is_frozen_water(self.0)
    }

    /// See [`crate::classify`].
    #[must_use]
    pub const fn phase(self) -> WaterPhase {
        phase::classify(self.0)
    }
}

impl From<f64> for Celsius {
    fn from(degrees: f64) -> Self {
        Self(degrees)
    }
}

impl From<Celsius> for f64 {
    fn from(temp: Celsius) -> Self {
        temp.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl FromStr for Celsius {
    type Err = FrostError;

    /// Parses `"-15"`, `"-15ºC"`, `"0 °C"` or `"15c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = UNIT_SUFFIXES
            .iter()
            .find_map(|suffix| trimmed.strip_suffix(suffix))
            .unwrap_or(trimmed)
            .trim_end();

        if number.is_empty() {
            return Err(FrostError::parse(format!("{s:?}: missing value")));
        }

        number
            .parse::<f64>()
            .map(Self)
            .map_err(|e| FrostError::parse(format!("{s:?}: {e}")))
    }
}
