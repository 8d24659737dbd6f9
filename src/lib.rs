//! Frostline: Freezing-Point Classification
//!
//! # Quick Start
//!
//! ```rust
//! use frostline::prelude::*;
//!
//! assert!(is_frozen_water(-15.0));
//! assert!(is_frozen_water(0.0));
//! assert!(!is_frozen_water(15.0));
//!
//! let reading: Celsius = "-15ºC".parse()?;
//! assert_eq!(reading.phase(), WaterPhase::Frozen);
//! # Ok::<(), FrostError>(())
//! ```

pub use frostline_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use frostline_core::{
        Celsius, Classifier, ClassifierConfig, FREEZING_POINT_C, FrostError, NonFinitePolicy,
        WaterPhase, classify, is_frozen_water,
    };
}
