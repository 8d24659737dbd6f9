// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # frostline-core
//!
//! Decides whether water at a given Celsius temperature is frozen.
//!
//! Freezing is defined as `temperature <= 0 °C`, inclusive at the boundary,
//! with no hysteresis and no unit conversion.
//!
//! ## Quick Start
//!
//! ```rust
//! use frostline_core::is_frozen_water;
//!
//! assert!(is_frozen_water(-15.0));
//! assert!(is_frozen_water(0.0));
//! assert!(!is_frozen_water(15.0));
//! ```
//!
//! ## Non-finite readings
//!
//! [`is_frozen_water`] is total and follows IEEE-754 comparison, so NaN is
//! never frozen. When readings come from an untrusted source, use a
//! [`Classifier`] to reject them instead:
//!
//! ```rust
//! use frostline_core::{Classifier, ClassifierConfig, NonFinitePolicy};
//!
//! let classifier = Classifier::new(
//!     ClassifierConfig::builder()
//!         .non_finite(NonFinitePolicy::RejectNonFinite)
//!         .build(),
//! );
//!
//! assert!(classifier.is_frozen(-15.0)?);
//! assert!(classifier.is_frozen(f64::INFINITY).is_err());
//! # Ok::<(), frostline_core::FrostError>(())
//! ```
//!
//! | Input | `is_frozen_water` | `Classify` | `RejectNan` (default) | `RejectNonFinite` |
//! |-------|-------------------|------------|-----------------------|-------------------|
//! | `t <= 0` | `true` | `true` | `true` | `true` |
//! | `t > 0` | `false` | `false` | `false` | `false` |
//! | `-inf` | `true` | `true` | `true` | error |
//! | `+inf` | `false` | `false` | `false` | error |
//! | NaN | `false` | `false` | error | error |

#![warn(missing_docs, rust_2018_idioms)]

mod classifier;
mod config;
mod error;
mod phase;
mod temperature;

pub use classifier::Classifier;
pub use config::{ClassifierConfig, ClassifierConfigBuilder, NonFinitePolicy};
pub use error::{FrostError, Result};
pub use phase::{FREEZING_POINT_C, WaterPhase, classify, is_frozen_water};
pub use temperature::Celsius;
