//! Frostline Freeze Check Example
//!
//! Classifies each argument as frozen or liquid water.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example freeze_check -- -15 0ºC 15
//!
//! # Reject NaN and infinities, loading the policy from a TOML file
//! FROSTLINE_CONFIG=frostline.toml cargo run --example freeze_check -- inf
//!
//! # Show per-reading trace events
//! RUST_LOG=frostline_core=trace cargo run --example freeze_check -- -0.5
//! ```

use anyhow::Context;
use frostline::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var_os("FROSTLINE_CONFIG") {
        Some(path) => ClassifierConfig::load(&path)
            .with_context(|| format!("loading {}", path.to_string_lossy()))?,
        None => ClassifierConfig::default(),
    };
    let classifier = Classifier::new(config);
    info!(policy = ?config.non_finite(), "classifier ready");

    let readings: Vec<String> = std::env::args().skip(1).collect();
    if readings.is_empty() {
        warn!("no readings given; try: freeze_check -- -15 0 15");
        return Ok(());
    }

    for text in &readings {
        let reading: Celsius = match text.parse() {
            Ok(reading) => reading,
            Err(e) => {
                warn!(input = %text, "skipping: {e}");
                continue;
            }
        };

        match classifier.check(reading.value()) {
            Ok(phase) => println!("{reading}: {phase}"),
            Err(e) => println!("{reading}: rejected ({e})"),
        }
    }

    Ok(())
}
