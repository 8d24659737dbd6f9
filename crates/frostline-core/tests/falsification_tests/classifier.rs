//! Falsification Tests: Category B - Checked Classification (F020-F039)

use frostline_core::{
    Classifier, ClassifierConfig, FrostError, NonFinitePolicy, WaterPhase, is_frozen_water,
};

const POLICIES: [NonFinitePolicy; 3] = [
    NonFinitePolicy::Classify,
    NonFinitePolicy::RejectNan,
    NonFinitePolicy::RejectNonFinite,
];

/// F020: Finite readings are never rejected
///
/// # Falsification Attempt
/// Run the observed readings through every policy.
#[test]
fn f020_finite_never_rejected() {
    for policy in POLICIES {
        let classifier = Classifier::with_policy(policy);
        for t in [-15.0, 0.0, 15.0] {
            let result = classifier.is_frozen(t);
            assert!(result.is_ok(), "F020 FALSIFIED: {policy:?} rejected {t}");
            assert_eq!(result.unwrap(), is_frozen_water(t));
        }
    }
}

/// F021: The default policy rejects NaN
#[test]
fn f021_default_rejects_nan() {
    let result = Classifier::default().check(f64::NAN);
    assert!(
        matches!(result, Err(FrostError::NotANumber)),
        "F021 FALSIFIED: NaN accepted by default"
    );
}

/// F022: RejectNonFinite reports the infinite value
#[test]
fn f022_infinity_reported() {
    let classifier = Classifier::with_policy(NonFinitePolicy::RejectNonFinite);
    match classifier.check(f64::NEG_INFINITY) {
        Err(FrostError::Infinite { value }) => {
            assert_eq!(value, f64::NEG_INFINITY, "F022 FALSIFIED: wrong value");
        }
        other => panic!("F022 FALSIFIED: expected Infinite, got {other:?}"),
    }
}

/// F023: Classify policy reproduces the plain predicate on non-finite input
#[test]
fn f023_classify_policy_is_plain_predicate() {
    let classifier = Classifier::with_policy(NonFinitePolicy::Classify);
    assert_eq!(classifier.check(f64::NAN).unwrap(), WaterPhase::Liquid);
    assert_eq!(classifier.check(f64::INFINITY).unwrap(), WaterPhase::Liquid);
    assert_eq!(classifier.check(f64::NEG_INFINITY).unwrap(), WaterPhase::Frozen);
}

/// F024: A TOML configuration drives the classifier
#[test]
fn f024_toml_config() {
    let config = ClassifierConfig::from_toml_str("non_finite = \"reject-non-finite\"").unwrap();
    let classifier = Classifier::new(config);
    assert!(
        classifier.check(f64::INFINITY).unwrap_err().is_non_finite(),
        "F024 FALSIFIED: config policy ignored"
    );
}

/// F025: The freezing threshold cannot be configured
#[test]
fn f025_threshold_not_configurable() {
    let result = ClassifierConfig::from_toml_str("freezing_point = 4.0");
    assert!(
        matches!(result, Err(FrostError::Config(_))),
        "F025 FALSIFIED: threshold key accepted"
    );
}
