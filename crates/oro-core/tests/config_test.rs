use std::collections::HashMap;
use std::io::Write;

use oro_core::config::*;
use oro_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = OroConfig::from_toml("").unwrap();

    assert_eq!(config.freshness.half_life_days, 30.0);
    assert_eq!(config.freshness.decay_curve, DecayCurve::Exponential);
    assert_eq!(config.freshness.supersession_penalty, 0.3);
    assert_eq!(config.freshness.expired_decay, 0.01);
    assert_eq!(config.freshness.thresholds.fresh, 0.7);
    assert_eq!(config.freshness.thresholds.aging, 0.4);
    assert_eq!(config.chain.max_chain_length, 1000);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[freshness]
half_life_days = 7.0
decay_curve = "hyperbolic"

[freshness.thresholds]
fresh = 0.8

[chain]
max_chain_length = 50
"#;
    let config = OroConfig::from_toml(toml).unwrap();
    assert_eq!(config.freshness.half_life_days, 7.0);
    assert_eq!(config.freshness.decay_curve, DecayCurve::Hyperbolic);
    assert_eq!(config.freshness.thresholds.fresh, 0.8);
    // Non-overridden fields keep defaults
    assert_eq!(config.freshness.thresholds.aging, 0.4);
    assert_eq!(config.freshness.supersession_penalty, 0.3);
    assert_eq!(config.chain.max_chain_length, 50);
}

#[test]
fn config_rejects_invalid_toml() {
    let err = OroConfig::from_toml("[freshness\nhalf_life_days = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_rejects_non_positive_half_life() {
    let err = OroConfig::from_toml("[freshness]\nhalf_life_days = 0.0").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "freshness.half_life_days")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn config_rejects_penalty_outside_open_unit_interval() {
    for penalty in ["0.0", "1.0", "1.5"] {
        let toml = format!("[freshness]\nsupersession_penalty = {penalty}");
        assert!(
            OroConfig::from_toml(&toml).is_err(),
            "penalty {penalty} should be rejected"
        );
    }
}

#[test]
fn config_rejects_overlapping_thresholds() {
    let toml = "[freshness.thresholds]\nfresh = 0.4\naging = 0.6";
    let err = OroConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("freshness.thresholds"));
}

#[test]
fn config_rejects_zero_chain_length() {
    let err = OroConfig::from_toml("[chain]\nmax_chain_length = 0").unwrap_err();
    assert!(err.to_string().contains("chain.max_chain_length"));
}

#[test]
fn env_overrides_take_precedence_and_ignore_garbage() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ORO_HALF_LIFE_DAYS", "14"),
        ("ORO_SUPERSESSION_PENALTY", "not-a-number"),
        ("ORO_MAX_CHAIN_LENGTH", "25"),
        ("ORO_LOG_LEVEL", "debug"),
    ]);
    let mut config = OroConfig::default();
    config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(config.freshness.half_life_days, 14.0);
    assert_eq!(config.freshness.supersession_penalty, 0.3);
    assert_eq!(config.chain.max_chain_length, 25);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[freshness]\nsupersession_penalty = 0.5").unwrap();

    let config = OroConfig::load(file.path()).unwrap();
    // An ORO_SUPERSESSION_PENALTY in the test environment would win; the
    // suite never sets it.
    assert_eq!(config.freshness.supersession_penalty, 0.5);
}

#[test]
fn load_reports_missing_file() {
    let err = OroConfig::load(std::path::Path::new("/definitely/not/here/oro.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_survives_toml_round_trip() {
    let mut config = OroConfig::default();
    config.freshness.decay_curve = DecayCurve::Hyperbolic;
    config.chain.max_chain_length = 12;

    let text = config.to_toml().unwrap();
    assert_eq!(OroConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn from_env_matches_defaults_plus_process_overrides() {
    let mut expected = OroConfig::default();
    expected.apply_env_overrides();
    assert_eq!(OroConfig::from_env().unwrap(), expected);
}

#[test]
fn from_overrides_reports_applied_values() {
    let vars: HashMap<&str, &str> =
        HashMap::from([("ORO_MAX_CHAIN_LENGTH", "40"), ("ORO_HALF_LIFE_DAYS", "x")]);
    let mut config = OroConfig::default();
    let applied = config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(
        applied,
        vec![AppliedOverride {
            var: "ORO_MAX_CHAIN_LENGTH",
            field: "chain.max_chain_length",
            value: "40".into(),
        }]
    );
    let built = OroConfig::from_overrides(|key| vars.get(key).map(|v| v.to_string())).unwrap();
    assert_eq!(built, config);
}

#[test]
fn out_of_range_override_names_the_variable() {
    let err = OroConfig::from_overrides(|key| {
        (key == "ORO_SUPERSESSION_PENALTY").then(|| "1.5".to_string())
    })
    .unwrap_err();

    assert_eq!(
        err,
        ConfigError::OverrideRejected {
            var: "ORO_SUPERSESSION_PENALTY".into(),
            value: "1.5".into(),
            field: "freshness.supersession_penalty".into(),
            message: "must be strictly between 0.0 and 1.0".into(),
        }
    );
    assert!(err.to_string().starts_with("ORO_SUPERSESSION_PENALTY=1.5"));
}

#[test]
fn file_value_failures_stay_plain_validation_errors() {
    let mut config = OroConfig::default();
    config.freshness.half_life_days = -1.0;
    let applied = config.apply_overrides_from(|key| {
        (key == "ORO_MAX_CHAIN_LENGTH").then(|| "10".to_string())
    });

    let err = config.validate_with_overrides(&applied).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "freshness.half_life_days"
    ));
}
