use dah_core::config::*;
use dah_core::errors::{ConfigError, DahError, FactorError};
use dah_core::{CombinePolicy, FactorDef};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = DahConfig::from_toml("").unwrap();

    assert!(config.factors.is_empty());
    assert_eq!(config.combine.policy, CombinePolicy::StrongestPlusWeighted);
    assert!(!config.engine.reject_duplicate_ids);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_factor_catalog_and_overrides() {
    let toml = r#"
[[factors]]
name = "emotion"
factor_weight = 1.0
subscore_weight = 0.5

[[factors]]
name = "art"
factor_weight = 2.0
subscore_weight = 0.25

[combine]
policy = "rank_decay"

[engine]
reject_duplicate_ids = true
"#;
    let config = DahConfig::from_toml(toml).unwrap();
    assert_eq!(config.factors.len(), 2);
    assert_eq!(config.factors[1], FactorDef::new("art", 2.0, 0.25));
    assert_eq!(config.combine.policy, CombinePolicy::RankDecay);
    assert!(config.engine.reject_duplicate_ids);
    // Non-overridden fields keep defaults
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn invalid_log_level_rejected() {
    let err = DahConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn unknown_policy_is_parse_error() {
    let err = DahConfig::from_toml("[combine]\npolicy = \"average\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn build_context_appends_extension_factors() {
    let config = DahConfig::from_toml(
        "[[factors]]\nname = \"emotion\"\nfactor_weight = 1.0\nsubscore_weight = 0.5\n",
    )
    .unwrap();
    let ctx = config
        .build_context(vec![FactorDef::new("meme", 0.5, 0.4)])
        .unwrap();
    assert_eq!(ctx.factor_count(), 2);
    assert_eq!(ctx.factor("emotion").unwrap().index, 0);
    assert_eq!(ctx.factor("meme").unwrap().index, 1);
}

#[test]
fn build_context_rejects_duplicate_across_sources() {
    let config = DahConfig::from_toml(
        "[[factors]]\nname = \"emotion\"\nfactor_weight = 1.0\nsubscore_weight = 0.5\n",
    )
    .unwrap();
    let err = config
        .build_context(vec![FactorDef::new("emotion", 1.0, 0.5)])
        .unwrap_err();
    assert!(matches!(
        err,
        DahError::Factor(FactorError::DuplicateFactor { .. })
    ));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = DahConfig::default();
    config.factors.push(FactorDef::new("emotion", 1.0, 0.5));
    config.combine.policy = CombinePolicy::RankDecay;
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = DahConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn load_reports_missing_file() {
    let err = DahConfig::load(std::path::Path::new("/nonexistent/dah.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed { .. }));
}
