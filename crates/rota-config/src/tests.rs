//! Tests for scheduler configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = SchedulerConfig::default();
    assert_eq!(config.keep_top_count, 10);
    assert!(config.respect_leave_schedule);
    assert!(config.is_unbounded());
    assert_eq!(config.heuristics.inconvenience_equality_weight, 50.0);
    assert_eq!(config.heuristics.proximity_preference, ProximityPreference::Spread);
    assert!(config.rules.minimum_rest.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        keep_top_count = 3
        respect_leave_schedule = false

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500
        unimproved_step_count_limit = 1000

        [rules]
        max_interval_between_shifts_days = 10

        [[rules.minimum_rest]]
        inconvenience_less_or_equal_than = 50.0
        minimum_rest_minutes = 480

        [[rules.minimum_rest]]
        inconvenience_less_or_equal_than = 100.0
        minimum_rest_minutes = 660

        [rules.minimum_shifts_per_week]
        min_shifts = 2
        week_start_offset_days = 3

        [rules.first_shift_after_extended_leave]
        minimum_continuous_days = 14
        applicable_leave_types = ["vacation"]

        [search]
        mutation_rate = 0.25
    "#;

    let config = SchedulerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.keep_top_count, 3);
    assert!(!config.respect_leave_schedule);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
    assert!(!config.is_unbounded());
    assert_eq!(config.rules.minimum_rest.len(), 2);
    assert_eq!(config.rules.minimum_rest[1].minimum_rest_minutes, 660);
    assert_eq!(config.rules.max_interval_between_shifts_days, Some(10));
    assert_eq!(
        config.rules.minimum_shifts_per_week,
        Some(WeeklyMinimumRule::new(2).with_week_start_offset(3))
    );
    let extended = config.rules.first_shift_after_extended_leave.unwrap();
    assert!(extended.applies_to("vacation"));
    assert!(!extended.applies_to("training"));
    assert_eq!(config.search.mutation_rate, 0.25);
    assert_eq!(config.search.mutation_size, 2);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        termination:
          step_count_limit: 500
        heuristics:
          slot_proximity_weight: 0
          proximity_preference: cluster
    "#;

    let config = SchedulerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.termination.unwrap().step_count_limit, Some(500));
    assert_eq!(config.heuristics.slot_proximity_weight, 0.0);
    assert_eq!(config.heuristics.slot_equality_weight, 50.0);
    assert_eq!(config.heuristics.proximity_preference, ProximityPreference::Cluster);
}

#[test]
fn test_builder() {
    let config = SchedulerConfig::new()
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_step_count_limit(10)
        .with_rest_tier(50.0, 480)
        .with_keep_top_count(4);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    let termination = config.termination.as_ref().unwrap();
    assert_eq!(termination.step_count_limit, Some(10));
    assert_eq!(config.rules.minimum_rest[0].minimum_rest_minutes, 480);
    assert_eq!(config.keep_top_count, 4);
}

#[test]
fn test_validate_rejects_zero_pool() {
    let err = SchedulerConfig::new().with_keep_top_count(0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("keep_top_count")));
}

#[test]
fn test_validate_rejects_negative_weight() {
    let heuristics = HeuristicsConfig {
        slot_equality_weight: -1.0,
        ..HeuristicsConfig::default()
    };
    let err = SchedulerConfig::new()
        .with_heuristics(heuristics)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("slot_equality_weight")));
}

#[test]
fn test_validate_rejects_negative_rest() {
    let err = SchedulerConfig::new()
        .with_rest_tier(10.0, -5)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("minimum_rest_minutes")));
}

#[test]
fn test_validate_rejects_bad_mutation_rate() {
    let search = SearchConfig {
        mutation_rate: 1.5,
        ..SearchConfig::default()
    };
    assert!(SchedulerConfig::new().with_search(search).validate().is_err());
}

#[test]
fn test_time_limit_saturates() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(u64::MAX / 1000),
        millis_spent_limit: Some(u64::MAX),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_millis(u64::MAX)));

    let termination = TerminationConfig {
        seconds_spent_limit: Some(2),
        millis_spent_limit: Some(500),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_millis(2500)));
}

#[test]
fn test_invalid_toml_is_error() {
    let err = SchedulerConfig::from_toml_str("keep_top_count = \"many\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_config_error_converts_to_rota_error() {
    let err: RotaError = ConfigError::Invalid("bad".into()).into();
    assert!(matches!(err, RotaError::Config(msg) if msg.contains("bad")));
}
