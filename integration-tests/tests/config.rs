use indexstat_core::cli::analyze::analyze;
use indexstat_core::conf::resolve_config;
use indexstat_core::records::MalformedPolicy;
use integration_tests::harness::{fixture_path, fixtures_root, init_test_tracing};
use pretty_assertions::assert_eq;

#[test]
fn skip_config_drops_truncated_line() {
    // Arrange
    init_test_tracing();
    let config = resolve_config(
        &fixtures_root(),
        Some(fixture_path("skip.toml").as_path()),
        None,
    )
    .unwrap();

    // Act
    let report = analyze(&config).unwrap();

    // Assert
    assert_eq!(config.on_malformed, MalformedPolicy::Skip);
    assert_eq!(config.input, fixture_path("with_truncated_line.log"));
    assert_eq!(report.sample_count, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.histogram.count(1), 1);
    assert_eq!(report.histogram.count(2), 1);
    assert_eq!(report.histogram.count(6), 1);
}

#[test]
fn input_argument_wins_over_config() {
    init_test_tracing();

    let config = resolve_config(
        &fixtures_root(),
        Some(fixture_path("skip.toml").as_path()),
        Some(fixture_path("all_partitions.log")),
    )
    .unwrap();
    let report = analyze(&config).unwrap();

    assert_eq!(report.sample_count, 203);
    assert_eq!(report.skipped, 0);
}
