use indexstat_core::conf::AnalysisConfig;
use std::path::PathBuf;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn fixture_path(file: &str) -> PathBuf {
    fixtures_root().join(file)
}

/// Default config pointed at a fixture log.
pub fn config_for(file: &str) -> AnalysisConfig {
    AnalysisConfig {
        input: fixture_path(file),
        ..AnalysisConfig::default()
    }
}
