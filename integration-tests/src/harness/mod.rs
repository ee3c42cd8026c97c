mod fixtures;
pub mod tracing;

pub use fixtures::{config_for, fixture_path, fixtures_root};
pub use tracing::init_test_tracing;
