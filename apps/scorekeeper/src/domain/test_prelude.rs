//! Shared settings for domain property tests.

use proptest::test_runner::Config;

/// Case count honours `PROPTEST_CASES`, defaulting to a quick local run.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(128);
    Config {
        cases,
        ..Config::default()
    }
}
