//! Case counts for property tests
//!
//! `PROPTEST_CASES` raises or lowers the count everywhere at once, e.g. a
//! nightly job can export `PROPTEST_CASES=5000`.
//!
//! ```rust,ignore
//! proptest! {
//!     #![proptest_config(seekbug_testing::proptest_config::standard())]
//!     #[test]
//!     fn holds(x in 0..10u8) { /* ... */ }
//! }
//! ```

use proptest::test_runner::Config;

const DEFAULT_CASES: u32 = 64;

/// Per-crate default, overridable through `PROPTEST_CASES`
pub fn standard() -> Config {
    with_cases(cases_from_env().unwrap_or(DEFAULT_CASES))
}

/// A fixed case count with bounded shrinking
pub fn with_cases(cases: u32) -> Config {
    Config {
        cases,
        max_shrink_iters: 256,
        ..Config::default()
    }
}

fn cases_from_env() -> Option<u32> {
    std::env::var("PROPTEST_CASES").ok()?.trim().parse().ok()
}
