use crate::models::RunGrouperConfig;

/// Compatibility grouping behavior: run-boundary records are dropped and the
/// trailing run is never flushed. This matches the historical output format
/// consumed downstream; see `LOSSLESS_RUN_GROUPER_CONFIG` for the variant
/// that keeps every record.
pub const DEFAULT_RUN_GROUPER_CONFIG: &RunGrouperConfig = &RunGrouperConfig {
    capture_run_boundaries: false,
    flush_trailing_run: false,
};

/// Grouping behavior in which every record lands in its own run's group and
/// the trailing run is flushed at end of input.
pub const LOSSLESS_RUN_GROUPER_CONFIG: &RunGrouperConfig = &RunGrouperConfig {
    capture_run_boundaries: true,
    flush_trailing_run: true,
};
