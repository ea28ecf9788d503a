//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default output format name.
pub const FORMAT: &str = "table";

/// Default watch refresh interval in seconds.
pub const WATCH_INTERVAL_SECS: u64 = 5;

/// File name probed in the user's config directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "ipcfg.toml";

/// Default watch refresh interval as Duration.
#[must_use]
pub const fn watch_interval() -> Duration {
    Duration::from_secs(WATCH_INTERVAL_SECS)
}
