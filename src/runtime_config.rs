//! # Runtime Configuration Module
//!
//! Options that change how a [`Router`](crate::router::Router) answers
//! requests it cannot match, and how it reports slow lookups.
//!
//! The router reads no files and no environment variables. `RuntimeConfig`
//! derives `serde` traits so a host can embed it in its own configuration:
//!
//! ```rust
//! use rtr::runtime_config::RuntimeConfig;
//!
//! let config: RuntimeConfig =
//!     serde_json::from_str(r#"{ "method_not_allowed": true }"#).unwrap();
//! assert!(config.method_not_allowed);
//! assert_eq!(config.slow_match_threshold_us, 1000);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_SLOW_MATCH_THRESHOLD_US: u64 = 1000;

/// Router runtime options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Answer `405 Method Not Allowed` with an `Allow` header when the path is
    /// registered under other methods only. Off by default: such requests get
    /// the regular 404.
    pub method_not_allowed: bool,
    /// Lookups slower than this many microseconds are logged at `warn`.
    pub slow_match_threshold_us: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            method_not_allowed: false,
            slow_match_threshold_us: DEFAULT_SLOW_MATCH_THRESHOLD_US,
        }
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_method_not_allowed(mut self, enabled: bool) -> Self {
        self.method_not_allowed = enabled;
        self
    }

    #[must_use]
    pub fn with_slow_match_threshold(mut self, threshold: Duration) -> Self {
        self.slow_match_threshold_us = u64::try_from(threshold.as_micros()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn slow_match_threshold(&self) -> Duration {
        Duration::from_micros(self.slow_match_threshold_us)
    }
}
