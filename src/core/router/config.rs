//! Router configuration types

use std::time::Duration;

/// Router configuration
///
/// ## Defaults
///
/// - `failure_threshold`: 5 (consecutive failures before a breaker opens)
/// - `cooldown`: 60 000 ms (rejection window after the last failure)
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Consecutive failures before an adapter's breaker opens
    pub failure_threshold: u32,

    /// How long an open breaker rejects calls after the last failure
    pub cooldown: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            cooldown: Duration::from_millis(60_000),
        }
    }
}
