//! Per-adapter circuit breaker state machine

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Circuit breaker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Requests flow normally
    Closed,
    /// Requests are rejected until the cooldown window elapses
    Open,
    /// A trial request is allowed through to probe recovery
    HalfOpen,
}

impl std::fmt::Display for CircuitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircuitState::Closed => write!(f, "closed"),
            CircuitState::Open => write!(f, "open"),
            CircuitState::HalfOpen => write!(f, "half-open"),
        }
    }
}

/// Point-in-time view of one adapter's breaker, for tests and operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerSnapshot {
    pub state: CircuitState,
    pub failures: u32,
}

/// Resilience bookkeeping for one adapter.
///
/// Created at registration with zero failures in the closed state, and kept
/// for the lifetime of the router. Mutated only after a dispatch attempt
/// completes, so overlapping in-flight calls can all be dispatched before
/// any of them lands a failure. The breaker trades strict burst protection
/// for a lock-free hot path.
#[derive(Debug)]
pub struct BreakerState {
    failures: u32,
    last_failure: Option<Instant>,
    state: CircuitState,
}

impl Default for BreakerState {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakerState {
    pub fn new() -> Self {
        Self {
            failures: 0,
            last_failure: None,
            state: CircuitState::Closed,
        }
    }

    pub fn state(&self) -> CircuitState {
        self.state
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn last_failure(&self) -> Option<Instant> {
        self.last_failure
    }

    pub fn snapshot(&self) -> BreakerSnapshot {
        BreakerSnapshot {
            state: self.state,
            failures: self.failures,
        }
    }

    /// Gate a dispatch attempt.
    ///
    /// Returns `false` while the breaker is open and still inside its
    /// cooldown window. Once the window has elapsed the breaker flips to
    /// half-open and the current call goes through as the trial. Half-open
    /// does not limit how many trials run concurrently.
    pub fn allow_request(&mut self, name: &str, cooldown: Duration) -> bool {
        match self.state {
            CircuitState::Closed | CircuitState::HalfOpen => true,
            CircuitState::Open => {
                let elapsed = self
                    .last_failure
                    .map(|at| at.elapsed())
                    .unwrap_or(cooldown);
                if elapsed < cooldown {
                    false
                } else {
                    debug!(adapter = name, "circuit breaker entering half-open");
                    self.state = CircuitState::HalfOpen;
                    true
                }
            }
        }
    }

    /// Record a successful dispatch: the failure count resets and the
    /// breaker closes.
    pub fn record_success(&mut self, name: &str) {
        if self.state == CircuitState::HalfOpen {
            debug!(adapter = name, "circuit breaker closed after successful trial");
        }
        self.failures = 0;
        self.state = CircuitState::Closed;
    }

    /// Record a failed dispatch.
    ///
    /// Opens the breaker once the consecutive-failure count reaches the
    /// threshold. A half-open failure lands here with the count already at
    /// or above the threshold, so the same rule re-opens the breaker.
    pub fn record_failure(&mut self, name: &str, threshold: u32) {
        self.failures += 1;
        self.last_failure = Some(Instant::now());
        if self.failures >= threshold && self.state != CircuitState::Open {
            warn!(
                adapter = name,
                failures = self.failures,
                "circuit breaker opened"
            );
            self.state = CircuitState::Open;
        }
    }
}
