//! Circuit breaker state machine tests

use std::time::Duration;

use crate::core::router::breaker::{BreakerState, CircuitState};

const THRESHOLD: u32 = 5;
const COOLDOWN: Duration = Duration::from_millis(60_000);

#[test]
fn test_new_breaker_is_closed() {
    let breaker = BreakerState::new();
    assert_eq!(breaker.state(), CircuitState::Closed);
    assert_eq!(breaker.failures(), 0);
    assert!(breaker.last_failure().is_none());
}

#[test]
fn test_stays_closed_below_threshold() {
    let mut breaker = BreakerState::new();
    for _ in 0..4 {
        breaker.record_failure("test", THRESHOLD);
    }
    assert_eq!(breaker.state(), CircuitState::Closed);
    assert_eq!(breaker.failures(), 4);
    assert!(breaker.allow_request("test", COOLDOWN));
}

#[test]
fn test_opens_at_threshold() {
    let mut breaker = BreakerState::new();
    for _ in 0..5 {
        breaker.record_failure("test", THRESHOLD);
    }
    assert_eq!(breaker.state(), CircuitState::Open);
    assert_eq!(breaker.failures(), 5);
}

#[test]
fn test_open_rejects_within_cooldown() {
    let mut breaker = BreakerState::new();
    for _ in 0..5 {
        breaker.record_failure("test", THRESHOLD);
    }
    assert!(!breaker.allow_request("test", COOLDOWN));
    // Rejection does not disturb the state.
    assert_eq!(breaker.state(), CircuitState::Open);
    assert_eq!(breaker.failures(), 5);
}

#[test]
fn test_open_goes_half_open_after_cooldown() {
    let mut breaker = BreakerState::new();
    for _ in 0..5 {
        breaker.record_failure("test", THRESHOLD);
    }
    // Zero cooldown means the window has already elapsed.
    assert!(breaker.allow_request("test", Duration::ZERO));
    assert_eq!(breaker.state(), CircuitState::HalfOpen);
}

#[test]
fn test_half_open_success_closes_and_resets() {
    let mut breaker = BreakerState::new();
    for _ in 0..5 {
        breaker.record_failure("test", THRESHOLD);
    }
    assert!(breaker.allow_request("test", Duration::ZERO));

    breaker.record_success("test");
    assert_eq!(breaker.state(), CircuitState::Closed);
    assert_eq!(breaker.failures(), 0);
}

#[test]
fn test_half_open_failure_reopens_and_updates_timestamp() {
    let mut breaker = BreakerState::new();
    for _ in 0..5 {
        breaker.record_failure("test", THRESHOLD);
    }
    let opened_at = breaker.last_failure().unwrap();

    assert!(breaker.allow_request("test", Duration::ZERO));
    std::thread::sleep(Duration::from_millis(5));
    breaker.record_failure("test", THRESHOLD);

    assert_eq!(breaker.state(), CircuitState::Open);
    assert!(breaker.failures() >= THRESHOLD);
    assert!(breaker.last_failure().unwrap() > opened_at);
}

#[test]
fn test_success_resets_partial_failure_run() {
    let mut breaker = BreakerState::new();
    breaker.record_failure("test", THRESHOLD);
    breaker.record_failure("test", THRESHOLD);
    breaker.record_success("test");
    assert_eq!(breaker.failures(), 0);

    // Only consecutive failures count toward the threshold.
    for _ in 0..4 {
        breaker.record_failure("test", THRESHOLD);
    }
    assert_eq!(breaker.state(), CircuitState::Closed);
}

#[test]
fn test_state_display() {
    assert_eq!(CircuitState::Closed.to_string(), "closed");
    assert_eq!(CircuitState::Open.to_string(), "open");
    assert_eq!(CircuitState::HalfOpen.to_string(), "half-open");
}
