//! Router unit tests

mod breaker_tests;
mod stream_tests;
