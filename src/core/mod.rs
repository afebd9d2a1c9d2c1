//! Core routing infrastructure
//!
//! - `types` - shared completion contract (requests, responses, chunks)
//! - `traits` - the adapter seam every provider implements
//! - `router` - strategy-driven routing with per-adapter circuit breakers

pub mod router;
pub mod traits;
pub mod types;
