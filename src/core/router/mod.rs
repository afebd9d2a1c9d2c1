//! Strategy-driven completion routing with per-adapter circuit breakers
//!
//! ## Module Structure
//!
//! - `config` - router settings (breaker threshold and cooldown)
//! - `breaker` - the three-state circuit breaker kept per adapter
//! - `strategy` - the selection seam and the three stock policies
//! - `router` - the orchestrator owning the registry and breaker table

pub mod breaker;
pub mod config;
pub mod router;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use breaker::{BreakerSnapshot, CircuitState};
pub use config::RouterConfig;
pub use router::Router;
pub use strategy::{
    AdapterRegistry, CostOptimized, LatencyOptimized, QualityOptimized, SelectionStrategy,
};
