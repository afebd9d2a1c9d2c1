//! Selection strategies for adapter routing

use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::core::traits::CompletionAdapter;
use crate::core::types::{CompletionRequest, RoutingContext};
use crate::utils::error::{GatewayError, Result};

/// Registry of adapters keyed by their stable name.
pub type AdapterRegistry = DashMap<String, Arc<dyn CompletionAdapter>>;

/// Default model for the cost-optimized policy
pub const DEFAULT_COST_MODEL: &str = "gpt-4o-mini";
/// Default model for the latency-optimized policy
pub const DEFAULT_LATENCY_MODEL: &str = "llama-3.1-8b-instant";
/// Default model for the quality-optimized policy
pub const DEFAULT_QUALITY_MODEL: &str = "claude-3-5-sonnet-20241022";

/// A pluggable policy that picks exactly one adapter for a request.
///
/// Strategies see the full registry plus the caller-supplied
/// [`RoutingContext`], must return one registered adapter or fail with
/// [`GatewayError::NoSuitableAdapter`], and never touch breaker state.
///
/// When `request.model` is unset, a strategy fills in its default model
/// identifier **in place**; that mutation is visible to the caller after the
/// routing call returns and is an intentional part of the contract. An
/// explicitly set model is left untouched.
pub trait SelectionStrategy: Send + Sync {
    /// Policy name, used for logging.
    fn name(&self) -> &'static str;

    /// Pick exactly one adapter from the registry.
    fn select_adapter(
        &self,
        adapters: &AdapterRegistry,
        request: &mut CompletionRequest,
        context: &RoutingContext,
    ) -> Result<Arc<dyn CompletionAdapter>>;
}

fn require_adapter(
    adapters: &AdapterRegistry,
    name: &str,
) -> Result<Arc<dyn CompletionAdapter>> {
    adapters
        .get(name)
        .map(|entry| Arc::clone(entry.value()))
        .ok_or_else(|| {
            GatewayError::NoSuitableAdapter(format!("adapter '{name}' is not registered"))
        })
}

fn default_model(request: &mut CompletionRequest, model: &str) {
    if request.model.is_none() {
        request.model = Some(model.to_string());
    }
}

// The stock policies are each bound to one literal adapter name rather than
// generalizing over capability tags. Custom strategies that select by
// declared cost/latency/quality classes can be plugged in through
// `Router::set_strategy` without touching the stock ones.

/// Cheapest capable adapter first. Requires the adapter named `openai`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostOptimized;

impl SelectionStrategy for CostOptimized {
    fn name(&self) -> &'static str {
        "cost-optimized"
    }

    fn select_adapter(
        &self,
        adapters: &AdapterRegistry,
        request: &mut CompletionRequest,
        _context: &RoutingContext,
    ) -> Result<Arc<dyn CompletionAdapter>> {
        default_model(request, DEFAULT_COST_MODEL);
        debug!(strategy = self.name(), model = ?request.model, "selecting adapter");
        require_adapter(adapters, "openai")
    }
}

/// Fastest adapter first. Requires the adapter named `groq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatencyOptimized;

impl SelectionStrategy for LatencyOptimized {
    fn name(&self) -> &'static str {
        "latency-optimized"
    }

    fn select_adapter(
        &self,
        adapters: &AdapterRegistry,
        request: &mut CompletionRequest,
        _context: &RoutingContext,
    ) -> Result<Arc<dyn CompletionAdapter>> {
        default_model(request, DEFAULT_LATENCY_MODEL);
        debug!(strategy = self.name(), model = ?request.model, "selecting adapter");
        require_adapter(adapters, "groq")
    }
}

/// Highest-quality adapter first. Requires the adapter named `anthropic`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityOptimized;

impl SelectionStrategy for QualityOptimized {
    fn name(&self) -> &'static str {
        "quality-optimized"
    }

    fn select_adapter(
        &self,
        adapters: &AdapterRegistry,
        request: &mut CompletionRequest,
        _context: &RoutingContext,
    ) -> Result<Arc<dyn CompletionAdapter>> {
        default_model(request, DEFAULT_QUALITY_MODEL);
        debug!(strategy = self.name(), model = ?request.model, "selecting adapter");
        require_adapter(adapters, "anthropic")
    }
}
