//! Router core structure
//!
//! The central orchestrator: owns the adapter registry, the active selection
//! strategy, and one circuit breaker per registered adapter.

use arc_swap::ArcSwap;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::breaker::{BreakerSnapshot, BreakerState};
use super::config::RouterConfig;
use super::strategy::{AdapterRegistry, CostOptimized, SelectionStrategy};
use crate::core::traits::CompletionAdapter;
use crate::core::types::{
    CompletionRequest, CompletionResponse, CompletionStream, RoutingContext,
};
use crate::utils::error::{GatewayError, Result};

/// Multi-provider completion router.
///
/// `complete` is the breaker-protected path: select, gate on the chosen
/// adapter's breaker, dispatch once, record the outcome. `stream` selects
/// and dispatches directly, with no breaker accounting at all in either
/// direction. The router never retries a failed call and never
/// substitutes a different adapter when the selected one is unavailable;
/// recovery is the caller's decision, informed by the distinct error kinds.
///
/// The registry and breaker table are mutated exclusively by the router's
/// own methods, never by strategies or adapters.
pub struct Router {
    adapters: AdapterRegistry,
    breakers: DashMap<String, BreakerState>,
    strategy: ArcSwap<Box<dyn SelectionStrategy>>,
    config: RouterConfig,
}

impl Router {
    /// Create a router with the given configuration and the cost-optimized
    /// strategy active.
    pub fn new(config: RouterConfig) -> Self {
        Self {
            adapters: DashMap::new(),
            breakers: DashMap::new(),
            strategy: ArcSwap::from_pointee(Box::new(CostOptimized) as Box<dyn SelectionStrategy>),
            config,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Register an adapter under its name.
    ///
    /// Last write wins: re-registering an existing name replaces the prior
    /// adapter. The breaker entry is created only if none exists yet, so
    /// re-registration (hot reload of credentials, say) does not erase
    /// accumulated failure history.
    pub fn register_adapter(&self, adapter: Arc<dyn CompletionAdapter>) {
        let name = adapter.name().to_string();
        if self.adapters.insert(name.clone(), adapter).is_some() {
            debug!(adapter = %name, "replaced existing adapter registration");
        }
        self.breakers.entry(name.clone()).or_default();
        info!(adapter = %name, "registered adapter");
    }

    /// Swap the active selection strategy at runtime.
    ///
    /// There is no synchronization guard: a selection already in flight when
    /// the swap lands was made by the previous strategy.
    pub fn set_strategy(&self, strategy: Box<dyn SelectionStrategy>) {
        info!(strategy = strategy.name(), "routing strategy changed");
        self.strategy.store(Arc::new(strategy));
    }

    /// Names of all registered adapters.
    pub fn list_adapters(&self) -> Vec<String> {
        self.adapters.iter().map(|e| e.key().clone()).collect()
    }

    /// Current breaker state for one adapter, if registered.
    pub fn breaker_snapshot(&self, name: &str) -> Option<BreakerSnapshot> {
        self.breakers.get(name).map(|b| b.snapshot())
    }

    /// Route a request to a single completion.
    ///
    /// Select → breaker gate → one dispatch → breaker update. The defaulted
    /// `request.model` is visible to the caller afterwards. Adapter failures
    /// propagate unchanged after the breaker bookkeeping runs.
    pub async fn complete(
        &self,
        request: &mut CompletionRequest,
        context: &RoutingContext,
    ) -> Result<CompletionResponse> {
        let strategy = self.strategy.load();
        let adapter = strategy.select_adapter(&self.adapters, request, context)?;
        let name = adapter.name().to_string();

        self.check_breaker(&name)?;

        debug!(adapter = %name, request_id = %context.request_id, "dispatching completion");
        match adapter.complete(request).await {
            Ok(response) => {
                self.record_success(&name);
                Ok(response)
            }
            Err(err) => {
                self.record_failure(&name);
                Err(err)
            }
        }
    }

    /// Route a request to a live chunk stream.
    ///
    /// The stream path bypasses the breaker entirely: it neither consults
    /// nor updates breaker state, even for an adapter whose breaker is open.
    /// Selection failures still surface before any chunk is produced.
    pub async fn stream(
        &self,
        request: &mut CompletionRequest,
        context: &RoutingContext,
    ) -> Result<CompletionStream> {
        let strategy = self.strategy.load();
        let adapter = strategy.select_adapter(&self.adapters, request, context)?;

        debug!(
            adapter = adapter.name(),
            request_id = %context.request_id,
            "dispatching streaming completion"
        );
        adapter.stream(request).await
    }

    fn check_breaker(&self, name: &str) -> Result<()> {
        let mut breaker = self.breakers.entry(name.to_string()).or_default();
        if breaker.allow_request(name, self.config.cooldown) {
            Ok(())
        } else {
            Err(GatewayError::CircuitBreakerOpen(name.to_string()))
        }
    }

    fn record_success(&self, name: &str) {
        if let Some(mut breaker) = self.breakers.get_mut(name) {
            breaker.record_success(name);
        }
    }

    fn record_failure(&self, name: &str) {
        if let Some(mut breaker) = self.breakers.get_mut(name) {
            breaker.record_failure(name, self.config.failure_threshold);
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("adapters", &self.list_adapters())
            .field("strategy", &self.strategy.load().name())
            .field("config", &self.config)
            .finish()
    }
}
