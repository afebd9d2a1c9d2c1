//! Routing context types

use uuid::Uuid;

/// Caller-supplied decision hints, passed through unchanged to the active
/// selection strategy on every call. The router itself never reads them.
#[derive(Debug, Clone)]
pub struct RoutingContext {
    /// Request ID for log correlation
    pub request_id: String,
    /// User identifier
    pub user_id: Option<String>,
    /// Intent tag (e.g. "summarize", "code-review")
    pub intent: Option<String>,
    /// Remaining budget in USD
    pub budget_remaining: Option<f64>,
    /// Latency target in milliseconds
    pub latency_target_ms: Option<u64>,
    /// Quality target between 0.0 and 1.0
    pub quality_target: Option<f32>,
}

impl Default for RoutingContext {
    fn default() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            user_id: None,
            intent: None,
            budget_remaining: None,
            latency_target_ms: None,
            quality_target: None,
        }
    }
}

impl RoutingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    pub fn with_budget_remaining(mut self, budget: f64) -> Self {
        self.budget_remaining = Some(budget);
        self
    }

    pub fn with_latency_target_ms(mut self, target: u64) -> Self {
        self.latency_target_ms = Some(target);
        self
    }

    pub fn with_quality_target(mut self, target: f32) -> Self {
        self.quality_target = Some(target);
        self
    }
}
