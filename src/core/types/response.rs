//! Completion response types

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token usage for a completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
}

/// Result of a non-streaming completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Unique response identifier
    pub id: String,
    /// Unix timestamp of creation
    pub created: i64,
    /// Model that actually served the request
    pub model: String,
    /// Generated text
    pub content: String,
    /// Token counts in/out
    pub usage: Usage,
    /// Estimated cost in USD
    pub cost: f64,
    /// End-to-end latency as measured by the adapter
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl CompletionResponse {
    /// Create a response with a fresh id and zeroed accounting fields.
    /// Adapters fill in usage, cost, and latency via the `with_*` builders.
    pub fn new(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: format!("cmpl-{}", Uuid::new_v4()),
            created: Utc::now().timestamp(),
            model: model.into(),
            content: content.into(),
            usage: Usage::default(),
            cost: 0.0,
            latency_ms: 0,
            finish_reason: Some(FinishReason::Stop),
        }
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_finish_reason(mut self, finish_reason: FinishReason) -> Self {
        self.finish_reason = Some(finish_reason);
        self
    }
}
