//! # completion-router
//!
//! A multi-provider completion router. Callers hand the [`Router`] a
//! completion request; a pluggable [`SelectionStrategy`] decides which
//! registered [`CompletionAdapter`] should serve it, and the dispatch is
//! guarded by an independent per-adapter circuit breaker.
//!
//! ## Features
//!
//! - **Unified contract**: every adapter speaks the same request/response
//!   shapes, so callers never deal with provider-specific formats
//! - **Pluggable strategies**: cost-, latency-, and quality-optimized stock
//!   policies, swappable at runtime
//! - **Failure isolation**: a three-state circuit breaker per adapter stops
//!   hammering a failing provider for a cooldown window
//! - **Streaming support**: live chunk sequences passed through unchanged
//!
//! ## Quick Start
//!
//! ```ignore
//! use completion_router::{Router, RouterConfig, RoutingContext};
//! use completion_router::{CompletionRequest, user_message};
//!
//! let router = Router::new(RouterConfig::default());
//! router.register_adapter(my_openai_adapter);
//!
//! let mut request = CompletionRequest::new(vec![user_message("Hello!")]);
//! let context = RoutingContext::new().with_user_id("alice");
//!
//! let response = router.complete(&mut request, &context).await?;
//! println!("{}", response.content);
//! ```
//!
//! The router never retries or falls back on its own: one `complete` call is
//! exactly one dispatch attempt, and every failure surfaces to the caller
//! with a distinct error kind so recovery stays a caller decision.

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod core;
pub mod utils;

// Re-export main types
pub use core::router::{
    BreakerSnapshot, CircuitState, CostOptimized, LatencyOptimized, QualityOptimized, Router,
    RouterConfig, SelectionStrategy,
};
pub use core::traits::CompletionAdapter;
pub use core::types::{
    assistant_message, system_message, user_message, ChatMessage, CompletionRequest,
    CompletionResponse, CompletionStream, FinishReason, MessageRole, RoutingContext, StreamChunk,
    Usage,
};
pub use utils::error::{GatewayError, Result};
