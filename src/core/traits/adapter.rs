//! Unified completion adapter interface

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::types::{CompletionRequest, CompletionResponse, CompletionStream};
use crate::utils::error::Result;

/// Uniform interface every completion provider adapter implements.
///
/// Adapters own their network I/O, authentication, and timeout handling;
/// the router only ever sees the contract types. Failures an adapter raises
/// from [`complete`](CompletionAdapter::complete) or
/// [`stream`](CompletionAdapter::stream) are propagated to the caller
/// unchanged; the router never reclassifies, wraps, or suppresses them.
#[async_trait]
pub trait CompletionAdapter: Send + Sync + Debug + 'static {
    /// Stable name used as the registry and circuit-breaker key.
    ///
    /// Must be unique across the router; registering a second adapter under
    /// the same name replaces the first.
    fn name(&self) -> &str;

    /// Produce a single completion for the request.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;

    /// Produce a finite stream of partial chunks for the request.
    ///
    /// May fail before yielding any chunk (for example on connection setup);
    /// once a stream is returned, errors travel inside it.
    async fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream>;
}
