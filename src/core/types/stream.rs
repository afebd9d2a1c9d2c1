//! Streaming completion types

use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::utils::error::GatewayError;

/// One unit of a live completion sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Partial content for this step
    pub content: String,
    /// Set on the terminal chunk of the sequence
    #[serde(default)]
    pub done: bool,
}

impl StreamChunk {
    /// A content-bearing chunk in the middle of the sequence.
    pub fn delta(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    /// The terminal chunk.
    pub fn finished() -> Self {
        Self {
            content: String::new(),
            done: true,
        }
    }
}

/// A lazy, finite, non-restartable sequence of chunks.
///
/// An abandoned consumer simply stops polling; no resource-release hook
/// exists at this layer.
pub type CompletionStream = BoxStream<'static, Result<StreamChunk, GatewayError>>;
