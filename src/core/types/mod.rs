//! Shared completion contract types
//!
//! These are the data shapes every adapter and every selection strategy
//! agree on. Adapters translate them to and from provider wire formats;
//! nothing in this module knows about any concrete provider.

pub mod context;
pub mod message;
pub mod request;
pub mod response;
pub mod stream;

pub use context::RoutingContext;
pub use message::{assistant_message, system_message, user_message, ChatMessage, MessageRole};
pub use request::CompletionRequest;
pub use response::{CompletionResponse, FinishReason, Usage};
pub use stream::{CompletionStream, StreamChunk};
