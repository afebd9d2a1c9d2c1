//! Completion request type

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// A caller's ask for a model completion.
///
/// `model` is optional on purpose: when it is unset, the active selection
/// strategy fills in its default model identifier **in place** before
/// dispatch. That mutation is an intentional part of the contract: after
/// `Router::complete` or `Router::stream` returns, the caller sees which
/// model the request was resolved to. A model the caller set explicitly is
/// never overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl CompletionRequest {
    /// Create a request for the given messages with every option unset.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Pin the request to a specific model, opting out of strategy defaults.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::message::user_message;

    #[test]
    fn test_request_defaults() {
        let request = CompletionRequest::new(vec![user_message("hi")]);
        assert!(request.model.is_none());
        assert!(request.temperature.is_none());
        assert!(!request.stream);
    }

    #[test]
    fn test_request_serialization_skips_unset_options() {
        let request = CompletionRequest::new(vec![user_message("hi")]).with_max_tokens(64);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("model").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["max_tokens"], 64);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
