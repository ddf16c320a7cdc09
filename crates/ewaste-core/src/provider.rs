//! Completion provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ChatMessage;

/// A text-completion backend reachable over the network
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the request and return the raw assistant text
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}

/// A single chat completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    /// Ask the provider for a JSON object instead of free text
    pub json_mode: bool,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: 0.7,
            json_mode: false,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn json(mut self) -> Self {
        self.json_mode = true;
        self
    }
}
