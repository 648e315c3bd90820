pub mod groq;
pub mod intent;
pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Sampling bounds for a single completion call.
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

impl ChatOptions {
    /// Tight bounds for structured extraction: near-deterministic and short.
    pub fn extraction() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: Some(300),
        }
    }
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(
        &self,
        system_prompt: &str,
        messages: &[Message],
        options: &ChatOptions,
    ) -> anyhow::Result<String>;
}
