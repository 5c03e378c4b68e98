// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;

use mediagb_core::application::ports::{TextGenerationError, TextGenerator};

/// Always answers with the same text.
pub struct StaticTextGenerator(pub &'static str);

#[async_trait]
impl TextGenerator for StaticTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, TextGenerationError> {
        Ok(Some(self.0.to_string()))
    }
}

/// No credential configured.
pub struct DisabledTextGenerator;

#[async_trait]
impl TextGenerator for DisabledTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, TextGenerationError> {
        Err(TextGenerationError::Disabled)
    }
}

/// Upstream call blows up.
pub struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, TextGenerationError> {
        Err(TextGenerationError::Transport("connection reset".into()))
    }
}

/// Call succeeds but the reply carries no text.
pub struct EmptyTextGenerator;

#[async_trait]
impl TextGenerator for EmptyTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, TextGenerationError> {
        Ok(None)
    }
}

/// Records every prompt it is handed, then answers with a fixed text.
pub struct RecordingTextGenerator {
    pub prompts: Mutex<Vec<String>>,
    reply: &'static str,
}

impl RecordingTextGenerator {
    pub fn new(reply: &'static str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply,
        }
    }
}

#[async_trait]
impl TextGenerator for RecordingTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, TextGenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(Some(self.reply.to_string()))
    }
}
