// src/application/ports/assistant.rs
use async_trait::async_trait;
use thiserror::Error;

/// Why a generation attempt produced no text.
///
/// `Disabled` is a configuration state, not a fault: the implementation must
/// detect it before any network traffic. The service layer maps each variant
/// to a fixed user-facing message, so nothing here ever reaches a caller raw.
#[derive(Debug, Error)]
pub enum TextGenerationError {
    #[error("text generation is disabled: no usable credential configured")]
    Disabled,
    #[error("transport failure talking to the text generation service: {0}")]
    Transport(String),
    #[error("text generation service rejected the request: {0}")]
    Api(String),
}

/// Outbound bridge to a hosted generative-text model.
///
/// One prompt in, at most one text out. `Ok(None)` means the call succeeded
/// but the reply carried no text payload.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, TextGenerationError>;
}
