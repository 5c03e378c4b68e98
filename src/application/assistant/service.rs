use std::sync::Arc;

use crate::application::assistant::prompts;
use crate::application::ports::{TextGenerationError, TextGenerator};

/// The fixed strings one operation degrades to. Every failure path of the
/// generator maps onto exactly one of these, so callers always receive a
/// displayable reply.
struct FallbackMessages {
    disabled: &'static str,
    failure: &'static str,
    empty: &'static str,
}

const SUMMARY_FALLBACKS: FallbackMessages = FallbackMessages {
    disabled: "O resumo inteligente está indisponível no momento (Chave de API não configurada).",
    failure: "Não foi possível gerar o resumo no momento. Tente novamente mais tarde.",
    empty: "Resumo indisponível.",
};

const QUESTION_FALLBACKS: FallbackMessages = FallbackMessages {
    disabled: "Desculpe, o assistente está offline no momento.",
    failure: "Desculpe, estou com problemas de conexão agora.",
    empty: "Não consegui encontrar uma resposta para isso.",
};

/// Stateless bridge between article text and the generative-text port.
///
/// Both operations are infallible by contract: disabled configuration,
/// transport failures, and empty payloads each resolve to a fixed message
/// instead of an error. Failures are logged here, at the boundary, and go no
/// further.
pub struct AssistantService {
    generator: Arc<dyn TextGenerator>,
}

impl AssistantService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Concise three-point editorial summary of the supplied article text.
    pub async fn summarize(&self, content: &str) -> String {
        let prompt = prompts::summary_prompt(content);
        self.run("summarize", &prompt, &SUMMARY_FALLBACKS).await
    }

    /// Answer a reader's question against the supplied article text.
    pub async fn ask(&self, question: &str, context: &str) -> String {
        let prompt = prompts::question_prompt(question, context);
        self.run("ask", &prompt, &QUESTION_FALLBACKS).await
    }

    async fn run(&self, operation: &str, prompt: &str, fallbacks: &FallbackMessages) -> String {
        match self.generator.generate(prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => fallbacks.empty.to_string(),
            Err(TextGenerationError::Disabled) => {
                tracing::debug!(operation, "assistant disabled, returning fixed message");
                fallbacks.disabled.to_string()
            }
            Err(err) => {
                tracing::error!(operation, error = %err, "text generation failed");
                fallbacks.failure.to_string()
            }
        }
    }
}
