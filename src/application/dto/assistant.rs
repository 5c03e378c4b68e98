use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Assistant output. Always populated: failure paths resolve to fixed
/// informational text, never to an error payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssistantReplyDto {
    pub reply: String,
}

impl AssistantReplyDto {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
