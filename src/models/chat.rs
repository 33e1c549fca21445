use crate::entities::chat_message_entity as chat_messages;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    #[schema(example = "Como controlar ferrugem na soja?")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageResponse {
    pub id: i64,
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<chat_messages::Model> for ChatMessageResponse {
    fn from(msg: chat_messages::Model) -> Self {
        Self {
            id: msg.id,
            role: msg.role,
            content: msg.content,
            created_at: msg.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageResponse {
    pub reply: ChatMessageResponse,
    pub consultations_used: i64,
    pub consultation_limit: Option<i64>,
}
