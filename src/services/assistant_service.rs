use crate::database::DbPool;
use crate::entities::chat_message_entity as chat_messages;
use crate::error::{AppError, AppResult};
use crate::external::AssistantClient;
use crate::external::assistant::ProviderMessage;
use crate::models::*;
use crate::services::{UsageService, UserService};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

/// Context window sent to the provider, in messages.
const HISTORY_WINDOW: u64 = 10;

#[derive(Clone)]
pub struct AssistantService {
    pool: DbPool,
    client: AssistantClient,
    user_service: UserService,
    usage_service: UsageService,
}

impl AssistantService {
    pub fn new(
        pool: DbPool,
        client: AssistantClient,
        user_service: UserService,
        usage_service: UsageService,
    ) -> Self {
        Self {
            pool,
            client,
            user_service,
            usage_service,
        }
    }

    /// One consultation turn. The quota check runs before the provider call;
    /// the counter only moves after a successful reply, so failures do not
    /// consume quota.
    pub async fn send_message(
        &self,
        user_id: i64,
        request: SendMessageRequest,
    ) -> AppResult<SendMessageResponse> {
        let content = request.content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::ValidationError(
                "A mensagem não pode estar vazia".to_string(),
            ));
        }
        if content.len() > 4000 {
            return Err(AppError::ValidationError(
                "A mensagem excede o limite de 4000 caracteres".to_string(),
            ));
        }

        let user = self.user_service.find_active_user(user_id).await?;
        let used = self
            .usage_service
            .current_month(user_id)
            .await?
            .map(|row| row.ai_consultations)
            .unwrap_or(0);
        if !user.plan.has_consultations_remaining(used) {
            return Err(AppError::QuotaExceeded(
                "Limite mensal de consultas ao Dr. Agro atingido. Faça upgrade do seu plano."
                    .to_string(),
            ));
        }

        let mut history: Vec<ProviderMessage> = chat_messages::Entity::find()
            .filter(chat_messages::Column::UserId.eq(user_id))
            .order_by_desc(chat_messages::Column::CreatedAt)
            .limit(HISTORY_WINDOW)
            .all(&self.pool)
            .await?
            .into_iter()
            .rev()
            .map(|msg| ProviderMessage {
                role: msg.role,
                content: msg.content,
            })
            .collect();
        history.push(ProviderMessage {
            role: "user".to_string(),
            content: content.clone(),
        });

        let reply_text = self.client.chat(history).await?;

        chat_messages::ActiveModel {
            user_id: Set(user_id),
            role: Set("user".to_string()),
            content: Set(content),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        let reply = chat_messages::ActiveModel {
            user_id: Set(user_id),
            role: Set("assistant".to_string()),
            content: Set(reply_text),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        let usage = self.usage_service.increment_consultations(user_id).await?;

        Ok(SendMessageResponse {
            reply: ChatMessageResponse::from(reply),
            consultations_used: usage.ai_consultations,
            consultation_limit: user.plan.consultation_limit(),
        })
    }

    pub async fn history(
        &self,
        user_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ChatMessageResponse>> {
        let total = chat_messages::Entity::find()
            .filter(chat_messages::Column::UserId.eq(user_id))
            .count(&self.pool)
            .await? as i64;

        let models = chat_messages::Entity::find()
            .filter(chat_messages::Column::UserId.eq(user_id))
            .order_by_desc(chat_messages::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<ChatMessageResponse> =
            models.into_iter().map(ChatMessageResponse::from).collect();

        Ok(PaginatedResponse::new(items, params, total))
    }
}
