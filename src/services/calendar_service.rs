use crate::database::DbPool;
use crate::entities::calendar_event_entity as calendar_events;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::UsageService;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct CalendarService {
    pool: DbPool,
    usage_service: UsageService,
}

impl CalendarService {
    pub fn new(pool: DbPool, usage_service: UsageService) -> Self {
        Self {
            pool,
            usage_service,
        }
    }

    fn parse_date(value: &str) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| AppError::ValidationError("Data inválida, use AAAA-MM-DD".to_string()))
    }

    async fn find_owned(
        &self,
        user_id: i64,
        event_id: i64,
    ) -> AppResult<calendar_events::Model> {
        calendar_events::Entity::find_by_id(event_id)
            .filter(calendar_events::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Evento não encontrado".to_string()))
    }

    pub async fn list_events(
        &self,
        user_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<EventResponse>> {
        let total = calendar_events::Entity::find()
            .filter(calendar_events::Column::UserId.eq(user_id))
            .count(&self.pool)
            .await? as i64;

        let models = calendar_events::Entity::find()
            .filter(calendar_events::Column::UserId.eq(user_id))
            .order_by_asc(calendar_events::Column::EventDate)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<EventResponse> = models.into_iter().map(EventResponse::from).collect();

        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn create_event(
        &self,
        user_id: i64,
        request: CreateEventRequest,
    ) -> AppResult<EventResponse> {
        if request.title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "O título é obrigatório".to_string(),
            ));
        }
        let event_date = Self::parse_date(&request.event_date)?;

        let event = calendar_events::ActiveModel {
            user_id: Set(user_id),
            title: Set(request.title.trim().to_string()),
            description: Set(request.description),
            event_type: Set(request.event_type),
            event_date: Set(event_date),
            completed: Set(false),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        self.usage_service.increment_events_created(user_id).await?;

        Ok(EventResponse::from(event))
    }

    pub async fn update_event(
        &self,
        user_id: i64,
        event_id: i64,
        request: UpdateEventRequest,
    ) -> AppResult<EventResponse> {
        let event = self.find_owned(user_id, event_id).await?;

        let mut active = event.into_active_model();
        if let Some(title) = request.title {
            if title.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "O título é obrigatório".to_string(),
                ));
            }
            active.title = Set(title.trim().to_string());
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(event_type) = request.event_type {
            active.event_type = Set(event_type);
        }
        if let Some(date) = request.event_date {
            active.event_date = Set(Self::parse_date(&date)?);
        }
        if let Some(completed) = request.completed {
            active.completed = Set(completed);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.pool).await?;
        Ok(EventResponse::from(updated))
    }

    pub async fn delete_event(&self, user_id: i64, event_id: i64) -> AppResult<()> {
        let event = self.find_owned(user_id, event_id).await?;
        event.delete(&self.pool).await?;
        Ok(())
    }
}
