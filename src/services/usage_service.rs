use crate::database::DbPool;
use crate::entities::user_usage_entity as user_usage;
use crate::error::AppResult;
use crate::models::usage::month_key;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set,
};

/// Monthly metered-action counters. Rows appear lazily on the first metered
/// action of the month and are only ever incremented.
#[derive(Clone)]
pub struct UsageService {
    pool: DbPool,
}

impl UsageService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_month(
        &self,
        user_id: i64,
        month: &str,
    ) -> AppResult<Option<user_usage::Model>> {
        let row = user_usage::Entity::find()
            .filter(user_usage::Column::UserId.eq(user_id))
            .filter(user_usage::Column::Month.eq(month))
            .one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn current_month(&self, user_id: i64) -> AppResult<Option<user_usage::Model>> {
        self.find_month(user_id, &month_key(Utc::now())).await
    }

    async fn get_or_create(&self, user_id: i64) -> AppResult<user_usage::Model> {
        let month = month_key(Utc::now());
        if let Some(row) = self.find_month(user_id, &month).await? {
            return Ok(row);
        }

        let row = user_usage::ActiveModel {
            user_id: Set(user_id),
            month: Set(month),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn increment_consultations(&self, user_id: i64) -> AppResult<user_usage::Model> {
        let row = self.get_or_create(user_id).await?;
        let next = row.ai_consultations + 1;
        let mut active = row.into_active_model();
        active.ai_consultations = Set(next);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.pool).await?)
    }

    pub async fn increment_events_created(&self, user_id: i64) -> AppResult<user_usage::Model> {
        let row = self.get_or_create(user_id).await?;
        let next = row.events_created + 1;
        let mut active = row.into_active_model();
        active.events_created = Set(next);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.pool).await?)
    }

    pub async fn increment_tracks_completed(&self, user_id: i64) -> AppResult<user_usage::Model> {
        let row = self.get_or_create(user_id).await?;
        let next = row.tracks_completed + 1;
        let mut active = row.into_active_model();
        active.tracks_completed = Set(next);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.pool).await?)
    }

    pub async fn add_video_seconds(
        &self,
        user_id: i64,
        seconds: i64,
    ) -> AppResult<user_usage::Model> {
        let row = self.get_or_create(user_id).await?;
        if seconds <= 0 {
            return Ok(row);
        }
        let next = row.video_seconds + seconds;
        let mut active = row.into_active_model();
        active.video_seconds = Set(next);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.pool).await?)
    }
}
