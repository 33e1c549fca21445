use crate::database::DbPool;
use crate::entities::{
    track_entity as tracks, video_entity as videos, video_progress_entity as video_progress,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{UsageService, UserService};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct LearningService {
    pool: DbPool,
    user_service: UserService,
    usage_service: UsageService,
}

impl LearningService {
    pub fn new(pool: DbPool, user_service: UserService, usage_service: UsageService) -> Self {
        Self {
            pool,
            user_service,
            usage_service,
        }
    }

    /// Full catalog; locked tracks come back flagged so the client can render
    /// them as locked instead of hiding them.
    pub async fn list_tracks(&self, user_id: i64) -> AppResult<Vec<TrackSummary>> {
        let user = self.user_service.find_active_user(user_id).await?;

        let models = tracks::Entity::find()
            .order_by_asc(tracks::Column::TrackIndex)
            .all(&self.pool)
            .await?;

        Ok(models
            .into_iter()
            .map(|track| {
                let accessible = user.plan.can_access_track(track.track_index);
                TrackSummary::from_model(track, accessible)
            })
            .collect())
    }

    pub async fn get_track(&self, user_id: i64, track_id: i64) -> AppResult<TrackDetailResponse> {
        let user = self.user_service.find_active_user(user_id).await?;

        let track = tracks::Entity::find_by_id(track_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Trilha não encontrada".to_string()))?;

        if !user.plan.can_access_track(track.track_index) {
            return Err(AppError::PlanLimit(
                "Esta trilha não está disponível no seu plano".to_string(),
            ));
        }

        let video_models = videos::Entity::find()
            .filter(videos::Column::TrackId.eq(track.id))
            .order_by_asc(videos::Column::Position)
            .all(&self.pool)
            .await?;

        let video_ids: Vec<i64> = video_models.iter().map(|v| v.id).collect();
        let progress: HashMap<i64, video_progress::Model> = video_progress::Entity::find()
            .filter(video_progress::Column::UserId.eq(user_id))
            .filter(video_progress::Column::VideoId.is_in(video_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|p| (p.video_id, p))
            .collect();

        let videos_with_progress = video_models
            .into_iter()
            .map(|video| {
                let (watched, completed) = progress
                    .get(&video.id)
                    .map(|p| (p.watched_seconds, p.completed))
                    .unwrap_or((0, false));
                VideoWithProgress::from_model(video, watched, completed)
            })
            .collect();

        Ok(TrackDetailResponse {
            id: track.id,
            title: track.title,
            description: track.description,
            track_index: track.track_index,
            videos: videos_with_progress,
        })
    }

    /// Upserts progress for one video. watched_seconds is monotone; the
    /// video-hours counter receives only the delta. Completing the last video
    /// of a track bumps tracks_completed exactly once.
    pub async fn update_progress(
        &self,
        user_id: i64,
        video_id: i64,
        request: UpdateProgressRequest,
    ) -> AppResult<UpdateProgressResponse> {
        if request.watched_seconds < 0 {
            return Err(AppError::ValidationError(
                "Tempo assistido inválido".to_string(),
            ));
        }

        let user = self.user_service.find_active_user(user_id).await?;

        let video = videos::Entity::find_by_id(video_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Vídeo não encontrado".to_string()))?;

        let track = tracks::Entity::find_by_id(video.track_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Trilha não encontrada".to_string()))?;
        if !user.plan.can_access_track(track.track_index) {
            return Err(AppError::PlanLimit(
                "Esta trilha não está disponível no seu plano".to_string(),
            ));
        }

        let watched = request.watched_seconds.min(video.duration_seconds);
        let wants_completed = request.completed.unwrap_or(false);

        let existing = video_progress::Entity::find()
            .filter(video_progress::Column::UserId.eq(user_id))
            .filter(video_progress::Column::VideoId.eq(video_id))
            .one(&self.pool)
            .await?;

        let (previous_watched, was_completed) = existing
            .as_ref()
            .map(|p| (p.watched_seconds, p.completed))
            .unwrap_or((0, false));

        let new_watched = watched.max(previous_watched);
        let now_completed = was_completed || wants_completed;

        match existing {
            Some(row) => {
                let mut active = row.into_active_model();
                active.watched_seconds = Set(new_watched);
                active.completed = Set(now_completed);
                active.updated_at = Set(Utc::now());
                active.update(&self.pool).await?;
            }
            None => {
                video_progress::ActiveModel {
                    user_id: Set(user_id),
                    video_id: Set(video_id),
                    watched_seconds: Set(new_watched),
                    completed: Set(now_completed),
                    ..Default::default()
                }
                .insert(&self.pool)
                .await?;
            }
        }

        let delta = (new_watched - previous_watched) as i64;
        if delta > 0 {
            self.usage_service.add_video_seconds(user_id, delta).await?;
        }

        let mut track_completed = false;
        if now_completed && !was_completed {
            track_completed = self.track_fully_completed(user_id, track.id).await?;
            if track_completed {
                self.usage_service.increment_tracks_completed(user_id).await?;
            }
        }

        Ok(UpdateProgressResponse {
            video_id,
            watched_seconds: new_watched,
            completed: now_completed,
            track_completed,
        })
    }

    async fn track_fully_completed(&self, user_id: i64, track_id: i64) -> AppResult<bool> {
        let video_ids: Vec<i64> = videos::Entity::find()
            .filter(videos::Column::TrackId.eq(track_id))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|v| v.id)
            .collect();
        if video_ids.is_empty() {
            return Ok(false);
        }

        let completed: Vec<i64> = video_progress::Entity::find()
            .filter(video_progress::Column::UserId.eq(user_id))
            .filter(video_progress::Column::VideoId.is_in(video_ids.clone()))
            .filter(video_progress::Column::Completed.eq(true))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|p| p.video_id)
            .collect();

        Ok(completed.len() == video_ids.len())
    }

    pub async fn create_track(
        &self,
        admin_id: i64,
        request: CreateTrackRequest,
    ) -> AppResult<TrackSummary> {
        self.user_service.ensure_admin(admin_id).await?;
        if request.track_index < 0 {
            return Err(AppError::ValidationError(
                "Índice da trilha inválido".to_string(),
            ));
        }

        let track = tracks::ActiveModel {
            title: Set(request.title),
            description: Set(request.description),
            track_index: Set(request.track_index),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(TrackSummary::from_model(track, true))
    }

    pub async fn create_video(
        &self,
        admin_id: i64,
        track_id: i64,
        request: CreateVideoRequest,
    ) -> AppResult<VideoWithProgress> {
        self.user_service.ensure_admin(admin_id).await?;

        tracks::Entity::find_by_id(track_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Trilha não encontrada".to_string()))?;

        let video = videos::ActiveModel {
            track_id: Set(track_id),
            title: Set(request.title),
            video_url: Set(request.video_url),
            duration_seconds: Set(request.duration_seconds),
            position: Set(request.position),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(VideoWithProgress::from_model(video, 0, false))
    }
}
