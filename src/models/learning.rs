use crate::entities::{track_entity as tracks, video_entity as videos};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub track_index: i32,
    /// Whether the caller's plan unlocks this track.
    pub accessible: bool,
}

impl TrackSummary {
    pub fn from_model(track: tracks::Model, accessible: bool) -> Self {
        Self {
            id: track.id,
            title: track.title,
            description: track.description,
            track_index: track.track_index,
            accessible,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoWithProgress {
    pub id: i64,
    pub title: String,
    pub video_url: String,
    pub duration_seconds: i32,
    pub position: i32,
    pub watched_seconds: i32,
    pub completed: bool,
}

impl VideoWithProgress {
    pub fn from_model(video: videos::Model, watched_seconds: i32, completed: bool) -> Self {
        Self {
            id: video.id,
            title: video.title,
            video_url: video.video_url,
            duration_seconds: video.duration_seconds,
            position: video.position,
            watched_seconds,
            completed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackDetailResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub track_index: i32,
    pub videos: Vec<VideoWithProgress>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProgressRequest {
    #[schema(example = 180)]
    pub watched_seconds: i32,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProgressResponse {
    pub video_id: i64,
    pub watched_seconds: i32,
    pub completed: bool,
    /// Set when this update completed the whole track.
    pub track_completed: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTrackRequest {
    pub title: String,
    pub description: String,
    pub track_index: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVideoRequest {
    pub title: String,
    pub video_url: String,
    pub duration_seconds: i32,
    pub position: i32,
}
