use crate::entities::calendar_event_entity as calendar_events;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "Plantio do milho safrinha")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "plantio")]
    pub event_type: String,
    #[schema(example = "2026-02-10")]
    pub event_date: String, // YYYY-MM-DD
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<calendar_events::Model> for EventResponse {
    fn from(event: calendar_events::Model) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            event_type: event.event_type,
            event_date: event.event_date,
            completed: event.completed,
            created_at: event.created_at,
        }
    }
}
