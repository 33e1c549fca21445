use crate::entities::user_usage_entity as user_usage;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Month bucket key for usage rows, e.g. "2026-03". Always UTC.
pub fn month_key(at: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", at.year(), at.month())
}

#[derive(Debug, Deserialize)]
pub struct UsageQuery {
    pub month: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsageSummary {
    pub month: String,
    pub ai_consultations: i64,
    pub consultation_limit: Option<i64>,
    pub tracks_completed: i64,
    pub video_seconds: i64,
    pub events_created: i64,
}

impl UsageSummary {
    pub fn from_row(row: &user_usage::Model, consultation_limit: Option<i64>) -> Self {
        Self {
            month: row.month.clone(),
            ai_consultations: row.ai_consultations,
            consultation_limit,
            tracks_completed: row.tracks_completed,
            video_seconds: row.video_seconds,
            events_created: row.events_created,
        }
    }

    pub fn empty(month: String, consultation_limit: Option<i64>) -> Self {
        Self {
            month,
            ai_consultations: 0,
            consultation_limit,
            tracks_completed: 0,
            video_seconds: 0,
            events_created: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_key_zero_pads() {
        let at = Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(month_key(at), "2026-03");

        let at = Utc.with_ymd_and_hms(2026, 11, 30, 23, 59, 59).unwrap();
        assert_eq!(month_key(at), "2026-11");
    }
}
