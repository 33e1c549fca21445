use crate::database::DbPool;
use crate::entities::{notification_entity as notifications, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{DateTime, Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

const INACTIVITY_THRESHOLD_DAYS: i64 = 3;
const ALERT_DEDUPE_HOURS: i64 = 24;

/// One alert per 24h window, and only for users quiet long enough.
fn should_send_inactivity_alert(
    last_activity_at: Option<DateTime<Utc>>,
    last_alert_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    let Some(last_activity) = last_activity_at else {
        return false;
    };
    if now - last_activity < Duration::days(INACTIVITY_THRESHOLD_DAYS) {
        return false;
    }
    match last_alert_at {
        Some(last_alert) => now - last_alert >= Duration::hours(ALERT_DEDUPE_HOURS),
        None => true,
    }
}

#[derive(Clone)]
pub struct NotificationService {
    pool: DbPool,
}

impl NotificationService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        user_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<NotificationResponse>> {
        let total = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .count(&self.pool)
            .await? as i64;

        let models = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .order_by_desc(notifications::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<NotificationResponse> =
            models.into_iter().map(NotificationResponse::from).collect();

        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn unread_count(&self, user_id: i64) -> AppResult<UnreadCountResponse> {
        let unread = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .filter(notifications::Column::Read.eq(false))
            .count(&self.pool)
            .await? as i64;
        Ok(UnreadCountResponse { unread })
    }

    /// Read notifications leave the unread count but stay listed.
    pub async fn mark_read(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> AppResult<NotificationResponse> {
        let notification = notifications::Entity::find_by_id(notification_id)
            .filter(notifications::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Notificação não encontrada".to_string()))?;

        if notification.read {
            return Ok(NotificationResponse::from(notification));
        }

        let mut active = notification.into_active_model();
        active.read = Set(true);
        let updated = active.update(&self.pool).await?;
        Ok(NotificationResponse::from(updated))
    }

    pub async fn mark_all_read(&self, user_id: i64) -> AppResult<u64> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::Read, Expr::value(true))
            .filter(notifications::Column::UserId.eq(user_id))
            .filter(notifications::Column::Read.eq(false))
            .exec(&self.pool)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn create(
        &self,
        user_id: i64,
        title: &str,
        message: &str,
        notification_type: &str,
    ) -> AppResult<NotificationResponse> {
        let notification = notifications::ActiveModel {
            user_id: Set(user_id),
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            notification_type: Set(notification_type.to_string()),
            read: Set(false),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(NotificationResponse::from(notification))
    }

    /// Periodic sweep: nudges users who went quiet, at most once per day.
    pub async fn run_inactivity_sweep(&self) -> AppResult<u64> {
        let now = Utc::now();
        let cutoff = now - Duration::days(INACTIVITY_THRESHOLD_DAYS);

        let candidates = users::Entity::find()
            .filter(users::Column::IsActive.eq(true))
            .filter(users::Column::LastActivityAt.lte(cutoff))
            .all(&self.pool)
            .await?;

        let mut sent = 0u64;
        for user in candidates {
            if !should_send_inactivity_alert(user.last_activity_at, user.last_inactivity_alert_at, now)
            {
                continue;
            }

            self.create(
                user.id,
                "Sentimos sua falta!",
                "Você não acessa o Dr. Agro há alguns dias. Seu calendário e o clima da sua fazenda continuam por aqui.",
                "inactivity",
            )
            .await?;

            let mut active = user.into_active_model();
            active.last_inactivity_alert_at = Set(Some(now));
            active.update(&self.pool).await?;
            sent += 1;
        }

        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_requires_inactivity() {
        let now = Utc::now();
        let recent = Some(now - Duration::hours(5));
        assert!(!should_send_inactivity_alert(recent, None, now));

        let quiet = Some(now - Duration::days(4));
        assert!(should_send_inactivity_alert(quiet, None, now));
    }

    #[test]
    fn test_alert_deduped_within_24h() {
        let now = Utc::now();
        let quiet = Some(now - Duration::days(4));

        let alerted_recently = Some(now - Duration::hours(23));
        assert!(!should_send_inactivity_alert(quiet, alerted_recently, now));

        let alerted_yesterday = Some(now - Duration::hours(25));
        assert!(should_send_inactivity_alert(quiet, alerted_yesterday, now));
    }

    #[test]
    fn test_no_activity_timestamp_means_no_alert() {
        let now = Utc::now();
        assert!(!should_send_inactivity_alert(None, None, now));
    }
}
