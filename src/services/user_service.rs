use crate::database::DbPool;
use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::usage::month_key;
use crate::models::*;
use crate::services::UsageService;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct UserService {
    pool: DbPool,
    usage_service: UsageService,
}

impl UserService {
    pub fn new(pool: DbPool, usage_service: UsageService) -> Self {
        Self {
            pool,
            usage_service,
        }
    }

    pub async fn find_active_user(&self, user_id: i64) -> AppResult<users::Model> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;
        if !user.is_active {
            return Err(AppError::AuthError("Conta desativada".to_string()));
        }
        Ok(user)
    }

    pub async fn ensure_admin(&self, user_id: i64) -> AppResult<users::Model> {
        let user = self.find_active_user(user_id).await?;
        if !user.is_admin {
            return Err(AppError::PermissionDenied);
        }
        Ok(user)
    }

    pub async fn get_profile(&self, user_id: i64) -> AppResult<(UserResponse, UsageSummary)> {
        let user = self.find_active_user(user_id).await?;
        let usage = self.get_usage(user_id, None).await?;
        Ok((UserResponse::from(user), usage))
    }

    pub async fn get_usage(&self, user_id: i64, month: Option<String>) -> AppResult<UsageSummary> {
        let user = self.find_active_user(user_id).await?;
        let limit = user.plan.consultation_limit();
        let month = month.unwrap_or_else(|| month_key(Utc::now()));

        let summary = match self.usage_service.find_month(user_id, &month).await? {
            Some(row) => UsageSummary::from_row(&row, limit),
            None => UsageSummary::empty(month, limit),
        };
        Ok(summary)
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        if request.name.is_none() && request.phone.is_none() {
            return Err(AppError::ValidationError(
                "Nenhum campo para atualizar".to_string(),
            ));
        }
        if let Some(name) = &request.name {
            crate::utils::validate_name(name)?;
        }

        let user = self.find_active_user(user_id).await?;
        let mut active = user.into_active_model();
        if let Some(name) = request.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(phone) = request.phone {
            active.phone = Set(Some(phone));
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.pool).await?;

        Ok(UserResponse::from(updated))
    }

    /// Soft delete; the row stays for billing history.
    pub async fn deactivate(&self, user_id: i64) -> AppResult<()> {
        let user = self.find_active_user(user_id).await?;
        let mut active = user.into_active_model();
        active.is_active = Set(false);
        active.updated_at = Set(Utc::now());
        active.update(&self.pool).await?;
        Ok(())
    }

    pub async fn record_activity(&self, user_id: i64) -> AppResult<()> {
        let user = self.find_active_user(user_id).await?;
        let mut active = user.into_active_model();
        active.last_activity_at = Set(Some(Utc::now()));
        active.update(&self.pool).await?;
        Ok(())
    }

    pub async fn list_users(
        &self,
        admin_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<UserResponse>> {
        self.ensure_admin(admin_id).await?;

        let total = users::Entity::find().count(&self.pool).await? as i64;
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<UserResponse> = models.into_iter().map(UserResponse::from).collect();

        Ok(PaginatedResponse::new(items, params, total))
    }
}
