use crate::database::DbPool;
use crate::entities::farm_entity as farms;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct FarmService {
    pool: DbPool,
}

impl FarmService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find_owned(&self, user_id: i64, farm_id: i64) -> AppResult<farms::Model> {
        farms::Entity::find_by_id(farm_id)
            .filter(farms::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Fazenda não encontrada".to_string()))
    }

    /// The weather dashboard follows a single active farm per user.
    pub async fn active_farm(&self, user_id: i64) -> AppResult<Option<farms::Model>> {
        let farm = farms::Entity::find()
            .filter(farms::Column::UserId.eq(user_id))
            .filter(farms::Column::IsActive.eq(true))
            .one(&self.pool)
            .await?;
        Ok(farm)
    }

    pub async fn list_farms(&self, user_id: i64) -> AppResult<Vec<FarmResponse>> {
        let models = farms::Entity::find()
            .filter(farms::Column::UserId.eq(user_id))
            .order_by_asc(farms::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(FarmResponse::from).collect())
    }

    pub async fn create_farm(
        &self,
        user_id: i64,
        request: CreateFarmRequest,
    ) -> AppResult<FarmResponse> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError("O nome é obrigatório".to_string()));
        }
        if !(-90.0..=90.0).contains(&request.latitude)
            || !(-180.0..=180.0).contains(&request.longitude)
        {
            return Err(AppError::ValidationError(
                "Coordenadas inválidas".to_string(),
            ));
        }

        // First farm becomes the active one
        let existing = farms::Entity::find()
            .filter(farms::Column::UserId.eq(user_id))
            .count(&self.pool)
            .await?;

        let farm = farms::ActiveModel {
            user_id: Set(user_id),
            name: Set(request.name.trim().to_string()),
            city: Set(request.city),
            state: Set(request.state.to_uppercase()),
            latitude: Set(request.latitude),
            longitude: Set(request.longitude),
            crop: Set(request.crop),
            area_hectares: Set(request.area_hectares),
            is_active: Set(existing == 0),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(FarmResponse::from(farm))
    }

    pub async fn update_farm(
        &self,
        user_id: i64,
        farm_id: i64,
        request: UpdateFarmRequest,
    ) -> AppResult<FarmResponse> {
        let farm = self.find_owned(user_id, farm_id).await?;

        let mut active = farm.into_active_model();
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError("O nome é obrigatório".to_string()));
            }
            active.name = Set(name.trim().to_string());
        }
        if let Some(city) = request.city {
            active.city = Set(city);
        }
        if let Some(state) = request.state {
            active.state = Set(state.to_uppercase());
        }
        if let Some(latitude) = request.latitude {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(AppError::ValidationError("Coordenadas inválidas".to_string()));
            }
            active.latitude = Set(latitude);
        }
        if let Some(longitude) = request.longitude {
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(AppError::ValidationError("Coordenadas inválidas".to_string()));
            }
            active.longitude = Set(longitude);
        }
        if let Some(crop) = request.crop {
            active.crop = Set(crop);
        }
        if let Some(area) = request.area_hectares {
            active.area_hectares = Set(Some(area));
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.pool).await?;
        Ok(FarmResponse::from(updated))
    }

    /// Activation deactivates every sibling in the same transaction, keeping
    /// at most one active farm per user.
    pub async fn activate_farm(&self, user_id: i64, farm_id: i64) -> AppResult<FarmResponse> {
        let farm = self.find_owned(user_id, farm_id).await?;

        let txn = self.pool.begin().await?;

        farms::Entity::update_many()
            .col_expr(farms::Column::IsActive, Expr::value(false))
            .filter(farms::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let mut active = farm.into_active_model();
        active.is_active = Set(true);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(FarmResponse::from(updated))
    }

    pub async fn delete_farm(&self, user_id: i64, farm_id: i64) -> AppResult<()> {
        let farm = self.find_owned(user_id, farm_id).await?;
        farm.delete(&self.pool).await?;
        Ok(())
    }
}
