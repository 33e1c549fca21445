use crate::database::DbPool;
use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{
    JwtService, hash_password, validate_email, validate_name, validate_password, verify_password,
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

const TRIAL_DAYS: i64 = 7;

#[derive(Clone)]
pub struct AuthService {
    pool: DbPool,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DbPool, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    /// New accounts start on the free plan with the trial window open.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        validate_name(&request.name)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;
        if request.password != request.confirm_password {
            return Err(AppError::ValidationError(
                "As senhas não coincidem".to_string(),
            ));
        }

        let email = request.email.trim().to_lowercase();
        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(email.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(
                "E-mail já cadastrado".to_string(),
            ));
        }

        let now = Utc::now();
        let user = users::ActiveModel {
            name: Set(request.name.trim().to_string()),
            email: Set(email),
            password_hash: Set(hash_password(&request.password)?),
            phone: Set(request.phone),
            plan: Set(PlanTier::Gratuito),
            is_adimplente: Set(true),
            trial_ativo: Set(true),
            trial_expira_em: Set(Some(now + Duration::days(TRIAL_DAYS))),
            is_admin: Set(false),
            is_active: Set(true),
            last_activity_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        self.build_auth_response(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Credenciais inválidas".to_string()))?;

        if !user.is_active {
            return Err(AppError::AuthError("Conta desativada".to_string()));
        }

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::AuthError("Credenciais inválidas".to_string()));
        }

        self.build_auth_response(user)
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;
        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::AuthError("Invalid token subject".to_string()))?;

        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("User not found".to_string()))?;

        if !user.is_active {
            return Err(AppError::AuthError("Conta desativada".to_string()));
        }

        self.build_auth_response(user)
    }

    fn build_auth_response(&self, user: users::Model) -> AppResult<AuthResponse> {
        let access_token = self.jwt_service.generate_access_token(user.id, &user.email)?;
        let refresh_token = self.jwt_service.generate_refresh_token(user.id, &user.email)?;

        Ok(AuthResponse {
            user: UserResponse::from(user),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}
