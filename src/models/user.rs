use crate::entities::user_entity as users;
use crate::models::PlanTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Maria Souza")]
    pub name: String,
    #[schema(example = "maria@fazenda.com.br")]
    pub email: String,
    #[schema(example = "+5511999990000")]
    pub phone: Option<String>,
    #[schema(example = "Senha123")]
    pub password: String,
    #[schema(example = "Senha123")]
    pub confirm_password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "maria@fazenda.com.br")]
    pub email: String,
    #[schema(example = "Senha123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "Maria Souza")]
    pub name: Option<String>,
    #[schema(example = "+5511999990000")]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub plan: PlanTier,
    pub is_adimplente: bool,
    pub subscription_ends_at: Option<DateTime<Utc>>,
    pub trial_ativo: bool,
    pub trial_expira_em: Option<DateTime<Utc>>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            plan: user.plan,
            is_adimplente: user.is_adimplente,
            subscription_ends_at: user.subscription_ends_at,
            trial_ativo: user.trial_ativo,
            trial_expira_em: user.trial_expira_em,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}
