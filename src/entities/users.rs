use crate::models::PlanTier;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub plan: PlanTier,
    pub is_adimplente: bool,
    pub subscription_ends_at: Option<DateTime<Utc>>,
    pub trial_ativo: bool,
    pub trial_expira_em: Option<DateTime<Utc>>,
    pub stripe_customer_id: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub last_inactivity_alert_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
