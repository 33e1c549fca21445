use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum PlanTier {
    #[sea_orm(string_value = "gratuito")]
    #[serde(rename = "gratuito")]
    Gratuito,
    #[sea_orm(string_value = "pro")]
    #[serde(rename = "pro")]
    Pro,
    #[sea_orm(string_value = "premium")]
    #[serde(rename = "premium")]
    Premium,
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanTier::Gratuito => write!(f, "gratuito"),
            PlanTier::Pro => write!(f, "pro"),
            PlanTier::Premium => write!(f, "premium"),
        }
    }
}

impl PlanTier {
    /// Highest track index the plan unlocks, None for unlimited.
    pub fn max_track_index(&self) -> Option<i32> {
        match self {
            PlanTier::Gratuito => Some(0),
            PlanTier::Pro => Some(4),
            PlanTier::Premium => None,
        }
    }

    pub fn can_access_track(&self, track_index: i32) -> bool {
        match self.max_track_index() {
            Some(max) => track_index <= max,
            None => true,
        }
    }

    /// Monthly AI consultation allowance, None for unlimited.
    pub fn consultation_limit(&self) -> Option<i64> {
        match self {
            PlanTier::Gratuito => Some(3),
            PlanTier::Pro => Some(50),
            PlanTier::Premium => None,
        }
    }

    pub fn has_consultations_remaining(&self, current_monthly_count: i64) -> bool {
        match self.consultation_limit() {
            Some(limit) => current_monthly_count < limit,
            None => true,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PlanTier::Gratuito => 0,
            PlanTier::Pro => 1,
            PlanTier::Premium => 2,
        }
    }

    /// Upgrades only move up; downgrades go through support.
    pub fn can_upgrade_to(&self, target: &PlanTier) -> bool {
        target.rank() > self.rank()
    }

    pub fn monthly_price_cents(&self) -> i64 {
        match self {
            PlanTier::Gratuito => 0,
            PlanTier::Pro => 2990,
            PlanTier::Premium => 5990,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum UpgradeStatus {
    #[sea_orm(string_value = "pending")]
    #[serde(rename = "pending")]
    Pending,
    #[sea_orm(string_value = "succeeded")]
    #[serde(rename = "succeeded")]
    Succeeded,
    #[sea_orm(string_value = "failed")]
    #[serde(rename = "failed")]
    Failed,
    #[sea_orm(string_value = "canceled")]
    #[serde(rename = "canceled")]
    Canceled,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanInfo {
    pub plan: PlanTier,
    pub monthly_price_cents: i64,
    pub max_track_index: Option<i32>,
    pub consultation_limit: Option<i64>,
}

impl PlanInfo {
    pub fn catalog() -> Vec<PlanInfo> {
        [PlanTier::Gratuito, PlanTier::Pro, PlanTier::Premium]
            .into_iter()
            .map(|plan| PlanInfo {
                monthly_price_cents: plan.monthly_price_cents(),
                max_track_index: plan.max_track_index(),
                consultation_limit: plan.consultation_limit(),
                plan,
            })
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUpgradeIntentRequest {
    pub target_plan: PlanTier,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUpgradeIntentResponse {
    pub setup_intent_id: String,
    pub client_secret: String,
    pub target_plan: PlanTier,
    pub monthly_price_cents: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfirmUpgradeRequest {
    pub setup_intent_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfirmUpgradeResponse {
    pub plan: PlanTier,
    pub subscription_ends_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_access_gratuito() {
        assert!(PlanTier::Gratuito.can_access_track(0));
        assert!(!PlanTier::Gratuito.can_access_track(1));
    }

    #[test]
    fn test_track_access_pro() {
        for idx in 0..=4 {
            assert!(PlanTier::Pro.can_access_track(idx));
        }
        assert!(!PlanTier::Pro.can_access_track(5));
    }

    #[test]
    fn test_track_access_premium() {
        assert!(PlanTier::Premium.can_access_track(0));
        assert!(PlanTier::Premium.can_access_track(99));
    }

    #[test]
    fn test_consultation_limits() {
        assert!(PlanTier::Gratuito.has_consultations_remaining(2));
        assert!(!PlanTier::Gratuito.has_consultations_remaining(3));
        assert!(PlanTier::Pro.has_consultations_remaining(49));
        assert!(!PlanTier::Pro.has_consultations_remaining(50));
        assert!(PlanTier::Premium.has_consultations_remaining(100_000));
    }

    #[test]
    fn test_upgrade_direction() {
        assert!(PlanTier::Gratuito.can_upgrade_to(&PlanTier::Pro));
        assert!(PlanTier::Gratuito.can_upgrade_to(&PlanTier::Premium));
        assert!(PlanTier::Pro.can_upgrade_to(&PlanTier::Premium));
        assert!(!PlanTier::Pro.can_upgrade_to(&PlanTier::Pro));
        assert!(!PlanTier::Premium.can_upgrade_to(&PlanTier::Pro));
        assert!(!PlanTier::Premium.can_upgrade_to(&PlanTier::Gratuito));
    }
}
