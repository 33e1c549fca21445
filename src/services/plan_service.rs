use crate::database::DbPool;
use crate::entities::{plan_upgrade_entity as plan_upgrades, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::external::StripeService;
use crate::external::stripe::WebhookEvent;
use crate::models::*;
use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set,
    TransactionTrait,
};

const SUBSCRIPTION_DAYS: i64 = 30;

#[derive(Clone)]
pub struct PlanService {
    pool: DbPool,
    stripe_service: StripeService,
}

impl PlanService {
    pub fn new(pool: DbPool, stripe_service: StripeService) -> Self {
        Self {
            pool,
            stripe_service,
        }
    }

    pub fn catalog(&self) -> Vec<PlanInfo> {
        PlanInfo::catalog()
    }

    /// Starts an upgrade: validates the transition, makes sure the user has a
    /// Stripe customer, opens a SetupIntent for card validation and records a
    /// pending upgrade keyed by the intent id.
    pub async fn create_upgrade_intent(
        &self,
        user_id: i64,
        request: CreateUpgradeIntentRequest,
    ) -> AppResult<CreateUpgradeIntentResponse> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        let target = request.target_plan;
        if user.plan == target {
            return Err(AppError::ValidationError(
                "Você já está neste plano".to_string(),
            ));
        }
        if !user.plan.can_upgrade_to(&target) {
            return Err(AppError::ValidationError(
                "Downgrade de plano não é permitido".to_string(),
            ));
        }

        let customer_id = match &user.stripe_customer_id {
            Some(id) => id.clone(),
            None => {
                let customer = self
                    .stripe_service
                    .create_customer(&user.email, &user.name, user.id)
                    .await?;
                let customer_id = customer.id.clone();
                let mut active = user.clone().into_active_model();
                active.stripe_customer_id = Set(Some(customer.id));
                active.update(&self.pool).await?;
                customer_id
            }
        };

        let intent = self
            .stripe_service
            .create_setup_intent(&customer_id, user_id, &target.to_string())
            .await?;

        plan_upgrades::ActiveModel {
            user_id: Set(user_id),
            stripe_setup_intent_id: Set(intent.id.clone()),
            target_plan: Set(target.clone()),
            status: Set(UpgradeStatus::Pending),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(CreateUpgradeIntentResponse {
            setup_intent_id: intent.id,
            client_secret: intent.client_secret.unwrap_or_default(),
            monthly_price_cents: target.monthly_price_cents(),
            target_plan: target,
        })
    }

    /// Activates the upgrade only after re-checking the intent status with
    /// Stripe; the client claim alone is never trusted.
    pub async fn confirm_upgrade(
        &self,
        user_id: i64,
        request: ConfirmUpgradeRequest,
    ) -> AppResult<ConfirmUpgradeResponse> {
        let intent = self
            .stripe_service
            .retrieve_setup_intent(&request.setup_intent_id)
            .await?;
        if !intent.is_succeeded() {
            return Err(AppError::ValidationError(
                "Pagamento ainda não validado".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let record = plan_upgrades::Entity::find()
            .filter(plan_upgrades::Column::StripeSetupIntentId.eq(request.setup_intent_id.clone()))
            .filter(plan_upgrades::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Upgrade não encontrado".to_string()))?;

        let user = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        // Already processed, report current state
        if record.status == UpgradeStatus::Succeeded {
            txn.commit().await?;
            return Ok(ConfirmUpgradeResponse {
                plan: user.plan,
                subscription_ends_at: user.subscription_ends_at.unwrap_or_else(Utc::now),
            });
        }

        let now = Utc::now();
        let ends_at = now + Duration::days(SUBSCRIPTION_DAYS);
        let target = record.target_plan.clone();

        let mut user_active = user.into_active_model();
        user_active.plan = Set(target.clone());
        user_active.is_adimplente = Set(true);
        user_active.subscription_ends_at = Set(Some(ends_at));
        user_active.trial_ativo = Set(false);
        user_active.updated_at = Set(now);
        user_active.update(&txn).await?;

        let mut record_active = record.into_active_model();
        record_active.status = Set(UpgradeStatus::Succeeded);
        record_active.stripe_status = Set(Some(intent.status));
        record_active.updated_at = Set(now);
        record_active.update(&txn).await?;

        txn.commit().await?;

        log::info!("User {user_id} upgraded to {target}");
        Ok(ConfirmUpgradeResponse {
            plan: target,
            subscription_ends_at: ends_at,
        })
    }

    pub async fn apply_webhook_event(&self, event: WebhookEvent) -> AppResult<()> {
        match event.event_type.as_str() {
            "setup_intent.succeeded" | "setup_intent.setup_failed" | "setup_intent.canceled" => {
                self.record_setup_intent_status(&event).await
            }
            "invoice.paid" => self.set_billing_standing(&event, true).await,
            "invoice.payment_failed" => self.set_billing_standing(&event, false).await,
            other => {
                log::info!("Ignoring Stripe event type: {other}");
                Ok(())
            }
        }
    }

    async fn record_setup_intent_status(&self, event: &WebhookEvent) -> AppResult<()> {
        let intent_id = event.data.object["id"]
            .as_str()
            .ok_or_else(|| AppError::ValidationError("Event object without id".to_string()))?
            .to_string();
        let status = event.data.object["status"].as_str().unwrap_or("unknown").to_string();

        let record = plan_upgrades::Entity::find()
            .filter(plan_upgrades::Column::StripeSetupIntentId.eq(intent_id.clone()))
            .one(&self.pool)
            .await?;
        let Some(record) = record else {
            log::warn!("Webhook for unknown setup intent {intent_id}");
            return Ok(());
        };

        // Activation happens in confirm_upgrade; the webhook only mirrors the
        // processor status and marks terminal failures.
        let mut active = record.into_active_model();
        if event.event_type == "setup_intent.setup_failed" {
            active.status = Set(UpgradeStatus::Failed);
        } else if event.event_type == "setup_intent.canceled" {
            active.status = Set(UpgradeStatus::Canceled);
        }
        active.stripe_status = Set(Some(status));
        active.updated_at = Set(Utc::now());
        active.update(&self.pool).await?;
        Ok(())
    }

    async fn set_billing_standing(&self, event: &WebhookEvent, adimplente: bool) -> AppResult<()> {
        let customer_id = event.data.object["customer"]
            .as_str()
            .ok_or_else(|| AppError::ValidationError("Event object without customer".to_string()))?
            .to_string();

        let user = users::Entity::find()
            .filter(users::Column::StripeCustomerId.eq(customer_id.clone()))
            .one(&self.pool)
            .await?;
        let Some(user) = user else {
            log::warn!("Webhook for unknown customer {customer_id}");
            return Ok(());
        };

        let now = Utc::now();
        let mut active = user.into_active_model();
        active.is_adimplente = Set(adimplente);
        if adimplente {
            active.subscription_ends_at = Set(Some(now + Duration::days(SUBSCRIPTION_DAYS)));
        }
        active.updated_at = Set(now);
        active.update(&self.pool).await?;
        Ok(())
    }
}
