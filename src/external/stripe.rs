use crate::config::StripeConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Customer {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetupIntent {
    pub id: String,
    pub client_secret: Option<String>,
    pub status: String,
}

impl SetupIntent {
    pub fn is_succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookEventData,
}

#[derive(Debug, Deserialize)]
pub struct WebhookEventData {
    pub object: serde_json::Value,
}

#[derive(Clone)]
pub struct StripeService {
    client: Client,
    config: StripeConfig,
}

impl StripeService {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn create_customer(&self, email: &str, name: &str, user_id: i64) -> AppResult<Customer> {
        let url = "https://api.stripe.com/v1/customers";

        let params = [
            ("email", email.to_string()),
            ("name", name.to_string()),
            ("metadata[user_id]", user_id.to_string()),
        ];

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Failed to create customer: {error_text}"
            )))
        }
    }

    /// Card validation before plan activation runs through a SetupIntent.
    pub async fn create_setup_intent(
        &self,
        customer_id: &str,
        user_id: i64,
        target_plan: &str,
    ) -> AppResult<SetupIntent> {
        let url = "https://api.stripe.com/v1/setup_intents";

        let params = [
            ("customer", customer_id.to_string()),
            ("usage", "off_session".to_string()),
            ("metadata[user_id]", user_id.to_string()),
            ("metadata[target_plan]", target_plan.to_string()),
        ];

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Failed to create setup intent: {error_text}"
            )))
        }
    }

    pub async fn retrieve_setup_intent(&self, setup_intent_id: &str) -> AppResult<SetupIntent> {
        let url = format!("https://api.stripe.com/v1/setup_intents/{setup_intent_id}");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.secret_key)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Failed to retrieve setup intent: {error_text}"
            )))
        }
    }

    pub fn parse_webhook_event(&self, payload: &str, signature: &str) -> AppResult<WebhookEvent> {
        if self.config.webhook_secret.is_empty() {
            return Err(AppError::ConfigError(
                "Stripe webhook secret not configured".to_string(),
            ));
        }
        if signature.is_empty() || !signature.contains("t=") {
            return Err(AppError::AuthError("Invalid webhook signature".to_string()));
        }

        let event: WebhookEvent = serde_json::from_str(payload)?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> StripeService {
        StripeService::new(StripeConfig {
            secret_key: "sk_test_123".to_string(),
            webhook_secret: "whsec_123".to_string(),
        })
    }

    #[test]
    fn test_parse_webhook_event() {
        let payload = r#"{
            "id": "evt_1",
            "type": "setup_intent.succeeded",
            "data": { "object": { "id": "seti_1", "status": "succeeded" } }
        }"#;
        let event = service()
            .parse_webhook_event(payload, "t=123,v1=abc")
            .unwrap();
        assert_eq!(event.event_type, "setup_intent.succeeded");
        assert_eq!(event.data.object["id"], "seti_1");
    }

    #[test]
    fn test_parse_webhook_event_rejects_empty_signature() {
        let payload = r#"{"id":"evt_1","type":"x","data":{"object":{}}}"#;
        assert!(service().parse_webhook_event(payload, "").is_err());
    }

    #[test]
    fn test_setup_intent_status() {
        let intent = SetupIntent {
            id: "seti_1".to_string(),
            client_secret: None,
            status: "requires_payment_method".to_string(),
        };
        assert!(!intent.is_succeeded());
    }
}
