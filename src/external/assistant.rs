use crate::config::AssistantConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_SYSTEM_PROMPT: &str = "Você é o Dr. Agro, um consultor agronômico. \
Responda em português, de forma prática e objetiva, sobre manejo de culturas, \
pragas, solo e clima.";

#[derive(Debug, Clone, Serialize)]
pub struct ProviderMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ProviderMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    config: AssistantConfig,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Runs one consultation turn. `history` is oldest-first and already
    /// includes the new user message.
    pub async fn chat(&self, history: Vec<ProviderMessage>) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let system = ProviderMessage {
            role: "system".to_string(),
            content: self
                .config
                .system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        };
        let mut messages = vec![system];
        messages.extend(history);

        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Assistant provider error: {error_text}"
            )));
        }

        let payload: ChatCompletionResponse = response.json().await?;
        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::ExternalApiError("Assistant returned no choices".to_string()))
    }
}
