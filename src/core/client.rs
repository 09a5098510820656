use crate::core::{ConfigProvider, ModelClient};
use crate::domain::model::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::utils::error::{AnimatorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat-completion client for an Azure OpenAI deployment.
pub struct AzureOpenAiClient {
    client: Client,
    url: String,
    api_key: String,
    api_version: String,
    temperature: f32,
    max_tokens: u32,
}

impl AzureOpenAiClient {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self {
            client,
            url: completions_url(config.endpoint(), config.deployment_name()),
            api_key: config.api_key().to_string(),
            api_version: config.api_version().to_string(),
            temperature: config.temperature(),
            max_tokens: config.max_tokens(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_request(&self, system_prompt: &str, user_prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_prompt)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Pretty-printed JSON body that `complete` would send.
    pub fn render_request(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let body = self.build_request(system_prompt, user_prompt);
        Ok(serde_json::to_string_pretty(&body)?)
    }
}

pub fn completions_url(endpoint: &str, deployment_name: &str) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions",
        endpoint.trim_end_matches('/'),
        deployment_name
    )
}

#[async_trait]
impl ModelClient for AzureOpenAiClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<Option<String>> {
        let body = self.build_request(system_prompt, user_prompt);

        tracing::debug!("Making chat completion request to: {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnimatorError::TransportError {
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("Chat completion response status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AnimatorError::TransportError {
                message: format!("HTTP {}: {}", status, detail.trim()),
            });
        }

        let completion: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| AnimatorError::TransportError {
                    message: format!("Unreadable completion payload: {}", e),
                })?;

        let content = completion.into_content();
        if content.is_none() {
            tracing::warn!("⚠️ Model returned no content");
        }
        Ok(content)
    }
}
