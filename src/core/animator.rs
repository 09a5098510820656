use crate::config::connection::placeholder_fields;
use crate::core::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::core::sanitizer::{is_acceptable, sanitize};
use crate::core::{ConfigProvider, ModelClient};
use crate::domain::model::{AnimationOutcome, AnimationRequest};
use crate::utils::error::{AnimatorError, Result};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_required_input;

/// Drives one request: input check, configuration check, model call,
/// sanitization and acceptance.
pub struct Animator<M: ModelClient, C: ConfigProvider> {
    client: M,
    config: C,
    monitor: SystemMonitor,
}

impl<M: ModelClient, C: ConfigProvider> Animator<M, C> {
    pub fn new(client: M, config: C) -> Self {
        Self::new_with_monitoring(client, config, false)
    }

    pub fn new_with_monitoring(client: M, config: C, monitor_enabled: bool) -> Self {
        Self {
            client,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn animate(&self, request: &AnimationRequest) -> Result<AnimationOutcome> {
        validate_request(request)?;

        let missing = placeholder_fields(&self.config);
        if !missing.is_empty() {
            tracing::error!(
                "❌ Azure OpenAI credentials are not configured ({})",
                missing.join(", ")
            );
            return Err(AnimatorError::ConfigurationError { fields: missing });
        }

        let user_prompt = build_user_prompt(request);
        self.monitor.log_stats("Prompt");

        tracing::info!("✨ The AI is getting creative and bringing your SVG to life...");
        let raw = self.client.complete(SYSTEM_PROMPT, &user_prompt).await?;
        self.monitor.log_stats("Model call");

        let cleaned = sanitize(raw.as_deref());
        self.monitor.log_stats("Sanitize");
        self.monitor.log_final_stats();

        if is_acceptable(&cleaned) {
            tracing::info!("✅ Animation created ({} bytes)", cleaned.len());
            Ok(AnimationOutcome::Accepted { svg: cleaned })
        } else {
            tracing::warn!("⚠️ Model output does not start with <svg; rejecting");
            Ok(AnimationOutcome::Rejected { raw: cleaned })
        }
    }
}

pub fn validate_request(request: &AnimationRequest) -> Result<()> {
    validate_required_input("svg_code", &request.svg_code)?;
    validate_required_input("description", &request.description)?;
    validate_required_input("animation_instructions", &request.animation_instructions)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::connection::ConnectionConfig;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockClient {
        reply: Option<String>,
        fail: bool,
        calls: Arc<AtomicUsize>,
        last_user_prompt: Arc<Mutex<Option<String>>>,
    }

    impl MockClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelClient for MockClient {
        async fn complete(&self, _system: &str, user: &str) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_user_prompt.lock().await = Some(user.to_string());
            if self.fail {
                return Err(AnimatorError::TransportError {
                    message: "connection refused".to_string(),
                });
            }
            Ok(self.reply.clone())
        }
    }

    fn configured() -> ConnectionConfig {
        ConnectionConfig {
            endpoint: "https://example.openai.azure.com".to_string(),
            api_key: "key".to_string(),
            deployment_name: "gpt-4o".to_string(),
            ..ConnectionConfig::default()
        }
    }

    fn request() -> AnimationRequest {
        AnimationRequest::new("<svg id=\"face\"/>", "A face", "Blink")
    }

    #[tokio::test]
    async fn test_accepted_outcome_is_sanitized() {
        let client = MockClient::replying("```svg\n<svg width=1 from=\"\"></svg>\n```");
        let animator = Animator::new(client.clone(), configured());

        let outcome = animator.animate(&request()).await.unwrap();

        assert_eq!(
            outcome,
            AnimationOutcome::Accepted {
                svg: "<svg width=\"1\"></svg>".to_string()
            }
        );
        assert_eq!(client.calls(), 1);
        let prompt = client.last_user_prompt.lock().await.clone().unwrap();
        assert!(prompt.contains("<svg id=\"face\"/>"));
        assert!(prompt.contains("Blink"));
    }

    #[tokio::test]
    async fn test_refusal_is_rejected_with_text() {
        let client = MockClient::replying("Sorry, I can't help with that.");
        let animator = Animator::new(client, configured());

        let outcome = animator.animate(&request()).await.unwrap();

        assert_eq!(
            outcome,
            AnimationOutcome::Rejected {
                raw: "Sorry, I can't help with that.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_absent_content_is_rejected_empty() {
        let animator = Animator::new(MockClient::default(), configured());
        let outcome = animator.animate(&request()).await.unwrap();
        assert_eq!(outcome, AnimationOutcome::Rejected { raw: String::new() });
    }

    #[tokio::test]
    async fn test_placeholder_config_skips_model_call() {
        let client = MockClient::replying("<svg></svg>");
        let animator = Animator::new(client.clone(), ConnectionConfig::default());

        match animator.animate(&request()).await {
            Err(AnimatorError::ConfigurationError { fields }) => {
                assert_eq!(fields, vec!["endpoint", "api_key", "deployment_name"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_input_skips_model_call() {
        let client = MockClient::replying("<svg></svg>");
        let animator = Animator::new(client.clone(), configured());

        let request = AnimationRequest::new("<svg/>", "", "Blink");
        match animator.animate(&request).await {
            Err(AnimatorError::MissingInputError { field }) => assert_eq!(field, "description"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = MockClient {
            fail: true,
            ..MockClient::default()
        };
        let animator = Animator::new(client.clone(), configured());

        assert!(matches!(
            animator.animate(&request()).await,
            Err(AnimatorError::TransportError { .. })
        ));
        assert_eq!(client.calls(), 1);
    }
}
