use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

/// Produces conversation starters for people sharing `interest`.
#[async_trait::async_trait]
pub trait IcebreakerGenerator: Send + Sync {
    async fn generate(&self, interest: &str) -> String;
}

/// Deterministic three-line starter list, also used whenever a remote
/// generator fails.
pub fn fallback(interest: &str) -> String {
    format!(
        "1) What's a must-watch {interest} recommendation? 🎬\n\
         2) Which {interest} surprised you recently? 🤯\n\
         3) Any hidden gems around here related to {interest}?"
    )
}

pub fn prompt(interest: &str) -> String {
    format!(
        "Generate 3 short friendly icebreakers (1-2 lines each) for a small group \
         who share an interest in '{interest}'. Keep them casual and emoji-friendly."
    )
}

#[derive(Debug, Default, Clone)]
pub struct FallbackIcebreaker;

#[async_trait::async_trait]
impl IcebreakerGenerator for FallbackIcebreaker {
    async fn generate(&self, interest: &str) -> String {
        fallback(interest)
    }
}

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct OpenAiIcebreaker {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiIcebreaker {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            url: OPENAI_URL.to_owned(),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    async fn complete(&self, interest: &str) -> anyhow::Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt(interest) }],
            "max_tokens": 150,
            "temperature": 0.8,
        });

        let completion: ChatCompletion = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_owned())
            .unwrap_or_default();

        if text.is_empty() {
            anyhow::bail!("empty completion");
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl IcebreakerGenerator for OpenAiIcebreaker {
    #[tracing::instrument(skip(self))]
    async fn generate(&self, interest: &str) -> String {
        match self.complete(interest).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "icebreaker generation failed, using fallback");
                fallback(interest)
            }
        }
    }
}
