//! OpenRouter client for AI-drafted reply suggestions.
//!
//! Wraps the OpenRouter chat-completions HTTP API using [`reqwest`]. The
//! integration is optional: [`AiConfig::from_env`] returns `None` when no
//! API key is configured and the suggest-reply endpoint reports the feature
//! as unavailable.

use serde::Deserialize;

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model when `OPENROUTER_MODEL` is not set.
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You write concise, friendly, professional email replies \
for a personal portfolio website.\n\
Keep it short, clear, and actionable.\n\
Do not mention AI. Do not include sensitive data.\n\
Output only the email body (no subject line).";

/// Errors from the OpenRouter API layer.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OpenRouter returned a non-2xx status code.
    #[error("OpenRouter API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, or the raw body.
        message: String,
    },

    /// The completion came back without any content.
    #[error("OpenRouter returned no content")]
    EmptyCompletion,
}

/// Configuration for the OpenRouter integration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// OpenRouter API key.
    pub api_key: String,
    /// Model identifier, e.g. `openai/gpt-4o-mini`.
    pub model: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `OPENROUTER_API_KEY` is not set, signalling that
    /// AI suggestions are disabled.
    ///
    /// | Variable             | Required | Default              |
    /// |----------------------|----------|----------------------|
    /// | `OPENROUTER_API_KEY` | yes      | —                    |
    /// | `OPENROUTER_MODEL`   | no       | `openai/gpt-4o-mini` |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY").ok()?;
        Some(Self {
            api_key,
            model: std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

/// An AI-drafted reply plus the model that produced it.
#[derive(Debug)]
pub struct ReplySuggestion {
    pub reply: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Draft a reply to a contact message.
pub async fn suggest_reply(
    client: &reqwest::Client,
    config: &AiConfig,
    from_name: &str,
    subject: &str,
    message: &str,
) -> Result<ReplySuggestion, AiError> {
    let user_prompt = format!("Sender name: {from_name}\nSubject: {subject}\nMessage:\n{message}");

    let body = serde_json::json!({
        "model": config.model,
        "temperature": 0.4,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": user_prompt },
        ],
    });

    let response = client
        .post(OPENROUTER_URL)
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let completion: ChatCompletion = response.json().await?;

    if !status.is_success() {
        let message = completion
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("OpenRouter error ({status})"));
        return Err(AiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let reply = completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or(AiError::EmptyCompletion)?;

    Ok(ReplySuggestion {
        reply,
        model: config.model.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_parses_nested_content() {
        let json = r#"{"choices":[{"message":{"content":"  Hello there.  "}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        let content = completion.choices[0]
            .message
            .as_ref()
            .and_then(|m| m.content.as_deref());
        assert_eq!(content, Some("  Hello there.  "));
    }

    #[test]
    fn completion_parses_error_body() {
        let json = r#"{"error":{"message":"rate limited"}}"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(
            completion.error.and_then(|e| e.message).as_deref(),
            Some("rate limited")
        );
        assert!(completion.choices.is_empty());
    }
}
