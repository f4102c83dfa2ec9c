use crate::config::AppConfig;
use crate::error::GenerateError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        GeminiClient {
            client: reqwest::Client::new(),
            api_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }]
            }))
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        if !status.is_success() {
            return Err(GenerateError::Upstream {
                message: format!("{} - {}", status, excerpt(&response_text)),
            });
        }

        extract_text(&response_text)
    }
}

fn extract_text(body: &str) -> Result<String, GenerateError> {
    let parsed: GeminiResponse =
        serde_json::from_str(body).map_err(|err| GenerateError::Upstream {
            message: format!("unreadable generation response: {err}"),
        })?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerateError::Upstream {
            message: "model returned no text".to_string(),
        });
    }
    Ok(text)
}

fn excerpt(text: &str) -> &str {
    crate::utils::truncate_chars(text, 100)
}

#[cfg(test)]
pub mod fakes {
    use super::*;
    use std::sync::Mutex;

    pub struct FakeLlm {
        reply: Result<String, String>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl FakeLlm {
        pub fn replying(reply: impl Into<String>) -> Self {
            Self {
                reply: Ok(reply.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                reply: Err(message.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeLlm {
        async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|message| GenerateError::Upstream { message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_candidate_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"title\":"},{"text":"\"x\"}"}],"role":"model"}}]}"#;
        assert_eq!(extract_text(body).unwrap(), r#"{"title":"x"}"#);
    }

    #[test]
    fn empty_candidates_fail_the_run() {
        let err = extract_text(r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Upstream { .. }));

        let err = extract_text("<html>quota</html>").unwrap_err();
        assert!(matches!(err, GenerateError::Upstream { .. }));
    }

    #[test]
    fn endpoint_uses_model() {
        let config = AppConfig::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("k".to_string()),
            "GEMINI_API_URL" => Some("http://localhost:9000/v1beta/".to_string()),
            _ => None,
        })
        .unwrap();
        let client = GeminiClient::new(&config);
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
