use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::generation::GenerationRequest;
use crate::models::question::Question;
use crate::services::prompt_service::{build_request_prompt, build_transform_prompt};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// A hosted text-generation model: prompt in, raw reply text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct GeminiModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiModel {
    pub fn new(api_key: String, base_url: String, model: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let payload = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await
            .map_err(|e| Error::Reqwest(e.without_url()))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %text, "Gemini API returned an error");
            return Err(Error::Generation(format!("Gemini API returned status {}", status)));
        }

        let body: GeminiResponse = res
            .json()
            .await
            .map_err(|e| Error::Reqwest(e.without_url()))?;
        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::Generation("Gemini returned no candidates".to_string()))?;

        Ok(candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}

#[derive(Clone)]
pub struct AIService {
    model: Option<Arc<dyn LanguageModel>>,
}

impl AIService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model: Some(model) }
    }

    /// A service with no model behind it; every generation call fails fast.
    pub fn unavailable() -> Self {
        Self { model: None }
    }

    pub fn from_config(config: &Config, client: Client) -> Self {
        match &config.google_api_key {
            Some(key) => Self::new(Arc::new(GeminiModel::new(
                key.clone(),
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
                client,
            ))),
            None => {
                tracing::warn!("GOOGLE_API_KEY is not set; generation endpoints are disabled");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn ensure_available(&self) -> Result<&Arc<dyn LanguageModel>> {
        self.model.as_ref().ok_or_else(|| {
            Error::ModelUnavailable("the language model API key was not configured".to_string())
        })
    }

    /// Generates one question. Only a missing model is an error; any failure
    /// of the call itself or of its reply is reported as `Ok(None)`.
    pub async fn generate_question(&self, request: &GenerationRequest) -> Result<Option<Question>> {
        let model = self.ensure_available()?;
        let prompt = build_request_prompt(request);

        let raw = match model.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, subject = %request.subject, "question generation call failed");
                return Ok(None);
            }
        };

        match parse_question(&raw) {
            Ok(question) => Ok(Some(question)),
            Err(e) => {
                tracing::warn!(error = %e, reply = %raw, "discarding unusable model reply");
                Ok(None)
            }
        }
    }

    pub async fn transform_text(&self, text: &str, instruction: &str) -> Result<String> {
        let model = self.ensure_available()?;
        let raw = model
            .generate(&build_transform_prompt(text, instruction))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "text transformation failed");
                Error::Generation("text transformation failed".to_string())
            })?;
        Ok(strip_code_fences(&raw).to_string())
    }
}

/// Removes a surrounding ``` fence and surrounding whitespace. A language
/// tag is only recognised on the opening fence line, and the closing fence
/// is only removed when an opening one was found.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = match rest.split_once('\n') {
        Some((tag, body)) if is_fence_tag(tag.trim()) => body,
        _ => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn is_fence_tag(tag: &str) -> bool {
    tag.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '+')
}

pub fn parse_question(raw: &str) -> Result<Question> {
    let question: Question = serde_json::from_str(strip_code_fences(raw))?;
    question.check().map_err(Error::Generation)?;
    Ok(question)
}
