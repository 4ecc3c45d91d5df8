use super::types::{LlmError, LlmMessage, LlmProvider, LlmResponse, LlmRole};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Gemini провайдер (generateContent, без стриминга)
pub struct GeminiProvider {
    client: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: LlmRole,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl GeminiProvider {
    /// Создать провайдер. Таймаут не задаётся: запрос ждёт ответа до конца.
    pub fn new(api_base: String, model: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            model,
            api_key,
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    /// Конвертировать наши сообщения в формат Gemini
    fn convert_messages(messages: Vec<LlmMessage>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: messages
                .into_iter()
                .map(|msg| Content {
                    role: msg.role,
                    parts: vec![Part { text: msg.content }],
                })
                .collect(),
        }
    }
}

/// Текст первой части первого кандидата; пустой текст считается отсутствующим
fn extract_text(data: &Value) -> Option<String> {
    data.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn preview(body: &str) -> String {
    let preview: String = body.chars().take(500).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, messages: Vec<LlmMessage>) -> Result<LlmResponse, LlmError> {
        let request = Self::convert_messages(messages);
        tracing::debug!(
            "Gemini request: model={}, contents={}",
            self.model,
            request.contents.len()
        );

        // Ключ уходит только в query, ошибки reqwest логируем без URL
        let response = self
            .client
            .post(self.endpoint_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::NetworkError(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::error!("Gemini API request failed with status {}: {}", status, preview(&body));
            let message = format!("status {}: {}", status, preview(&body));
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthError(message),
                _ => LlmError::ApiError(message),
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}. Body: {}", e, preview(&body));
            LlmError::InvalidResponse(e.to_string())
        })?;

        let content = extract_text(&data);
        if content.is_none() {
            tracing::warn!("Gemini response has no candidate text: {}", preview(&body));
        }

        Ok(LlmResponse {
            content,
            model: data
                .get("modelVersion")
                .and_then(Value::as_str)
                .unwrap_or(&self.model)
                .to_string(),
            finish_reason: data
                .pointer("/candidates/0/finishReason")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}
