//! Контракт прокси генерации: frontend -> backend -> hosted model

use crate::domain::a001_chat_session::aggregate::ChatMessage;
use serde::{Deserialize, Serialize};

/// Ответ, если модель вернула ответ без текста
pub const COMPLETION_FALLBACK_REPLY: &str = "🤖 I'm here to assist you with PDF summaries, questions, translations, and more! Just upload your file and ask away.";

/// Ответ, если запрос к модели не удался
pub const COMPLETION_FAILURE_REPLY: &str = "⚠️ Failed to get a response from Gemini API.";

/// POST /api/chat/completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Сообщения до новой реплики пользователя
    pub history: Vec<ChatMessage>,
    pub document_text: String,
    pub utterance: String,
}

impl CompletionRequest {
    /// Реплика пользователя с текстом документа в качестве контекста
    pub fn utterance_with_context(&self) -> String {
        format!(
            "{}\n\n[PDF Content]:\n{}",
            self.utterance, self.document_text
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    /// Текст взят из ответа модели
    Answered,
    /// Ответ пришёл, но текста в нём нет
    Fallback,
    /// Сеть, статус или разбор ответа
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
    pub status: CompletionStatus,
}

impl CompletionResponse {
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: CompletionStatus::Answered,
        }
    }

    pub fn fallback() -> Self {
        Self {
            text: COMPLETION_FALLBACK_REPLY.to_string(),
            status: CompletionStatus::Fallback,
        }
    }

    pub fn failed() -> Self {
        Self {
            text: COMPLETION_FAILURE_REPLY.to_string(),
            status: CompletionStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_with_context() {
        let request = CompletionRequest {
            history: vec![],
            document_text: "page one\npage two\n".to_string(),
            utterance: "What is it about?".to_string(),
        };
        assert_eq!(
            request.utterance_with_context(),
            "What is it about?\n\n[PDF Content]:\npage one\npage two\n"
        );
    }

    #[test]
    fn test_context_block_present_without_document() {
        let request = CompletionRequest {
            history: vec![],
            document_text: String::new(),
            utterance: "question".to_string(),
        };
        assert_eq!(request.utterance_with_context(), "question\n\n[PDF Content]:\n");
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_value(CompletionResponse::failed()).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["text"], COMPLETION_FAILURE_REPLY);
    }
}
