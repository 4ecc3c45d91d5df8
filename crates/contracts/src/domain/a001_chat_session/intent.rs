//! Статические ответы на фиксированный набор фраз.
//!
//! Правила проверяются строго по порядку, первое совпадение выигрывает.
//! Если ничего не совпало, реплика уходит в удалённую модель.

use super::document::{summary_preview, DocumentBuffer};

pub const GREETING_REPLY: &str = "👋 Hello! How can I assist you today?";
pub const ATTRIBUTION_REPLY: &str = "👩‍💻 I was developed by Anushka Midda.";
pub const CAPABILITIES_REPLY: &str = "✨ My best features include:\n- PDF summarization\n- Question answering\n- Translation\n- Insight extraction\n\nUpload a PDF or type a question to get started!";
pub const UPLOAD_PROMPT_REPLY: &str = "📎 Sure! Please upload your PDF file using the file picker below. I’m ready to process it.";
pub const SUMMARIZE_WITHOUT_DOCUMENT_REPLY: &str =
    "⚠️ Please upload a PDF first so I can summarize it.";

const GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticIntent {
    Greeting,
    Attribution,
    Capabilities,
    UploadPrompt,
    Summarize,
}

impl StaticIntent {
    /// Распознать намерение по реплике, уже приведённой к нижнему регистру
    pub fn detect(lowered: &str) -> Option<Self> {
        if GREETINGS.contains(&lowered) {
            return Some(Self::Greeting);
        }
        if lowered.contains("who developed") || lowered.contains("your developer") {
            return Some(Self::Attribution);
        }
        if lowered.contains("best feature") || lowered.contains("what can you do") {
            return Some(Self::Capabilities);
        }
        if lowered.contains("i have a pdf") || lowered.contains("upload pdf") {
            return Some(Self::UploadPrompt);
        }
        if lowered.contains("summarize") {
            return Some(Self::Summarize);
        }
        None
    }

    pub fn reply(&self, document: &DocumentBuffer) -> String {
        match self {
            Self::Greeting => GREETING_REPLY.to_string(),
            Self::Attribution => ATTRIBUTION_REPLY.to_string(),
            Self::Capabilities => CAPABILITIES_REPLY.to_string(),
            Self::UploadPrompt => UPLOAD_PROMPT_REPLY.to_string(),
            Self::Summarize => {
                if document.is_empty() {
                    SUMMARIZE_WITHOUT_DOCUMENT_REPLY.to_string()
                } else {
                    summary_preview(document.text())
                }
            }
        }
    }
}

/// Статический ответ на реплику пользователя или `None`.
///
/// Реплика сравнивается целиком, без обрезки пробелов: " hi" не приветствие.
pub fn match_static_reply(utterance: &str, document: &DocumentBuffer) -> Option<String> {
    let lowered = utterance.to_lowercase();
    StaticIntent::detect(&lowered).map(|intent| intent.reply(document))
}
