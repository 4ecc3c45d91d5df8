use serde::{Deserialize, Serialize};

/// Имя поля multipart-формы с файлом
pub const DOCUMENT_UPLOAD_FIELD: &str = "file";

/// Ответ POST /api/chat/document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExtractResponse {
    pub file_name: String,
    pub page_count: usize,
    pub text: String,
}
