use axum::{extract::Multipart, http::StatusCode, Json};

use crate::domain::a001_chat_session;
use crate::shared::document::DocumentError;
use contracts::shared::completion::{CompletionRequest, CompletionResponse};
use contracts::shared::document::DocumentExtractResponse;

/// POST /api/chat/completion
///
/// Всегда 200: сбой модели приходит как текст ответа со статусом `failed`.
pub async fn complete(Json(payload): Json<CompletionRequest>) -> Json<CompletionResponse> {
    Json(a001_chat_session::service::complete(payload).await)
}

/// POST /api/chat/document
pub async fn upload_document(
    mut multipart: Multipart,
) -> Result<Json<DocumentExtractResponse>, StatusCode> {
    match a001_chat_session::service::upload_document(&mut multipart).await {
        Ok(document) => Ok(Json(document)),
        Err(e) => {
            tracing::error!("Failed to extract document: {}", e);
            Err(status_for(&e))
        }
    }
}

fn status_for(error: &DocumentError) -> StatusCode {
    match error {
        DocumentError::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        DocumentError::MissingFile(_) | DocumentError::ReadError(_) => StatusCode::BAD_REQUEST,
        DocumentError::ParseError(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_document_errors() {
        assert_eq!(
            status_for(&DocumentError::UnsupportedType("text/plain".into())),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            status_for(&DocumentError::MissingFile("file".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DocumentError::ParseError("bad xref".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
