use crate::shared::document::{extract_pdf_text, DocumentError};
use crate::shared::llm::{get_provider, LlmMessage, LlmProvider, LlmResponse};
use axum::extract::Multipart;
use contracts::domain::a001_chat_session::aggregate::ChatRole;
use contracts::domain::a001_chat_session::document::is_pdf_mime;
use contracts::shared::completion::{CompletionRequest, CompletionResponse};
use contracts::shared::document::{DocumentExtractResponse, DOCUMENT_UPLOAD_FIELD};

/// Преобразовать историю и новую реплику в формат для LLM
pub fn build_llm_messages(request: &CompletionRequest) -> Vec<LlmMessage> {
    let mut llm_messages: Vec<LlmMessage> = request
        .history
        .iter()
        .map(|msg| match msg.role {
            ChatRole::User => LlmMessage::user(msg.content.clone()),
            ChatRole::Ai => LlmMessage::model(msg.content.clone()),
        })
        .collect();

    // Новая реплика идёт последней, вместе с текстом документа
    llm_messages.push(LlmMessage::user(request.utterance_with_context()));
    llm_messages
}

/// Получить ответ модели на реплику пользователя.
///
/// Ошибки не пробрасываются: вызывающий всегда получает текст для чата.
pub async fn complete(request: CompletionRequest) -> CompletionResponse {
    match get_provider() {
        Ok(provider) => complete_with(provider.as_ref(), request).await,
        Err(e) => {
            tracing::error!("Completion unavailable: {}", e);
            CompletionResponse::failed()
        }
    }
}

pub async fn complete_with(
    provider: &dyn LlmProvider,
    request: CompletionRequest,
) -> CompletionResponse {
    let llm_messages = build_llm_messages(&request);
    tracing::info!(
        "Completion request: history={}, document_chars={}",
        request.history.len(),
        request.document_text.chars().count()
    );

    match provider.generate(llm_messages).await {
        Ok(LlmResponse {
            content: Some(text),
            ..
        }) => CompletionResponse::answered(text),
        Ok(response) => {
            tracing::warn!(
                "{} returned no text (model {}, finish_reason {:?})",
                provider.provider_name(),
                response.model,
                response.finish_reason
            );
            CompletionResponse::fallback()
        }
        Err(e) => {
            tracing::error!("{} error: {}", provider.provider_name(), e);
            CompletionResponse::failed()
        }
    }
}

/// Прочитать файл из multipart-формы и извлечь из него текст
pub async fn upload_document(
    multipart: &mut Multipart,
) -> Result<DocumentExtractResponse, DocumentError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DocumentError::ReadError(e.to_string()))?
    {
        if field.name() != Some(DOCUMENT_UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("document.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| DocumentError::ReadError(e.to_string()))?;

        return extract_document(file_name, content_type, bytes.to_vec()).await;
    }

    Err(DocumentError::MissingFile(DOCUMENT_UPLOAD_FIELD.to_string()))
}

/// Извлечь текст из загруженного PDF.
///
/// Принимается только `application/pdf`; разбор идёт в blocking-пуле.
pub async fn extract_document(
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
) -> Result<DocumentExtractResponse, DocumentError> {
    let content_type = content_type.unwrap_or_default();
    if !is_pdf_mime(&content_type) {
        return Err(DocumentError::UnsupportedType(content_type));
    }

    let size = bytes.len();
    let extracted = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
        .await
        .map_err(|e| DocumentError::ParseError(e.to_string()))??;

    tracing::info!(
        "PDF extracted: {} ({} bytes, {} pages, {} chars)",
        file_name,
        size,
        extracted.page_count,
        extracted.text.chars().count()
    );

    Ok(DocumentExtractResponse {
        file_name,
        page_count: extracted.page_count,
        text: extracted.text,
    })
}
