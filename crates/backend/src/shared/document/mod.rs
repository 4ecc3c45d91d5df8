pub mod pdf_extractor;

pub use pdf_extractor::{extract_pdf_text, ExtractedText};

use thiserror::Error;

/// Ошибки извлечения текста из документа
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("Missing upload field: {0}")]
    MissingFile(String),

    #[error("Failed to read upload: {0}")]
    ReadError(String),

    #[error("Failed to parse PDF: {0}")]
    ParseError(String),
}
