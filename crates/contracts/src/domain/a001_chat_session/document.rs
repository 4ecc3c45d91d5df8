use serde::{Deserialize, Serialize};

/// Единственный принимаемый тип загружаемого файла
pub const PDF_MIME: &str = "application/pdf";

/// Сколько строк документа попадает в превью
pub const SUMMARY_PREVIEW_LINES: usize = 8;

const SUMMARY_HEADER: &str = "📄 **PDF Summary Preview:**";
const SUMMARY_TRAILER: &str = "_You can ask more specific questions for deeper insights!_";

pub fn is_pdf_mime(mime: &str) -> bool {
    mime == PDF_MIME
}

/// Текст последнего загруженного документа.
///
/// Хранит не более одного документа: каждая успешная загрузка
/// заменяет текст и имя файла целиком.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentBuffer {
    text: String,
    file_name: Option<String>,
}

impl DocumentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.file_name = Some(file_name.into());
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Имя файла для индикатора загрузки
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Превью документа: первые строки текста и фиксированная подсказка
pub fn summary_preview(text: &str) -> String {
    let first_lines = text
        .trim()
        .split('\n')
        .take(SUMMARY_PREVIEW_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    format!("{SUMMARY_HEADER}\n\n{first_lines}\n\n{SUMMARY_TRAILER}")
}
