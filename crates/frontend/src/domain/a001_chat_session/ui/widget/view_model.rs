//! Chat Widget - View Model
//!
//! Вся логика сессии живёт в `ChatSession` из contracts; здесь только
//! сигналы и запуск асинхронных шагов. Результаты возвращаются в сессию
//! явно, замыкания не читают устаревшее состояние.

use super::model::{extract_document, request_completion};
use contracts::domain::a001_chat_session::session::{ChatSession, SendOutcome};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatWidgetVm {
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
}

impl ChatWidgetVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            input: RwSignal::new(String::new()),
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.session.with(|s| s.is_waiting())
    }

    /// Отправить текущий ввод.
    ///
    /// Пустой ввод игнорируется и не очищается. Повторная отправка во время
    /// ожидания блокируется только кнопкой, здесь она не запрещена.
    pub fn send(&self) {
        let input = self.input.get_untracked();
        let outcome = self.session.try_update(|s| s.submit(&input));

        let request = match outcome {
            None | Some(SendOutcome::Ignored) => return,
            Some(SendOutcome::Answered) => None,
            Some(SendOutcome::NeedsCompletion(request)) => Some(request),
        };

        self.input.set(String::new());

        let Some(request) = request else {
            return;
        };

        let session = self.session;
        wasm_bindgen_futures::spawn_local(async move {
            match request_completion(&request).await {
                Ok(response) => {
                    log::debug!("Completion status: {:?}", response.status);
                    session.update(|s| s.finish_completion(response.text));
                }
                Err(e) => {
                    log::error!("Completion request failed: {}", e);
                    session.update(|s| s.fail_completion());
                }
            }
        });
    }

    /// Загрузить выбранный файл.
    ///
    /// Не-PDF молча игнорируется. При ошибке разбора прежний текст
    /// документа и имя файла остаются, ошибка уходит только в лог.
    pub fn upload(&self, file: web_sys::File) {
        let mime = file.type_();
        if !self.session.with_untracked(|s| s.accepts_upload(&mime)) {
            log::debug!("Ignoring non-PDF upload: {} ({})", file.name(), mime);
            return;
        }

        let session = self.session;
        wasm_bindgen_futures::spawn_local(async move {
            match extract_document(file).await {
                Ok(document) => {
                    log::info!(
                        "📄 PDF extracted: {} ({} pages, {} chars)",
                        document.file_name,
                        document.page_count,
                        document.text.chars().count()
                    );
                    session.update(|s| {
                        s.apply_upload(&mime, document.file_name, document.text);
                    });
                }
                Err(e) => {
                    log::error!("PDF extraction failed: {}", e);
                }
            }
        });
    }
}

impl Default for ChatWidgetVm {
    fn default() -> Self {
        Self::new()
    }
}
