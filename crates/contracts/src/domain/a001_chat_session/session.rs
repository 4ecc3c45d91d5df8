//! Контроллер сессии чата.
//!
//! Состояние одной загрузки страницы: история, текст документа и флаг
//! ожидания ответа. Асинхронные шаги не захватывают это состояние:
//! `submit` отдаёт снимок для запроса, а результат возвращается через
//! `finish_completion` / `fail_completion`.

use super::aggregate::{ChatMessage, ChatRole, ConversationStore};
use super::document::{is_pdf_mime, DocumentBuffer};
use super::intent::match_static_reply;
use crate::shared::completion::{CompletionRequest, COMPLETION_FAILURE_REPLY};
use serde::{Deserialize, Serialize};

/// Результат отправки реплики
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Пустой ввод, ничего не добавлено
    Ignored,
    /// Ответ найден среди статических и уже добавлен
    Answered,
    /// Нужен ответ удалённой модели
    NeedsCompletion(CompletionRequest),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSession {
    store: ConversationStore,
    document: DocumentBuffer,
    is_waiting: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            store: ConversationStore::new(),
            document: DocumentBuffer::new(),
            is_waiting: false,
        }
    }

    /// Отправить реплику пользователя.
    ///
    /// Сообщение пользователя добавляется сразу (с обрезанными пробелами).
    /// Статические правила смотрят на реплику целиком в нижнем регистре.
    pub fn submit(&mut self, input: &str) -> SendOutcome {
        let utterance = input.trim();
        if utterance.is_empty() {
            return SendOutcome::Ignored;
        }

        let history = self.store.messages().to_vec();
        self.store.append(ChatRole::User, utterance);
        self.is_waiting = true;

        if let Some(reply) = match_static_reply(input, &self.document) {
            self.finish_completion(reply);
            return SendOutcome::Answered;
        }

        SendOutcome::NeedsCompletion(CompletionRequest {
            history,
            document_text: self.document.text().to_string(),
            utterance: utterance.to_string(),
        })
    }

    /// Добавить ответ модели и снять флаг ожидания
    pub fn finish_completion(&mut self, reply: impl Into<String>) {
        self.store.append(ChatRole::Ai, reply);
        self.is_waiting = false;
    }

    /// Запрос не дошёл до модели: ответ заменяется фиксированным текстом
    pub fn fail_completion(&mut self) {
        self.finish_completion(COMPLETION_FAILURE_REPLY);
    }

    /// Принимается ли файл такого типа к загрузке
    pub fn accepts_upload(&self, mime: &str) -> bool {
        is_pdf_mime(mime)
    }

    /// Применить результат загрузки.
    ///
    /// Не-PDF не меняет ни текст документа, ни индикатор файла.
    /// Возвращает `true`, если документ заменён.
    pub fn apply_upload(
        &mut self,
        mime: &str,
        file_name: impl Into<String>,
        text: impl Into<String>,
    ) -> bool {
        if !self.accepts_upload(mime) {
            return false;
        }
        self.apply_document(file_name, text);
        true
    }

    /// Заменить текст документа после успешного извлечения
    pub fn apply_document(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.document.replace(file_name, text);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.store.messages()
    }

    pub fn document(&self) -> &DocumentBuffer {
        &self.document
    }

    pub fn is_waiting(&self) -> bool {
        self.is_waiting
    }
}
