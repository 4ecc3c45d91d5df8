use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Идентификатор сообщения, уникален в пределах одной сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChatMessageId(pub u64);

impl ChatMessageId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ChatMessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

/// Сообщение чата. После создания не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Упорядоченная история сообщений сессии, только добавление.
///
/// Счётчик идентификаторов принадлежит хранилищу, а не процессу,
/// поэтому две сессии нумеруют сообщения независимо.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Добавить сообщение в конец истории
    pub fn append(&mut self, role: ChatRole, content: impl Into<String>) -> &ChatMessage {
        // Default даёт next_id = 0, первый id всё равно должен быть 1
        let id = ChatMessageId(self.next_id.max(1));
        self.next_id = id.0 + 1;

        self.messages.push(ChatMessage {
            id,
            role,
            content: content.into(),
            created_at: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
