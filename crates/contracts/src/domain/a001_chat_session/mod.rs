//! Сессия чата: хранилище сообщений, буфер документа, статические ответы

pub mod aggregate;
pub mod document;
pub mod intent;
pub mod session;
