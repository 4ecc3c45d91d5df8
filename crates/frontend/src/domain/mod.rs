pub mod a001_chat_session;
