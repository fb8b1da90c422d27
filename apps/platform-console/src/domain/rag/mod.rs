//! RAG Domain
//!
//! Indexed documents and chat types for the retrieval-augmented chat service.

mod chat;
mod files;

pub use chat::{
    AnswerSection, CHAT_MODELS, ChatMessage, ChatModel, ChatRole, DEFAULT_CHAT_MODEL, find_model,
    parse_answer,
};
pub use files::{UploadedFile, is_pdf_name, sort_newest_first};
