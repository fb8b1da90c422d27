//! Chat Session Use Case
//!
//! One conversation with the RAG service.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::ports::RagPort;
use crate::domain::rag::ChatMessage;

/// Appended in place of an answer when the ask call fails.
pub const APOLOGY_MESSAGE: &str = "죄송합니다. 응답을 생성하는 중 오류가 발생했습니다.";

/// Status lines shown while waiting for an answer, in rotation.
pub const LOADING_MESSAGES: [&str; 6] = [
    "답변을 생성하고 있습니다...",
    "열심히 생각하는 중...",
    "데이터를 분석하고 있어요...",
    "잠시만 기다려주세요...",
    "거의 다 됐어요...",
    "정확한 답변을 위해 노력 중!",
];

/// What a send did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input or a reply already pending; nothing changed.
    Ignored,
    /// The service answered; the answer was appended.
    Answered(String),
    /// The call failed; the apology was appended.
    Failed(String),
}

#[derive(Debug, Default)]
struct ChatState {
    history: Vec<ChatMessage>,
    pending: bool,
}

/// Clears `pending` when dropped, so a send that is cancelled mid-request
/// (Ctrl-C, a timeout, a dropped future) does not leave the session stuck.
struct PendingGuard<'a> {
    state: &'a Mutex<ChatState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().pending = false;
    }
}

/// Use case behind the chat box.
pub struct ChatSession<R>
where
    R: RagPort,
{
    rag: Arc<R>,
    model: String,
    state: Mutex<ChatState>,
}

impl<R> ChatSession<R>
where
    R: RagPort,
{
    /// Start an empty conversation using `model`.
    pub fn new(rag: Arc<R>, model: impl Into<String>) -> Self {
        Self {
            rag,
            model: model.into(),
            state: Mutex::new(ChatState::default()),
        }
    }

    /// Model the questions are sent with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether a reply is outstanding.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending
    }

    /// Conversation so far.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.state.lock().history.clone()
    }

    /// Send one question and append the reply (or the apology).
    pub async fn send(&self, input: &str) -> SendOutcome {
        let query = input.trim();
        {
            let mut state = self.state.lock();
            if query.is_empty() || state.pending {
                return SendOutcome::Ignored;
            }
            state.history.push(ChatMessage::user(query));
            state.pending = true;
        }
        let guard = PendingGuard { state: &self.state };

        let result = self.rag.ask(query, &self.model).await;
        drop(guard);

        let mut state = self.state.lock();
        match result {
            Ok(answer) => {
                state.history.push(ChatMessage::assistant(answer.as_str()));
                SendOutcome::Answered(answer)
            }
            Err(e) => {
                tracing::error!(model = %self.model, error = %e, "chat request failed");
                state.history.push(ChatMessage::assistant(APOLOGY_MESSAGE));
                SendOutcome::Failed(e.to_string())
            }
        }
    }
}
