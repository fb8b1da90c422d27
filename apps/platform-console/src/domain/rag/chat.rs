//! Chat messages, model catalog and answer structure.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person asking.
    User,
    /// The RAG service's reply.
    Assistant,
}

/// One entry in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// An assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A generation model the RAG service can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatModel {
    /// Identifier sent to the backend.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Models offered by the platform, default first.
pub const CHAT_MODELS: [ChatModel; 3] = [
    ChatModel {
        id: "llama-3.1",
        name: "Llama 3.1",
        description: "Default model",
    },
    ChatModel {
        id: "gemma-3-12b",
        name: "Gemma 3 12B",
        description: "Higher quality answers",
    },
    ChatModel {
        id: "deepseek-r1-8b",
        name: "Deepseek R1 8B",
        description: "Accuracy-focused reasoning",
    },
];

/// Identifier of the default model.
pub const DEFAULT_CHAT_MODEL: &str = CHAT_MODELS[0].id;

/// Look up a model by id.
#[must_use]
pub fn find_model(id: &str) -> Option<&'static ChatModel> {
    CHAT_MODELS.iter().find(|m| m.id == id)
}

const KEY_POINTS_MARKER: &str = "핵심내용:";
const DETAILS_MARKER: &str = "상세내용:";
const SOURCES_MARKER: &str = "출처:";

/// A labelled block of an assistant answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSection {
    /// Summary of the answer.
    KeyPoints(String),
    /// Longer explanation.
    Details(String),
    /// Documents the answer was grounded on.
    Sources(Vec<String>),
    /// Text outside any labelled block.
    Text(String),
}

/// Split an answer into its labelled sections.
///
/// A new section starts at every marker occurrence; blank sections are
/// dropped.
#[must_use]
pub fn parse_answer(content: &str) -> Vec<AnswerSection> {
    let mut cuts: Vec<usize> = [KEY_POINTS_MARKER, DETAILS_MARKER, SOURCES_MARKER]
        .iter()
        .flat_map(|marker| content.match_indices(marker).map(|(i, _)| i))
        .collect();
    cuts.push(0);
    cuts.push(content.len());
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .filter_map(|w| section_from(content[w[0]..w[1]].trim()))
        .collect()
}

fn section_from(chunk: &str) -> Option<AnswerSection> {
    if chunk.is_empty() {
        return None;
    }
    if let Some(rest) = chunk.strip_prefix(KEY_POINTS_MARKER) {
        return Some(AnswerSection::KeyPoints(rest.trim().to_string()));
    }
    if let Some(rest) = chunk.strip_prefix(DETAILS_MARKER) {
        return Some(AnswerSection::Details(rest.trim().to_string()));
    }
    if let Some(rest) = chunk.strip_prefix(SOURCES_MARKER) {
        let sources = rest
            .lines()
            .map(|line| line.trim().trim_start_matches("- ").trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        return Some(AnswerSection::Sources(sources));
    }
    Some(AnswerSection::Text(chunk.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_labelled_sections() {
        let answer = "핵심내용: 요약입니다.\n상세내용: 자세한 설명.\n출처:\n- report.pdf p.3\n- guide.pdf";
        assert_eq!(
            parse_answer(answer),
            vec![
                AnswerSection::KeyPoints("요약입니다.".to_string()),
                AnswerSection::Details("자세한 설명.".to_string()),
                AnswerSection::Sources(vec![
                    "report.pdf p.3".to_string(),
                    "guide.pdf".to_string()
                ]),
            ]
        );
    }

    #[test]
    fn unlabelled_answer_is_plain_text() {
        assert_eq!(
            parse_answer("  just an answer "),
            vec![AnswerSection::Text("just an answer".to_string())]
        );
        assert!(parse_answer("   ").is_empty());
    }

    #[test]
    fn leading_text_before_markers_is_kept() {
        let sections = parse_answer("Intro\n핵심내용: point");
        assert_eq!(sections[0], AnswerSection::Text("Intro".to_string()));
        assert_eq!(sections[1], AnswerSection::KeyPoints("point".to_string()));
    }

    #[test]
    fn default_model_is_in_catalog() {
        assert_eq!(DEFAULT_CHAT_MODEL, "llama-3.1");
        assert!(find_model("gemma-3-12b").is_some());
        assert!(find_model("gpt-4").is_none());
    }
}
