//! Support messaging models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Admin,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: MessageSender,
    /// Short clock label ("10:30") or a relative day ("Hier")
    pub timestamp: String,
    pub read: bool,
}

/// A support thread with one learner. `last_message` and `last_message_time`
/// are denormalized copies of the tail of `messages`, kept in sync on append.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub last_message: String,
    pub last_message_time: String,
    pub unread_count: u32,
    pub status: ConversationStatus,
    /// Append-only, ordered oldest first
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Messaging list search: case-insensitive substring on name or email
    pub fn matches(&self, query: &str) -> bool {
        crate::utils::helpers::contains_ci(&self.user_name, query)
            || crate::utils::helpers::contains_ci(&self.user_email, query)
    }
}
