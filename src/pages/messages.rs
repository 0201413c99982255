//! Messaging page
//!
//! Two-pane support inbox: a searchable conversation list and the active
//! thread. Sending appends an admin message, stamps the conversation
//! preview and records the message id as the scroll target.

use tracing::debug;

use crate::models::messaging::{ChatMessage, Conversation, MessageSender};
use crate::seed;
use crate::utils::errors::{AdminError, Result};
use crate::utils::helpers::now_label;
use crate::utils::ids::next_id;

/// Local state of the messaging page
#[derive(Debug, Clone)]
pub struct MessagingState {
    conversations: Vec<Conversation>,
    selected: Option<String>,
    search: String,
    /// id of the message the thread view should scroll to
    last_appended: Option<String>,
}

impl MessagingState {
    pub fn new() -> Self {
        Self::with_data(seed::conversations())
    }

    /// The first conversation starts selected, as the inbox opens on it
    pub fn with_data(conversations: Vec<Conversation>) -> Self {
        let selected = conversations.first().map(|c| c.id.clone());
        Self {
            conversations,
            selected,
            search: String::new(),
            last_appended: None,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Conversations matching the search on user name or email
    pub fn filtered(&self) -> Vec<&Conversation> {
        self.conversations
            .iter()
            .filter(|c| c.matches(&self.search))
            .collect()
    }

    pub fn select(&mut self, conversation_id: &str) -> Result<()> {
        if !self.conversations.iter().any(|c| c.id == conversation_id) {
            return Err(AdminError::ConversationNotFound {
                conversation_id: conversation_id.to_string(),
            });
        }
        self.selected = Some(conversation_id.to_string());
        self.last_appended = None;
        Ok(())
    }

    /// The conversation currently open in the thread pane
    pub fn active(&self) -> Option<&Conversation> {
        let id = self.selected.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Append an admin reply to the active conversation. Whitespace-only
    /// input is rejected and nothing changes. Returns the new message id.
    pub fn send(&mut self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(AdminError::Validation("Message text is required".to_string()));
        }
        let id = self.selected.clone().ok_or_else(|| {
            AdminError::Validation("No conversation is selected".to_string())
        })?;
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AdminError::ConversationNotFound {
                conversation_id: id.clone(),
            })?;

        let message = ChatMessage {
            id: next_id("msg"),
            text: text.to_string(),
            sender: MessageSender::Admin,
            timestamp: now_label(),
            read: true,
        };
        let message_id = message.id.clone();

        conversation.last_message = message.text.clone();
        conversation.last_message_time = message.timestamp.clone();
        conversation.messages.push(message);

        debug!(conversation_id = %id, message_id = %message_id, "Admin reply sent");
        self.last_appended = Some(message_id.clone());
        Ok(message_id)
    }

    /// Message id the thread view should scroll into view, if any
    pub fn scroll_target(&self) -> Option<&str> {
        self.last_appended.as_deref()
    }
}

impl Default for MessagingState {
    fn default() -> Self {
        Self::new()
    }
}
