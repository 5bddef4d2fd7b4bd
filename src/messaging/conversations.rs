//! Conversation repository.
//!
//! Owns every conversation log, keyed by contact id. All mutation goes
//! through this store; callers never touch the underlying collection.
//! Conversations are session-scoped and created lazily on first append.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::messaging::message::{ChatMessage, MessageStatus};

/// In-memory store of conversation logs.
///
/// Message order within a conversation is insertion order, which for
/// simulated sends is completion order, not invocation order.
#[derive(Default)]
pub struct ConversationStore {
    conversations: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

impl ConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a conversation, creating it if needed.
    pub fn append(&self, conversation_id: &str, message: ChatMessage) {
        let mut conversations = self.conversations.lock().expect("conversation lock poisoned");
        debug!(
            "Appending message {} to conversation '{}'",
            message.id, conversation_id
        );
        conversations
            .entry(conversation_id.to_string())
            .or_default()
            .push(message);
    }

    /// List a conversation's messages in display order.
    ///
    /// Unknown conversation ids yield an empty list.
    pub fn list(&self, conversation_id: &str) -> Vec<ChatMessage> {
        self.conversations
            .lock()
            .expect("conversation lock poisoned")
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of messages in a conversation.
    pub fn message_count(&self, conversation_id: &str) -> usize {
        self.conversations
            .lock()
            .expect("conversation lock poisoned")
            .get(conversation_id)
            .map(|messages| messages.len())
            .unwrap_or(0)
    }

    /// Ids of every conversation that has been created.
    pub fn conversation_ids(&self) -> Vec<String> {
        self.conversations
            .lock()
            .expect("conversation lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Mark a message as delivered.
    ///
    /// Returns `true` if the status advanced. Backward or repeated
    /// transitions are ignored, as are unknown ids.
    pub fn mark_delivered(&self, conversation_id: &str, message_id: &str) -> bool {
        self.advance_status(conversation_id, message_id, MessageStatus::Delivered)
    }

    /// Mark a message as read. See [`mark_delivered`](Self::mark_delivered).
    pub fn mark_read(&self, conversation_id: &str, message_id: &str) -> bool {
        self.advance_status(conversation_id, message_id, MessageStatus::Read)
    }

    fn advance_status(
        &self,
        conversation_id: &str,
        message_id: &str,
        status: MessageStatus,
    ) -> bool {
        let mut conversations = self.conversations.lock().expect("conversation lock poisoned");
        let Some(messages) = conversations.get_mut(conversation_id) else {
            return false;
        };
        let Some(message) = messages.iter_mut().find(|m| m.id == message_id) else {
            return false;
        };

        if message.status.can_advance_to(status) {
            message.status = status;
            true
        } else {
            false
        }
    }
}
