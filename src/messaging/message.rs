//! Chat message model.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery status of a chat message.
///
/// Statuses only move forward: Sending → Sent → Delivered → Read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Sent,
    Delivered,
    Read,
}

impl MessageStatus {
    /// Position in the forward-only status ladder.
    fn rank(self) -> u8 {
        match self {
            MessageStatus::Sending => 0,
            MessageStatus::Sent => 1,
            MessageStatus::Delivered => 2,
            MessageStatus::Read => 3,
        }
    }

    /// Whether a transition from `self` to `next` is a forward move.
    ///
    /// Skipping a step is allowed (a read receipt implies delivery);
    /// moving backward or staying put is not.
    pub fn can_advance_to(self, next: MessageStatus) -> bool {
        next.rank() > self.rank()
    }
}

/// Process-wide message id counter. Generation order is causal order.
static NEXT_MESSAGE_ID: AtomicU64 = AtomicU64::new(1);

fn next_message_id() -> String {
    format!("m{}", NEXT_MESSAGE_ID.fetch_add(1, Ordering::Relaxed))
}

/// A single chat message.
///
/// Immutable once created, except for `status`, which the conversation
/// store advances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id ("m1", "m2", ...); ids are assigned in send order
    pub id: String,

    /// Id of the sending contact
    pub sender_id: String,

    /// Display name of the sender
    pub sender_name: String,

    /// Message text, stored exactly as submitted
    pub content: String,

    /// When the message entered the conversation
    pub timestamp: DateTime<Utc>,

    /// Delivery status
    pub status: MessageStatus,
}

impl ChatMessage {
    /// Create a message stamped with the current time and a fresh id.
    pub fn new(sender_id: &str, sender_name: &str, content: &str) -> Self {
        Self {
            id: next_message_id(),
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
            status: MessageStatus::Sent,
        }
    }

    /// Override the status, for seeding historical conversations.
    pub fn with_status(mut self, status: MessageStatus) -> Self {
        self.status = status;
        self
    }
}
