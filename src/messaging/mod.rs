//! Messaging between parents and teachers.
//!
//! There is no real backend: the contact directory is static mock data,
//! conversation logs live in memory for the session, and "translation" of
//! outgoing messages is a timed no-op passthrough.
//!
//! - `message`: chat message model and delivery-status state machine
//! - `conversations`: owned repository of per-contact conversation logs
//! - `contacts`: static contact directory and starter conversations
//! - `messenger`: outgoing sends, including the simulated translation path

mod contacts;
mod conversations;
mod message;
mod messenger;

pub use contacts::{current_parent, mock_teachers, seed_conversations, Contact, ContactRole};
pub use conversations::ConversationStore;
pub use message::{ChatMessage, MessageStatus};
pub use messenger::{
    Messenger, MessengerEvent, SendOutcome, DEFAULT_TRANSLATION_DELAY,
};
