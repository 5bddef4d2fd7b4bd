//! Static contact directory and starter conversations.
//!
//! There is no backend; the contact list and conversation history a fresh
//! session starts with are fixed mock data.

use chrono::{DateTime, Duration, Utc};

use crate::messaging::conversations::ConversationStore;
use crate::messaging::message::{ChatMessage, MessageStatus};

/// Role of a chat participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    Parent,
    Teacher,
}

/// A chat contact.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: &'static str,
    pub name: &'static str,
    pub role: ContactRole,
    pub is_online: bool,
    pub last_seen: Option<DateTime<Utc>>,
}

/// The signed-in parent account.
pub fn current_parent() -> Contact {
    Contact {
        id: "p1",
        name: "Parent",
        role: ContactRole::Parent,
        is_online: true,
        last_seen: None,
    }
}

/// The teachers available in the contact list.
pub fn mock_teachers() -> Vec<Contact> {
    let now = Utc::now();
    vec![
        Contact {
            id: "t1",
            name: "Ms. Smith",
            role: ContactRole::Teacher,
            is_online: true,
            last_seen: None,
        },
        Contact {
            id: "t2",
            name: "Mr. Johnson",
            role: ContactRole::Teacher,
            is_online: false,
            last_seen: Some(now - Duration::hours(1)),
        },
        Contact {
            id: "t3",
            name: "Mrs. Davis",
            role: ContactRole::Teacher,
            is_online: false,
            last_seen: Some(now - Duration::days(1)),
        },
    ]
}

/// Seed the starter conversations a fresh session begins with.
///
/// Ms. Smith has a short exchange with the parent, Mr. Johnson left a
/// reminder, Mrs. Davis has no history yet.
pub fn seed_conversations(store: &ConversationStore) {
    store.append(
        "t1",
        ChatMessage::new(
            "t1",
            "Ms. Smith",
            "Hello! Emily has been doing great in math class this week.",
        )
        .with_status(MessageStatus::Read),
    );
    store.append(
        "t1",
        ChatMessage::new(
            "p1",
            "Parent",
            "That's great to hear! She's been practicing a lot at home.",
        )
        .with_status(MessageStatus::Read),
    );
    store.append(
        "t2",
        ChatMessage::new(
            "t2",
            "Mr. Johnson",
            "Reminder: The science project is due next Friday.",
        )
        .with_status(MessageStatus::Read),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_teachers_roster() {
        let teachers = mock_teachers();
        assert_eq!(teachers.len(), 3);
        assert!(teachers.iter().all(|t| t.role == ContactRole::Teacher));

        let smith = &teachers[0];
        assert_eq!(smith.id, "t1");
        assert!(smith.is_online);
        assert!(smith.last_seen.is_none());

        let johnson = &teachers[1];
        assert!(!johnson.is_online);
        assert!(johnson.last_seen.is_some());
    }

    #[test]
    fn test_current_parent() {
        let parent = current_parent();
        assert_eq!(parent.id, "p1");
        assert_eq!(parent.role, ContactRole::Parent);
    }

    #[test]
    fn test_seed_conversations() {
        let store = ConversationStore::new();
        seed_conversations(&store);

        assert_eq!(store.message_count("t1"), 2);
        assert_eq!(store.message_count("t2"), 1);
        assert_eq!(store.message_count("t3"), 0);

        // History is already read, and ordered teacher-then-parent.
        let smith_log = store.list("t1");
        assert_eq!(smith_log[0].sender_id, "t1");
        assert_eq!(smith_log[1].sender_id, "p1");
        assert!(smith_log
            .iter()
            .all(|m| m.status == MessageStatus::Read));
    }
}
