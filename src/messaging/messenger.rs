//! Outgoing message handling, including the simulated translation path.
//!
//! No real translation service is wired up. When translation applies, the
//! messenger waits out a configured latency window and then appends the
//! message with its content passed through unchanged, standing in for a
//! future translation API call.
//!
//! Concurrent sends are deliberately independent: nothing serializes
//! overlapping calls, so a synchronous send issued while a simulated
//! translation is pending lands first. Conversation order is completion
//! order.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::i18n::{Language, TranslationMetrics};
use crate::messaging::contacts::Contact;
use crate::messaging::conversations::ConversationStore;
use crate::messaging::message::ChatMessage;
use crate::preferences::{LanguagePreferences, TranslationPreferences};

/// Capacity of the messenger event channel.
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Default simulated translation latency.
pub const DEFAULT_TRANSLATION_DELAY: Duration = Duration::from_millis(1000);

/// Events emitted as sends complete, for the UI to surface.
#[derive(Debug, Clone)]
pub enum MessengerEvent {
    /// A message was appended without translation.
    MessageSent {
        conversation_id: String,
        message_id: String,
    },

    /// A message was appended after the simulated translation window.
    /// `notice` is the localized, user-visible description.
    MessageTranslated {
        conversation_id: String,
        message_id: String,
        source: Language,
        target: Language,
        notice: String,
    },
}

/// Result of a send call.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// The text was empty after trimming; nothing was appended.
    Empty,

    /// Appended synchronously.
    Sent(ChatMessage),

    /// Appended after the simulated translation delay.
    Translated {
        message: ChatMessage,
        source: Language,
        target: Language,
        notice: String,
    },
}

/// Sends messages on behalf of the signed-in user.
#[derive(Clone)]
pub struct Messenger {
    conversations: Arc<ConversationStore>,
    language: Arc<LanguagePreferences>,
    translation: Arc<TranslationPreferences>,
    sender_id: String,
    sender_name: String,
    delay: Duration,
    events: broadcast::Sender<MessengerEvent>,
}

impl Messenger {
    /// Build a messenger for `sender`.
    pub fn new(
        conversations: Arc<ConversationStore>,
        language: Arc<LanguagePreferences>,
        translation: Arc<TranslationPreferences>,
        sender: &Contact,
        delay: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            conversations,
            language,
            translation,
            sender_id: sender.id.to_string(),
            sender_name: sender.name.to_string(),
            delay,
            events,
        }
    }

    /// Subscribe to send events.
    pub fn subscribe(&self) -> broadcast::Receiver<MessengerEvent> {
        self.events.subscribe()
    }

    /// Send a message to a conversation.
    ///
    /// Whitespace-only text is dropped silently. With translation off, or
    /// with matching source and target languages, the message is appended
    /// immediately. Otherwise the call waits out the simulated latency
    /// window first; the translation settings are captured at call entry,
    /// so changing them mid-flight does not affect this send.
    pub async fn send_message(&self, conversation_id: &str, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            debug!("Dropping empty message to '{}'", conversation_id);
            return SendOutcome::Empty;
        }

        let state = self.translation.state();
        if state.enabled && state.source != state.target {
            debug!(
                "Simulating {} -> {} translation for '{}'",
                state.source, state.target, conversation_id
            );
            sleep(self.delay).await;
            TranslationMetrics::global().record_simulated_translation();

            // Content passes through unchanged; only the delay is real.
            let message = ChatMessage::new(&self.sender_id, &self.sender_name, text);
            self.conversations.append(conversation_id, message.clone());

            let notice = self.translation_notice(state.source, state.target);
            info!(
                "Message {} appended to '{}' after simulated {} -> {} translation",
                message.id, conversation_id, state.source, state.target
            );
            let _ = self.events.send(MessengerEvent::MessageTranslated {
                conversation_id: conversation_id.to_string(),
                message_id: message.id.clone(),
                source: state.source,
                target: state.target,
                notice: notice.clone(),
            });

            return SendOutcome::Translated {
                message,
                source: state.source,
                target: state.target,
                notice,
            };
        }

        let message = ChatMessage::new(&self.sender_id, &self.sender_name, text);
        self.conversations.append(conversation_id, message.clone());
        info!(
            "Message {} appended to '{}'",
            message.id, conversation_id
        );
        let _ = self.events.send(MessengerEvent::MessageSent {
            conversation_id: conversation_id.to_string(),
            message_id: message.id.clone(),
        });

        SendOutcome::Sent(message)
    }

    /// Localized, user-visible description of a simulated translation.
    fn translation_notice(&self, source: Language, target: Language) -> String {
        format!(
            "{} {} {} {}",
            self.language.translate("translated_from"),
            source.name(),
            self.language.translate("translated_to"),
            target.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::contacts::current_parent;
    use crate::messaging::message::MessageStatus;
    use crate::preferences::LanguagePreferences;
    use crate::storage::{MemoryStorage, PreferenceStorage};
    use serial_test::serial;

    fn build_messenger(delay: Duration) -> Messenger {
        let storage: Arc<dyn PreferenceStorage> = Arc::new(MemoryStorage::new());
        let language = Arc::new(LanguagePreferences::new(Arc::clone(&storage)));
        let translation = Arc::new(TranslationPreferences::new(storage, language.get()));
        Messenger::new(
            Arc::new(ConversationStore::new()),
            language,
            translation,
            &current_parent(),
            delay,
        )
    }

    // ==================== Synchronous Path Tests ====================

    #[tokio::test]
    async fn test_send_appends_immediately_when_translation_disabled() {
        let messenger = build_messenger(DEFAULT_TRANSLATION_DELAY);

        let outcome = messenger.send_message("t1", "Hello Ms. Smith").await;
        assert!(matches!(outcome, SendOutcome::Sent(_)));

        let log = messenger.conversations.list("t1");
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].content, "Hello Ms. Smith");
        assert_eq!(log[0].status, MessageStatus::Sent);
        assert_eq!(log[0].sender_id, "p1");
    }

    #[tokio::test]
    async fn test_send_is_synchronous_when_source_equals_target() {
        let messenger = build_messenger(DEFAULT_TRANSLATION_DELAY);
        messenger.translation.toggle();
        messenger.translation.set_source_language("es");
        messenger.translation.set_target_language("es");

        let outcome = messenger.send_message("t1", "hola").await;
        assert!(matches!(outcome, SendOutcome::Sent(_)));
    }

    #[tokio::test]
    async fn test_empty_message_is_dropped() {
        let messenger = build_messenger(DEFAULT_TRANSLATION_DELAY);

        let outcome = messenger.send_message("t1", "   ").await;
        assert!(matches!(outcome, SendOutcome::Empty));
        assert_eq!(messenger.conversations.message_count("t1"), 0);
    }

    // ==================== Simulated Translation Tests ====================

    // The simulated path feeds the global metrics singleton, so these run
    // serially with the metrics tests.
    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_translated_send_passes_content_through_unchanged() {
        let messenger = build_messenger(DEFAULT_TRANSLATION_DELAY);
        messenger.translation.toggle();
        messenger.translation.set_source_language("en");
        messenger.translation.set_target_language("es");

        let outcome = messenger.send_message("t1", "Hello").await;
        match outcome {
            SendOutcome::Translated {
                message,
                source,
                target,
                ..
            } => {
                assert_eq!(message.content, "Hello");
                assert_eq!(source.code(), "en");
                assert_eq!(target.code(), "es");
            }
            other => panic!("expected Translated, got {:?}", other),
        }

        assert_eq!(messenger.conversations.list("t1")[0].content, "Hello");
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_translated_send_emits_localized_notice() {
        let messenger = build_messenger(DEFAULT_TRANSLATION_DELAY);
        messenger.translation.toggle();
        messenger.translation.set_source_language("en");
        messenger.translation.set_target_language("es");
        let mut events = messenger.subscribe();

        messenger.send_message("t1", "Hello").await;

        match events.try_recv() {
            Ok(MessengerEvent::MessageTranslated { notice, .. }) => {
                assert_eq!(
                    notice,
                    "Your message was automatically translated from English to Spanish"
                );
            }
            other => panic!("expected MessageTranslated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sent_event_emitted_on_synchronous_path() {
        let messenger = build_messenger(DEFAULT_TRANSLATION_DELAY);
        let mut events = messenger.subscribe();

        messenger.send_message("t2", "Thanks for the reminder").await;

        match events.try_recv() {
            Ok(MessengerEvent::MessageSent {
                conversation_id, ..
            }) => assert_eq!(conversation_id, "t2"),
            other => panic!("expected MessageSent, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_settings_captured_at_call_entry() {
        let messenger = build_messenger(DEFAULT_TRANSLATION_DELAY);
        messenger.translation.toggle();
        messenger.translation.set_source_language("en");
        messenger.translation.set_target_language("fr");

        let pending = {
            let messenger = messenger.clone();
            tokio::spawn(async move { messenger.send_message("t1", "bonjour").await })
        };
        tokio::task::yield_now().await;

        // Disabling mid-flight must not cancel the pending send.
        messenger.translation.toggle();

        let outcome = pending.await.expect("send task");
        assert!(matches!(outcome, SendOutcome::Translated { .. }));
        assert_eq!(messenger.conversations.message_count("t1"), 1);
    }
}
