//! User preference stores: active UI language and message translation
//! settings.
//!
//! Both stores keep their state in memory, persist every mutation to a
//! [`PreferenceStorage`], and are safe to share across tasks. Invalid
//! language codes are dropped with a warning, never surfaced as errors:
//! a bad locale value must not take the UI down.

use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::i18n::{Language, TranslationMetrics};
use crate::storage::{
    PreferenceStorage, PREFERRED_LANGUAGE_KEY, TRANSLATION_ENABLED_KEY, TRANSLATION_SOURCE_KEY,
    TRANSLATION_TARGET_KEY,
};

/// Capacity of the language-change broadcast channel. Notifications are
/// informational; a slow subscriber may lag and observe only the latest.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Store for the active UI language.
///
/// Holds the current [`Language`], persists changes under
/// `preferredLanguage`, and broadcasts every change to subscribers.
pub struct LanguagePreferences {
    storage: Arc<dyn PreferenceStorage>,
    active: RwLock<Language>,
    changes: broadcast::Sender<&'static str>,
}

impl LanguagePreferences {
    /// Build the store, restoring the persisted language.
    ///
    /// A missing or unrecognized persisted value falls back to the
    /// canonical language.
    pub fn new(storage: Arc<dyn PreferenceStorage>) -> Self {
        let active = match storage.get(PREFERRED_LANGUAGE_KEY) {
            Some(code) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(_) => {
                    warn!(
                        "Persisted language '{}' is not supported, falling back to '{}'",
                        code,
                        Language::canonical()
                    );
                    Language::canonical()
                }
            },
            None => Language::canonical(),
        };

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            storage,
            active: RwLock::new(active),
            changes,
        }
    }

    /// Get the current active language. Never fails.
    pub fn get(&self) -> Language {
        *self.active.read().expect("language lock poisoned")
    }

    /// Set the active language by code.
    ///
    /// Unknown codes are dropped with a warning. A valid new code updates
    /// the in-memory state synchronously, persists it, and notifies every
    /// subscriber.
    pub fn set(&self, code: &str) {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!("Ignoring language change: {}", e);
                return;
            }
        };

        {
            let mut active = self.active.write().expect("language lock poisoned");
            if *active == language {
                debug!("Language already set to '{}'", language);
                return;
            }
            *active = language;
        }

        self.storage.set(PREFERRED_LANGUAGE_KEY, language.code());
        // Send fails only when no subscriber exists, which is fine.
        let _ = self.changes.send(language.code());
        info!("Active language changed to '{}'", language);
    }

    /// Look up a UI string in the active language.
    ///
    /// Fallback chain: active-language table, then the canonical table,
    /// then the literal key. Never panics.
    pub fn translate(&self, key: &str) -> String {
        let metrics = TranslationMetrics::global();
        metrics.record_lookup();

        let language = self.get();
        if let Some(value) = language.strings().lookup(key) {
            return value.to_string();
        }

        if let Some(value) = Language::canonical().strings().lookup(key) {
            if !language.is_canonical() {
                metrics.record_canonical_fallback();
            }
            return value.to_string();
        }

        metrics.record_literal_fallback();
        debug!("No translation found for key '{}'", key);
        key.to_string()
    }

    /// Subscribe to language changes. Each change delivers the new code.
    pub fn subscribe(&self) -> broadcast::Receiver<&'static str> {
        self.changes.subscribe()
    }
}

/// Snapshot of the translation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationState {
    pub enabled: bool,
    pub source: Language,
    pub target: Language,
}

struct TranslationInner {
    enabled: bool,
    source: Language,
    target: Language,
    /// Set once the user picks a source language explicitly; from then on
    /// the source no longer follows the active UI language this session.
    source_overridden: bool,
    /// Same, for the target language.
    target_overridden: bool,
}

/// Store for the message translation settings.
///
/// The enabled flag and both languages persist independently; there is no
/// transactional guarantee spanning them, matching their independent
/// lifecycle in the UI.
pub struct TranslationPreferences {
    storage: Arc<dyn PreferenceStorage>,
    inner: RwLock<TranslationInner>,
}

impl TranslationPreferences {
    /// Build the store, restoring persisted settings.
    ///
    /// Missing or malformed fields default to disabled with both languages
    /// set to the current active UI language.
    pub fn new(storage: Arc<dyn PreferenceStorage>, active: Language) -> Self {
        let enabled = match storage.get(TRANSLATION_ENABLED_KEY).as_deref() {
            Some("true") => true,
            Some("false") | None => false,
            Some(other) => {
                warn!(
                    "Persisted translation flag '{}' is malformed, defaulting to disabled",
                    other
                );
                false
            }
        };

        let source = Self::restore_language(&*storage, TRANSLATION_SOURCE_KEY, active);
        let target = Self::restore_language(&*storage, TRANSLATION_TARGET_KEY, active);

        Self {
            storage,
            inner: RwLock::new(TranslationInner {
                enabled,
                source,
                target,
                source_overridden: false,
                target_overridden: false,
            }),
        }
    }

    fn restore_language(
        storage: &dyn PreferenceStorage,
        key: &str,
        fallback: Language,
    ) -> Language {
        match storage.get(key) {
            Some(code) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(_) => {
                    warn!(
                        "Persisted value '{}' for '{}' is not a supported language, using '{}'",
                        code, key, fallback
                    );
                    fallback
                }
            },
            None => fallback,
        }
    }

    /// Get a snapshot of the current settings.
    pub fn state(&self) -> TranslationState {
        let inner = self.inner.read().expect("translation lock poisoned");
        TranslationState {
            enabled: inner.enabled,
            source: inner.source,
            target: inner.target,
        }
    }

    /// Flip the enabled flag and persist it.
    pub fn toggle(&self) {
        let enabled = {
            let mut inner = self.inner.write().expect("translation lock poisoned");
            inner.enabled = !inner.enabled;
            inner.enabled
        };

        self.storage
            .set(TRANSLATION_ENABLED_KEY, if enabled { "true" } else { "false" });
        info!(
            "Message translation {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Set the source language by code and persist it.
    ///
    /// Marks the source as explicitly chosen: it stops following the
    /// active UI language for the rest of the session. Unknown codes are
    /// dropped. Source and target are never cross-validated; a matching
    /// pair simply makes translation a no-op.
    pub fn set_source_language(&self, code: &str) {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!("Ignoring translation source change: {}", e);
                return;
            }
        };

        {
            let mut inner = self.inner.write().expect("translation lock poisoned");
            inner.source = language;
            inner.source_overridden = true;
        }
        self.storage.set(TRANSLATION_SOURCE_KEY, language.code());
        info!("Translation source language set to '{}'", language);
    }

    /// Set the target language by code and persist it. See
    /// [`set_source_language`](Self::set_source_language).
    pub fn set_target_language(&self, code: &str) {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!("Ignoring translation target change: {}", e);
                return;
            }
        };

        {
            let mut inner = self.inner.write().expect("translation lock poisoned");
            inner.target = language;
            inner.target_overridden = true;
        }
        self.storage.set(TRANSLATION_TARGET_KEY, language.code());
        info!("Translation target language set to '{}'", language);
    }

    /// React to a change of the active UI language.
    ///
    /// Sides the user has not explicitly chosen this session re-derive
    /// from the new active language; explicit choices stay put.
    pub fn on_language_changed(&self, code: &str) {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!("Ignoring language-change notification: {}", e);
                return;
            }
        };

        let (resync_source, resync_target) = {
            let mut inner = self.inner.write().expect("translation lock poisoned");
            let resync_source = !inner.source_overridden;
            let resync_target = !inner.target_overridden;
            if resync_source {
                inner.source = language;
            }
            if resync_target {
                inner.target = language;
            }
            (resync_source, resync_target)
        };

        if resync_source {
            self.storage.set(TRANSLATION_SOURCE_KEY, language.code());
        }
        if resync_target {
            self.storage.set(TRANSLATION_TARGET_KEY, language.code());
        }
        if resync_source || resync_target {
            debug!("Translation languages resynced to '{}'", language);
        }
    }
}

/// Keep translation languages in sync with the active UI language.
///
/// Subscribes to the language store and forwards every change to
/// [`TranslationPreferences::on_language_changed`] until the language
/// store is dropped.
pub fn spawn_resync_task(
    language: &LanguagePreferences,
    translation: Arc<TranslationPreferences>,
) -> tokio::task::JoinHandle<()> {
    let mut changes = language.subscribe();
    tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(code) => translation.on_language_changed(code),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Language-change subscriber lagged, skipped {}", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
