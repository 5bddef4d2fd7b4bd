use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use parentconnect::config::Config;
use parentconnect::i18n::{CatalogValidator, TranslationMetrics};
use parentconnect::messaging::{
    current_parent, mock_teachers, seed_conversations, ConversationStore, Messenger,
};
use parentconnect::preferences::{
    spawn_resync_task, LanguagePreferences, TranslationPreferences,
};
use parentconnect::storage::{PreferenceStorage, SqliteStorage, PREFERRED_LANGUAGE_KEY};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("parentconnect=info".parse()?),
        )
        .init();

    info!("Starting ParentConnect demo session");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Surface catalog gaps once at startup
    let catalog = CatalogValidator::validate();
    if catalog.has_errors() {
        warn!("Locale catalog errors: {:?}", catalog.errors);
    }
    if catalog.has_warnings() {
        info!(
            "{} locale strings fall back to English",
            catalog.warnings.len()
        );
    }

    // Open the preference store
    if let Some(parent) = Path::new(&config.database_path).parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let storage: Arc<dyn PreferenceStorage> = Arc::new(
        SqliteStorage::open(&config.database_path)
            .with_context(|| format!("Failed to open {}", config.database_path))?,
    );

    // Restore preferences and keep translation languages in sync
    let language = Arc::new(LanguagePreferences::new(Arc::clone(&storage)));
    let translation = Arc::new(TranslationPreferences::new(
        Arc::clone(&storage),
        language.get(),
    ));
    let _resync = spawn_resync_task(&language, Arc::clone(&translation));

    // The configured default only applies to a first run; a persisted
    // choice wins.
    if storage.get(PREFERRED_LANGUAGE_KEY).is_none() {
        language.set(&config.default_language);
    }
    info!(
        "Active language: {} ({})",
        language.get().name(),
        language.get().native_name()
    );

    // Seed the mock session
    let conversations = Arc::new(ConversationStore::new());
    seed_conversations(&conversations);
    for teacher in mock_teachers() {
        info!(
            "{}: {} ({} messages)",
            language.translate("contacts"),
            teacher.name,
            conversations.message_count(teacher.id)
        );
    }

    let messenger = Messenger::new(
        Arc::clone(&conversations),
        Arc::clone(&language),
        Arc::clone(&translation),
        &current_parent(),
        config.translation_delay(),
    );

    // A plain send completes synchronously
    let outcome = messenger
        .send_message("t1", "Thank you for the update on Emily!")
        .await;
    if let parentconnect::messaging::SendOutcome::Sent(message) = outcome {
        // Walk the delivery ladder the way a connected backend would.
        conversations.mark_delivered("t1", &message.id);
        conversations.mark_read("t1", &message.id);
    }

    // A simulated translation waits out the configured latency
    if !translation.state().enabled {
        translation.toggle();
    }
    translation.set_source_language("en");
    translation.set_target_language("es");
    messenger
        .send_message("t1", "Could we schedule a meeting next week?")
        .await;

    for message in conversations.list("t1") {
        info!(
            "[{}] {}: {}",
            message.timestamp.format("%H:%M"),
            message.sender_name,
            message.content
        );
    }

    let report = TranslationMetrics::global().report();
    info!(
        "Lookup metrics: {}",
        serde_json::to_string(&report).context("Failed to serialize metrics report")?
    );

    info!("Session complete");
    Ok(())
}
