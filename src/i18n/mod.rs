//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for managing
//! the languages ParentConnect can display. All language metadata, localized
//! strings, and catalog tooling live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Centralized localized string tables, one per language
//! - `validator`: Catalog completeness validation
//! - `metrics`: Lookup and fallback observability
//!
//! # Example
//!
//! ```rust,ignore
//! use parentconnect::i18n::{Language, LanguageRegistry};
//!
//! // Get canonical language (English)
//! let canonical = Language::canonical();
//!
//! // Create language from code
//! let gujarati = Language::from_code("gu")?;
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod metrics;
mod registry;
pub mod strings;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
pub use validator::{CatalogValidator, ValidationReport};
