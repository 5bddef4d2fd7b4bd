//! Core library for ParentConnect, a parent-teacher communication app.
//!
//! This crate holds everything under the view layer: the supported-language
//! catalog and localized strings, the persisted language and translation
//! preference stores with their change notifications, and the messaging
//! layer with its simulated translation delay. All data is local; there is
//! no server, no real authentication, and no real translation service.

pub mod config;
pub mod i18n;
pub mod messaging;
pub mod preferences;
pub mod storage;
