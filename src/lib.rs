//! First-run onboarding and tutorial gallery for a desktop CAD application.

pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod launcher;
pub mod types;
pub mod ui;
