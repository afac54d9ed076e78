//! Application-level error types.
//!
//! The onboarding widgets themselves never fail: missing icons render blank
//! and URL launches are fire-and-forget. Only startup can go wrong; a bad
//! `--locale` is rejected by clap before any of these are built.

use thiserror::Error;

/// Errors that can occur while starting or running the onboarding shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),

    #[error("analytics serialisation error: {0}")]
    Analytics(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
