//! Shared data-model types for the onboarding widgets.
//!
//! Everything here is plain data: no egui state, no rendering. Card content
//! is resolved from these types once, at construction.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::i18n::Msg;

// ── Difficulty ─────────────────────────────────────────────────────────────────

/// Difficulty tag shown as a badge on every tutorial card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Catalog key for the localized badge text.
    pub fn msg(self) -> Msg {
        match self {
            Difficulty::Beginner => Msg::Beginner,
            Difficulty::Intermediate => Msg::Intermediate,
            Difficulty::Advanced => Msg::Advanced,
        }
    }
}

// ── Tutorial identifiers ───────────────────────────────────────────────────────

/// Stable string identifier carried by the "tutorial selected" notification,
/// e.g. `"sketching-basics"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TutorialId(&'static str);

impl TutorialId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TutorialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ── Icons ──────────────────────────────────────────────────────────────────────

/// Name of an icon file inside the configured icon directory
/// (e.g. `"Sketcher_NewSketch.svg"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef(&'static str);

impl IconRef {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }

    /// Resolve to an image URI the egui loaders understand.
    ///
    /// Returns `None` for an empty or path-like name, when no icon directory
    /// is configured, or when the file does not exist. Callers render a blank
    /// icon in that case.
    pub fn resolve(&self, icon_dir: Option<&Path>) -> Option<String> {
        let name = self.0;
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            log::debug!("icon ref {name:?} is malformed, rendering blank");
            return None;
        }
        let path = icon_dir?.join(name);
        if !path.is_file() {
            log::debug!("icon {} not found, rendering blank", path.display());
            return None;
        }
        Some(format!("file://{}", path.display()))
    }
}
