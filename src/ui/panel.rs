//! The `Panel` capability trait shared by every onboarding widget, and the
//! `TextLabel` handle whose identity survives retranslation.
//!
//! Widgets are plain structs composed of child widgets. The app shell owns
//! the top-level panels, calls `show` every frame and broadcasts locale
//! changes through `LocaleAware::retranslate`.

use eframe::egui;

use crate::i18n::Locale;

/// Anything that displays localized text and must refresh it in place.
pub trait LocaleAware {
    /// Regenerate every displayed string for `locale` without recreating the
    /// labels that show them.
    fn retranslate(&mut self, locale: Locale);
}

/// A displayable widget. Called once per frame on the UI thread.
pub trait Panel: LocaleAware {
    fn show(&mut self, ui: &mut egui::Ui);
}

/// A displayed string with a stable identity.
///
/// `retranslate` only swaps the text; the `id` assigned at construction
/// never changes.
#[derive(Debug)]
pub struct TextLabel {
    id: egui::Id,
    text: String,
}

impl TextLabel {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            text: String::new(),
        }
    }

    pub fn id(&self) -> egui::Id {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
