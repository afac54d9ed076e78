//! Onboarding widgets, leaf-first: card, flow gallery, settings
//! sub-widgets, onboarding panel and tutorial gallery.

pub mod card;
pub mod flow_gallery;
pub mod general_settings;
pub mod onboarding_panel;
pub mod theme_selector;
pub mod tutorial_gallery;
