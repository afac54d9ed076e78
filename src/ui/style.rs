//! Presentation values for every onboarding component, keyed by component.
//!
//! Colours are stored as palette roles and resolved against the active
//! `egui::Visuals`, so the same table serves light and dark themes.

use std::collections::HashMap;

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke, Visuals};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Card,
    CardHover,
    CardTitle,
    CardDescription,
    CardDifficulty,
    CardTime,
    CardStart,
    WelcomeHeading,
    Description,
    QuickTipsFrame,
    QuickTipsTitle,
    SettingsHeading,
    LinkButton,
    DoneButton,
    TutorialHeader,
    TutorialSubheader,
    GuideButton,
}

/// Palette slots, named after the roles a desktop palette exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRole {
    Base,
    AlternateBase,
    Mid,
    Text,
    Dark,
    Highlight,
    HighlightedText,
}

impl PaletteRole {
    pub fn resolve(self, visuals: &Visuals) -> Color32 {
        match self {
            PaletteRole::Base => visuals.extreme_bg_color,
            PaletteRole::AlternateBase => visuals.faint_bg_color,
            PaletteRole::Mid => visuals.widgets.noninteractive.bg_stroke.color,
            PaletteRole::Text => visuals.text_color(),
            PaletteRole::Dark => visuals.weak_text_color(),
            PaletteRole::Highlight => visuals.selection.bg_fill,
            PaletteRole::HighlightedText => visuals.selection.stroke.color,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleRule {
    pub fill: Option<PaletteRole>,
    pub stroke: Option<(f32, PaletteRole)>,
    pub text: Option<PaletteRole>,
    pub corner_radius: u8,
    pub padding: i8,
    pub font_size: Option<f32>,
    pub bold: bool,
}

impl StyleRule {
    pub fn fill_color(&self, visuals: &Visuals) -> Color32 {
        self.fill
            .map_or(Color32::TRANSPARENT, |role| role.resolve(visuals))
    }

    pub fn stroke(&self, visuals: &Visuals) -> Stroke {
        self.stroke.map_or(Stroke::NONE, |(width, role)| {
            Stroke::new(width, role.resolve(visuals))
        })
    }

    pub fn frame(&self, visuals: &Visuals) -> egui::Frame {
        egui::Frame::new()
            .fill(self.fill_color(visuals))
            .stroke(self.stroke(visuals))
            .corner_radius(CornerRadius::same(self.corner_radius))
            .inner_margin(Margin::same(self.padding))
    }

    pub fn rich(&self, text: &str, visuals: &Visuals) -> RichText {
        let mut rich = RichText::new(text);
        if let Some(size) = self.font_size {
            rich = rich.size(size);
        }
        if let Some(role) = self.text {
            rich = rich.color(role.resolve(visuals));
        }
        if self.bold {
            rich = rich.strong();
        }
        rich
    }

    /// A filled button with this rule's text, fill and rounding.
    pub fn button<'a>(&self, text: &str, visuals: &Visuals) -> egui::Button<'a> {
        egui::Button::new(self.rich(text, visuals))
            .fill(self.fill_color(visuals))
            .stroke(self.stroke(visuals))
            .corner_radius(CornerRadius::same(self.corner_radius))
    }
}

static STYLES: Lazy<HashMap<Component, StyleRule>> = Lazy::new(|| {
    use Component::*;
    use PaletteRole::*;

    HashMap::from([
        (
            Card,
            StyleRule {
                fill: Some(Base),
                stroke: Some((1.0, Mid)),
                corner_radius: 12,
                padding: 16,
                ..Default::default()
            },
        ),
        (
            CardHover,
            StyleRule {
                fill: Some(AlternateBase),
                stroke: Some((2.0, Highlight)),
                corner_radius: 12,
                padding: 16,
                ..Default::default()
            },
        ),
        (
            CardTitle,
            StyleRule {
                text: Some(Text),
                font_size: Some(14.0),
                bold: true,
                ..Default::default()
            },
        ),
        (
            CardDescription,
            StyleRule {
                text: Some(Text),
                font_size: Some(12.5),
                ..Default::default()
            },
        ),
        (
            CardDifficulty,
            StyleRule {
                text: Some(Highlight),
                font_size: Some(10.5),
                corner_radius: 4,
                ..Default::default()
            },
        ),
        (
            CardTime,
            StyleRule {
                text: Some(Dark),
                font_size: Some(11.5),
                ..Default::default()
            },
        ),
        (
            CardStart,
            StyleRule {
                text: Some(Highlight),
                bold: true,
                ..Default::default()
            },
        ),
        (
            WelcomeHeading,
            StyleRule {
                text: Some(Text),
                font_size: Some(28.0),
                bold: true,
                ..Default::default()
            },
        ),
        (
            Description,
            StyleRule {
                text: Some(Text),
                font_size: Some(14.0),
                ..Default::default()
            },
        ),
        (
            QuickTipsFrame,
            StyleRule {
                fill: Some(AlternateBase),
                stroke: Some((1.0, Mid)),
                corner_radius: 8,
                padding: 16,
                font_size: Some(13.0),
                ..Default::default()
            },
        ),
        (
            QuickTipsTitle,
            StyleRule {
                text: Some(Highlight),
                font_size: Some(16.0),
                bold: true,
                ..Default::default()
            },
        ),
        (
            SettingsHeading,
            StyleRule {
                text: Some(Text),
                font_size: Some(15.0),
                bold: true,
                ..Default::default()
            },
        ),
        (
            LinkButton,
            StyleRule {
                fill: Some(Highlight),
                text: Some(HighlightedText),
                corner_radius: 6,
                bold: true,
                ..Default::default()
            },
        ),
        (
            DoneButton,
            StyleRule {
                stroke: Some((1.0, Mid)),
                text: Some(Text),
                corner_radius: 6,
                font_size: Some(14.0),
                bold: true,
                ..Default::default()
            },
        ),
        (
            TutorialHeader,
            StyleRule {
                text: Some(Text),
                font_size: Some(26.0),
                bold: true,
                ..Default::default()
            },
        ),
        (
            TutorialSubheader,
            StyleRule {
                text: Some(Dark),
                font_size: Some(14.0),
                ..Default::default()
            },
        ),
        (
            GuideButton,
            StyleRule {
                fill: Some(Highlight),
                text: Some(HighlightedText),
                corner_radius: 8,
                font_size: Some(14.0),
                bold: true,
                ..Default::default()
            },
        ),
    ])
});

/// Style rule for `component`; unknown components fall back to plain text.
pub fn rule(component: Component) -> StyleRule {
    STYLES.get(&component).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_card_differs_from_resting_card() {
        let rest = rule(Component::Card);
        let hover = rule(Component::CardHover);
        assert_eq!(rest.corner_radius, hover.corner_radius);
        assert_ne!(rest.stroke, hover.stroke);
        assert_ne!(rest.fill, hover.fill);
    }

    #[test]
    fn roles_resolve_against_both_themes() {
        for visuals in [Visuals::light(), Visuals::dark()] {
            let highlight = PaletteRole::Highlight.resolve(&visuals);
            assert_eq!(highlight, visuals.selection.bg_fill);
            assert_ne!(
                rule(Component::LinkButton).fill_color(&visuals),
                Color32::TRANSPARENT
            );
        }
    }

    #[test]
    fn rules_without_fill_are_transparent() {
        let visuals = Visuals::dark();
        assert_eq!(
            rule(Component::CardTitle).fill_color(&visuals),
            Color32::TRANSPARENT
        );
        assert_eq!(rule(Component::CardTitle).stroke(&visuals), Stroke::NONE);
    }
}
