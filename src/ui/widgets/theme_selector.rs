//! Light / dark / follow-system theme picker.

use eframe::egui::{self, ThemePreference};

use crate::i18n::{Locale, Msg};
use crate::ui::panel::{LocaleAware, Panel, TextLabel};
use crate::ui::style::{self, Component};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
    System,
}

impl ThemeChoice {
    const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];

    fn msg(self) -> Msg {
        match self {
            ThemeChoice::Light => Msg::ThemeLight,
            ThemeChoice::Dark => Msg::ThemeDark,
            ThemeChoice::System => Msg::ThemeSystem,
        }
    }

    pub fn preference(self) -> ThemePreference {
        match self {
            ThemeChoice::Light => ThemePreference::Light,
            ThemeChoice::Dark => ThemePreference::Dark,
            ThemeChoice::System => ThemePreference::System,
        }
    }
}

pub struct ThemeSelector {
    heading: TextLabel,
    choice_labels: [TextLabel; 3],
    selected: ThemeChoice,
    applied: Option<ThemeChoice>,
}

impl ThemeSelector {
    pub fn new(locale: Locale) -> Self {
        let mut this = Self {
            heading: TextLabel::new("theme_heading"),
            choice_labels: ThemeChoice::ALL.map(|c| TextLabel::new(("theme_choice", c.msg()))),
            selected: ThemeChoice::System,
            applied: None,
        };
        this.retranslate(locale);
        this
    }

    pub fn selected(&self) -> ThemeChoice {
        self.selected
    }

    pub fn select(&mut self, choice: ThemeChoice) {
        self.selected = choice;
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        std::iter::once(&self.heading).chain(self.choice_labels.iter())
    }
}

impl LocaleAware for ThemeSelector {
    fn retranslate(&mut self, locale: Locale) {
        self.heading.set_text(Msg::ThemeHeading.text(locale));
        for (label, choice) in self.choice_labels.iter_mut().zip(ThemeChoice::ALL) {
            label.set_text(choice.msg().text(locale));
        }
    }
}

impl Panel for ThemeSelector {
    fn show(&mut self, ui: &mut egui::Ui) {
        let visuals = ui.visuals().clone();
        ui.label(style::rule(Component::SettingsHeading).rich(self.heading.text(), &visuals));
        ui.horizontal(|ui| {
            for (label, choice) in self.choice_labels.iter().zip(ThemeChoice::ALL) {
                ui.selectable_value(&mut self.selected, choice, label.text());
            }
        });

        if self.applied != Some(self.selected) {
            log::info!("applying theme {:?}", self.selected);
            ui.ctx().set_theme(self.selected.preference());
            self.applied = Some(self.selected);
        }
    }
}
