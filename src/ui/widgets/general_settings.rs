//! Language, units, navigation style and interface scale.
//!
//! Changing the language does not retranslate anything here directly; it
//! sends `LocaleChanged` and waits for the controller's broadcast.

use eframe::egui;

use crate::engine::events::{EventSender, OnboardingEvent, notify};
use crate::i18n::{Locale, Msg};
use crate::ui::panel::{LocaleAware, Panel, TextLabel};
use crate::ui::style::{self, Component};

const SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.75..=2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationStyle {
    Cad,
    Blender,
    Touchpad,
    OpenInventor,
}

impl NavigationStyle {
    const ALL: [NavigationStyle; 4] = [
        NavigationStyle::Cad,
        NavigationStyle::Blender,
        NavigationStyle::Touchpad,
        NavigationStyle::OpenInventor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NavigationStyle::Cad => "CAD",
            NavigationStyle::Blender => "Blender",
            NavigationStyle::Touchpad => "Touchpad",
            NavigationStyle::OpenInventor => "OpenInventor",
        }
    }
}

pub struct GeneralSettings {
    heading: TextLabel,
    language_label: TextLabel,
    units_label: TextLabel,
    metric_label: TextLabel,
    imperial_label: TextLabel,
    navigation_label: TextLabel,
    scale_label: TextLabel,

    locale: Locale,
    unit_system: UnitSystem,
    navigation: NavigationStyle,
    scale: f32,
    applied_scale: Option<f32>,
    tx: EventSender,
}

impl GeneralSettings {
    pub fn new(locale: Locale, tx: EventSender) -> Self {
        let mut this = Self {
            heading: TextLabel::new("general_heading"),
            language_label: TextLabel::new("general_language"),
            units_label: TextLabel::new("general_units"),
            metric_label: TextLabel::new("general_units_metric"),
            imperial_label: TextLabel::new("general_units_imperial"),
            navigation_label: TextLabel::new("general_navigation"),
            scale_label: TextLabel::new("general_scale"),
            locale,
            unit_system: UnitSystem::Metric,
            navigation: NavigationStyle::Cad,
            scale: 1.0,
            applied_scale: None,
            tx,
        };
        this.retranslate(locale);
        this
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn navigation(&self) -> NavigationStyle {
        self.navigation
    }

    /// User picked a language. Notifies the controller only on a real change.
    pub fn select_locale(&mut self, locale: Locale) {
        if locale == self.locale {
            return;
        }
        log::info!("language changed {} -> {}", self.locale, locale);
        self.locale = locale;
        notify(&self.tx, OnboardingEvent::LocaleChanged(locale));
    }

    pub fn select_unit_system(&mut self, units: UnitSystem) {
        if units != self.unit_system {
            log::info!("unit system set to {units:?}");
            self.unit_system = units;
        }
    }

    pub fn select_navigation(&mut self, navigation: NavigationStyle) {
        if navigation != self.navigation {
            log::info!("navigation style set to {}", navigation.name());
            self.navigation = navigation;
        }
    }

    pub fn labels(&self) -> [&TextLabel; 7] {
        [
            &self.heading,
            &self.language_label,
            &self.units_label,
            &self.metric_label,
            &self.imperial_label,
            &self.navigation_label,
            &self.scale_label,
        ]
    }

    fn units_text(&self, units: UnitSystem) -> &str {
        match units {
            UnitSystem::Metric => self.metric_label.text(),
            UnitSystem::Imperial => self.imperial_label.text(),
        }
    }
}

impl LocaleAware for GeneralSettings {
    fn retranslate(&mut self, locale: Locale) {
        self.locale = locale;
        self.heading.set_text(Msg::GeneralHeading.text(locale));
        self.language_label.set_text(Msg::Language.text(locale));
        self.units_label.set_text(Msg::UnitSystem.text(locale));
        self.metric_label.set_text(Msg::UnitMetric.text(locale));
        self.imperial_label.set_text(Msg::UnitImperial.text(locale));
        self.navigation_label.set_text(Msg::NavigationStyle.text(locale));
        self.scale_label.set_text(Msg::InterfaceScale.text(locale));
    }
}

impl Panel for GeneralSettings {
    fn show(&mut self, ui: &mut egui::Ui) {
        let visuals = ui.visuals().clone();
        ui.label(style::rule(Component::SettingsHeading).rich(self.heading.text(), &visuals));

        let mut picked_locale = None;
        let mut picked_units = None;
        let mut picked_navigation = None;
        let mut scale = self.scale;
        let mut scale_settled = true;

        egui::Grid::new("general_settings_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.label(self.language_label.text());
                egui::ComboBox::from_id_salt("general_language_combo")
                    .selected_text(self.locale.native_name())
                    .show_ui(ui, |ui| {
                        for locale in Locale::ALL {
                            if ui
                                .selectable_label(locale == self.locale, locale.native_name())
                                .clicked()
                            {
                                picked_locale = Some(locale);
                            }
                        }
                    });
                ui.end_row();

                ui.label(self.units_label.text());
                egui::ComboBox::from_id_salt("general_units_combo")
                    .selected_text(self.units_text(self.unit_system))
                    .show_ui(ui, |ui| {
                        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
                            if ui
                                .selectable_label(units == self.unit_system, self.units_text(units))
                                .clicked()
                            {
                                picked_units = Some(units);
                            }
                        }
                    });
                ui.end_row();

                ui.label(self.navigation_label.text());
                egui::ComboBox::from_id_salt("general_navigation_combo")
                    .selected_text(self.navigation.name())
                    .show_ui(ui, |ui| {
                        for navigation in NavigationStyle::ALL {
                            if ui
                                .selectable_label(navigation == self.navigation, navigation.name())
                                .clicked()
                            {
                                picked_navigation = Some(navigation);
                            }
                        }
                    });
                ui.end_row();

                ui.label(self.scale_label.text());
                let response = ui.add(
                    egui::Slider::new(&mut scale, SCALE_RANGE)
                        .step_by(0.25)
                        .fixed_decimals(2),
                );
                scale_settled = !response.dragged();
                ui.end_row();
            });

        if let Some(locale) = picked_locale {
            self.select_locale(locale);
        }
        if let Some(units) = picked_units {
            self.select_unit_system(units);
        }
        if let Some(navigation) = picked_navigation {
            self.select_navigation(navigation);
        }
        self.scale = scale;
        if scale_settled && self.applied_scale != Some(self.scale) {
            log::info!("interface scale set to {:.2}", self.scale);
            ui.ctx().set_zoom_factor(self.scale);
            self.applied_scale = Some(self.scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events;

    #[test]
    fn picking_a_new_language_notifies_once() {
        let (tx, rx) = events::channel();
        let mut settings = GeneralSettings::new(Locale::English, tx);

        settings.select_locale(Locale::English);
        settings.select_locale(Locale::French);
        settings.select_locale(Locale::French);

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received, vec![OnboardingEvent::LocaleChanged(Locale::French)]);
        assert_eq!(settings.locale(), Locale::French);
    }

    #[test]
    fn retranslate_is_silent() {
        let (tx, rx) = events::channel();
        let mut settings = GeneralSettings::new(Locale::English, tx);

        settings.retranslate(Locale::German);

        assert!(rx.try_recv().is_err());
        assert_eq!(settings.locale(), Locale::German);
        assert_eq!(settings.labels()[1].text(), "Sprache");
    }

    #[test]
    fn units_and_navigation_are_kept_in_memory() {
        let (tx, _rx) = events::channel();
        let mut settings = GeneralSettings::new(Locale::English, tx);

        settings.select_unit_system(UnitSystem::Imperial);
        settings.select_navigation(NavigationStyle::Blender);

        assert_eq!(settings.unit_system(), UnitSystem::Imperial);
        assert_eq!(settings.navigation(), NavigationStyle::Blender);
    }

    #[test]
    fn first_render_applies_scale() {
        let (tx, _rx) = events::channel();
        let mut settings = GeneralSettings::new(Locale::English, tx);
        let ctx = egui::Context::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| settings.show(ui));
        });

        assert_eq!(ctx.zoom_factor(), 1.0);
    }
}
