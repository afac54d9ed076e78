//! First-start panel: welcome text, quick tips, the settings sub-widgets and
//! the done / tutorials / documentation buttons.

use std::rc::Rc;

use eframe::egui::{self, Align, Layout, Vec2};

use crate::config::StartupConfig;
use crate::content::{DOCUMENTATION_URL, QUICK_TIPS, TUTORIALS_URL};
use crate::engine::events::{EventSender, OnboardingEvent, notify};
use crate::i18n::{Args, Locale, Msg};
use crate::launcher::UrlLauncher;
use crate::ui::panel::{LocaleAware, Panel, TextLabel};
use crate::ui::style::{self, Component};
use crate::ui::widgets::general_settings::GeneralSettings;
use crate::ui::widgets::theme_selector::ThemeSelector;

const LINK_BUTTON_MIN: Vec2 = Vec2::new(160.0, 40.0);
const DONE_BUTTON_MIN: Vec2 = Vec2::new(120.0, 44.0);

/// Buttons the panel routes to the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    Done,
    Tutorials,
    Docs,
}

/// Framed list of four fixed tips.
struct QuickTips {
    title: TextLabel,
    terms: Vec<TextLabel>,
    details: Vec<TextLabel>,
}

impl QuickTips {
    fn new() -> Self {
        Self {
            title: TextLabel::new("quick_tips_title"),
            terms: (0..QUICK_TIPS.len())
                .map(|i| TextLabel::new(("quick_tip_term", i)))
                .collect(),
            details: (0..QUICK_TIPS.len())
                .map(|i| TextLabel::new(("quick_tip_detail", i)))
                .collect(),
        }
    }

    fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        std::iter::once(&self.title)
            .chain(self.terms.iter())
            .chain(self.details.iter())
    }

    fn show(&self, ui: &mut egui::Ui, visuals: &egui::Visuals) {
        let frame = style::rule(Component::QuickTipsFrame);
        frame.frame(visuals).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(style::rule(Component::QuickTipsTitle).rich(self.title.text(), visuals));
            ui.add_space(8.0);
            for (term, detail) in self.terms.iter().zip(&self.details) {
                ui.horizontal_wrapped(|ui| {
                    ui.label(frame.rich("•", visuals));
                    ui.label(frame.rich(term.text(), visuals).strong());
                    ui.label(frame.rich(&format!("- {}", detail.text()), visuals));
                });
            }
        });
    }
}

impl LocaleAware for QuickTips {
    fn retranslate(&mut self, locale: Locale) {
        self.title.set_text(Msg::QuickTipsTitle.text(locale));
        for ((term, detail), tip) in self.terms.iter_mut().zip(&mut self.details).zip(&QUICK_TIPS) {
            term.set_text(tip.term.text(locale));
            detail.set_text(tip.detail.text(locale));
        }
    }
}

pub struct OnboardingPanel {
    product: String,
    welcome: TextLabel,
    description: TextLabel,
    tips: QuickTips,
    general: GeneralSettings,
    theme: ThemeSelector,
    tutorials_button: TextLabel,
    docs_button: TextLabel,
    done_button: TextLabel,
    tx: EventSender,
    launcher: Rc<dyn UrlLauncher>,
}

impl OnboardingPanel {
    pub fn new(config: &StartupConfig, tx: EventSender, launcher: Rc<dyn UrlLauncher>) -> Self {
        let mut this = Self {
            product: config.product_name.clone(),
            welcome: TextLabel::new("onboarding_welcome"),
            description: TextLabel::new("onboarding_description"),
            tips: QuickTips::new(),
            general: GeneralSettings::new(config.locale, tx.clone()),
            theme: ThemeSelector::new(config.locale),
            tutorials_button: TextLabel::new("onboarding_tutorials_button"),
            docs_button: TextLabel::new("onboarding_docs_button"),
            done_button: TextLabel::new("onboarding_done_button"),
            tx,
            launcher,
        };
        this.retranslate(config.locale);
        this
    }

    /// Route a button activation: dismiss notifies, links navigate.
    pub fn activate(&mut self, button: PanelButton) {
        log::debug!("onboarding button {button:?} activated");
        match button {
            PanelButton::Done => notify(&self.tx, OnboardingEvent::Dismissed),
            PanelButton::Tutorials => self.launcher.open(TUTORIALS_URL),
            PanelButton::Docs => self.launcher.open(DOCUMENTATION_URL),
        }
    }

    pub fn general_settings(&self) -> &GeneralSettings {
        &self.general
    }

    pub fn general_settings_mut(&mut self) -> &mut GeneralSettings {
        &mut self.general
    }

    pub fn theme_selector(&self) -> &ThemeSelector {
        &self.theme
    }

    pub fn welcome(&self) -> &TextLabel {
        &self.welcome
    }

    /// Every text label the panel displays, its sub-widgets' included.
    pub fn labels(&self) -> Vec<&TextLabel> {
        let mut labels = vec![
            &self.welcome,
            &self.description,
            &self.tutorials_button,
            &self.docs_button,
            &self.done_button,
        ];
        labels.extend(self.tips.labels());
        labels.extend(self.general.labels());
        labels.extend(self.theme.labels());
        labels
    }
}

impl LocaleAware for OnboardingPanel {
    fn retranslate(&mut self, locale: Locale) {
        self.welcome
            .set_text(Msg::WelcomeTo.format(locale, &Args::product(&self.product)));
        self.description.set_text(format!(
            "{} {}",
            Msg::Tagline.text(locale),
            Msg::SetupPrompt.text(locale)
        ));
        self.tips.retranslate(locale);
        self.general.retranslate(locale);
        self.theme.retranslate(locale);
        self.tutorials_button.set_text(Msg::ViewTutorials.text(locale));
        self.docs_button.set_text(Msg::ReadDocumentation.text(locale));
        self.done_button.set_text(Msg::GetStarted.text(locale));
    }
}

impl Panel for OnboardingPanel {
    fn show(&mut self, ui: &mut egui::Ui) {
        let visuals = ui.visuals().clone();
        let mut clicked = None;

        ui.spacing_mut().item_spacing.y = 16.0;
        ui.vertical_centered(|ui| {
            ui.label(style::rule(Component::WelcomeHeading).rich(self.welcome.text(), &visuals));
            let description =
                style::rule(Component::Description).rich(self.description.text(), &visuals);
            ui.add(egui::Label::new(description).wrap());
        });

        self.tips.show(ui, &visuals);
        self.general.show(ui);
        self.theme.show(ui);

        let link = style::rule(Component::LinkButton);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            let row_width = 2.0 * LINK_BUTTON_MIN.x + 12.0;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for (button, label) in [
                (PanelButton::Tutorials, &self.tutorials_button),
                (PanelButton::Docs, &self.docs_button),
            ] {
                let widget = link.button(label.text(), &visuals).min_size(LINK_BUTTON_MIN);
                if ui
                    .add(widget)
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .clicked()
                {
                    clicked = Some(button);
                }
            }
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let done = style::rule(Component::DoneButton)
                .button(self.done_button.text(), &visuals)
                .min_size(DONE_BUTTON_MIN);
            if ui.add(done).clicked() {
                clicked = Some(PanelButton::Done);
            }
        });

        if let Some(button) = clicked {
            self.activate(button);
        }
    }
}
