//! Application shell: owns the onboarding widgets and acts as the controller
//! for the notifications they raise.

use std::rc::Rc;

use eframe::egui;

use crate::config::{StartPage, StartupConfig};
use crate::engine::events::{self, AnalyticsRecord, EventReceiver, OnboardingEvent};
use crate::i18n::{Locale, Msg};
use crate::launcher::{EguiLauncher, UrlLauncher};
use crate::ui::panel::{LocaleAware, Panel};
use crate::ui::widgets::onboarding_panel::OnboardingPanel;
use crate::ui::widgets::tutorial_gallery::TutorialGallery;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// Each frame it:
/// 1. Drains the notification channel and reacts (hide onboarding, log
///    analytics, broadcast locale changes).
/// 2. Renders the page switcher and the active page.
pub struct App {
    locale: Locale,
    page: StartPage,
    onboarding_visible: bool,
    rx: EventReceiver,

    // ── Widgets ────────────────────────────────────────────────────────────
    onboarding: OnboardingPanel,
    tutorials: TutorialGallery,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: StartupConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let launcher: Rc<dyn UrlLauncher> = Rc::new(EguiLauncher::new(cc.egui_ctx.clone()));
        Self::build(&config, launcher)
    }

    /// Wire up the widgets around an arbitrary launcher.
    pub fn build(config: &StartupConfig, launcher: Rc<dyn UrlLauncher>) -> Self {
        let (tx, rx) = events::channel();
        log::info!(
            "starting onboarding for {} (locale {}, icons {})",
            config.product_name,
            config.locale,
            config
                .icon_dir
                .as_ref()
                .map_or_else(|| "none".to_string(), |d| d.display().to_string())
        );

        Self {
            locale: config.locale,
            page: config.start_page,
            onboarding_visible: config.start_page == StartPage::Onboarding,
            onboarding: OnboardingPanel::new(config, tx.clone(), Rc::clone(&launcher)),
            tutorials: TutorialGallery::new(config, tx, launcher),
            rx,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn page(&self) -> StartPage {
        self.page
    }

    pub fn onboarding_visible(&self) -> bool {
        self.onboarding_visible
    }

    pub fn onboarding(&self) -> &OnboardingPanel {
        &self.onboarding
    }

    pub fn onboarding_mut(&mut self) -> &mut OnboardingPanel {
        &mut self.onboarding
    }

    pub fn tutorials(&self) -> &TutorialGallery {
        &self.tutorials
    }

    pub fn tutorials_mut(&mut self) -> &mut TutorialGallery {
        &mut self.tutorials
    }

    // ── Notification dispatch ──────────────────────────────────────────────────

    /// Handle everything the widgets raised since the last call.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: OnboardingEvent) {
        match AnalyticsRecord::new(&event, self.locale).to_json() {
            Ok(json) => log::info!(target: "analytics", "{json}"),
            Err(e) => log::warn!("analytics record for {event:?} failed: {e}"),
        }

        match event {
            OnboardingEvent::Dismissed => {
                self.onboarding_visible = false;
                self.page = StartPage::Tutorials;
            }
            OnboardingEvent::TutorialSelected(id) => {
                log::debug!("tutorial {id} selected");
            }
            OnboardingEvent::LocaleChanged(locale) => self.apply_locale(locale),
        }
    }

    /// Broadcast a locale change to every locale-aware widget.
    pub fn apply_locale(&mut self, locale: Locale) {
        if locale == self.locale {
            return;
        }
        self.locale = locale;
        let widgets: [&mut dyn LocaleAware; 2] = [&mut self.onboarding, &mut self.tutorials];
        for widget in widgets {
            widget.retranslate(locale);
        }
    }

    // ── Rendering ──────────────────────────────────────────────────────────────

    pub fn render(&mut self, ctx: &egui::Context) {
        self.drain_events();

        egui::TopBottomPanel::top("start_pages").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.onboarding_visible {
                    ui.selectable_value(
                        &mut self.page,
                        StartPage::Onboarding,
                        Msg::PageWelcome.text(self.locale),
                    );
                }
                ui.selectable_value(
                    &mut self.page,
                    StartPage::Tutorials,
                    Msg::PageTutorials.text(self.locale),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.page {
                    StartPage::Onboarding => self.onboarding.show(ui),
                    StartPage::Tutorials => self.tutorials.show(ui),
                });
        });
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
