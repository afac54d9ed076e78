//! Tutorial gallery: header, five lesson cards in a flow gallery, and a
//! button to the complete user guide.

use std::path::PathBuf;
use std::rc::Rc;

use eframe::egui::{self, Vec2};

use crate::config::StartupConfig;
use crate::content::{TUTORIALS, TutorialEntry, USER_GUIDE_URL};
use crate::engine::events::{EventSender, OnboardingEvent, notify};
use crate::engine::flow::FlowLayout;
use crate::i18n::{Args, Locale, Msg};
use crate::launcher::UrlLauncher;
use crate::ui::panel::{LocaleAware, Panel, TextLabel};
use crate::ui::style::{self, Component};
use crate::ui::widgets::card::{Card, CardContent};
use crate::ui::widgets::flow_gallery::FlowGallery;

const GUIDE_BUTTON_MIN: Vec2 = Vec2::new(200.0, 44.0);

pub struct TutorialGallery {
    product: String,
    icon_dir: Option<PathBuf>,
    locale: Locale,
    header: TextLabel,
    subheader: TextLabel,
    guide_button: TextLabel,
    gallery: FlowGallery,
    tx: EventSender,
    launcher: Rc<dyn UrlLauncher>,
}

impl TutorialGallery {
    pub fn new(config: &StartupConfig, tx: EventSender, launcher: Rc<dyn UrlLauncher>) -> Self {
        let mut this = Self {
            product: config.product_name.clone(),
            icon_dir: config.icon_dir.clone(),
            locale: config.locale,
            header: TextLabel::new("tutorial_header"),
            subheader: TextLabel::new("tutorial_subheader"),
            guide_button: TextLabel::new("tutorial_full_guide"),
            gallery: FlowGallery::new(FlowLayout::default(), Vec::new()),
            tx,
            launcher,
        };
        this.retranslate(config.locale);
        this
    }

    pub fn gallery(&self) -> &FlowGallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut FlowGallery {
        &mut self.gallery
    }

    pub fn header(&self) -> &TextLabel {
        &self.header
    }

    pub fn subheader(&self) -> &TextLabel {
        &self.subheader
    }

    pub fn guide_button(&self) -> &TextLabel {
        &self.guide_button
    }

    pub fn open_full_guide(&self) {
        self.launcher.open(USER_GUIDE_URL);
    }

    fn build_cards(&self) -> Vec<Card> {
        TUTORIALS
            .iter()
            .map(|entry| self.build_card(entry))
            .collect()
    }

    fn build_card(&self, entry: &'static TutorialEntry) -> Card {
        let tx = self.tx.clone();
        let launcher = Rc::clone(&self.launcher);
        let content = CardContent {
            title: entry.title.text(self.locale).to_string(),
            description: entry.description.text(self.locale).to_string(),
            icon: entry.icon,
            difficulty: entry.difficulty,
            minutes: entry.minutes,
        };
        Card::new(content, self.locale, self.icon_dir.as_deref(), move || {
            notify(&tx, OnboardingEvent::TutorialSelected(entry.id));
            launcher.open(entry.url);
        })
    }
}

impl LocaleAware for TutorialGallery {
    fn retranslate(&mut self, locale: Locale) {
        self.locale = locale;
        let args = Args::product(&self.product);
        self.header.set_text(Msg::LearnProduct.format(locale, &args));
        self.subheader.set_text(Msg::TutorialsSubheader.text(locale));
        self.guide_button.set_text(Msg::OpenUserGuide.text(locale));
        // Cards are immutable; rebuild them for the new locale.
        let cards = self.build_cards();
        self.gallery.replace_cards(cards);
    }
}

impl Panel for TutorialGallery {
    fn show(&mut self, ui: &mut egui::Ui) {
        let visuals = ui.visuals().clone();
        let mut guide_clicked = false;
        egui::Frame::new()
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 20.0;
                ui.label(style::rule(Component::TutorialHeader).rich(self.header.text(), &visuals));
                let subheader =
                    style::rule(Component::TutorialSubheader).rich(self.subheader.text(), &visuals);
                ui.add(egui::Label::new(subheader).wrap());

                self.gallery.show(ui);

                ui.vertical_centered(|ui| {
                    let button = style::rule(Component::GuideButton)
                        .button(self.guide_button.text(), &visuals)
                        .min_size(GUIDE_BUTTON_MIN);
                    if ui
                        .add(button)
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        guide_clicked = true;
                    }
                });
            });
        if guide_clicked {
            self.open_full_guide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::{self, EventReceiver};
    use crate::launcher::testing::RecordingLauncher;
    use crate::types::TutorialId;
    use egui::PointerButton;

    fn build(locale: Locale) -> (TutorialGallery, EventReceiver, Rc<RecordingLauncher>) {
        let (tx, rx) = events::channel();
        let launcher = Rc::new(RecordingLauncher::default());
        let config = StartupConfig {
            locale,
            ..StartupConfig::default()
        };
        let gallery = TutorialGallery::new(&config, tx, launcher.clone());
        (gallery, rx, launcher)
    }

    fn drain(rx: &EventReceiver) -> Vec<OnboardingEvent> {
        rx.try_iter().collect()
    }

    #[test]
    fn builds_five_cards_in_table_order() {
        let (gallery, _rx, _launcher) = build(Locale::English);
        let titles: Vec<&str> = gallery.gallery().cards().iter().map(Card::title).collect();
        assert_eq!(
            titles,
            [
                "Getting Started",
                "Sketching Basics",
                "3D Solid Modeling",
                "Advanced Techniques",
                "Exporting Models",
            ]
        );
    }

    #[test]
    fn five_cards_wrap_three_then_two_at_900px() {
        let (mut gallery, _rx, _launcher) = build(Locale::English);
        let rows = gallery.gallery_mut().layout_for(900.0).rows.clone();
        assert_eq!(rows, vec![0..3, 3..5]);
    }

    #[test]
    fn sketching_basics_selects_and_navigates() {
        let (mut gallery, rx, launcher) = build(Locale::English);
        let card = gallery
            .gallery_mut()
            .cards_mut()
            .iter_mut()
            .find(|c| c.title() == "Sketching Basics")
            .expect("sketching card");

        assert!(card.on_pointer_press(PointerButton::Primary));

        assert_eq!(
            drain(&rx),
            vec![OnboardingEvent::TutorialSelected(TutorialId::new(
                "sketching-basics"
            ))]
        );
        assert_eq!(
            launcher.opened(),
            vec!["https://wiki.freecad.org/Sketcher_Workbench".to_string()]
        );
    }

    #[test]
    fn every_card_carries_its_own_id() {
        let (mut gallery, rx, launcher) = build(Locale::English);
        for card in gallery.gallery_mut().cards_mut() {
            card.on_pointer_press(PointerButton::Primary);
        }
        let ids: Vec<&str> = drain(&rx)
            .into_iter()
            .filter_map(|e| match e {
                OnboardingEvent::TutorialSelected(id) => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            ids,
            [
                "getting-started",
                "sketching-basics",
                "3d-modeling",
                "advanced-techniques",
                "exporting",
            ]
        );
        assert_eq!(launcher.opened().len(), 5);
    }

    #[test]
    fn full_guide_only_navigates() {
        let (gallery, rx, launcher) = build(Locale::English);
        gallery.open_full_guide();
        assert!(drain(&rx).is_empty());
        assert_eq!(launcher.opened(), vec![USER_GUIDE_URL.to_string()]);
    }

    #[test]
    fn retranslate_refreshes_header_and_rebuilds_cards() {
        let (mut gallery, _rx, _launcher) = build(Locale::English);
        let header_id = gallery.header().id();

        gallery.retranslate(Locale::French);

        assert_eq!(gallery.header().id(), header_id);
        assert_eq!(gallery.header().text(), "Apprendre FreeCAD");
        assert_eq!(gallery.guide_button().text(), "📖 Ouvrir le guide complet");
        assert!(!gallery.subheader().text().is_empty());
        assert_eq!(gallery.gallery().cards().len(), 5);
        assert_eq!(gallery.gallery().cards()[0].title(), "Premiers pas");
    }
}
