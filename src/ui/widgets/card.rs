//! Tutorial card: a fixed-size clickable tile.

use std::num::NonZeroU32;
use std::path::Path;

use eframe::egui::{
    self, Align, CornerRadius, CursorIcon, Layout, PointerButton, Rect, Sense, StrokeKind,
    UiBuilder, Vec2,
};

use crate::i18n::{Args, Locale, Msg};
use crate::types::{Difficulty, IconRef};
use crate::ui::style::{self, Component};

pub const CARD_SIZE: Vec2 = Vec2::new(280.0, 160.0);
const ICON_SIZE: f32 = 40.0;

/// What a card shows. Text is already localized.
pub struct CardContent {
    pub title: String,
    pub description: String,
    pub icon: IconRef,
    pub difficulty: Difficulty,
    pub minutes: NonZeroU32,
}

/// Immutable once built; the activation listener is bound here and nowhere
/// else.
pub struct Card {
    title: String,
    description: String,
    difficulty: Difficulty,
    minutes: NonZeroU32,
    difficulty_label: String,
    time_label: String,
    start_label: String,
    icon_uri: Option<String>,
    on_activated: Box<dyn FnMut()>,
}

impl Card {
    pub fn new(
        content: CardContent,
        locale: Locale,
        icon_dir: Option<&Path>,
        on_activated: impl FnMut() + 'static,
    ) -> Self {
        let icon_uri = content.icon.resolve(icon_dir);
        Self {
            difficulty_label: content.difficulty.msg().text(locale).to_string(),
            time_label: Msg::CardMinutes.format(locale, &Args::minutes(content.minutes.get())),
            start_label: Msg::CardStart.text(locale).to_string(),
            title: content.title,
            description: content.description,
            difficulty: content.difficulty,
            minutes: content.minutes,
            icon_uri,
            on_activated: Box::new(on_activated),
        }
    }

    pub fn size(&self) -> Vec2 {
        CARD_SIZE
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn minutes(&self) -> NonZeroU32 {
        self.minutes
    }

    pub fn difficulty_label(&self) -> &str {
        &self.difficulty_label
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    pub fn has_icon(&self) -> bool {
        self.icon_uri.is_some()
    }

    /// Fires the listener for a primary press; other buttons are ignored.
    /// Returns whether the card was activated.
    pub fn on_pointer_press(&mut self, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        log::debug!("card '{}' activated", self.title);
        (self.on_activated)();
        true
    }

    /// Draw the card into `rect` and route clicks on it. `id` must be unique
    /// among the cards on screen; content may repeat.
    pub fn show_at(&mut self, ui: &mut egui::Ui, rect: Rect, id: egui::Id) {
        let response = ui
            .interact(rect, id, Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        let hovered = response.contains_pointer();
        let visuals = ui.visuals().clone();

        let frame = style::rule(if hovered {
            Component::CardHover
        } else {
            Component::Card
        });
        ui.painter().rect(
            rect,
            CornerRadius::same(frame.corner_radius),
            frame.fill_color(&visuals),
            frame.stroke(&visuals),
            StrokeKind::Inside,
        );

        let mut content = ui.new_child(
            UiBuilder::new()
                .max_rect(rect.shrink(f32::from(frame.padding)))
                .layout(Layout::top_down(Align::Min)),
        );
        content.style_mut().interaction.selectable_labels = false;
        self.paint_contents(&mut content, &visuals);

        for button in [
            PointerButton::Primary,
            PointerButton::Secondary,
            PointerButton::Middle,
        ] {
            if response.clicked_by(button) {
                self.on_pointer_press(button);
            }
        }
    }

    fn paint_contents(&self, ui: &mut egui::Ui, visuals: &egui::Visuals) {
        ui.spacing_mut().item_spacing.y = 8.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            match &self.icon_uri {
                Some(uri) => {
                    ui.add(egui::Image::new(uri.as_str()).fit_to_exact_size(Vec2::splat(ICON_SIZE)));
                }
                None => {
                    ui.allocate_exact_size(Vec2::splat(ICON_SIZE), Sense::hover());
                }
            }
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                let title = style::rule(Component::CardTitle).rich(&self.title, visuals);
                ui.add(egui::Label::new(title).wrap());
                let badge = style::rule(Component::CardDifficulty);
                badge
                    .frame(visuals)
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| ui.label(badge.rich(&self.difficulty_label, visuals)));
            });
        });

        ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
            ui.horizontal(|ui| {
                ui.label(style::rule(Component::CardTime).rich(&self.time_label, visuals));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(style::rule(Component::CardStart).rich(&self.start_label, visuals));
                });
            });
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                let description =
                    style::rule(Component::CardDescription).rich(&self.description, visuals);
                ui.add(egui::Label::new(description).wrap());
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn sample(locale: Locale, hits: Rc<Cell<u32>>) -> Card {
        Card::new(
            CardContent {
                title: "Sketching Basics".to_string(),
                description: "Master 2D sketches".to_string(),
                icon: IconRef::new("Sketcher_NewSketch.svg"),
                difficulty: Difficulty::Beginner,
                minutes: NonZeroU32::new(15).expect("non-zero"),
            },
            locale,
            None,
            move || hits.set(hits.get() + 1),
        )
    }

    #[test]
    fn primary_press_activates_once() {
        let hits = Rc::new(Cell::new(0));
        let mut card = sample(Locale::English, hits.clone());

        assert!(card.on_pointer_press(PointerButton::Primary));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let hits = Rc::new(Cell::new(0));
        let mut card = sample(Locale::English, hits.clone());

        assert!(!card.on_pointer_press(PointerButton::Secondary));
        assert!(!card.on_pointer_press(PointerButton::Middle));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn card_has_fixed_size_and_localized_footer() {
        let card = sample(Locale::German, Rc::new(Cell::new(0)));
        assert_eq!(card.size(), Vec2::new(280.0, 160.0));
        assert_eq!(card.time_label(), "⏱ 15 Min.");
        assert_eq!(card.difficulty_label(), "Einsteiger");
    }

    #[test]
    fn unresolvable_icon_renders_blank() {
        let card = sample(Locale::English, Rc::new(Cell::new(0)));
        assert!(!card.has_icon());
    }
}
