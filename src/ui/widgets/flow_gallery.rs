//! Container that flows cards into wrapping rows.

use eframe::egui::{self, Rect, Sense, Vec2, vec2};

use crate::engine::flow::{FlowArrangement, FlowLayout};
use crate::ui::widgets::card::Card;

struct CachedLayout {
    width: f32,
    arrangement: FlowArrangement,
}

/// Owns its cards in display order. Layout is recomputed only when the
/// width changes or the card set is replaced.
pub struct FlowGallery {
    cards: Vec<Card>,
    layout: FlowLayout,
    cached: Option<CachedLayout>,
}

impl FlowGallery {
    pub fn new(layout: FlowLayout, cards: Vec<Card>) -> Self {
        Self {
            cards,
            layout,
            cached: None,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.cached = None;
    }

    /// Positions for `width`, computed on first use and after every resize.
    pub fn layout_for(&mut self, width: f32) -> &FlowArrangement {
        let cache = match self.cached.take() {
            Some(cache) if cache.width == width => cache,
            _ => {
                let sizes: Vec<Vec2> = self.cards.iter().map(Card::size).collect();
                let arrangement = self.layout.arrange(&sizes, width);
                log::debug!(
                    "flow gallery relayout: width={width:.1} cards={} rows={} height={:.1}",
                    sizes.len(),
                    arrangement.row_count(),
                    arrangement.height
                );
                CachedLayout { width, arrangement }
            }
        };
        &self.cached.insert(cache).arrangement
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        let arrangement = self.layout_for(width);
        let height = arrangement.height;
        let rects: Vec<Rect> = arrangement.rects.clone();

        let (area, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        let origin = area.min.to_vec2();
        let gallery_id = ui.id().with("flow_gallery");
        for (index, (card, rect)) in self.cards.iter_mut().zip(rects).enumerate() {
            card.show_at(ui, rect.translate(origin), gallery_id.with(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::types::{Difficulty, IconRef};
    use crate::ui::widgets::card::{CARD_SIZE, CardContent};
    use std::cell::Cell;
    use std::num::NonZeroU32;
    use std::rc::Rc;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| {
                Card::new(
                    CardContent {
                        title: format!("Card {i}"),
                        description: String::new(),
                        icon: IconRef::new(""),
                        difficulty: Difficulty::Beginner,
                        minutes: NonZeroU32::MIN,
                    },
                    Locale::English,
                    None,
                    || {},
                )
            })
            .collect()
    }

    #[test]
    fn relayout_follows_width_changes() {
        let mut gallery = FlowGallery::new(FlowLayout::default(), cards(5));

        assert_eq!(gallery.layout_for(900.0).row_count(), 2);
        assert_eq!(gallery.layout_for(600.0).row_count(), 3);
        assert_eq!(gallery.layout_for(2000.0).row_count(), 1);
    }

    #[test]
    fn repeated_layout_at_same_width_is_identical() {
        let mut gallery = FlowGallery::new(FlowLayout::default(), cards(5));
        let first = gallery.layout_for(900.0).clone();
        let second = gallery.layout_for(900.0).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn replacing_cards_invalidates_layout() {
        let mut gallery = FlowGallery::new(FlowLayout::default(), cards(5));
        assert_eq!(gallery.layout_for(900.0).rects.len(), 5);

        gallery.replace_cards(cards(2));
        assert_eq!(gallery.layout_for(900.0).rects.len(), 2);
        assert_eq!(gallery.cards().len(), 2);
    }

    fn counted_cards(titles: &[&str]) -> (Vec<Card>, Vec<Rc<Cell<u32>>>) {
        let hits: Vec<Rc<Cell<u32>>> = titles.iter().map(|_| Rc::new(Cell::new(0))).collect();
        let cards = titles
            .iter()
            .zip(&hits)
            .map(|(title, hit)| {
                let hit = Rc::clone(hit);
                Card::new(
                    CardContent {
                        title: title.to_string(),
                        description: String::new(),
                        icon: IconRef::new(""),
                        difficulty: Difficulty::Beginner,
                        minutes: NonZeroU32::MIN,
                    },
                    Locale::English,
                    None,
                    move || hit.set(hit.get() + 1),
                )
            })
            .collect();
        (cards, hits)
    }

    fn frame(ctx: &egui::Context, gallery: &mut FlowGallery, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, vec2(900.0, 600.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| gallery.show(ui));
        });
    }

    /// Hover, press and release `button` at `pos`, one frame each.
    fn click_at(
        ctx: &egui::Context,
        gallery: &mut FlowGallery,
        pos: egui::Pos2,
        button: egui::PointerButton,
    ) {
        let press = |pressed| egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        frame(ctx, gallery, vec![egui::Event::PointerMoved(pos)]);
        frame(ctx, gallery, vec![press(true)]);
        frame(ctx, gallery, vec![press(false)]);
    }

    fn centre(gallery: &mut FlowGallery, index: usize) -> egui::Pos2 {
        gallery.layout_for(900.0).rects[index].center()
    }

    fn counts(hits: &[Rc<Cell<u32>>]) -> Vec<u32> {
        hits.iter().map(|h| h.get()).collect()
    }

    #[test]
    fn click_reaches_only_the_card_under_the_pointer() {
        let (cards, hits) = counted_cards(&["A", "B", "C", "D", "E"]);
        let mut gallery = FlowGallery::new(FlowLayout::default(), cards);
        let ctx = egui::Context::default();
        frame(&ctx, &mut gallery, Vec::new());

        let pos = centre(&mut gallery, 4);
        click_at(&ctx, &mut gallery, pos, egui::PointerButton::Primary);

        assert_eq!(counts(&hits), [0, 0, 0, 0, 1]);
    }

    #[test]
    fn same_title_cards_are_routed_independently() {
        let (cards, hits) = counted_cards(&["Same", "Same"]);
        let mut gallery = FlowGallery::new(FlowLayout::default(), cards);
        let ctx = egui::Context::default();
        frame(&ctx, &mut gallery, Vec::new());

        let second = centre(&mut gallery, 1);
        click_at(&ctx, &mut gallery, second, egui::PointerButton::Primary);
        assert_eq!(counts(&hits), [0, 1]);

        let first = centre(&mut gallery, 0);
        click_at(&ctx, &mut gallery, first, egui::PointerButton::Primary);
        assert_eq!(counts(&hits), [1, 1]);
    }

    #[test]
    fn secondary_click_and_gap_click_fire_nothing() {
        let (cards, hits) = counted_cards(&["A", "B", "C"]);
        let mut gallery = FlowGallery::new(FlowLayout::default(), cards);
        let ctx = egui::Context::default();
        frame(&ctx, &mut gallery, Vec::new());

        let first = centre(&mut gallery, 0);
        click_at(&ctx, &mut gallery, first, egui::PointerButton::Secondary);
        click_at(&ctx, &mut gallery, first, egui::PointerButton::Middle);

        // Between the first and second card in the top row.
        let gap = egui::pos2(CARD_SIZE.x + 8.0, CARD_SIZE.y / 2.0);
        click_at(&ctx, &mut gallery, gap, egui::PointerButton::Primary);

        assert_eq!(counts(&hits), [0, 0, 0]);
    }

    #[test]
    fn cards_keep_insertion_order() {
        let gallery = FlowGallery::new(FlowLayout::default(), cards(3));
        let titles: Vec<&str> = gallery.cards().iter().map(Card::title).collect();
        assert_eq!(titles, ["Card 0", "Card 1", "Card 2"]);
    }
}
