use std::cell::RefCell;
use std::rc::Rc;

use cad_start_onboarding::config::{StartPage, StartupConfig};
use cad_start_onboarding::i18n::Locale;
use cad_start_onboarding::launcher::UrlLauncher;
use cad_start_onboarding::ui::app::App;
use cad_start_onboarding::ui::widgets::onboarding_panel::PanelButton;
use eframe::egui;

#[derive(Default)]
struct Recorder(RefCell<Vec<String>>);

impl UrlLauncher for Recorder {
    fn open(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

fn frame(ctx: &egui::Context, app: &mut App) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(900.0, 700.0),
        )),
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| app.render(ctx));
}

#[test]
fn first_run_walkthrough() {
    let recorder = Rc::new(Recorder::default());
    let config = StartupConfig {
        product_name: "FreeCAD".to_string(),
        ..StartupConfig::default()
    };
    let mut app = App::build(&config, recorder.clone());
    let ctx = egui::Context::default();

    frame(&ctx, &mut app);
    assert_eq!(app.page(), StartPage::Onboarding);

    app.onboarding_mut()
        .general_settings_mut()
        .select_locale(Locale::French);
    frame(&ctx, &mut app);
    assert_eq!(app.locale(), Locale::French);
    assert_eq!(app.onboarding().welcome().text(), "Bienvenue dans FreeCAD");

    app.onboarding_mut().activate(PanelButton::Docs);
    app.onboarding_mut().activate(PanelButton::Done);
    frame(&ctx, &mut app);

    assert!(!app.onboarding_visible());
    assert_eq!(app.page(), StartPage::Tutorials);
    assert_eq!(
        *recorder.0.borrow(),
        vec!["https://wiki.freecad.org/User_hub".to_string()]
    );
}

#[test]
fn tutorial_cards_open_their_pages() {
    let recorder = Rc::new(Recorder::default());
    let config = StartupConfig {
        start_page: StartPage::Tutorials,
        ..StartupConfig::default()
    };
    let mut app = App::build(&config, recorder.clone());

    for card in app.tutorials_mut().gallery_mut().cards_mut() {
        card.on_pointer_press(egui::PointerButton::Primary);
    }
    app.drain_events();

    assert_eq!(recorder.0.borrow().len(), 5);
    assert_eq!(app.page(), StartPage::Tutorials);
}
