use cad_start_onboarding::config::{Cli, StartupConfig};
use cad_start_onboarding::error;
use cad_start_onboarding::ui::app::App;
use clap::Parser;
use eframe::egui;

fn main() -> error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StartupConfig::from(Cli::parse());
    let title = format!("{} Start", config.product_name);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1000.0, 820.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )?;
    Ok(())
}
