//! External navigation: hands URLs to the OS default handler.

use eframe::egui;

/// Fire-and-forget URL opener. Implementations never report failure back to
/// the widget that asked.
pub trait UrlLauncher {
    fn open(&self, url: &str);
}

/// Opens URLs through egui; eframe forwards them to the OS at the end of the
/// frame.
pub struct EguiLauncher {
    ctx: egui::Context,
}

impl EguiLauncher {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl UrlLauncher for EguiLauncher {
    fn open(&self, url: &str) {
        log::info!("opening {url}");
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
    }
}
