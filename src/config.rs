//! Command-line / environment configuration for the onboarding shell.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::i18n::Locale;

/// Which page the shell opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StartPage {
    #[default]
    Onboarding,
    Tutorials,
}

#[derive(Debug, Parser)]
#[command(name = "cad-start", about = "First-run onboarding and tutorial gallery")]
pub struct Cli {
    /// Product name shown in the welcome and tutorial headers.
    #[arg(long, env = "START_PRODUCT_NAME", default_value = "FreeCAD")]
    pub product_name: String,

    /// Initial interface language (en, de, fr).
    #[arg(long, env = "START_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Directory containing the tutorial card icons.
    #[arg(long, env = "START_ICON_DIR")]
    pub icon_dir: Option<PathBuf>,

    /// Page to show first.
    #[arg(long, value_enum, default_value_t = StartPage::Onboarding)]
    pub page: StartPage,
}

/// Everything the widgets need from the outside world at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub product_name: String,
    pub locale: Locale,
    pub icon_dir: Option<PathBuf>,
    pub start_page: StartPage,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            product_name: "FreeCAD".to_string(),
            locale: Locale::default(),
            icon_dir: None,
            start_page: StartPage::default(),
        }
    }
}

impl From<Cli> for StartupConfig {
    fn from(cli: Cli) -> Self {
        Self {
            product_name: cli.product_name,
            locale: cli.locale,
            icon_dir: cli.icon_dir,
            start_page: cli.page,
        }
    }
}
