//! Locales and the message catalog for every string the onboarding widgets
//! display.
//!
//! Each locale is an exhaustive `match` over [`Msg`], so adding a message
//! without translating it is a compile error. Templates use `{product}` and
//! `{minutes}` placeholders which callers substitute with [`Msg::format`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

// ── Locale ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::English, Locale::German, Locale::French];

    /// BCP-47 style tag used on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::German => "de",
            Locale::French => "fr",
        }
    }

    /// Name of the language in that language, for the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::German => "Deutsch",
            Locale::French => "Français",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A locale tag no catalog exists for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}' (expected one of: en, de, fr)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts `en`, `de`, `fr`, case-insensitively, with or without a region
    /// suffix (`de_DE`, `fr-CA`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::English),
            "de" => Ok(Locale::German),
            "fr" => Ok(Locale::French),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

// ── Messages ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // Onboarding panel
    WelcomeTo,
    Tagline,
    SetupPrompt,
    QuickTipsTitle,
    TipPartDesign,
    TipPartDesignText,
    TipSketcher,
    TipSketcherText,
    TipUndo,
    TipUndoText,
    TipMiddleMouse,
    TipMiddleMouseText,
    GetStarted,
    ViewTutorials,
    ReadDocumentation,

    // Tutorial gallery
    LearnProduct,
    TutorialsSubheader,
    OpenUserGuide,
    CardStart,
    CardMinutes,
    Beginner,
    Intermediate,
    Advanced,
    GettingStartedTitle,
    GettingStartedText,
    SketchingBasicsTitle,
    SketchingBasicsText,
    SolidModelingTitle,
    SolidModelingText,
    AdvancedTechniquesTitle,
    AdvancedTechniquesText,
    ExportingTitle,
    ExportingText,

    // Theme selector
    ThemeHeading,
    ThemeLight,
    ThemeDark,
    ThemeSystem,

    // General settings
    GeneralHeading,
    Language,
    UnitSystem,
    UnitMetric,
    UnitImperial,
    NavigationStyle,
    InterfaceScale,

    // Shell
    PageWelcome,
    PageTutorials,
}

impl Msg {
    /// Raw catalog text, placeholders untouched.
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english(),
            Locale::German => self.german(),
            Locale::French => self.french(),
        }
    }

    /// Catalog text with `{product}` and `{minutes}` substituted.
    pub fn format(self, locale: Locale, args: &Args<'_>) -> String {
        let mut out = self.text(locale).to_string();
        if let Some(product) = args.product {
            out = out.replace("{product}", product);
        }
        if let Some(minutes) = args.minutes {
            out = out.replace("{minutes}", &minutes.to_string());
        }
        out
    }

    fn english(self) -> &'static str {
        match self {
            Msg::WelcomeTo => "Welcome to {product}",
            Msg::Tagline => "Your powerful open-source 3D CAD modeling tool.",
            Msg::SetupPrompt => "Let's set up your preferences to get started.",
            Msg::QuickTipsTitle => "Quick Start Tips",
            Msg::TipPartDesign => "Part Design Workbench",
            Msg::TipPartDesignText => "Create 3D parametric models from 2D sketches",
            Msg::TipSketcher => "Sketcher",
            Msg::TipSketcherText => "Draw precise 2D shapes with constraints",
            Msg::TipUndo => "Ctrl+Z",
            Msg::TipUndoText => "Undo any action",
            Msg::TipMiddleMouse => "Middle Mouse",
            Msg::TipMiddleMouseText => "Rotate the 3D view",
            Msg::GetStarted => "Get Started",
            Msg::ViewTutorials => "View Tutorials",
            Msg::ReadDocumentation => "Read Documentation",

            Msg::LearnProduct => "Learn {product}",
            Msg::TutorialsSubheader => {
                "Interactive tutorials to help you master 3D modeling. \
                 Start with the basics or jump to advanced techniques."
            }
            Msg::OpenUserGuide => "📖 Open Complete User Guide",
            Msg::CardStart => "Start →",
            Msg::CardMinutes => "⏱ {minutes} min",
            Msg::Beginner => "Beginner",
            Msg::Intermediate => "Intermediate",
            Msg::Advanced => "Advanced",
            Msg::GettingStartedTitle => "Getting Started",
            Msg::GettingStartedText => {
                "Learn the basics: navigation, workbenches, and creating your first project"
            }
            Msg::SketchingBasicsTitle => "Sketching Basics",
            Msg::SketchingBasicsText => {
                "Master 2D sketches: rectangles, circles, constraints, and dimensions"
            }
            Msg::SolidModelingTitle => "3D Solid Modeling",
            Msg::SolidModelingText => "Create 3D objects using Pad, Pocket, Revolution, and more",
            Msg::AdvancedTechniquesTitle => "Advanced Techniques",
            Msg::AdvancedTechniquesText => {
                "Patterns, mirrors, fillets, chamfers, and parametric editing"
            }
            Msg::ExportingTitle => "Exporting Models",
            Msg::ExportingText => "Export your designs to STEP, STL, and other formats",

            Msg::ThemeHeading => "Theme",
            Msg::ThemeLight => "Light",
            Msg::ThemeDark => "Dark",
            Msg::ThemeSystem => "Follow system",

            Msg::GeneralHeading => "General settings",
            Msg::Language => "Language",
            Msg::UnitSystem => "Unit system",
            Msg::UnitMetric => "Metric (mm, kg, s)",
            Msg::UnitImperial => "Imperial (in, lb)",
            Msg::NavigationStyle => "Navigation style",
            Msg::InterfaceScale => "Interface scale",

            Msg::PageWelcome => "Welcome",
            Msg::PageTutorials => "Tutorials",
        }
    }

    fn german(self) -> &'static str {
        match self {
            Msg::WelcomeTo => "Willkommen bei {product}",
            Msg::Tagline => "Ihr leistungsstarkes Open-Source-Werkzeug für 3D-CAD-Modellierung.",
            Msg::SetupPrompt => "Richten wir zunächst Ihre Einstellungen ein.",
            Msg::QuickTipsTitle => "Tipps für den Einstieg",
            Msg::TipPartDesign => "Part-Design-Arbeitsbereich",
            Msg::TipPartDesignText => "Parametrische 3D-Modelle aus 2D-Skizzen erstellen",
            Msg::TipSketcher => "Sketcher",
            Msg::TipSketcherText => "Präzise 2D-Formen mit Randbedingungen zeichnen",
            Msg::TipUndo => "Strg+Z",
            Msg::TipUndoText => "Jede Aktion rückgängig machen",
            Msg::TipMiddleMouse => "Mittlere Maustaste",
            Msg::TipMiddleMouseText => "Die 3D-Ansicht drehen",
            Msg::GetStarted => "Los geht's",
            Msg::ViewTutorials => "Tutorials ansehen",
            Msg::ReadDocumentation => "Dokumentation lesen",

            Msg::LearnProduct => "{product} lernen",
            Msg::TutorialsSubheader => {
                "Interaktive Tutorials, mit denen Sie die 3D-Modellierung meistern. \
                 Beginnen Sie mit den Grundlagen oder springen Sie zu fortgeschrittenen Techniken."
            }
            Msg::OpenUserGuide => "📖 Vollständiges Benutzerhandbuch öffnen",
            Msg::CardStart => "Starten →",
            Msg::CardMinutes => "⏱ {minutes} Min.",
            Msg::Beginner => "Einsteiger",
            Msg::Intermediate => "Fortgeschritten",
            Msg::Advanced => "Experte",
            Msg::GettingStartedTitle => "Erste Schritte",
            Msg::GettingStartedText => {
                "Die Grundlagen: Navigation, Arbeitsbereiche und Ihr erstes Projekt"
            }
            Msg::SketchingBasicsTitle => "Skizzier-Grundlagen",
            Msg::SketchingBasicsText => {
                "2D-Skizzen meistern: Rechtecke, Kreise, Randbedingungen und Bemaßungen"
            }
            Msg::SolidModelingTitle => "3D-Volumenmodellierung",
            Msg::SolidModelingText => {
                "3D-Objekte mit Aufpolsterung, Tasche, Rotation und mehr erstellen"
            }
            Msg::AdvancedTechniquesTitle => "Fortgeschrittene Techniken",
            Msg::AdvancedTechniquesText => {
                "Muster, Spiegelungen, Verrundungen, Fasen und parametrisches Bearbeiten"
            }
            Msg::ExportingTitle => "Modelle exportieren",
            Msg::ExportingText => "Entwürfe nach STEP, STL und in andere Formate exportieren",

            Msg::ThemeHeading => "Farbschema",
            Msg::ThemeLight => "Hell",
            Msg::ThemeDark => "Dunkel",
            Msg::ThemeSystem => "Systemvorgabe",

            Msg::GeneralHeading => "Allgemeine Einstellungen",
            Msg::Language => "Sprache",
            Msg::UnitSystem => "Einheitensystem",
            Msg::UnitMetric => "Metrisch (mm, kg, s)",
            Msg::UnitImperial => "Imperial (in, lb)",
            Msg::NavigationStyle => "Navigationsstil",
            Msg::InterfaceScale => "Skalierung der Oberfläche",

            Msg::PageWelcome => "Willkommen",
            Msg::PageTutorials => "Tutorials",
        }
    }

    fn french(self) -> &'static str {
        match self {
            Msg::WelcomeTo => "Bienvenue dans {product}",
            Msg::Tagline => "Votre puissant outil libre de modélisation CAO 3D.",
            Msg::SetupPrompt => "Configurons vos préférences pour commencer.",
            Msg::QuickTipsTitle => "Astuces de démarrage",
            Msg::TipPartDesign => "Atelier PartDesign",
            Msg::TipPartDesignText => "Créer des modèles 3D paramétriques à partir d'esquisses 2D",
            Msg::TipSketcher => "Sketcher",
            Msg::TipSketcherText => "Dessiner des formes 2D précises avec des contraintes",
            Msg::TipUndo => "Ctrl+Z",
            Msg::TipUndoText => "Annuler n'importe quelle action",
            Msg::TipMiddleMouse => "Bouton central",
            Msg::TipMiddleMouseText => "Faire pivoter la vue 3D",
            Msg::GetStarted => "Commencer",
            Msg::ViewTutorials => "Voir les tutoriels",
            Msg::ReadDocumentation => "Lire la documentation",

            Msg::LearnProduct => "Apprendre {product}",
            Msg::TutorialsSubheader => {
                "Des tutoriels interactifs pour maîtriser la modélisation 3D. \
                 Commencez par les bases ou passez directement aux techniques avancées."
            }
            Msg::OpenUserGuide => "📖 Ouvrir le guide complet",
            Msg::CardStart => "Démarrer →",
            Msg::CardMinutes => "⏱ {minutes} min",
            Msg::Beginner => "Débutant",
            Msg::Intermediate => "Intermédiaire",
            Msg::Advanced => "Avancé",
            Msg::GettingStartedTitle => "Premiers pas",
            Msg::GettingStartedText => {
                "Les bases : navigation, ateliers et création de votre premier projet"
            }
            Msg::SketchingBasicsTitle => "Bases de l'esquisse",
            Msg::SketchingBasicsText => {
                "Maîtriser les esquisses 2D : rectangles, cercles, contraintes et cotes"
            }
            Msg::SolidModelingTitle => "Modélisation solide 3D",
            Msg::SolidModelingText => {
                "Créer des objets 3D avec Protrusion, Cavité, Révolution et plus encore"
            }
            Msg::AdvancedTechniquesTitle => "Techniques avancées",
            Msg::AdvancedTechniquesText => {
                "Répétitions, symétries, congés, chanfreins et édition paramétrique"
            }
            Msg::ExportingTitle => "Exporter des modèles",
            Msg::ExportingText => "Exporter vos conceptions en STEP, STL et autres formats",

            Msg::ThemeHeading => "Thème",
            Msg::ThemeLight => "Clair",
            Msg::ThemeDark => "Sombre",
            Msg::ThemeSystem => "Suivre le système",

            Msg::GeneralHeading => "Paramètres généraux",
            Msg::Language => "Langue",
            Msg::UnitSystem => "Système d'unités",
            Msg::UnitMetric => "Métrique (mm, kg, s)",
            Msg::UnitImperial => "Impérial (in, lb)",
            Msg::NavigationStyle => "Style de navigation",
            Msg::InterfaceScale => "Échelle de l'interface",

            Msg::PageWelcome => "Bienvenue",
            Msg::PageTutorials => "Tutoriels",
        }
    }
}

/// Placeholder values for [`Msg::format`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Args<'a> {
    pub product: Option<&'a str>,
    pub minutes: Option<u32>,
}

impl<'a> Args<'a> {
    pub fn product(product: &'a str) -> Self {
        Self {
            product: Some(product),
            minutes: None,
        }
    }

    pub fn minutes(minutes: u32) -> Self {
        Self {
            product: None,
            minutes: Some(minutes),
        }
    }
}
