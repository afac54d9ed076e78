//! Static onboarding content: link targets, the quick-tips list and the
//! tutorial table the gallery is built from.

use std::num::NonZeroU32;

use crate::i18n::Msg;
use crate::types::{Difficulty, IconRef, TutorialId};

pub const TUTORIALS_URL: &str = "https://wiki.freecad.org/Getting_started";
pub const DOCUMENTATION_URL: &str = "https://wiki.freecad.org/User_hub";
pub const USER_GUIDE_URL: &str = "https://wiki.freecad.org/User_hub";

/// One bullet of the quick-tips panel: a bold term and its explanation.
pub struct Tip {
    pub term: Msg,
    pub detail: Msg,
}

pub static QUICK_TIPS: [Tip; 4] = [
    Tip {
        term: Msg::TipPartDesign,
        detail: Msg::TipPartDesignText,
    },
    Tip {
        term: Msg::TipSketcher,
        detail: Msg::TipSketcherText,
    },
    Tip {
        term: Msg::TipUndo,
        detail: Msg::TipUndoText,
    },
    Tip {
        term: Msg::TipMiddleMouse,
        detail: Msg::TipMiddleMouseText,
    },
];

/// One lesson in the tutorial gallery.
pub struct TutorialEntry {
    pub id: TutorialId,
    pub title: Msg,
    pub description: Msg,
    pub icon: IconRef,
    pub difficulty: Difficulty,
    pub minutes: NonZeroU32,
    pub url: &'static str,
}

const fn minutes(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(m) => m,
        None => panic!("tutorial estimate must be positive"),
    }
}

/// Display order is table order.
pub static TUTORIALS: [TutorialEntry; 5] = [
    TutorialEntry {
        id: TutorialId::new("getting-started"),
        title: Msg::GettingStartedTitle,
        description: Msg::GettingStartedText,
        icon: IconRef::new("document-new.svg"),
        difficulty: Difficulty::Beginner,
        minutes: minutes(10),
        url: "https://wiki.freecad.org/Getting_started",
    },
    TutorialEntry {
        id: TutorialId::new("sketching-basics"),
        title: Msg::SketchingBasicsTitle,
        description: Msg::SketchingBasicsText,
        icon: IconRef::new("Sketcher_NewSketch.svg"),
        difficulty: Difficulty::Beginner,
        minutes: minutes(15),
        url: "https://wiki.freecad.org/Sketcher_Workbench",
    },
    TutorialEntry {
        id: TutorialId::new("3d-modeling"),
        title: Msg::SolidModelingTitle,
        description: Msg::SolidModelingText,
        icon: IconRef::new("PartDesignWorkbench.svg"),
        difficulty: Difficulty::Intermediate,
        minutes: minutes(20),
        url: "https://wiki.freecad.org/PartDesign_Workbench",
    },
    TutorialEntry {
        id: TutorialId::new("advanced-techniques"),
        title: Msg::AdvancedTechniquesTitle,
        description: Msg::AdvancedTechniquesText,
        icon: IconRef::new("preferences-general.svg"),
        difficulty: Difficulty::Advanced,
        minutes: minutes(25),
        url: "https://wiki.freecad.org/Feature_editing",
    },
    TutorialEntry {
        id: TutorialId::new("exporting"),
        title: Msg::ExportingTitle,
        description: Msg::ExportingText,
        icon: IconRef::new("document-save-as.svg"),
        difficulty: Difficulty::Beginner,
        minutes: minutes(5),
        url: "https://wiki.freecad.org/Import_Export",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tutorial_ids_are_unique() {
        let ids: HashSet<_> = TUTORIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TUTORIALS.len());
    }

    #[test]
    fn sketching_basics_points_at_sketcher_docs() {
        let entry = TUTORIALS
            .iter()
            .find(|t| t.id.as_str() == "sketching-basics")
            .expect("sketching entry");
        assert_eq!(entry.url, "https://wiki.freecad.org/Sketcher_Workbench");
        assert_eq!(entry.difficulty, Difficulty::Beginner);
        assert_eq!(entry.minutes.get(), 15);
    }
}
