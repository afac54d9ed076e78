//! Notifications raised by the onboarding widgets for the owning controller.
//!
//! Widgets hold an [`EventSender`]; the app drains the receiving end once per
//! frame with `try_recv`, so sending never blocks and never re-enters a widget.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::Serialize;

use crate::i18n::Locale;
use crate::types::TutorialId;

/// Messages sent from the onboarding widgets to the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingEvent {
    /// The user finished onboarding; the owner should hide the panel.
    Dismissed,
    /// A tutorial card was activated.
    TutorialSelected(TutorialId),
    /// The user picked a different interface language.
    LocaleChanged(Locale),
}

pub type EventSender = Sender<OnboardingEvent>;
pub type EventReceiver = Receiver<OnboardingEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}

/// Send `event`, logging instead of failing when the controller is gone.
pub fn notify(tx: &EventSender, event: OnboardingEvent) {
    if tx.send(event).is_err() {
        log::warn!("onboarding controller dropped, discarding {event:?}");
    }
}

// ── Analytics ──────────────────────────────────────────────────────────────────

/// One-line JSON record the controller logs for every notification.
#[derive(Debug, Serialize)]
pub struct AnalyticsRecord {
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorial: Option<TutorialId>,
    pub locale: Locale,
}

impl AnalyticsRecord {
    pub fn new(event: &OnboardingEvent, active_locale: Locale) -> Self {
        match *event {
            OnboardingEvent::Dismissed => Self {
                event: "onboarding_dismissed",
                tutorial: None,
                locale: active_locale,
            },
            OnboardingEvent::TutorialSelected(id) => Self {
                event: "tutorial_selected",
                tutorial: Some(id),
                locale: active_locale,
            },
            OnboardingEvent::LocaleChanged(locale) => Self {
                event: "locale_changed",
                tutorial: None,
                locale,
            },
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_delivers_in_order() {
        let (tx, rx) = channel();
        notify(&tx, OnboardingEvent::Dismissed);
        notify(&tx, OnboardingEvent::LocaleChanged(Locale::French));

        assert_eq!(rx.try_recv().ok(), Some(OnboardingEvent::Dismissed));
        assert_eq!(
            rx.try_recv().ok(),
            Some(OnboardingEvent::LocaleChanged(Locale::French))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn notify_tolerates_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);
        notify(&tx, OnboardingEvent::Dismissed);
    }

    #[test]
    fn analytics_record_for_tutorial_selection() {
        let event = OnboardingEvent::TutorialSelected(TutorialId::new("exporting"));
        let json = AnalyticsRecord::new(&event, Locale::German)
            .to_json()
            .expect("json");
        assert_eq!(
            json,
            r#"{"event":"tutorial_selected","tutorial":"exporting","locale":"de"}"#
        );
    }

    #[test]
    fn analytics_record_omits_missing_tutorial() {
        let json = AnalyticsRecord::new(&OnboardingEvent::Dismissed, Locale::English)
            .to_json()
            .expect("json");
        assert_eq!(json, r#"{"event":"onboarding_dismissed","locale":"en"}"#);
    }
}
