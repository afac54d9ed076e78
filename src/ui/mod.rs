//! UI layer: app shell, `Panel` trait, style table and widgets.

pub mod app;
pub mod panel;
pub mod style;
pub mod widgets;
