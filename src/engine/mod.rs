//! Engine sub-modules: flow layout geometry and widget notifications.

pub mod events;
pub mod flow;
