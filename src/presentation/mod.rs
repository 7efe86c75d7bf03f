//! Presentation layer: events, theme, widgets and screens.

pub mod events;
pub mod theme;
pub mod ui;
pub mod widgets;
