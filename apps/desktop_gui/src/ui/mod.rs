//! UI layer for the card: app shell, panels, widgets, theme, and photos.

pub mod app;
pub mod panels;
pub mod photos;
pub mod theme;
pub mod widgets;

pub use app::CardApp;
