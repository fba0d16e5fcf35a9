//! Terminal User Interface module
//!
//! Panels draw through the [`surface::Surface`] trait into regions placed by
//! [`layout`]; the [`navigator::Navigator`] walks the menu tree and
//! [`app::App`] runs the input loop around both.

pub mod app;
pub mod event;
pub mod layout;
pub mod navigator;
pub mod region;
pub mod status;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use navigator::Navigator;
pub use surface::Screen;
