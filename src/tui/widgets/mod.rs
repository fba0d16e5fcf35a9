//! Render primitives

mod description;
mod footer;
mod header;
mod menu;
mod text_box;

pub use description::{wrap, DescriptionBox};
pub use footer::Footer;
pub use header::Header;
pub use menu::MenuPanel;
pub use text_box::TextBox;
