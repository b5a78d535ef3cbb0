//! Name-derived tag colors and the widget that draws them.

pub mod color;
pub mod palette;
pub mod widget;

pub use color::{derive_color, ColorPair};
pub use widget::{tag_line, Tag};
