//! The section renderers.
//!
//! Each renderer writes one part of the itinerary at the cursor and leaves the
//! cursor just below what it wrote. None of them decides on page breaks
//! directly; they go through the [`Paginator`](crate::layout::pagination::Paginator)
//! before every line.

pub mod contact;
pub mod highlights;
pub mod itinerary;
pub mod lists;
pub mod overview;

use crate::document::Font;
use crate::layout::config::LayoutConfig;
use crate::layout::text::TextStyle;

pub(crate) fn body_style(config: &LayoutConfig) -> TextStyle {
    TextStyle::new(Font::Regular, config.fonts.body_pt, config.colours.text)
}
