use crate::document::{Document, Mm};
use crate::layout::config::Threshold;
use crate::layout::pagination::Paginator;
use crate::layout::sections::body_style;
use crate::layout::text;

pub const HEADING: &str = "Tour Highlights";

/// Render the highlights as bullets, or nothing at all when there are none.
///
/// Returns whether anything was written.
pub fn render(p: &mut Paginator, doc: &mut Document, highlights: &[String]) -> bool {
    if highlights.is_empty() {
        return false;
    }

    let config = p.config();
    p.advance(Mm(config.section_gap_mm));
    text::write_heading(p, doc, HEADING);
    for highlight in highlights {
        text::write_bullet(p, doc, highlight, body_style(config), Threshold::List);
    }
    true
}
