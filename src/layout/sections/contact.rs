//! The closing "Contact Us" page.

use crate::document::{Document, Font};
use crate::layout::config::Threshold;
use crate::layout::pagination::Paginator;
use crate::layout::sections::body_style;
use crate::layout::text::{self, Align, TextStyle};

pub const HEADING: &str = "Contact Us";

/// Render the contact details, always on a page of their own
pub fn render(p: &mut Paginator, doc: &mut Document) {
    let config = p.config();
    let contact = &config.contact;
    p.new_page(doc);

    text::write_heading(p, doc, HEADING);
    let body = body_style(config);
    text::write_paragraph(p, doc, &contact.instructions, body, Align::Left, Threshold::General);
    p.advance(config.body_line_height() / 2.0);

    let operator = TextStyle::new(Font::Bold, config.fonts.body_pt, config.colours.primary);
    text::write_paragraph(p, doc, &contact.operator, operator, Align::Left, Threshold::General);

    for (label, value) in [
        ("Email", &contact.email),
        ("Phone", &contact.phone),
        ("Website", &contact.website),
    ] {
        if value.trim().is_empty() {
            continue;
        }
        text::write_paragraph(
            p,
            doc,
            &format!("{label}: {}", value.trim()),
            body,
            Align::Left,
            Threshold::General,
        );
    }
}
