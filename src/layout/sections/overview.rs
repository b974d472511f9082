//! The opening block of page one: the tour's name, duration, price and summary.

use crate::document::{Document, Font, Mm};
use crate::layout::config::Threshold;
use crate::layout::pagination::Paginator;
use crate::layout::sections::body_style;
use crate::layout::text::{self, Align, TextStyle};
use crate::tour::TourDocument;

pub const HEADING: &str = "Tour Overview";

/// `<duration> | Private Luxury Tour`, or just the tagline without a duration
pub fn subtitle(tour: &TourDocument) -> String {
    let duration = tour.duration_label.trim();
    if duration.is_empty() {
        "Private Luxury Tour".to_string()
    } else {
        format!("{duration} | Private Luxury Tour")
    }
}

pub fn render(p: &mut Paginator, doc: &mut Document, tour: &TourDocument) {
    let config = p.config();

    let title = TextStyle::new(Font::Bold, config.fonts.title_pt, config.colours.primary);
    text::write_paragraph(p, doc, tour.name.trim(), title, Align::Centre, Threshold::General);
    p.advance(Mm(2.0));

    let sub = TextStyle::new(Font::Regular, config.fonts.subtitle_pt, config.colours.text);
    text::write_paragraph(p, doc, &subtitle(tour), sub, Align::Centre, Threshold::General);

    let price = tour.formatted_price.trim();
    if !price.is_empty() {
        p.advance(Mm(2.0));
        let style = TextStyle::new(Font::Bold, config.fonts.price_pt, config.colours.accent);
        text::write_paragraph(p, doc, price, style, Align::Centre, Threshold::General);
    }

    p.advance(Mm(config.section_gap_mm));
    text::write_heading(p, doc, HEADING);
    text::write_paragraph(
        p,
        doc,
        &tour.summary,
        body_style(config),
        Align::Left,
        Threshold::General,
    );
}
