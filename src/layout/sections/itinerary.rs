//! The day by day itinerary.
//!
//! Each day is a `Day N: Title` header in the accent colour followed by its
//! description. The header is kept with the first line of the description so a
//! day never starts with an orphaned header at the bottom of a page; a long
//! description still flows onto the following pages line by line.

use crate::document::{wrap_text, Document, Font, Mm, Pt};
use crate::layout::config::Threshold;
use crate::layout::pagination::Paginator;
use crate::layout::sections::body_style;
use crate::layout::text::{self, Align, TextStyle};
use crate::tour::ItineraryDay;

pub const HEADING: &str = "Detailed Itinerary";

/// Gap left between consecutive days
const DAY_GAP: Mm = Mm(3.0);

pub fn render(p: &mut Paginator, doc: &mut Document, days: &[ItineraryDay]) {
    let config = p.config();
    p.advance(Mm(config.section_gap_mm));
    text::write_heading(p, doc, HEADING);

    let header_style = TextStyle::new(Font::Bold, config.fonts.subtitle_pt, config.colours.accent);
    let header_height = config.line_height(config.fonts.subtitle_pt);
    let body = body_style(config);
    let max_width: Pt = config.content_width().into();

    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            p.advance(DAY_GAP);
        }

        let has_description = wrap_text(&day.description, body.font, body.size, max_width)
            .iter()
            .any(|l| !l.is_empty());
        let required = if has_description {
            header_height + config.body_line_height()
        } else {
            header_height
        };
        if p.ensure_space(doc, required, Threshold::List) {
            log::debug!("day {} starts on page {}", day.day, doc.page_count());
        }

        text::place_line(p, doc, &day.header(), header_style, config.content_left());
        p.advance(header_height);

        text::write_paragraph(p, doc, &day.description, body, Align::Left, Threshold::List);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::{LayoutConfig, SectionThresholds};
    use chrono::Local;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_headers_and_descriptions_in_order() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut p = Paginator::new(&config, Local::now());

        let days = vec![
            ItineraryDay::new(1, "Arrival in Lisbon", "Transfer to the hotel."),
            ItineraryDay::new(2, "Sintra", ""),
        ];
        render(&mut p, &mut doc, &days);
        assert_eq!(
            doc.content_text(),
            vec![
                HEADING,
                "Day 1: Arrival in Lisbon",
                "Transfer to the hotel.",
                "Day 2: Sintra",
            ]
        );

        let header = doc.pages[0]
            .content_spans()
            .find(|s| s.text == "Day 2: Sintra")
            .expect("day header is rendered");
        assert_eq!(header.colour, config.colours.accent);
        assert_eq!(header.font.font, Font::Bold);
    }

    #[test]
    fn headers_stay_with_their_first_line() {
        let config = LayoutConfig {
            page_height_mm: 160.0,
            thresholds: SectionThresholds {
                general_mm: 100.0,
                list_mm: 120.0,
            },
            ..LayoutConfig::default()
        };
        let mut doc = Document::default();
        let mut p = Paginator::new(&config, Local::now());

        let days: Vec<ItineraryDay> = (1..=12)
            .map(|n| {
                ItineraryDay::new(
                    n,
                    format!("Stop {n}"),
                    "A long and leisurely day exploring the old town, its markets and its cafés.",
                )
            })
            .collect();
        render(&mut p, &mut doc, &days);
        assert!(doc.page_count() > 1);

        for page in doc.pages.iter() {
            let lines = page.text_lines();
            if let Some(last) = lines.last() {
                assert!(!last.starts_with("Day "), "header left at the bottom of page {}", page.number);
            }
        }
    }
}
