//! What the tour price does and doesn't cover.
//!
//! Both lists are omitted entirely when empty, the same as highlights.

use crate::document::{Document, Mm};
use crate::layout::config::Threshold;
use crate::layout::pagination::Paginator;
use crate::layout::sections::body_style;
use crate::layout::text;

pub const INCLUSIONS_HEADING: &str = "What's Included";
pub const EXCLUSIONS_HEADING: &str = "What's Not Included";

fn render_list(p: &mut Paginator, doc: &mut Document, heading: &str, items: &[String]) -> bool {
    if items.is_empty() {
        return false;
    }

    let config = p.config();
    p.advance(Mm(config.section_gap_mm));
    text::write_heading(p, doc, heading);
    for item in items {
        text::write_bullet(p, doc, item, body_style(config), Threshold::List);
    }
    true
}

pub fn render_inclusions(p: &mut Paginator, doc: &mut Document, inclusions: &[String]) -> bool {
    render_list(p, doc, INCLUSIONS_HEADING, inclusions)
}

pub fn render_exclusions(p: &mut Paginator, doc: &mut Document, exclusions: &[String]) -> bool {
    render_list(p, doc, EXCLUSIONS_HEADING, exclusions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::LayoutConfig;
    use chrono::Local;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_bullets_under_their_heading() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut p = Paginator::new(&config, Local::now());

        assert!(render_inclusions(&mut p, &mut doc, &["Breakfast daily".to_string()]));
        assert!(render_exclusions(&mut p, &mut doc, &["Flights".to_string()]));
        assert_eq!(
            doc.content_text(),
            vec![INCLUSIONS_HEADING, "•", "Breakfast daily", EXCLUSIONS_HEADING, "•", "Flights"]
        );
        assert_eq!(doc.outline.len(), 2);
    }

    #[test]
    fn empty_lists_are_omitted() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut p = Paginator::new(&config, Local::now());

        assert!(!render_inclusions(&mut p, &mut doc, &[]));
        assert!(!render_exclusions(&mut p, &mut doc, &[]));
        assert!(doc.pages.is_empty());
    }
}
