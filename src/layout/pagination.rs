//! The pagination controller.
//!
//! [`Paginator`] owns the vertical cursor for one generation run. Renderers ask
//! it for room before every unit they draw (a wrapped line, a bullet, a day
//! header kept with its first line) and it answers by starting a new page when
//! the unit would cross the applicable threshold. New pages always get the page
//! template drawn before anything else lands on them.

use crate::document::{Document, Mm, Page};
use crate::layout::config::{LayoutConfig, Threshold};
use crate::layout::template;
use chrono::{DateTime, Local};

pub struct Paginator<'a> {
    config: &'a LayoutConfig,
    generated_at: DateTime<Local>,
    y: Mm,
}

impl<'a> Paginator<'a> {
    pub fn new(config: &'a LayoutConfig, generated_at: DateTime<Local>) -> Paginator<'a> {
        Paginator {
            config,
            generated_at,
            y: config.content_top(),
        }
    }

    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    /// Current cursor position, millimetres from the top of the page
    pub fn y(&self) -> Mm {
        self.y
    }

    /// Move the cursor down
    pub fn advance(&mut self, by: Mm) {
        self.y += by;
    }

    /// Start a new page unconditionally.
    ///
    /// Returns the new page's number.
    pub fn new_page(&mut self, doc: &mut Document) -> usize {
        let number = doc.page_count() + 1;
        let mut page = Page::new(number, self.config.page_size());
        template::render(self.config, &self.generated_at, doc.logo.as_ref(), &mut page);
        doc.add_page(page);
        self.y = self.config.content_top();
        log::debug!("started page {number}");
        number
    }

    /// Make sure `required` millimetres fit above `threshold`, starting a new
    /// page if they don't.
    ///
    /// Returns whether a new page was started. A page that has nothing on it
    /// yet is never abandoned, so an oversized unit is placed rather than
    /// producing an endless run of blank pages.
    pub fn ensure_space(&mut self, doc: &mut Document, required: Mm, threshold: Threshold) -> bool {
        if doc.pages.is_empty() {
            self.new_page(doc);
            return true;
        }

        let limit = self.config.threshold(threshold);
        let at_top = self.y <= self.config.content_top();
        if self.y + required > limit && !at_top {
            log::debug!(
                "{:.1}mm at {:.1}mm crosses the {:?} threshold ({:.1}mm)",
                *required,
                *self.y,
                threshold,
                *limit
            );
            self.new_page(doc);
            true
        } else {
            false
        }
    }

    /// The page content is currently being placed on
    pub fn page<'d>(&mut self, doc: &'d mut Document) -> &'d mut Page {
        if doc.pages.is_empty() {
            self.new_page(doc);
        }
        let last = doc.pages.len() - 1;
        &mut doc.pages[last]
    }

    /// 0-based index of the current page
    pub fn page_index(&self, doc: &Document) -> usize {
        doc.pages.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> DateTime<Local> {
        Local::now()
    }

    #[test]
    fn starts_the_first_page_on_demand() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut paginator = Paginator::new(&config, stamp());

        assert!(paginator.ensure_space(&mut doc, Mm(5.0), Threshold::General));
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].number, 1);
        assert_eq!(paginator.y(), config.content_top());
    }

    #[test]
    fn breaks_when_a_unit_would_cross_the_threshold() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut paginator = Paginator::new(&config, stamp());
        paginator.new_page(&mut doc);

        // move to just above the general threshold
        paginator.advance(Mm(config.thresholds.general_mm - config.content_top_mm - 4.0));
        assert!(!paginator.ensure_space(&mut doc, Mm(4.0), Threshold::General));
        assert!(paginator.ensure_space(&mut doc, Mm(4.5), Threshold::General));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(paginator.y(), config.content_top());
    }

    #[test]
    fn list_threshold_allows_more_content() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut paginator = Paginator::new(&config, stamp());
        paginator.new_page(&mut doc);

        paginator.advance(Mm(config.thresholds.general_mm - config.content_top_mm));
        assert!(!paginator.ensure_space(&mut doc, Mm(10.0), Threshold::List));
        assert!(paginator.ensure_space(&mut doc, Mm(10.0), Threshold::General));
    }

    #[test]
    fn never_abandons_an_empty_page() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut paginator = Paginator::new(&config, stamp());
        paginator.new_page(&mut doc);

        assert!(!paginator.ensure_space(&mut doc, Mm(1000.0), Threshold::List));
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn numbers_pages_sequentially() {
        let config = LayoutConfig::default();
        let mut doc = Document::default();
        let mut paginator = Paginator::new(&config, stamp());
        for expected in 1..=5 {
            assert_eq!(paginator.new_page(&mut doc), expected);
        }
        let numbers: Vec<usize> = doc.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}
