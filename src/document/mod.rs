//! The in-memory page model and its PDF serialisation.
//!
//! Layout works on a [`Document`] of [`Page`]s holding positioned spans, rules,
//! borders and logo placements, all measured in millimetres from the top-left
//! corner of the sheet (the same space the layout cursor moves through). Only
//! [`Document::to_bytes`] knows about PDF objects; it flips coordinates into PDF's
//! bottom-left point space as it goes.
//!
//! Keeping the model separate from the writer means a laid out document can be
//! inspected (page count, text per page, where each line landed) without
//! parsing PDF bytes back out again.

mod colour;
pub use colour::*;

mod fonts;
pub use fonts::*;

mod logo;
pub use logo::*;

mod page;
pub use page::*;

mod units;
pub use units::*;

mod write;

use chrono::{DateTime, Local};

/// Document metadata shown under "Document Properties" in PDF viewers
#[derive(Clone, Debug, Default)]
pub struct Info {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub created: Option<DateTime<Local>>,
}

impl Info {
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn creator<S: ToString>(&mut self, creator: S) -> &mut Self {
        self.creator = Some(creator.to_string());
        self
    }

    pub fn created(&mut self, created: DateTime<Local>) -> &mut Self {
        self.created = Some(created);
        self
    }
}

/// A top-level outline entry pointing at the start of a section
#[derive(Clone, Debug, PartialEq)]
pub struct Bookmark {
    pub title: String,
    /// 0-based index into [`Document::pages`]
    pub page_index: usize,
    /// Where on the page the section starts
    pub y: Mm,
}

/// An ordered set of pages plus everything needed to serialise them
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub pages: Vec<Page>,
    pub info: Info,
    pub outline: Vec<Bookmark>,
    pub logo: Option<Logo>,
    /// Non-fatal problems hit while laying out, such as a logo that failed to load
    pub warnings: Vec<String>,
}

impl Document {
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize, y: Mm) {
        self.outline.push(Bookmark {
            title: title.to_string(),
            page_index,
            y,
        });
    }

    pub fn warn<S: ToString>(&mut self, warning: S) {
        self.warnings.push(warning.to_string());
    }

    /// All content lines of the document, in reading order
    pub fn content_text(&self) -> Vec<&str> {
        self.pages.iter().flat_map(Page::text_lines).collect()
    }
}
