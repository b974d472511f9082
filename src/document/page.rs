use crate::document::{Colour, Font, Mm, Pt};

/// Font and size of a laid out span
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpanFont {
    pub font: Font,
    pub size: Pt,
}

/// What a span belongs to, so the page scaffold can be told apart from the
/// tour content when inspecting a laid out document
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpanRole {
    /// Page number label and footer lines drawn by the page template
    Template,
    /// Everything drawn by the section renderers
    Content,
}

/// A single line of text placed on a page.
///
/// `coords` is the start of the baseline, measured in millimetres from the
/// top-left corner of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Mm, Mm),
    pub role: SpanRole,
}

/// A straight stroked line
#[derive(Clone, Debug, PartialEq)]
pub struct RuleLayout {
    pub from: (Mm, Mm),
    pub to: (Mm, Mm),
    pub thickness: Pt,
    pub colour: Colour,
}

/// An axis aligned rectangle, top-left origin
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: Mm,
    pub y: Mm,
    pub width: Mm,
    pub height: Mm,
}

impl Rect {
    /// A rectangle inset by `inset` on every side of a page of the given size
    pub fn inset(page_size: (Mm, Mm), inset: Mm) -> Rect {
        Rect {
            x: inset,
            y: inset,
            width: page_size.0 - inset * 2.0,
            height: page_size.1 - inset * 2.0,
        }
    }
}

/// A stroked (unfilled) rectangle, used for the decorative borders
#[derive(Clone, Debug, PartialEq)]
pub struct BoxLayout {
    pub rect: Rect,
    pub thickness: Pt,
    pub colour: Colour,
}

/// Placement of the document's logo image on a page
#[derive(Clone, Debug, PartialEq)]
pub struct ImageLayout {
    pub position: Rect,
}

/// One sheet of the output document
#[derive(Clone, Debug)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub size: (Mm, Mm),
    pub spans: Vec<SpanLayout>,
    pub rules: Vec<RuleLayout>,
    pub boxes: Vec<BoxLayout>,
    pub images: Vec<ImageLayout>,
}

impl Page {
    pub fn new(number: usize, size: (Mm, Mm)) -> Page {
        Page {
            number,
            size,
            spans: Vec::new(),
            rules: Vec::new(),
            boxes: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.spans.push(span);
    }

    pub fn add_rule(&mut self, rule: RuleLayout) {
        self.rules.push(rule);
    }

    pub fn add_box(&mut self, b: BoxLayout) {
        self.boxes.push(b);
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.images.push(image);
    }

    /// The content text on this page, one entry per laid out line, top to bottom
    pub fn text_lines(&self) -> Vec<&str> {
        self.spans
            .iter()
            .filter(|s| s.role == SpanRole::Content)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// The text drawn by the page template (page label and footer)
    pub fn template_lines(&self) -> Vec<&str> {
        self.spans
            .iter()
            .filter(|s| s.role == SpanRole::Template)
            .map(|s| s.text.as_str())
            .collect()
    }

    pub fn content_spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.spans.iter().filter(|s| s.role == SpanRole::Content)
    }
}
