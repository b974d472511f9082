//! Line placement shared by the section renderers.
//!
//! Every helper here asks the [`Paginator`] for room before it places a line,
//! so a renderer only decides *what* to write and against which threshold.

use crate::document::{
    width_of_text, wrap_text, Colour, Document, Font, Mm, Pt, RuleLayout, SpanFont, SpanLayout,
    SpanRole,
};
use crate::layout::config::Threshold;
use crate::layout::pagination::Paginator;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(font: Font, size: f32, colour: Colour) -> TextStyle {
        TextStyle {
            font,
            size: Pt(size),
            colour,
        }
    }

    fn span_font(&self) -> SpanFont {
        SpanFont {
            font: self.font,
            size: self.size,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Centre,
}

/// Place one line with the top of its line box at the cursor.
///
/// Doesn't check for space or move the cursor.
pub fn place_line(p: &mut Paginator, doc: &mut Document, text: &str, style: TextStyle, x: Mm) {
    let baseline: Mm = style.font.ascent(style.size).into();
    let y = p.y() + baseline;
    p.page(doc).add_span(SpanLayout {
        text: text.to_string(),
        font: style.span_font(),
        colour: style.colour,
        coords: (x, y),
        role: SpanRole::Content,
    });
}

/// Wrap `text` to the content width and write it line by line.
///
/// Blank lines between paragraphs advance the cursor by half a line.
pub fn write_paragraph(
    p: &mut Paginator,
    doc: &mut Document,
    text: &str,
    style: TextStyle,
    align: Align,
    threshold: Threshold,
) {
    let config = p.config();
    let line_height = config.line_height(*style.size);
    let max_width: Pt = config.content_width().into();

    for line in wrap_text(text, style.font, style.size, max_width) {
        if line.is_empty() {
            p.advance(line_height / 2.0);
            continue;
        }

        p.ensure_space(doc, line_height, threshold);
        let x = match align {
            Align::Left => config.content_left(),
            Align::Centre => {
                let width: Mm = width_of_text(&line, style.font, style.size).into();
                config.content_left() + (config.content_width() - width) / 2.0
            }
        };
        place_line(p, doc, &line, style, x);
        p.advance(line_height);
    }
}

/// Write a bulleted item with a hanging indent; continuation lines line up
/// with the text of the first line.
///
/// Every item gets its bullet, including a blank one.
pub fn write_bullet(p: &mut Paginator, doc: &mut Document, text: &str, style: TextStyle, threshold: Threshold) {
    let config = p.config();
    let line_height = config.line_height(*style.size);
    let indent = Mm(config.bullet_indent_mm);
    let max_width: Pt = (config.content_width() - indent).into();

    let lines: Vec<String> = wrap_text(text, style.font, style.size, max_width)
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect();

    p.ensure_space(doc, line_height, threshold);
    place_line(p, doc, "•", style, config.content_left());
    if lines.is_empty() {
        p.advance(line_height);
        return;
    }

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            p.ensure_space(doc, line_height, threshold);
        }
        place_line(p, doc, line, style, config.content_left() + indent);
        p.advance(line_height);
    }
}

/// Write a section heading with its underline and add it to the outline.
///
/// The heading is kept with at least one body line, so it never ends up alone
/// at the bottom of a page.
pub fn write_heading(p: &mut Paginator, doc: &mut Document, title: &str) {
    let config = p.config();
    p.ensure_space(
        doc,
        config.heading_height() + config.body_line_height(),
        Threshold::General,
    );

    let page_index = p.page_index(doc);
    doc.add_bookmark(title, page_index, p.y());

    let style = TextStyle::new(Font::Bold, config.fonts.heading_pt, config.colours.primary);
    place_line(p, doc, title, style, config.content_left());

    let ascent: Mm = style.font.ascent(style.size).into();
    let underline_y = p.y() + ascent + Mm(1.5);
    p.page(doc).add_rule(RuleLayout {
        from: (config.content_left(), underline_y),
        to: (config.content_right(), underline_y),
        thickness: Pt(0.75),
        colour: config.colours.accent,
    });

    p.advance(config.heading_height());
}
