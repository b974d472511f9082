use crate::document::{Document, Font, Mm, Page, Pt};
use chrono::{Datelike, Timelike};
use pdf_writer::types::LineCapStyle;
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

const LOGO_NAME: &[u8] = b"Im1";

/// Hands out sequential object ids
struct RefAllocator {
    next: i32,
}

impl RefAllocator {
    fn new() -> RefAllocator {
        RefAllocator { next: 1 }
    }

    fn bump(&mut self) -> Ref {
        let id = Ref::new(self.next);
        self.next += 1;
        id
    }
}

impl Document {
    /// Serialise the document as PDF into a new buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut alloc = RefAllocator::new();
        let mut pdf = Pdf::new();

        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let font_ids: Vec<(Font, Ref)> = Font::all().iter().map(|f| (*f, alloc.bump())).collect();
        let page_ids: Vec<Ref> = self.pages.iter().map(|_| alloc.bump()).collect();
        let content_ids: Vec<Ref> = self.pages.iter().map(|_| alloc.bump()).collect();

        for (font, id) in font_ids.iter() {
            pdf.type1_font(*id)
                .base_font(Name(font.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let logo_id = self.logo.as_ref().map(|logo| {
            let image_id = alloc.bump();
            let mask_id = logo.alpha.as_ref().map(|alpha| {
                let mask_id = alloc.bump();
                let mut mask = pdf.image_xobject(mask_id, alpha);
                mask.filter(Filter::FlateDecode);
                mask.width(logo.width as i32);
                mask.height(logo.height as i32);
                mask.color_space().device_gray();
                mask.bits_per_component(8);
                mask_id
            });

            let mut image = pdf.image_xobject(image_id, &logo.rgb);
            image.filter(Filter::FlateDecode);
            image.width(logo.width as i32);
            image.height(logo.height as i32);
            image.color_space().device_rgb();
            image.bits_per_component(8);
            if let Some(mask_id) = mask_id {
                image.s_mask(mask_id);
            }
            image_id
        });

        for (i, page) in self.pages.iter().enumerate() {
            let raw = render_page_content(page, logo_id.is_some());
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);

            let width: Pt = page.size.0.into();
            let height: Pt = page.size.1.into();
            let mut pdf_page = pdf.page(page_ids[i]);
            pdf_page
                .media_box(Rect::new(0.0, 0.0, *width, *height))
                .parent(page_tree_id)
                .contents(content_ids[i]);
            let mut resources = pdf_page.resources();
            {
                let mut fonts = resources.fonts();
                for (font, id) in font_ids.iter() {
                    fonts.pair(Name(font.resource_name()), *id);
                }
            }
            if let Some(logo_id) = logo_id {
                resources.x_objects().pair(Name(LOGO_NAME), logo_id);
            }
        }

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        // outline entries form a flat, doubly linked list under the root
        let outline_id = (!self.outline.is_empty() && !self.pages.is_empty()).then(|| alloc.bump());
        if let Some(outline_id) = outline_id {
            let item_ids: Vec<Ref> = self.outline.iter().map(|_| alloc.bump()).collect();
            for (i, bookmark) in self.outline.iter().enumerate() {
                let page_index = bookmark.page_index.min(self.pages.len() - 1);
                let page_height: Pt = self.pages[page_index].size.1.into();
                let top: Pt = bookmark.y.into();

                let mut item = pdf.outline_item(item_ids[i]);
                item.title(TextStr(&bookmark.title)).parent(outline_id);
                if i > 0 {
                    item.prev(item_ids[i - 1]);
                }
                if i + 1 < item_ids.len() {
                    item.next(item_ids[i + 1]);
                }
                item.dest()
                    .page(page_ids[page_index])
                    .xyz(0.0, *page_height - *top, None);
            }

            let mut outline = pdf.outline(outline_id);
            outline.count(item_ids.len() as i32);
            if let (Some(first), Some(last)) = (item_ids.first(), item_ids.last()) {
                outline.first(*first).last(*last);
            }
        }

        let mut catalog = pdf.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outline_id) = outline_id {
            catalog.outlines(outline_id);
        }
        drop(catalog);

        let info_id = alloc.bump();
        let mut info = pdf.document_info(info_id);
        if let Some(title) = &self.info.title {
            info.title(TextStr(title));
        }
        if let Some(subject) = &self.info.subject {
            info.subject(TextStr(subject));
        }
        if let Some(author) = &self.info.author {
            info.author(TextStr(author));
        }
        if let Some(creator) = &self.info.creator {
            info.creator(TextStr(creator));
        }
        if let Some(created) = &self.info.created {
            info.creation_date(
                Date::new(created.year().clamp(0, u16::MAX as i32) as u16)
                    .month(created.month() as u8)
                    .day(created.day() as u8)
                    .hour(created.hour() as u8)
                    .minute(created.minute() as u8)
                    .second(created.second() as u8),
            );
        }
        drop(info);

        pdf.finish()
    }
}

/// Convert a top-left millimetre position into PDF's bottom-left point space
fn to_pdf_coords(page: &Page, (x, y): (Mm, Mm)) -> (f32, f32) {
    let x: Pt = x.into();
    let y: Pt = (page.size.1 - y).into();
    (*x, *y)
}

fn render_page_content(page: &Page, has_logo: bool) -> Vec<u8> {
    let mut content = Content::new();

    for b in page.boxes.iter() {
        let (r, g, bl) = b.colour.as_f32();
        let (x, y_bottom) = to_pdf_coords(page, (b.rect.x, b.rect.y + b.rect.height));
        let width: Pt = b.rect.width.into();
        let height: Pt = b.rect.height.into();
        content
            .set_stroke_rgb(r, g, bl)
            .set_line_width(*b.thickness)
            .rect(x, y_bottom, *width, *height)
            .stroke();
    }

    for rule in page.rules.iter() {
        let (r, g, b) = rule.colour.as_f32();
        let from = to_pdf_coords(page, rule.from);
        let to = to_pdf_coords(page, rule.to);
        content
            .set_stroke_rgb(r, g, b)
            .set_line_cap(LineCapStyle::ButtCap)
            .set_line_width(*rule.thickness)
            .move_to(from.0, from.1)
            .line_to(to.0, to.1)
            .stroke();
    }

    if has_logo {
        for image in page.images.iter() {
            let (x, y_bottom) =
                to_pdf_coords(page, (image.position.x, image.position.y + image.position.height));
            let width: Pt = image.position.width.into();
            let height: Pt = image.position.height.into();
            content
                .save_state()
                .transform([*width, 0.0, 0.0, *height, x, y_bottom])
                .x_object(Name(LOGO_NAME))
                .restore_state();
        }
    }

    for span in page.spans.iter() {
        let (r, g, b) = span.colour.as_f32();
        let (x, y) = to_pdf_coords(page, span.coords);
        let text = crate::document::encode_win_ansi(&span.text);
        content
            .begin_text()
            .set_fill_rgb(r, g, b)
            .set_font(Name(span.font.font.resource_name()), *span.font.size)
            .next_line(x, y)
            .show(Str(&text))
            .end_text();
    }

    content.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Colour, SpanFont, SpanLayout, SpanRole};

    fn one_page_document() -> Document {
        let mut doc = Document::default();
        let mut page = Page::new(1, (Mm(210.0), Mm(297.0)));
        page.add_span(SpanLayout {
            text: "Day 1: Arrival".to_string(),
            font: SpanFont {
                font: Font::Bold,
                size: Pt(12.0),
            },
            colour: Colour::new_rgb_bytes(0, 0, 0),
            coords: (Mm(20.0), Mm(50.0)),
            role: SpanRole::Content,
        });
        doc.add_page(page);
        doc.add_bookmark("Itinerary", 0, Mm(45.0));
        doc.info.title("Test Tour").creator("tour-pdf");
        doc
    }

    #[test]
    fn can_write_pdf() {
        let doc = one_page_document();
        let bytes = doc.to_bytes();
        assert!(bytes.starts_with(b"%PDF-"));
        let as_text = String::from_utf8_lossy(&bytes);
        assert!(as_text.contains("/Helvetica-Bold"));
        assert!(as_text.contains("/WinAnsiEncoding"));
        assert!(as_text.contains("/Outlines"));
        assert!(as_text.contains("/Count 1"));
    }

    #[test]
    fn flips_coordinates() {
        let page = Page::new(1, (Mm(25.4), Mm(25.4)));
        let (x, y) = to_pdf_coords(&page, (Mm(0.0), Mm(25.4)));
        assert!(x.abs() < 0.001);
        assert!(y.abs() < 0.001);
        let (_, y) = to_pdf_coords(&page, (Mm(0.0), Mm(0.0)));
        assert!((y - 72.0).abs() < 0.001);
    }
}
