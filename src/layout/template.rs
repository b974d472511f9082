//! The scaffold drawn on every page before any content: decorative borders,
//! the logo, a divider, the page label and the two line footer.

use crate::document::{
    width_of_text, BoxLayout, Font, ImageLayout, Logo, Mm, Page, Pt, Rect, RuleLayout, SpanFont,
    SpanLayout, SpanRole,
};
use crate::layout::config::LayoutConfig;
use chrono::{DateTime, Datelike, Local};

/// Draw the page template onto a freshly created page
pub fn render(config: &LayoutConfig, generated_at: &DateTime<Local>, logo: Option<&Logo>, page: &mut Page) {
    render_borders(config, page);
    if let Some(logo) = logo {
        render_logo(config, logo, page);
    }

    page.add_rule(RuleLayout {
        from: (config.content_left(), Mm(config.divider_mm)),
        to: (config.content_right(), Mm(config.divider_mm)),
        thickness: Pt(0.75),
        colour: config.colours.accent,
    });

    if page.number > 1 {
        render_page_label(config, page);
    }
    render_footer(config, generated_at, page);
}

fn render_borders(config: &LayoutConfig, page: &mut Page) {
    page.add_box(BoxLayout {
        rect: Rect::inset(page.size, Mm(config.border_outer_mm)),
        thickness: Pt(1.5),
        colour: config.colours.primary,
    });
    page.add_box(BoxLayout {
        rect: Rect::inset(page.size, Mm(config.border_inner_mm)),
        thickness: Pt(0.5),
        colour: config.colours.accent,
    });
}

/// Fit the logo inside its box, keeping its aspect ratio
fn logo_rect(config: &LayoutConfig, logo: &Logo) -> Rect {
    let (max_w, max_h) = (config.logo_max_width_mm, config.logo_max_height_mm);
    let aspect = logo.aspect_ratio();
    let (width, height) = if max_w / max_h > aspect {
        (max_h * aspect, max_h)
    } else {
        (max_w, max_w / aspect)
    };
    Rect {
        x: config.content_left(),
        y: Mm(config.logo_top_mm),
        width: Mm(width),
        height: Mm(height),
    }
}

fn render_logo(config: &LayoutConfig, logo: &Logo, page: &mut Page) {
    page.add_image(ImageLayout {
        position: logo_rect(config, logo),
    });
}

fn render_page_label(config: &LayoutConfig, page: &mut Page) {
    let size = Pt(config.fonts.footer_pt);
    let text = format!("Page {}", page.number);
    let width: Mm = width_of_text(&text, Font::Regular, size).into();
    page.add_span(SpanLayout {
        text,
        font: SpanFont {
            font: Font::Regular,
            size,
        },
        colour: config.colours.muted,
        coords: (config.content_right() - width, Mm(config.logo_top_mm + 6.0)),
        role: SpanRole::Template,
    });
}

/// `operator | email | phone | website`, skipping blank fields
pub fn contact_line(config: &LayoutConfig) -> String {
    let contact = &config.contact;
    [
        contact.operator.as_str(),
        contact.email.as_str(),
        contact.phone.as_str(),
        contact.website.as_str(),
    ]
    .iter()
    .map(|s| s.trim())
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

pub fn generated_line(config: &LayoutConfig, generated_at: &DateTime<Local>) -> String {
    format!(
        "Generated on {} | © {} {}. All rights reserved.",
        generated_at.format("%B %-d, %Y"),
        generated_at.year(),
        config.contact.operator.trim()
    )
}

fn render_footer(config: &LayoutConfig, generated_at: &DateTime<Local>, page: &mut Page) {
    let rule_y = config.footer_rule();
    page.add_rule(RuleLayout {
        from: (config.content_left(), rule_y),
        to: (config.content_right(), rule_y),
        thickness: Pt(0.5),
        colour: config.colours.muted,
    });

    let size = Pt(config.fonts.footer_pt);
    let lines = [
        (contact_line(config), rule_y + Mm(6.0)),
        (generated_line(config, generated_at), rule_y + Mm(11.0)),
    ];
    for (text, y) in lines {
        let width: Mm = width_of_text(&text, Font::Regular, size).into();
        let x = (config.content_left() + (config.content_width() - width) / 2.0).max(config.content_left());
        page.add_span(SpanLayout {
            text,
            font: SpanFont {
                font: Font::Regular,
                size,
            },
            colour: config.colours.muted,
            coords: (x, y),
            role: SpanRole::Template,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn stamp() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 7, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn first_page_has_no_page_label() {
        let config = LayoutConfig::default();
        let mut page = Page::new(1, config.page_size());
        render(&config, &stamp(), None, &mut page);

        let lines = page.template_lines();
        assert_eq!(lines.len(), 2);
        assert!(!lines.iter().any(|l| l.starts_with("Page ")));
        assert!(page.text_lines().is_empty());
    }

    #[test]
    fn later_pages_are_labelled() {
        let config = LayoutConfig::default();
        let mut page = Page::new(3, config.page_size());
        render(&config, &stamp(), None, &mut page);

        assert_eq!(page.template_lines()[0], "Page 3");
        assert_eq!(page.boxes.len(), 2);
        // divider and footer rule
        assert_eq!(page.rules.len(), 2);
        assert!(page.images.is_empty());
    }

    #[test]
    fn footer_carries_contact_and_generation_date() {
        let config = LayoutConfig::default();
        assert_eq!(
            contact_line(&config),
            "Luxury Private Tours | info@luxuryprivatetours.com | +1 (555) 010-2030 | www.luxuryprivatetours.com"
        );
        assert_eq!(
            generated_line(&config, &stamp()),
            "Generated on March 7, 2025 | © 2025 Luxury Private Tours. All rights reserved."
        );
    }

    #[test]
    fn contact_line_skips_blank_fields() {
        let mut config = LayoutConfig::default();
        config.contact.phone = "  ".to_string();
        config.contact.website = String::new();
        assert_eq!(
            contact_line(&config),
            "Luxury Private Tours | info@luxuryprivatetours.com"
        );
    }

    #[test]
    fn logo_keeps_its_aspect_ratio() {
        let config = LayoutConfig::default();
        let wide = Logo {
            width: 400,
            height: 100,
            rgb: Vec::new(),
            alpha: None,
        };
        let rect = logo_rect(&config, &wide);
        assert!((*rect.width - 40.0).abs() < 0.001);
        assert!((*rect.height - 10.0).abs() < 0.001);

        let tall = Logo {
            width: 100,
            height: 200,
            rgb: Vec::new(),
            alpha: None,
        };
        let rect = logo_rect(&config, &tall);
        assert!((*rect.width - 10.0).abs() < 0.001);
        assert!((*rect.height - 20.0).abs() < 0.001);
    }

    #[test]
    fn template_sits_outside_the_content_area() {
        let config = LayoutConfig::default();
        let mut page = Page::new(2, config.page_size());
        render(&config, &stamp(), None, &mut page);
        for span in page.spans.iter() {
            let y = span.coords.1;
            assert!(y < config.content_top() || y > config.threshold(crate::layout::config::Threshold::List));
        }
    }
}
