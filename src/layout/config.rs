use crate::document::{Colour, Font, Mm, Pt};
use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which bottom threshold a piece of content is checked against.
///
/// List sections (highlights, itinerary days, inclusions, exclusions) are
/// allowed to run further down the page than headings and overview text, so
/// the two are kept as separate, named limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Threshold {
    General,
    List,
}

/// Lowest point, measured from the top of the page, that content may reach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionThresholds {
    pub general_mm: f32,
    pub list_mm: f32,
}

impl Default for SectionThresholds {
    fn default() -> Self {
        SectionThresholds {
            general_mm: 250.0,
            list_mm: 265.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Headings, borders and the footer rule
    pub primary: Colour,
    /// Price, day headers, underlines and the inner border
    pub accent: Colour,
    /// Body copy
    pub text: Colour,
    /// Footer and page label
    pub muted: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            primary: Colour::new_rgb_bytes(26, 54, 93),
            accent: Colour::new_rgb_bytes(184, 134, 11),
            text: Colour::new_rgb_bytes(51, 51, 51),
            muted: Colour::new_rgb_bytes(128, 128, 128),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title_pt: f32,
    pub subtitle_pt: f32,
    pub price_pt: f32,
    pub heading_pt: f32,
    pub body_pt: f32,
    pub footer_pt: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            title_pt: 22.0,
            subtitle_pt: 12.0,
            price_pt: 16.0,
            heading_pt: 15.0,
            body_pt: 10.5,
            footer_pt: 8.0,
        }
    }
}

/// The operator's details, printed in every footer and on the contact page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub operator: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub instructions: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        ContactDetails {
            operator: "Luxury Private Tours".to_string(),
            email: "info@luxuryprivatetours.com".to_string(),
            phone: "+1 (555) 010-2030".to_string(),
            website: "www.luxuryprivatetours.com".to_string(),
            instructions: "To book this tour or to tailor it to your travel dates, please contact us:"
                .to_string(),
        }
    }
}

/// Every dimension, colour and size the layout engine uses.
///
/// Distances are millimetres from the top-left corner of the page. Defaults
/// describe an A4 sheet; tests shrink the page or the thresholds to force
/// pagination deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    /// Outer decorative border inset from the page edge
    pub border_outer_mm: f32,
    /// Inner decorative border inset from the page edge
    pub border_inner_mm: f32,
    /// Top of the logo
    pub logo_top_mm: f32,
    pub logo_max_width_mm: f32,
    pub logo_max_height_mm: f32,
    /// The divider below the logo
    pub divider_mm: f32,
    /// Where the cursor starts on every page
    pub content_top_mm: f32,
    /// The rule above the footer, measured from the bottom of the page
    pub footer_rule_from_bottom_mm: f32,
    pub thresholds: SectionThresholds,
    /// Vertical gap left between sections
    pub section_gap_mm: f32,
    /// Indent of bullet text relative to the bullet glyph
    pub bullet_indent_mm: f32,
    /// Baseline-to-baseline distance as a multiple of the font size
    pub line_spacing: f32,
    pub colours: Palette,
    pub fonts: FontSizes,
    pub contact: ContactDetails,
    /// Image drawn at the top-left of every page
    pub logo: Option<PathBuf>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_left_mm: 20.0,
            margin_right_mm: 20.0,
            border_outer_mm: 5.0,
            border_inner_mm: 8.0,
            logo_top_mm: 12.0,
            logo_max_width_mm: 40.0,
            logo_max_height_mm: 20.0,
            divider_mm: 36.0,
            content_top_mm: 45.0,
            footer_rule_from_bottom_mm: 22.0,
            thresholds: SectionThresholds::default(),
            section_gap_mm: 8.0,
            bullet_indent_mm: 5.0,
            line_spacing: 1.45,
            colours: Palette::default(),
            fonts: FontSizes::default(),
            contact: ContactDetails::default(),
            logo: None,
        }
    }
}

impl LayoutConfig {
    /// The default layout on a sheet of another size.
    ///
    /// Both thresholds stay the same distance above the bottom edge as on A4,
    /// so they keep their clearance from the footer.
    pub fn for_page(page_width_mm: f32, page_height_mm: f32) -> LayoutConfig {
        let a4 = LayoutConfig::default();
        let lift = a4.page_height_mm - page_height_mm;
        LayoutConfig {
            page_width_mm,
            page_height_mm,
            thresholds: SectionThresholds {
                general_mm: a4.thresholds.general_mm - lift,
                list_mm: a4.thresholds.list_mm - lift,
            },
            ..a4
        }
    }

    pub fn page_size(&self) -> (Mm, Mm) {
        (Mm(self.page_width_mm), Mm(self.page_height_mm))
    }

    pub fn content_left(&self) -> Mm {
        Mm(self.margin_left_mm)
    }

    pub fn content_right(&self) -> Mm {
        Mm(self.page_width_mm - self.margin_right_mm)
    }

    pub fn content_width(&self) -> Mm {
        self.content_right() - self.content_left()
    }

    pub fn content_top(&self) -> Mm {
        Mm(self.content_top_mm)
    }

    pub fn footer_rule(&self) -> Mm {
        Mm(self.page_height_mm - self.footer_rule_from_bottom_mm)
    }

    pub fn threshold(&self, threshold: Threshold) -> Mm {
        match threshold {
            Threshold::General => Mm(self.thresholds.general_mm),
            Threshold::List => Mm(self.thresholds.list_mm),
        }
    }

    /// Distance between baselines for text set at `size`
    pub fn line_height(&self, size: f32) -> Mm {
        Font::Regular.line_height(Pt(size), self.line_spacing).into()
    }

    pub fn body_line_height(&self) -> Mm {
        self.line_height(self.fonts.body_pt)
    }

    /// Space reserved for a section heading: the heading line plus the gap
    /// under its underline
    pub fn heading_height(&self) -> Mm {
        self.line_height(self.fonts.heading_pt) + Mm(2.0)
    }

    /// Check that the geometry leaves room for content.
    ///
    /// The pagination controller starts a fresh page whenever a line would
    /// cross a threshold. If a single line can't fit between the top of the
    /// content area and a threshold, that would never terminate, so such
    /// configurations are rejected up front.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let invalid = |reason: String| Err(GenerationError::InvalidConfig(reason));

        let dimensions = [
            ("page_width_mm", self.page_width_mm),
            ("page_height_mm", self.page_height_mm),
            ("margin_left_mm", self.margin_left_mm),
            ("margin_right_mm", self.margin_right_mm),
            ("border_outer_mm", self.border_outer_mm),
            ("border_inner_mm", self.border_inner_mm),
            ("logo_top_mm", self.logo_top_mm),
            ("logo_max_width_mm", self.logo_max_width_mm),
            ("logo_max_height_mm", self.logo_max_height_mm),
            ("divider_mm", self.divider_mm),
            ("content_top_mm", self.content_top_mm),
            ("footer_rule_from_bottom_mm", self.footer_rule_from_bottom_mm),
            ("thresholds.general_mm", self.thresholds.general_mm),
            ("thresholds.list_mm", self.thresholds.list_mm),
            ("section_gap_mm", self.section_gap_mm),
            ("bullet_indent_mm", self.bullet_indent_mm),
            ("line_spacing", self.line_spacing),
            ("fonts.title_pt", self.fonts.title_pt),
            ("fonts.subtitle_pt", self.fonts.subtitle_pt),
            ("fonts.price_pt", self.fonts.price_pt),
            ("fonts.heading_pt", self.fonts.heading_pt),
            ("fonts.body_pt", self.fonts.body_pt),
            ("fonts.footer_pt", self.fonts.footer_pt),
        ];
        if let Some((name, _)) = dimensions.iter().find(|(_, value)| !value.is_finite()) {
            return invalid(format!("`{name}` must be a finite number"));
        }

        if self.page_width_mm <= 0.0 || self.page_height_mm <= 0.0 {
            return invalid("page dimensions must be positive".to_string());
        }
        if self.content_width() <= Mm(self.bullet_indent_mm) {
            return invalid("margins leave no room for content".to_string());
        }
        if self.line_spacing <= 0.0 {
            return invalid("line spacing must be positive".to_string());
        }
        for size in [
            self.fonts.title_pt,
            self.fonts.subtitle_pt,
            self.fonts.price_pt,
            self.fonts.heading_pt,
            self.fonts.body_pt,
            self.fonts.footer_pt,
        ] {
            if size <= 0.0 {
                return invalid("font sizes must be positive".to_string());
            }
        }
        if self.thresholds.general_mm > self.thresholds.list_mm {
            return invalid(format!(
                "the general threshold ({}mm) must not sit below the list threshold ({}mm)",
                self.thresholds.general_mm, self.thresholds.list_mm
            ));
        }
        if self.threshold(Threshold::List) > self.footer_rule() {
            return invalid(format!(
                "the list threshold ({}mm) runs into the footer ({}mm)",
                self.thresholds.list_mm,
                *self.footer_rule()
            ));
        }

        // the tallest single unit is a heading or a day header kept with one
        // body line, or a wrapped title line
        let tallest = (self.heading_height() + self.body_line_height())
            .max(self.line_height(self.fonts.subtitle_pt) + self.body_line_height())
            .max(self.line_height(self.fonts.title_pt));
        if self.content_top() + tallest > self.threshold(Threshold::General) {
            return invalid(format!(
                "a {:.1}mm block can't fit between the content top ({}mm) and the general threshold ({}mm)",
                *tallest, self.content_top_mm, self.thresholds.general_mm
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        LayoutConfig::default()
            .validate()
            .expect("default config is valid");
    }

    #[test]
    fn other_paper_sizes_keep_clear_of_the_footer() {
        let letter = LayoutConfig::for_page(215.9, 279.4);
        letter.validate().expect("letter layout is valid");
        assert!(letter.threshold(Threshold::List) <= letter.footer_rule());
        assert!((letter.thresholds.general_mm - 232.4).abs() < 0.001);
        assert!((letter.thresholds.list_mm - 247.4).abs() < 0.001);

        assert_eq!(LayoutConfig::for_page(210.0, 297.0), LayoutConfig::default());
    }

    #[test]
    fn rejects_non_finite_dimensions() {
        let config: LayoutConfig = toml::from_str("page_height_mm = nan").expect("can parse");
        assert!(config.page_height_mm.is_nan());
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(reason)) if reason.contains("page_height_mm")
        ));

        let config = LayoutConfig {
            line_spacing: f32::INFINITY,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let mut config = LayoutConfig::default();
        config.thresholds.list_mm = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn list_threshold_packs_tighter() {
        let config = LayoutConfig::default();
        assert!(config.threshold(Threshold::List) > config.threshold(Threshold::General));
        assert!(config.threshold(Threshold::List) <= config.footer_rule());
    }

    #[test]
    fn rejects_unusable_geometry() {
        let config = LayoutConfig {
            thresholds: SectionThresholds {
                general_mm: 50.0,
                list_mm: 60.0,
            },
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));

        let config = LayoutConfig {
            thresholds: SectionThresholds {
                general_mm: 270.0,
                list_mm: 260.0,
            },
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            thresholds: SectionThresholds {
                general_mm: 250.0,
                list_mm: 290.0,
            },
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn can_round_trip_through_toml() {
        let config = LayoutConfig::default();
        let text = toml::to_string(&config).expect("can serialize layout config");
        assert!(text.contains("accent = \"#b8860b\""));

        let parsed: LayoutConfig = toml::from_str("page_height_mm = 200.0\n[thresholds]\nlist_mm = 170.0\n")
            .expect("can parse partial config");
        assert_eq!(parsed.page_height_mm, 200.0);
        assert_eq!(parsed.thresholds.list_mm, 170.0);
        assert_eq!(parsed.thresholds.general_mm, 250.0);
        assert_eq!(parsed.colours, Palette::default());
    }
}
