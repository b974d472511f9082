use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB colour.
///
/// Colours are written to the config file as `#rrggbb` hex strings so that they
/// can be copied straight out of the website's stylesheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Components scaled to `0.0..=1.0` for the PDF colour operators
    pub fn as_f32(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    pub fn from_hex(hex: &str) -> Result<Colour, String> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("`{hex}` is not a #rrggbb colour"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| format!("`{hex}`: {e}"))
        };
        Ok(Colour {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Colour {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value)
    }
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_hex_colours() {
        assert_eq!(
            Colour::from_hex("#b8860b"),
            Ok(Colour::new_rgb_bytes(184, 134, 11))
        );
        assert_eq!(
            Colour::from_hex("1A365D"),
            Ok(Colour::new_rgb_bytes(26, 54, 93))
        );
        assert!(Colour::from_hex("#fff").is_err());
        assert!(Colour::from_hex("#gggggg").is_err());
    }

    #[test]
    fn can_format_hex_colours() {
        assert_eq!(Colour::new_rgb_bytes(26, 54, 93).to_string(), "#1a365d");
        assert_eq!(Colour::new_rgb_bytes(255, 255, 255).to_string(), "#ffffff");
    }
}
