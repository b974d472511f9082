//! The tour record the itinerary is laid out from.
//!
//! Tours are produced elsewhere (the website's content API) and arrive here as
//! JSON with camelCase field names. The price is already formatted for display
//! by the time it reaches us; this crate never does currency arithmetic.

mod itinerary;
pub use itinerary::*;

use crate::error::GenerationError;
use anyhow::{Context, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything printed on a tour's itinerary document
#[derive(Builder, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct TourDocument {
    pub name: String,
    #[builder(default)]
    #[serde(default)]
    pub duration_label: String,
    #[builder(default)]
    #[serde(default)]
    pub formatted_price: String,
    #[builder(default)]
    #[serde(default)]
    pub summary: String,
    #[builder(setter(each(name = "highlight", into)), default)]
    #[serde(default)]
    pub highlights: Vec<String>,
    #[builder(setter(each(name = "day", into)), default)]
    pub itinerary: Vec<ItineraryDay>,
    #[builder(setter(each(name = "inclusion", into)), default)]
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[builder(setter(each(name = "exclusion", into)), default)]
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl TourDocument {
    pub fn from_json(json: &str) -> Result<TourDocument> {
        serde_json::from_str(json).with_context(|| "Failed to parse tour JSON")
    }

    /// Load a tour record from a JSON file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TourDocument> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tour from {}", path.display()))?;
        TourDocument::from_json(&contents)
            .with_context(|| format!("Failed to load tour from {}", path.display()))
    }

    /// Reject records the layout engine can't produce a sensible document from.
    ///
    /// This runs before any page is created, so a malformed record never results
    /// in a partial document.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.name.trim().is_empty() {
            return Err(GenerationError::InvalidTour {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.itinerary.is_empty() {
            return Err(GenerationError::InvalidTour {
                field: "itinerary",
                reason: "must contain at least one day".to_string(),
            });
        }
        Ok(())
    }

    /// The artifact's file name: the tour name as a slug plus `.pdf`
    pub fn filename(&self) -> String {
        let slug = slugify(&self.name);
        if slug.is_empty() {
            "tour-itinerary.pdf".to_string()
        } else {
            format!("{slug}.pdf")
        }
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
