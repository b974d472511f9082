//! Entry points that turn a tour record into a finished PDF.

use crate::error::GenerationError;
use crate::layout::{self, config::LayoutConfig, Stage};
use crate::tour::TourDocument;
use base64::Engine;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;

/// A serialised itinerary, ready to be handed to a sink
#[derive(Clone, Debug)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub page_count: usize,
    /// Non-fatal problems hit while laying out
    pub warnings: Vec<String>,
}

impl Artifact {
    /// The PDF as a `data:application/pdf;base64,...` URL
    pub fn to_data_url(&self) -> String {
        format!(
            "data:application/pdf;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Validate, lay out and serialise a tour
pub fn generate(tour: &TourDocument, config: &LayoutConfig) -> Result<Artifact, GenerationError> {
    generate_at(tour, config, Local::now())
}

pub fn generate_at(
    tour: &TourDocument,
    config: &LayoutConfig,
    generated_at: DateTime<Local>,
) -> Result<Artifact, GenerationError> {
    let doc = layout::layout_at(tour, config, generated_at)?;
    let bytes = doc.to_bytes();
    Stage::Serialize.enter(Stage::Done);

    let artifact = Artifact {
        bytes,
        filename: tour.filename(),
        page_count: doc.page_count(),
        warnings: doc.warnings,
    };
    log::info!(
        "generated {} ({} pages, {} bytes)",
        artifact.filename,
        artifact.page_count,
        artifact.bytes.len()
    );
    Ok(artifact)
}

/// Generate after `delay`, off the async executor.
///
/// Dropping the returned future before the delay has elapsed cancels the
/// generation. Once layout has started on the blocking pool it runs to
/// completion even if the future is dropped; the result is then discarded.
pub async fn generate_deferred(
    tour: TourDocument,
    config: Arc<LayoutConfig>,
    delay: Duration,
) -> Result<Artifact, GenerationError> {
    if !delay.is_zero() {
        log::debug!("generation of {} scheduled in {delay:?}", tour.name.trim());
        tokio::time::sleep(delay).await;
    }

    tokio::task::spawn_blocking(move || generate(&tour, &config))
        .await
        .map_err(|e| GenerationError::Aborted(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{ItineraryDay, TourDocumentBuilder};
    use pretty_assertions::assert_eq;

    fn tour() -> TourDocument {
        TourDocumentBuilder::default()
            .name("Iceland Ring Road")
            .duration_label("9 Days")
            .formatted_price("€7,450")
            .summary("Waterfalls, black sand and northern lights.")
            .highlight("Glacier lagoon boat trip")
            .day(ItineraryDay::new(1, "Reykjavík", "Arrive and unwind in the lagoon."))
            .day(ItineraryDay::new(2, "Golden Circle", "Geysers and Þingvellir."))
            .inclusion("4x4 with driver")
            .exclusion("Flights")
            .build()
            .expect("can build tour")
    }

    #[test]
    fn can_generate_a_pdf() {
        let artifact = generate(&tour(), &LayoutConfig::default()).expect("can generate");
        assert!(artifact.bytes.starts_with(b"%PDF-"));
        assert_eq!(artifact.filename, "iceland-ring-road.pdf");
        assert_eq!(artifact.page_count, 2);
        assert!(artifact.warnings.is_empty());
    }

    #[test]
    fn regenerating_at_the_same_time_is_byte_identical() {
        let at = Local::now();
        let config = LayoutConfig::default();
        let first = generate_at(&tour(), &config, at).expect("can generate");
        let second = generate_at(&tour(), &config, at).expect("can generate");
        assert_eq!(first.bytes, second.bytes);
    }

    #[test]
    fn can_build_data_urls() {
        let artifact = Artifact {
            bytes: b"%PDF-1.7".to_vec(),
            filename: "x.pdf".to_string(),
            page_count: 1,
            warnings: Vec::new(),
        };
        assert_eq!(artifact.to_data_url(), "data:application/pdf;base64,JVBERi0xLjc=");
    }

    #[test]
    fn reports_invalid_tours() {
        let mut tour = tour();
        tour.itinerary.clear();
        let err = generate(&tour, &LayoutConfig::default()).expect_err("tour is invalid");
        assert!(matches!(err, GenerationError::InvalidTour { field: "itinerary", .. }));
    }

    #[tokio::test]
    async fn can_generate_after_a_delay() {
        let artifact = generate_deferred(tour(), Arc::new(LayoutConfig::default()), Duration::from_millis(10))
            .await
            .expect("can generate");
        assert_eq!(artifact.page_count, 2);
    }

    #[tokio::test]
    async fn dropping_before_the_delay_cancels() {
        let pending = generate_deferred(tour(), Arc::new(LayoutConfig::default()), Duration::from_secs(30));
        let outcome = tokio::time::timeout(Duration::from_millis(20), pending).await;
        assert!(outcome.is_err());
    }
}
