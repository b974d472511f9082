//! The document layout engine.
//!
//! Layout is a single pass over the tour record that moves through a fixed
//! sequence of [`Stage`]s: the first page and its template, the overview, the
//! optional highlights, the itinerary, inclusions and exclusions, then the
//! contact page, which always starts on a fresh sheet. The [`Paginator`] owns
//! the cursor and inserts pages (each with its template) whenever the next
//! line would cross the threshold for the section being written.
//!
//! Nothing here touches PDF objects; the result is a [`Document`] that can be
//! inspected and is only turned into bytes by [`Document::to_bytes`].

pub mod config;
pub mod pagination;
pub mod sections;
pub mod template;
pub mod text;

use crate::document::{Document, Logo};
use crate::error::GenerationError;
use crate::tour::TourDocument;
use chrono::{DateTime, Local};
use config::LayoutConfig;
use pagination::Paginator;

/// Where a generation run has got to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    FirstPage,
    Overview,
    Highlights,
    Itinerary,
    Inclusions,
    Exclusions,
    Contact,
    Serialize,
    Done,
}

impl Stage {
    pub(crate) fn enter(self, next: Stage) -> Stage {
        log::debug!("layout stage {self:?} -> {next:?}");
        next
    }
}

/// Lay out a tour, stamping the footer with the current time
pub fn layout(tour: &TourDocument, config: &LayoutConfig) -> Result<Document, GenerationError> {
    layout_at(tour, config, Local::now())
}

/// Lay out a tour with an explicit generation time.
///
/// Both the tour and the configuration are validated before the first page is
/// created. A logo that fails to load is recorded as a warning on the returned
/// document and the pages are drawn without it.
pub fn layout_at(
    tour: &TourDocument,
    config: &LayoutConfig,
    generated_at: DateTime<Local>,
) -> Result<Document, GenerationError> {
    let mut stage = Stage::Init;
    tour.validate()?;
    config.validate()?;

    let mut doc = Document::default();
    doc.info
        .title(format!("{} | Tour Itinerary", tour.name.trim()))
        .subject("Tour itinerary")
        .author(config.contact.operator.trim())
        .creator(concat!("tour-pdf v", env!("CARGO_PKG_VERSION")))
        .created(generated_at);

    if let Some(path) = &config.logo {
        match Logo::load(path) {
            Ok(logo) => doc.logo = Some(logo),
            Err(e) => {
                log::warn!("continuing without a logo: {e:#}");
                doc.warn(format!("The logo could not be loaded ({e:#})"));
            }
        }
    }

    let mut p = Paginator::new(config, generated_at);

    stage = stage.enter(Stage::FirstPage);
    p.new_page(&mut doc);

    stage = stage.enter(Stage::Overview);
    sections::overview::render(&mut p, &mut doc, tour);

    if !tour.highlights.is_empty() {
        stage = stage.enter(Stage::Highlights);
        sections::highlights::render(&mut p, &mut doc, &tour.highlights);
    }

    stage = stage.enter(Stage::Itinerary);
    sections::itinerary::render(&mut p, &mut doc, &tour.itinerary);

    stage = stage.enter(Stage::Inclusions);
    sections::lists::render_inclusions(&mut p, &mut doc, &tour.inclusions);

    stage = stage.enter(Stage::Exclusions);
    sections::lists::render_exclusions(&mut p, &mut doc, &tour.exclusions);

    stage = stage.enter(Stage::Contact);
    sections::contact::render(&mut p, &mut doc);

    stage.enter(Stage::Serialize);
    log::debug!("laid out {} pages for {}", doc.page_count(), tour.name.trim());
    Ok(doc)
}
