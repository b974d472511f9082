//! Failure taxonomy.
//!
//! Generation and delivery fail for different reasons and are reported to the
//! user differently, so they get separate error types. Neither is retried: every
//! failure ends that invocation and the caller may start again from scratch.

use std::path::PathBuf;

/// Why an itinerary could not be produced
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The tour record is missing something the layout needs
    #[error("invalid tour document: `{field}` {reason}")]
    InvalidTour { field: &'static str, reason: String },

    /// The layout configuration can't hold any content
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// The background generation task died before producing a document
    #[error("generation aborted: {0}")]
    Aborted(String),
}

/// Why a finished itinerary could not be handed to its destination
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The host wouldn't open a surface to print from
    #[error("the print window could not be opened")]
    PopupBlocked,

    #[error("failed to save {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to print: {0}")]
    Print(String),

    #[error("`{0}` is not a valid email address")]
    InvalidRecipient(String),

    #[error("email relay failed: {0}")]
    Relay(String),
}
