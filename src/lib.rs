//! Lay out tour itineraries as printable PDFs and deliver them.
//!
//! A [`tour::TourDocument`] goes through [`layout`] to become a
//! [`document::Document`], which [`generate`] serialises into an
//! [`generate::Artifact`]. One of the [`sinks`] then saves, prints or emails
//! it, and the outcome is reported as a [`notify::Notification`].

pub mod config;
pub mod document;
pub mod error;
pub mod generate;
pub mod layout;
pub mod notify;
pub mod sinks;
pub mod tour;
