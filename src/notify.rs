//! The single user-facing report produced by each generation and delivery.

use crate::error::{GenerationError, SinkError};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new<T: ToString, M: ToString>(level: Level, title: T, message: M) -> Notification {
        Notification {
            level,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn downloaded(filename: &str) -> Notification {
        Notification::new(
            Level::Success,
            "PDF Downloaded",
            format!("{filename} has been saved."),
        )
    }

    pub fn printing(filename: &str) -> Notification {
        Notification::new(
            Level::Success,
            "Print Ready",
            format!("{filename} has been opened in your PDF viewer, ready to print."),
        )
    }

    pub fn emailed(recipient: &str) -> Notification {
        Notification::new(
            Level::Success,
            "Email Sent",
            format!("The itinerary has been sent to {recipient}."),
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl From<&GenerationError> for Notification {
    fn from(e: &GenerationError) -> Self {
        let message = match e {
            GenerationError::InvalidTour { .. } | GenerationError::InvalidConfig(_) => e.to_string(),
            GenerationError::Aborted(_) => {
                "Something went wrong while creating the PDF. Please try again.".to_string()
            }
        };
        Notification::new(Level::Error, "PDF Generation Failed", message)
    }
}

impl From<&SinkError> for Notification {
    fn from(e: &SinkError) -> Self {
        match e {
            SinkError::PopupBlocked => Notification::new(
                Level::Warning,
                "Popup Blocked",
                "The print window could not be opened. Allow it to open, or download the PDF instead.",
            ),
            SinkError::Save { .. } => Notification::new(Level::Error, "Download Failed", e),
            SinkError::Print(_) => Notification::new(Level::Error, "Print Failed", e),
            SinkError::InvalidRecipient(_) => Notification::new(Level::Error, "Email Failed", e),
            SinkError::Relay(_) => Notification::new(
                Level::Error,
                "Email Failed",
                "The itinerary could not be emailed. Please try again later.",
            ),
        }
    }
}
