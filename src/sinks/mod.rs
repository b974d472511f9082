//! Output sinks: where a finished itinerary goes.
//!
//! Each invocation delivers one artifact to exactly one sink and reports the
//! outcome as a [`Notification`]. Nothing is retried; the caller can simply
//! generate and deliver again.

mod download;
pub use download::*;

mod email;
pub use email::*;

mod print;
pub use print::*;

use crate::error::SinkError;
use crate::generate::Artifact;
use crate::notify::Notification;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Save to `<dir>/<filename>`
    Download { dir: PathBuf },
    /// Open in the configured viewer, ready to print
    Print,
    /// Send through the configured email relay
    Email { recipient: String },
}

impl Sink {
    pub async fn deliver<H: PrintHost, R: EmailRelay>(
        &self,
        artifact: &Artifact,
        tour_name: &str,
        print_host: &H,
        relay: Option<&R>,
    ) -> Result<Notification, SinkError> {
        match self {
            Sink::Download { dir } => {
                download(dir, artifact)?;
                Ok(Notification::downloaded(&artifact.filename))
            }
            Sink::Print => {
                print(print_host, artifact)?;
                Ok(Notification::printing(&artifact.filename))
            }
            Sink::Email { recipient } => {
                let relay = relay.ok_or_else(|| SinkError::Relay("no email relay is configured".to_string()))?;
                email(relay, recipient, tour_name, artifact).await?;
                Ok(Notification::emailed(recipient.trim()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::email::tests::{artifact, RecordingRelay};
    use super::*;
    use crate::notify::Level;
    use pretty_assertions::assert_eq;

    struct BlockingHost;

    impl PrintHost for BlockingHost {
        type Surface = CommandSurface;

        fn open(&self) -> Option<CommandSurface> {
            None
        }
    }

    #[tokio::test]
    async fn blocked_print_becomes_a_warning() {
        let outcome = Sink::Print
            .deliver(&artifact(), "Amalfi Coast", &BlockingHost, None::<&RecordingRelay>)
            .await;
        let err = outcome.expect_err("popup is blocked");
        assert!(matches!(err, SinkError::PopupBlocked));

        let notification = Notification::from(&err);
        assert_eq!(notification.level, Level::Warning);
        assert_eq!(notification.title, "Popup Blocked");
    }

    #[tokio::test]
    async fn can_download() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let sink = Sink::Download {
            dir: dir.path().to_path_buf(),
        };
        let notification = sink
            .deliver(&artifact(), "Amalfi Coast", &BlockingHost, None::<&RecordingRelay>)
            .await
            .expect("can download");
        assert_eq!(notification.title, "PDF Downloaded");
        assert!(dir.path().join("amalfi-coast.pdf").is_file());
    }

    #[tokio::test]
    async fn email_needs_a_relay() {
        let sink = Sink::Email {
            recipient: "guest@example.com".to_string(),
        };
        let err = sink
            .deliver(&artifact(), "Amalfi Coast", &BlockingHost, None::<&RecordingRelay>)
            .await
            .expect_err("no relay");
        assert_eq!(Notification::from(&err).title, "Email Failed");

        let relay = RecordingRelay::default();
        let notification = sink
            .deliver(&artifact(), "Amalfi Coast", &BlockingHost, Some(&relay))
            .await
            .expect("can email");
        assert_eq!(notification.title, "Email Sent");
        assert_eq!(relay.sent.lock().expect("relay lock is not poisoned").len(), 1);
    }
}
