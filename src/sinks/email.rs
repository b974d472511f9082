//! Handing the itinerary to an external email relay.
//!
//! The relay receives the whole PDF inline as a data URL, so no upload or
//! storage step is involved. A failed send is reported and not retried.

use crate::error::SinkError;
use crate::generate::Artifact;
use serde::Serialize;
use std::future::Future;

/// The JSON body the relay expects
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPayload {
    pub recipient_email: String,
    pub tour_name: String,
    /// The PDF as a `data:application/pdf;base64,` URL
    pub pdf_content: String,
    pub filename: String,
}

impl EmailPayload {
    pub fn new(recipient: &str, tour_name: &str, artifact: &Artifact) -> Result<EmailPayload, SinkError> {
        let recipient = recipient.trim();
        if !looks_like_email(recipient) {
            return Err(SinkError::InvalidRecipient(recipient.to_string()));
        }

        Ok(EmailPayload {
            recipient_email: recipient.to_string(),
            tour_name: tour_name.trim().to_string(),
            pdf_content: artifact.to_data_url(),
            filename: artifact.filename.clone(),
        })
    }
}

/// A `local@domain.tld` shape check; the relay does the real validation
pub fn looks_like_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Something that can deliver an [`EmailPayload`]
pub trait EmailRelay {
    fn send(&self, payload: &EmailPayload) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// Posts payloads as JSON to an HTTP endpoint; any 2xx response is success
#[derive(Clone, Debug)]
pub struct HttpRelay {
    url: String,
    client: reqwest::Client,
}

impl HttpRelay {
    pub fn new<S: ToString>(url: S) -> HttpRelay {
        HttpRelay {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

impl EmailRelay for HttpRelay {
    async fn send(&self, payload: &EmailPayload) -> Result<(), SinkError> {
        log::debug!("posting {} to {}", payload.filename, self.url);
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SinkError::Relay(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Relay(format!("{status}: {body}")));
        }
        Ok(())
    }
}

/// Build the payload and pass it to the relay
pub async fn email<R: EmailRelay>(
    relay: &R,
    recipient: &str,
    tour_name: &str,
    artifact: &Artifact,
) -> Result<(), SinkError> {
    let payload = EmailPayload::new(recipient, tour_name, artifact)?;
    relay.send(&payload).await?;
    log::info!("emailed {} to {}", payload.filename, payload.recipient_email);
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Keeps every payload it's given, optionally failing instead
    #[derive(Default)]
    pub(crate) struct RecordingRelay {
        pub fail: bool,
        pub sent: Mutex<Vec<EmailPayload>>,
    }

    impl EmailRelay for RecordingRelay {
        async fn send(&self, payload: &EmailPayload) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Relay("relay unavailable".to_string()));
            }
            self.sent
                .lock()
                .expect("relay lock is not poisoned")
                .push(payload.clone());
            Ok(())
        }
    }

    pub(crate) fn artifact() -> Artifact {
        Artifact {
            bytes: b"%PDF-1.7".to_vec(),
            filename: "amalfi-coast.pdf".to_string(),
            page_count: 2,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn checks_address_shape() {
        assert!(looks_like_email("guest@example.com"));
        assert!(looks_like_email("first.last+tours@mail.example.co.uk"));
        assert!(!looks_like_email("guest"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("guest@localhost"));
        assert!(!looks_like_email("guest@example."));
        assert!(!looks_like_email("gu est@example.com"));
        assert!(!looks_like_email("a@b@example.com"));
    }

    #[test]
    fn payload_serialises_in_camel_case() {
        let payload = EmailPayload::new(" guest@example.com ", "Amalfi Coast", &artifact())
            .expect("can build payload");
        let json = serde_json::to_value(&payload).expect("can serialise payload");
        assert_eq!(
            json,
            serde_json::json!({
                "recipientEmail": "guest@example.com",
                "tourName": "Amalfi Coast",
                "pdfContent": "data:application/pdf;base64,JVBERi0xLjc=",
                "filename": "amalfi-coast.pdf",
            })
        );
    }

    #[tokio::test]
    async fn sends_through_the_relay() {
        let relay = RecordingRelay::default();
        email(&relay, "guest@example.com", "Amalfi Coast", &artifact())
            .await
            .expect("can email");
        let sent = relay.sent.lock().expect("relay lock is not poisoned");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].filename, "amalfi-coast.pdf");
    }

    #[tokio::test]
    async fn invalid_recipients_never_reach_the_relay() {
        let relay = RecordingRelay::default();
        let err = email(&relay, "not an address", "Amalfi Coast", &artifact())
            .await
            .expect_err("address is invalid");
        assert!(matches!(err, SinkError::InvalidRecipient(_)));
        assert!(relay.sent.lock().expect("relay lock is not poisoned").is_empty());
    }

    #[tokio::test]
    async fn relay_failures_are_reported() {
        let relay = RecordingRelay {
            fail: true,
            ..RecordingRelay::default()
        };
        let err = email(&relay, "guest@example.com", "Amalfi Coast", &artifact())
            .await
            .expect_err("relay fails");
        assert!(matches!(err, SinkError::Relay(_)));
    }
}
