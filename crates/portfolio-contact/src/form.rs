//! The contact submission flow.
//!
//! A submit sends the form to the relay service and waits for its verdict,
//! which alone decides the feedback shown to the sender. Once the relay has
//! answered, the same submission is posted to the backend on a detached task
//! whose outcome is only logged.

use std::sync::Mutex;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use portfolio_types::api::ContactRequest;

use crate::backend::BackendClient;
use crate::relay::RelayClient;

/// Subject the client fills in when the sender leaves it empty.
pub const CLIENT_DEFAULT_SUBJECT: &str = "Portfolio Contact";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const REJECTED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please try again later.";

/// How long feedback stays on screen.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(5);

/// Raw field values as the sender typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// JSON payload for the backend.
    pub fn to_request(&self) -> ContactRequest {
        let subject = if self.subject.is_empty() {
            CLIENT_DEFAULT_SUBJECT.to_string()
        } else {
            self.subject.clone()
        };

        ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            subject: Some(subject),
            message: Some(self.message.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label: String,
}

impl ButtonState {
    fn idle() -> Self {
        Self { disabled: false, label: SUBMIT_LABEL.into() }
    }

    fn sending() -> Self {
        Self { disabled: true, label: SENDING_LABEL.into() }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The relay could not be reached, or replied with something unreadable.
    #[error("relay request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The relay answered but reported failure.
    #[error("relay rejected the submission: {}", .0.as_deref().unwrap_or("no reason given"))]
    RelayRejected(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Transient message shown under the form after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: &'static str,
    pub display_for: Duration,
}

impl From<&Result<(), SubmitError>> for Feedback {
    fn from(outcome: &Result<(), SubmitError>) -> Self {
        let (kind, message) = match outcome {
            Ok(()) => (FeedbackKind::Success, SENT_MESSAGE),
            Err(SubmitError::RelayRejected(_)) => (FeedbackKind::Error, REJECTED_MESSAGE),
            Err(SubmitError::Network(_)) => (FeedbackKind::Error, NETWORK_MESSAGE),
        };

        Self { kind, message, display_for: FEEDBACK_DURATION }
    }
}

/// Restores the submit control when the submit ends, however it ends.
struct Sending<'a>(&'a watch::Sender<ButtonState>);

impl<'a> Sending<'a> {
    fn start(button: &'a watch::Sender<ButtonState>) -> Self {
        button.send_replace(ButtonState::sending());
        Self(button)
    }
}

impl Drop for Sending<'_> {
    fn drop(&mut self) {
        self.0.send_replace(ButtonState::idle());
    }
}

pub struct ContactForm {
    pub fields: ContactFields,
    relay: RelayClient,
    backend: BackendClient,
    button: watch::Sender<ButtonState>,
    side_writes: Mutex<Vec<JoinHandle<()>>>,
}

impl ContactForm {
    pub fn new(relay: RelayClient, backend: BackendClient) -> Self {
        let (button, _) = watch::channel(ButtonState::idle());
        Self {
            fields: ContactFields::default(),
            relay,
            backend,
            button,
            side_writes: Mutex::new(Vec::new()),
        }
    }

    /// Watch the submit control's state.
    pub fn button(&self) -> watch::Receiver<ButtonState> {
        self.button.subscribe()
    }

    pub fn reset(&mut self) {
        self.fields = ContactFields::default();
    }

    /// Submit the current fields and return the feedback to display. The
    /// fields are cleared only when the relay reports success.
    pub async fn submit(&mut self) -> Feedback {
        let outcome = {
            let _sending = Sending::start(&self.button);
            self.dual_write().await
        };

        match &outcome {
            Ok(()) => {
                info!("Contact form sent");
                self.reset();
            }
            Err(e) => warn!("Contact form not sent: {}", e),
        }

        Feedback::from(&outcome)
    }

    async fn dual_write(&self) -> Result<(), SubmitError> {
        let reply = self.relay.send(&self.fields).await?;

        // Fire and forget: the relay's verdict is what the sender sees.
        let handle = spawn_side_write(self.backend.clone(), self.fields.to_request());
        self.track(handle);

        if reply.success {
            Ok(())
        } else {
            Err(SubmitError::RelayRejected(reply.message))
        }
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut side_writes = self.side_writes.lock().unwrap_or_else(|e| e.into_inner());
        side_writes.retain(|h| !h.is_finished());
        side_writes.push(handle);
    }

    /// Wait for outstanding backend writes, e.g. before the process exits.
    /// Their outcome is still only logged.
    pub async fn drain_side_writes(&mut self) {
        let handles: Vec<_> = self
            .side_writes
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect();

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("Backend write task failed: {}", e);
            }
        }
    }
}

fn spawn_side_write(backend: BackendClient, payload: ContactRequest) -> JoinHandle<()> {
    tokio::spawn(async move {
        match backend.save(&payload).await {
            Ok(()) => debug!("Message saved to backend"),
            Err(e) => debug!("Backend not available, message not saved: {:#}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            name: "A".into(),
            email: "a@x.com".into(),
            subject: String::new(),
            message: "hi".into(),
        }
    }

    #[test]
    fn empty_subject_gets_client_default() {
        let req = fields().to_request();
        assert_eq!(req.subject.as_deref(), Some(CLIENT_DEFAULT_SUBJECT));
        assert_eq!(req.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn given_subject_is_kept() {
        let mut f = fields();
        f.subject = "Hello".into();
        assert_eq!(f.to_request().subject.as_deref(), Some("Hello"));
    }

    #[test]
    fn rejection_feedback() {
        let fb = Feedback::from(&Err(SubmitError::RelayRejected(None)));
        assert_eq!(fb.kind, FeedbackKind::Error);
        assert_eq!(fb.message, REJECTED_MESSAGE);
        assert_eq!(fb.display_for, FEEDBACK_DURATION);
    }

    #[test]
    fn success_feedback() {
        let fb = Feedback::from(&Ok(()));
        assert_eq!(fb.kind, FeedbackKind::Success);
        assert_eq!(fb.message, SENT_MESSAGE);
    }

    #[test]
    fn sending_guard_restores_button() {
        let (tx, rx) = watch::channel(ButtonState::idle());
        {
            let _sending = Sending::start(&tx);
            assert!(rx.borrow().disabled);
            assert_eq!(rx.borrow().label, SENDING_LABEL);
        }
        assert_eq!(*rx.borrow(), ButtonState::idle());
    }
}
