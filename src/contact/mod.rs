pub mod transport;

use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
    time::{Duration, Instant},
};

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::errors::VitrineError;

pub use transport::{EmailJsTransport, MailConfig, MailTransport, OutboxTransport};

/// How long the confirmation stays up before the form is cleared.
pub const SENT_DISPLAY: Duration = Duration::from_secs(5);
pub const SEND_FAILURE_MESSAGE: &str =
    "There was a problem sending your message. Please try again later.";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), VitrineError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(VitrineError::InvalidUserInput {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(VitrineError::InvalidUserInput {
                field: "email".to_string(),
                reason: "is not a valid email address".to_string(),
            });
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    /// Confirmation is shown until `reset_at`, then the fields are cleared
    Sent { reset_at: Instant },
    Failed(String),
}

/// Contact form state. Sending happens on a worker thread so the UI keeps
/// rendering; `poll` picks the outcome up on a later frame.
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
    pending: Option<Receiver<Result<(), VitrineError>>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: FormStatus::Editing,
            pending: None,
        }
    }
}

impl ContactForm {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validates the fields and hands the message to `transport` on a worker
    /// thread. Ignored while a submission is in flight.
    pub fn submit(&mut self, transport: Arc<dyn MailTransport>) {
        if self.is_submitting() {
            return;
        }
        let message = self.to_message();
        if let Err(e) = message.validate() {
            self.status = FormStatus::Failed(e.to_string());
            return;
        }

        let (result_tx, result_rx) = mpsc::channel();
        thread::spawn(move || {
            let result = transport.send(&message);
            // the form may be gone by the time delivery finishes
            let _ = result_tx.send(result);
        });
        self.pending = Some(result_rx);
        self.status = FormStatus::Submitting;
    }

    /// Picks up the delivery result and clears the form once the confirmation
    /// has been shown long enough. Returns when the form wants to be polled
    /// again, `None` when nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        match self.status {
            FormStatus::Submitting => {
                let outcome = match &self.pending {
                    Some(pending) => match pending.try_recv() {
                        Ok(result) => Some(result),
                        Err(TryRecvError::Empty) => None,
                        Err(TryRecvError::Disconnected) => {
                            Some(Err(VitrineError::MailTransportError {
                                description: "delivery worker stopped".to_string(),
                            }))
                        }
                    },
                    None => Some(Err(VitrineError::MailTransportError {
                        description: "no delivery in progress".to_string(),
                    })),
                };
                match outcome {
                    None => Some(POLL_INTERVAL),
                    Some(result) => {
                        self.pending = None;
                        self.finish(result, now)
                    }
                }
            }
            FormStatus::Sent { reset_at } if now >= reset_at => {
                self.reset();
                None
            }
            FormStatus::Sent { reset_at } => Some(reset_at - now),
            FormStatus::Editing | FormStatus::Failed(_) => None,
        }
    }

    fn finish(&mut self, result: Result<(), VitrineError>, now: Instant) -> Option<Duration> {
        match result {
            Ok(()) => {
                info!("Contact message from {} sent", self.email.trim());
                self.status = FormStatus::Sent {
                    reset_at: now + SENT_DISPLAY,
                };
                Some(SENT_DISPLAY)
            }
            Err(e) => {
                error!("Failed to send contact message: {}", e);
                self.status = FormStatus::Failed(SEND_FAILURE_MESSAGE.to_string());
                None
            }
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = FormStatus::Editing;
    }
}
