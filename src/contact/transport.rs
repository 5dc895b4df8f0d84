use std::{
    fs,
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::VitrineError;

use super::ContactMessage;

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const OUTBOX_FILE_NAME: &str = "outbox.jsonl";

/// Delivers a contact message somewhere. Called from a worker thread.
pub trait MailTransport: Send + Sync {
    fn send(&self, message: &ContactMessage) -> Result<(), VitrineError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MailConfig {
    /// Append messages to a local JSON-lines file
    Outbox { path: Option<PathBuf> },
    /// Send through the EmailJS REST API
    EmailJs {
        service_id: String,
        template_id: String,
        public_key: String,
        endpoint: Option<String>,
    },
}

impl Default for MailConfig {
    fn default() -> Self {
        MailConfig::Outbox { path: None }
    }
}

impl MailConfig {
    pub fn transport(&self) -> Result<Arc<dyn MailTransport>, VitrineError> {
        Ok(match self {
            MailConfig::Outbox { path } => {
                let path = match path {
                    Some(path) => path.clone(),
                    None => OutboxTransport::default_path()?,
                };
                Arc::new(OutboxTransport::new(path))
            }
            MailConfig::EmailJs {
                service_id,
                template_id,
                public_key,
                endpoint,
            } => Arc::new(EmailJsTransport {
                endpoint: endpoint
                    .clone()
                    .unwrap_or_else(|| EMAILJS_ENDPOINT.to_string()),
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                public_key: public_key.clone(),
            }),
        })
    }
}

#[derive(Serialize, Debug)]
struct EmailJsRequest<'m> {
    service_id: &'m str,
    template_id: &'m str,
    user_id: &'m str,
    template_params: TemplateParams<'m>,
}

/// Field names the portfolio's EmailJS template renders.
#[derive(Serialize, Debug)]
struct TemplateParams<'m> {
    user_name: &'m str,
    user_email: &'m str,
    message: &'m str,
}

impl<'m> From<&'m ContactMessage> for TemplateParams<'m> {
    fn from(message: &'m ContactMessage) -> Self {
        Self {
            user_name: &message.name,
            user_email: &message.email,
            message: &message.message,
        }
    }
}

/// Transactional email through EmailJS. The template receives the form fields
/// as `user_name`, `user_email` and `message`.
#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsTransport {
    async fn post(&self, message: &ContactMessage) -> Result<(), VitrineError> {
        let request = EmailJsRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: message.into(),
        };
        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| VitrineError::MailTransportError {
                description: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VitrineError::MailRejected {
                status: status.as_u16(),
            });
        }
        debug!("EmailJS accepted message with status {}", status);
        Ok(())
    }
}

impl MailTransport for EmailJsTransport {
    fn send(&self, message: &ContactMessage) -> Result<(), VitrineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| VitrineError::MailTransportError {
                description: e.to_string(),
            })?;
        runtime.block_on(self.post(message))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OutboxEntry {
    /// Seconds since the unix epoch
    pub received_at: u64,
    #[serde(flatten)]
    pub message: ContactMessage,
}

/// Appends every message to a JSON-lines file.
#[derive(Debug, Clone)]
pub struct OutboxTransport {
    path: PathBuf,
}

impl OutboxTransport {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> Result<PathBuf, VitrineError> {
        let data_dir = dirs::data_dir().ok_or(VitrineError::NoConfigDir)?;
        Ok(data_dir.join("vitrine").join(OUTBOX_FILE_NAME))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl MailTransport for OutboxTransport {
    fn send(&self, message: &ContactMessage) -> Result<(), VitrineError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| VitrineError::OutboxWriteError { source: e })?;
        }
        let received_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        serde_jsonlines::append_json_lines(
            &self.path,
            [OutboxEntry {
                received_at,
                message: message.clone(),
            }],
        )
        .map_err(|e| VitrineError::OutboxWriteError { source: e })
    }
}
