// Error types for vitrine

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum VitrineError {
    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Project catalogue errors
    #[snafu(display("Error reading project catalogue"))]
    CatalogueIOError { source: io::Error },
    #[snafu(display("Invalid project catalogue"))]
    CatalogueParseError { source: serde_json::Error },
    #[snafu(display("Project catalogue validation failed: {reason}"))]
    CatalogueValidationError { reason: String },

    // Contact form errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },
    #[snafu(display("Mail transport error: {description}"))]
    MailTransportError { description: String },
    #[snafu(display("Mail service rejected the message with status {status}"))]
    MailRejected { status: u16 },
    #[snafu(display("Error writing contact outbox"))]
    OutboxWriteError { source: io::Error },
}
