//! Error types for symptom-check
//!
//! Library code returns these typed errors; the binary wraps them in
//! `anyhow` at the edge.

use thiserror::Error;

/// Notice shown to the user when a submission has no symptoms selected
pub const EMPTY_SELECTION_NOTICE: &str = "Please select at least one symptom.";

/// Notice shown to the user for any collaborator failure
pub const PREDICTION_FAILED_NOTICE: &str = "Failed to get prediction.";

/// Failure talking to the prediction service
///
/// The variants exist for logs. Users always see the same generic notice.
#[derive(Error, Debug)]
pub enum PredictionError {
    /// Connection, TLS, or timeout failure
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("service returned {status}{}", detail_suffix(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Body could not be decoded as a prediction
    #[error("malformed response: {0}")]
    Malformed(String),
}

fn detail_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

/// Errors returned by [`crate::reporter::SymptomReporter::submit`]
#[derive(Error, Debug)]
pub enum ReportError {
    /// Nothing selected; no request was made
    #[error("{}", EMPTY_SELECTION_NOTICE)]
    EmptySelection,

    /// A previous submission has not finished yet
    #[error("A prediction is already in progress.")]
    SubmissionInFlight,

    /// The collaborator call failed
    #[error("{}", PREDICTION_FAILED_NOTICE)]
    Collaborator(#[source] PredictionError),
}

impl ReportError {
    /// Short text suitable for showing to the user
    pub fn notice(&self) -> String {
        self.to_string()
    }

    /// Whether this error happened before any network activity
    pub fn is_local(&self) -> bool {
        !matches!(self, ReportError::Collaborator(_))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config: {0}")]
    Write(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
