//! HTTP client for the prediction service
//!
//! One `POST` per submission, JSON in and out. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::PredictionError;
use crate::prediction::types::{PredictionRequest, PredictionResult, ServiceErrorBody};

/// Default prediction endpoint
pub const DEFAULT_ENDPOINT: &str = "https://predict-disease-vmy1.onrender.com/predict";

/// Anything that can turn a list of symptoms into a diagnosis
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Ask for a prediction for the given symptom labels
    async fn predict(&self, symptoms: &[String]) -> Result<PredictionResult, PredictionError>;
}

/// reqwest-backed [`PredictionService`]
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    endpoint: String,
}

impl HttpPredictionClient {
    /// Create a client for `endpoint`
    ///
    /// No timeout is applied unless one is given.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, PredictionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(PredictionError::Transport)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Use an already configured reqwest client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict(&self, symptoms: &[String]) -> Result<PredictionResult, PredictionError> {
        let request = PredictionRequest::new(symptoms.to_vec());
        debug!(endpoint = %self.endpoint, count = symptoms.len(), "sending prediction request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ServiceErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            warn!(status = status.as_u16(), message = ?message, "prediction service rejected request");
            return Err(PredictionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        decode_prediction(&body)
    }
}

/// Decode a success body
///
/// Only bytes that are not JSON are an error. An object has its fields read
/// leniently; any other JSON value decodes to an empty result.
pub fn decode_prediction(body: &[u8]) -> Result<PredictionResult, PredictionError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| PredictionError::Malformed(format!("invalid JSON: {}", e)))?;

    if !value.is_object() {
        debug!(body = %value, "prediction body is not an object; rendering empty fields");
        return Ok(PredictionResult::default());
    }

    serde_json::from_value(value).map_err(|e| PredictionError::Malformed(e.to_string()))
}
