//! Prediction service collaborator
//!
//! Wire types plus the [`PredictionService`] seam and its HTTP implementation.

pub mod client;
pub mod types;

pub use client::{HttpPredictionClient, PredictionService, DEFAULT_ENDPOINT};
pub use types::{PredictionRequest, PredictionResult};
