//! Wire types for the prediction service
//!
//! Response decoding is lenient: missing or null fields become empty values
//! and odd scalar types are kept as their JSON text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub symptoms: Vec<String>,
}

impl PredictionRequest {
    pub fn new(symptoms: Vec<String>) -> Self {
        Self { symptoms }
    }
}

/// Diagnosis returned by the prediction service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResult {
    /// Predicted disease name
    #[serde(deserialize_with = "lenient_string")]
    pub disease: String,

    /// Suggested treatment
    #[serde(deserialize_with = "lenient_string")]
    pub cure: String,

    /// Kind of doctor to consult
    #[serde(deserialize_with = "lenient_string")]
    pub doctor: String,

    /// Risk classification, e.g. "Low"
    #[serde(deserialize_with = "lenient_string")]
    pub risk_level: String,

    /// Model confidence as a percentage
    #[serde(deserialize_with = "lenient_number")]
    pub accuracy: Option<f64>,
}

impl PredictionResult {
    /// Accuracy formatted for display, empty when absent
    pub fn accuracy_text(&self) -> String {
        self.accuracy.map(|a| a.to_string()).unwrap_or_default()
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.disease, self.accuracy_text())
    }
}

/// Error body the service sends with 4xx/5xx responses
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = PredictionRequest::new(vec!["headache".to_string(), "nausea".to_string()]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "symptoms": ["headache", "nausea"] }));
    }

    #[test]
    fn test_decode_full_response() {
        let result: PredictionResult = serde_json::from_value(json!({
            "disease": "Flu",
            "cure": "Rest",
            "doctor": "GP",
            "risk_level": "Low",
            "accuracy": 87
        }))
        .unwrap();

        assert_eq!(
            result,
            PredictionResult {
                disease: "Flu".to_string(),
                cure: "Rest".to_string(),
                doctor: "GP".to_string(),
                risk_level: "Low".to_string(),
                accuracy: Some(87.0),
            }
        );
    }

    #[test]
    fn test_decode_missing_fields_as_empty() {
        let result: PredictionResult = serde_json::from_value(json!({ "disease": "Migraine" })).unwrap();
        assert_eq!(result.disease, "Migraine");
        assert_eq!(result.cure, "");
        assert_eq!(result.risk_level, "");
        assert_eq!(result.accuracy, None);
        assert_eq!(result.accuracy_text(), "");
    }

    #[test]
    fn test_decode_odd_scalars() {
        let result: PredictionResult = serde_json::from_value(json!({
            "disease": null,
            "cure": 3,
            "doctor": true,
            "accuracy": "92.5%"
        }))
        .unwrap();

        assert_eq!(result.disease, "");
        assert_eq!(result.cure, "3");
        assert_eq!(result.doctor, "true");
        assert_eq!(result.accuracy, Some(92.5));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let result: PredictionResult =
            serde_json::from_value(json!({ "disease": "Flu", "extra": [1, 2] })).unwrap();
        assert_eq!(result.disease, "Flu");
    }

    #[test]
    fn test_accuracy_text_formats_like_the_service() {
        let mut result = PredictionResult::default();
        result.accuracy = Some(87.0);
        assert_eq!(result.accuracy_text(), "87");
        result.accuracy = Some(63.25);
        assert_eq!(result.accuracy_text(), "63.25");
    }

    #[test]
    fn test_display() {
        let result = PredictionResult {
            disease: "Flu".to_string(),
            accuracy: Some(87.0),
            ..Default::default()
        };
        assert_eq!(result.to_string(), "Flu (87%)");
    }

    #[test]
    fn test_service_error_body() {
        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"error": "No symptoms provided"}"#).unwrap();
        assert_eq!(body.error, "No symptoms provided");
    }
}
