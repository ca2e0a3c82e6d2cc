//! Symptom catalog
//!
//! The fixed, ordered list of symptom labels offered to the user. It is built
//! once at startup (built-in list or configured override) and never mutated.

use std::collections::HashSet;

use crate::errors::{ConfigError, Result};

/// Labels understood by the default prediction service, in display order
pub const BUILTIN_SYMPTOMS: &[&str] = &[
    "keeping an erection",
    "itchy nose",
    "swelling",
    "lightheadedness",
    "sore throat",
    "pain during sex",
    "urgency to urinate",
    "pink eye",
    "vomiting",
    "difficulty getting",
    "blood in the stool",
    "chest tightness",
    "persistent cough",
    "unexplained heat intolerance",
    "muscle aches",
    "difficulty with balance",
    "dizziness",
    "tremors",
    "fatigue",
    "rash",
    "memory loss",
    "coughing",
    "shortness of breath",
    "diarrhea",
    "headache",
    "nausea",
    "chest pain",
    "abdominal cramps",
    "loss of interest in activities",
    "difficulty speaking",
    "high blood pressure",
    "night sweats",
    "pale skin",
    "changes in appetite",
    "confusion",
    "painful urination",
    "blurred vision",
    "itching",
    "runny nose",
    "difficulty breathing",
];

/// Immutable ordered sequence of symptom labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomCatalog {
    labels: Vec<String>,
}

impl SymptomCatalog {
    /// Catalog matching the default prediction service
    pub fn builtin() -> Self {
        Self {
            labels: BUILTIN_SYMPTOMS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a catalog from configured labels
    ///
    /// Labels are trimmed. Blank or duplicate labels are rejected.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() {
                return Err(ConfigError::Invalid(
                    "symptom catalog contains a blank label".to_string(),
                ));
            }
            if !seen.insert(label.to_string()) {
                return Err(ConfigError::Invalid(format!(
                    "symptom catalog lists '{}' more than once",
                    label
                )));
            }
            out.push(label.to_string());
        }

        if out.is_empty() {
            return Err(ConfigError::Invalid("symptom catalog is empty".to_string()));
        }

        Ok(Self { labels: out })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Label at a 1-based position, as numbered in the checklist
    pub fn by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    /// Resolve user input to a catalog label
    ///
    /// Accepts a checklist number or a label (case-insensitive). Returns
    /// `None` when nothing in the catalog matches.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return self.by_number(number);
        }
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(input))
            .map(String::as_str)
    }
}

impl Default for SymptomCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = SymptomCatalog::builtin();
        assert_eq!(catalog.len(), 40);
        assert_eq!(catalog.labels()[0], "keeping an erection");
        assert_eq!(catalog.labels()[39], "difficulty breathing");
        assert!(catalog.contains("headache"));
        assert!(!catalog.contains("Headache"));
    }

    #[test]
    fn test_builtin_has_no_duplicates() {
        let catalog = SymptomCatalog::from_labels(BUILTIN_SYMPTOMS.iter());
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_by_number() {
        let catalog = SymptomCatalog::builtin();
        assert_eq!(catalog.by_number(1), Some("keeping an erection"));
        assert_eq!(catalog.by_number(25), Some("headache"));
        assert_eq!(catalog.by_number(0), None);
        assert_eq!(catalog.by_number(41), None);
    }

    #[test]
    fn test_resolve() {
        let catalog = SymptomCatalog::builtin();
        assert_eq!(catalog.resolve("26"), Some("nausea"));
        assert_eq!(catalog.resolve("  Runny Nose "), Some("runny nose"));
        assert_eq!(catalog.resolve("hiccups"), None);
    }

    #[test]
    fn test_from_labels_rejects_duplicates() {
        let result = SymptomCatalog::from_labels(["fever", "cough", "fever"]);
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("fever")));
    }

    #[test]
    fn test_from_labels_rejects_blank_and_empty() {
        assert!(SymptomCatalog::from_labels(["fever", "  "]).is_err());
        assert!(SymptomCatalog::from_labels(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_from_labels_trims() {
        let catalog = SymptomCatalog::from_labels([" fever ", "cough"]).unwrap();
        assert_eq!(catalog.labels(), &["fever".to_string(), "cough".to_string()]);
    }
}
