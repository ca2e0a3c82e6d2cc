//! symptom-check - terminal symptom checklist
//!
//! Collects a set of symptoms from a fixed catalog, sends them to a remote
//! disease prediction service, and reports the diagnosis it returns.
//!
//! # Architecture
//!
//! - **catalog / selection**: the symptom list and the toggle-only selection
//! - **prediction**: wire types and the HTTP collaborator behind a trait
//! - **reporter**: selection, request phase, busy flag, latest result
//! - **view / repl**: rendering and the interactive front end

pub mod errors;
pub mod catalog;
pub mod selection;
pub mod prediction;
pub mod reporter;
pub mod view;

// Re-export commonly used types
pub use errors::{ConfigError, PredictionError, ReportError};
pub use reporter::{RequestPhase, SymptomReporter};

// Front end and ambient concerns
pub mod cli;
pub mod logging;
pub mod repl;
pub mod telemetry;
