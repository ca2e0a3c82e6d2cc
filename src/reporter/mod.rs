//! Symptom selector and reporter
//!
//! Owns the selection set, the latest prediction, and the request phase.
//! `submit` performs exactly one collaborator call per accepted submission.
//!
//! State sits behind a `std::sync::Mutex` that is never held across an
//! `.await`, so the reporter can be shared through an `Arc` between the
//! front end and a spawned submission.

pub mod phase;

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::catalog::SymptomCatalog;
use crate::errors::ReportError;
use crate::prediction::{PredictionResult, PredictionService};
use crate::selection::SelectionSet;
use crate::telemetry::{TelemetryCollector, TelemetryEvent};

pub use phase::RequestPhase;

/// Submit control label while idle
pub const PREDICT_LABEL: &str = "Predict";

/// Submit control label while a request is outstanding
pub const BUSY_LABEL: &str = "Predicting...";

#[derive(Debug, Default)]
struct ReporterState {
    selection: SelectionSet,
    result: Option<PredictionResult>,
    phase: RequestPhase,
    busy: bool,
    completed_at: Option<DateTime<Utc>>,
}

/// Consistent copy of the reporter state for rendering
#[derive(Debug, Clone)]
pub struct ReporterSnapshot {
    pub selection: SelectionSet,
    pub result: Option<PredictionResult>,
    pub phase: RequestPhase,
    pub busy: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ReporterSnapshot {
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            PREDICT_LABEL
        }
    }
}

/// Symptom selector and reporter
pub struct SymptomReporter {
    catalog: SymptomCatalog,
    service: Arc<dyn PredictionService>,
    state: Mutex<ReporterState>,
    telemetry: TelemetryCollector,
}

fn lock(state: &Mutex<ReporterState>) -> MutexGuard<'_, ReporterState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the busy flag when a submission ends, however it ends
///
/// If the submission future is dropped while awaiting the service the phase
/// is still `InFlight`; it is moved to `Failed` here.
struct InFlightGuard<'a> {
    state: &'a Mutex<ReporterState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        state.busy = false;
        if state.phase == RequestPhase::InFlight {
            warn!("prediction request abandoned before completion");
            state.phase = RequestPhase::Failed;
        }
    }
}

impl SymptomReporter {
    pub fn new(catalog: SymptomCatalog, service: Arc<dyn PredictionService>) -> Self {
        Self {
            catalog,
            service,
            state: Mutex::new(ReporterState::default()),
            telemetry: TelemetryCollector::new(),
        }
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn telemetry(&self) -> &TelemetryCollector {
        &self.telemetry
    }

    /// Check the label if unchecked, uncheck it otherwise
    ///
    /// Returns `true` when the label is selected afterwards. Labels outside
    /// the catalog are accepted.
    pub fn toggle(&self, label: &str) -> bool {
        let selected = lock(&self.state).selection.toggle(label);
        debug!(label, selected, "toggled symptom");
        selected
    }

    /// Uncheck every symptom
    pub fn clear_selection(&self) {
        lock(&self.state).selection.clear();
    }

    pub fn selection(&self) -> SelectionSet {
        lock(&self.state).selection.clone()
    }

    pub fn result(&self) -> Option<PredictionResult> {
        lock(&self.state).result.clone()
    }

    pub fn phase(&self) -> RequestPhase {
        lock(&self.state).phase
    }

    pub fn is_busy(&self) -> bool {
        lock(&self.state).busy
    }

    /// Label for the submit control
    pub fn submit_label(&self) -> &'static str {
        self.snapshot().submit_label()
    }

    pub fn snapshot(&self) -> ReporterSnapshot {
        let state = lock(&self.state);
        ReporterSnapshot {
            selection: state.selection.clone(),
            result: state.result.clone(),
            phase: state.phase,
            busy: state.busy,
            completed_at: state.completed_at,
        }
    }

    /// Send the current selection to the prediction service
    ///
    /// Fails fast without a network call when nothing is selected or a
    /// previous submission is still outstanding. Otherwise clears the prior
    /// result, makes one call, and ends in `Completed` or `Failed`. The busy
    /// flag is released on every path, including cancellation.
    pub async fn submit(&self) -> Result<PredictionResult, ReportError> {
        let symptoms = {
            let mut state = lock(&self.state);
            if state.selection.is_empty() {
                self.reject("empty selection");
                return Err(ReportError::EmptySelection);
            }
            if state.busy {
                self.reject("submission in flight");
                return Err(ReportError::SubmissionInFlight);
            }
            state.phase = RequestPhase::InFlight;
            state.busy = true;
            state.result = None;
            state.selection.to_vec()
        };

        let guard = InFlightGuard { state: &self.state };
        self.telemetry.record(TelemetryEvent::SubmissionStarted);
        info!(symptoms = ?symptoms, "requesting prediction");

        let started = Instant::now();
        let outcome = self.service.predict(&symptoms).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        self.telemetry.record(TelemetryEvent::SubmissionCompleted {
            duration_ms,
            success: outcome.is_ok(),
        });

        let reply = match outcome {
            Ok(result) => {
                info!(disease = %result.disease, duration_ms, "prediction received");
                let mut state = lock(&self.state);
                state.result = Some(result.clone());
                state.phase = RequestPhase::Completed;
                state.completed_at = Some(Utc::now());
                Ok(result)
            }
            Err(err) => {
                warn!(error = %err, duration_ms, "prediction failed");
                lock(&self.state).phase = RequestPhase::Failed;
                Err(ReportError::Collaborator(err))
            }
        };

        drop(guard);
        reply
    }

    fn reject(&self, reason: &str) {
        debug!(reason, "submission rejected");
        self.telemetry.record(TelemetryEvent::SubmissionRejected);
    }
}
