//! Integration tests for the interactive checklist
//!
//! Drives a REPL session through its public API against a fake service.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use symptom_check::{
    catalog::SymptomCatalog,
    errors::PredictionError,
    prediction::{PredictionResult, PredictionService},
    repl::{
        commands::{is_command, split_toggle_inputs, Command, CommandHandler},
        ReplConfig, ReplSession,
    },
    reporter::{RequestPhase, SymptomReporter},
    view,
};

/// Returns one diagnosis per distinct symptom count and logs requests
#[derive(Default)]
struct EchoService {
    requests: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl PredictionService for EchoService {
    async fn predict(&self, symptoms: &[String]) -> Result<PredictionResult, PredictionError> {
        self.requests.lock().unwrap().push(symptoms.to_vec());
        Ok(PredictionResult {
            disease: format!("Condition-{}", symptoms.len()),
            cure: "Rest".to_string(),
            doctor: "GP".to_string(),
            risk_level: "Low".to_string(),
            accuracy: Some(50.0 + symptoms.len() as f64),
        })
    }
}

fn new_session(service: Arc<EchoService>) -> ReplSession {
    let reporter = Arc::new(SymptomReporter::new(SymptomCatalog::builtin(), service));
    ReplSession::new(
        reporter,
        ReplConfig {
            show_spinner: false,
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn test_command_parsing_surface() {
    let handler = CommandHandler::new();
    assert_eq!(handler.parse("/predict"), Command::Predict);
    assert_eq!(handler.parse("/history 3"), Command::History { limit: Some(3) });
    assert!(is_command("/status"));
    assert!(!is_command("1 2 3"));
    assert_eq!(split_toggle_inputs("pink eye, itching"), vec!["pink eye", "itching"]);
}

#[tokio::test]
async fn test_full_session_flow() {
    let service = Arc::new(EchoService::default());
    let mut session = new_session(service.clone());

    // Nothing selected yet: rejected locally
    session.handle_input("/predict").await.unwrap();
    assert!(service.requests.lock().unwrap().is_empty());
    assert_eq!(session.reporter().phase(), RequestPhase::Idle);

    session.handle_input("headache, nausea").await.unwrap();
    session.handle_input("/predict").await.unwrap();
    assert_eq!(
        session.reporter().result().unwrap().disease,
        "Condition-2"
    );

    session.handle_input("17").await.unwrap();
    session.handle_input("/predict").await.unwrap();

    let result = session.reporter().result().unwrap();
    assert_eq!(result.disease, "Condition-3");
    assert_eq!(result.accuracy, Some(53.0));
    assert_eq!(session.reporter().phase(), RequestPhase::Completed);

    let requests = service.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1], vec!["headache", "nausea", "dizziness"]);
    drop(requests);

    assert_eq!(session.session().submission_count(), 2);
    assert!(session.handle_input("/status").await.unwrap());
    assert!(session.handle_input("/history").await.unwrap());
    assert!(session.handle_input("/report").await.unwrap());
    assert!(!session.handle_input("/q").await.unwrap());
}

#[tokio::test]
async fn test_report_rendering_follows_reporter() {
    let service = Arc::new(EchoService::default());
    let mut session = new_session(service);

    let before = view::render_report(session.reporter().result().as_ref());
    assert!(before.contains(view::NO_DIAGNOSIS));

    session.handle_input("rash").await.unwrap();
    session.handle_input("/predict").await.unwrap();

    let after = view::render_report(session.reporter().result().as_ref());
    assert!(after.contains("Condition-1"));
    assert!(after.contains("51%"));
}
