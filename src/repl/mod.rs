//! Interactive checklist
//!
//! Read-eval-print loop over a shared [`SymptomReporter`]: bare input toggles
//! symptoms, slash commands inspect state, `/predict` submits.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::errors::ReportError;
use crate::reporter::SymptomReporter;
use crate::repl::commands::{CommandHandler, CommandOutcome};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::{InputEvent, InputHandler};
pub use crate::repl::session::{SessionManager, SubmissionRecord};

/// Configuration for REPL mode
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub history_file: Option<PathBuf>,
    pub show_spinner: bool,
    pub columns: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            history_file: None,
            show_spinner: true,
            columns: 2,
        }
    }
}

impl ReplConfig {
    /// Default history file: ~/.symptom-check_history
    pub fn default_history_file() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".symptom-check_history"))
    }
}

/// REPL session coordinator
pub struct ReplSession {
    reporter: Arc<SymptomReporter>,
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session_manager: SessionManager,
    display_manager: DisplayManager,
}

impl ReplSession {
    pub fn new(reporter: Arc<SymptomReporter>, config: ReplConfig) -> Result<Self> {
        let input_handler = match config.history_file {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(ReplSession {
            reporter,
            input_handler,
            command_handler: CommandHandler::new(),
            session_manager: SessionManager::new(),
            display_manager: DisplayManager::new(config.show_spinner, config.columns),
        })
    }

    /// Show banner and the empty checklist
    pub fn show_welcome(&self, version: &str, endpoint: &str) {
        self.display_manager.show_banner(version, endpoint);
        self.display_manager
            .show_checklist(self.reporter.catalog(), &self.reporter.snapshot());
    }

    /// Run until `/exit` or Ctrl-D
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.input_handler
                .set_selected_count(self.reporter.selection().len());

            match self.input_handler.read_line()? {
                InputEvent::Line(input) => {
                    if !self.handle_input(&input).await? {
                        break;
                    }
                }
                InputEvent::Interrupted => {
                    println!("\nUse /exit to quit");
                }
                InputEvent::Eof => break,
            }
        }

        self.input_handler.save_history()?;
        Ok(())
    }

    /// Handle one line of input
    ///
    /// Returns `false` when the session should end.
    pub async fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        let command = self.command_handler.parse(input);
        debug!(?command, "repl command");

        let outcome = self.command_handler.execute(
            command,
            &self.reporter,
            &mut self.session_manager,
            &self.display_manager,
        )?;

        match outcome {
            CommandOutcome::Continue => Ok(true),
            CommandOutcome::Exit => Ok(false),
            CommandOutcome::Submit => {
                self.submit().await;
                Ok(true)
            }
        }
    }

    /// Submit the current selection and show the outcome
    pub async fn submit(&mut self) {
        let symptoms = self.reporter.selection().to_vec();
        let started = Instant::now();

        self.display_manager.start_spinner();
        let outcome = self.reporter.submit().await;
        self.display_manager.finish_spinner();

        let duration_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                self.session_manager.record(SubmissionRecord {
                    symptoms,
                    disease: Some(result.disease.clone()),
                    success: true,
                    duration_ms,
                    timestamp: Utc::now(),
                });
                self.display_manager.show_success("Diagnosis received", duration_ms);
                self.display_manager.show_report(&self.reporter.snapshot());
            }
            Err(err @ ReportError::Collaborator(_)) => {
                self.session_manager.record(SubmissionRecord {
                    symptoms,
                    disease: None,
                    success: false,
                    duration_ms,
                    timestamp: Utc::now(),
                });
                self.display_manager.show_error(&err.notice());
                if self.command_handler.is_verbose() {
                    if let ReportError::Collaborator(cause) = &err {
                        self.display_manager.show_info(&cause.to_string());
                    }
                }
            }
            Err(err) => {
                self.display_manager.show_warning(&err.notice());
            }
        }
    }

    pub fn reporter(&self) -> &Arc<SymptomReporter> {
        &self.reporter
    }

    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }

    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    pub fn set_verbose(&mut self, enable: bool) {
        self.command_handler.set_verbose(enable);
    }
}
