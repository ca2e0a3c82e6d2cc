//! Terminal output for the interactive checklist
//!
//! Prints the shared renderings from [`crate::view`] and runs the spinner
//! shown while a prediction is outstanding.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

use crate::catalog::SymptomCatalog;
use crate::reporter::{ReporterSnapshot, BUSY_LABEL};
use crate::selection::SelectionSet;
use crate::view;

/// Display manager for REPL UI
pub struct DisplayManager {
    spinner: Option<ProgressBar>,
    show_spinner: bool,
    columns: usize,
}

impl DisplayManager {
    pub fn new(show_spinner: bool, columns: usize) -> Self {
        DisplayManager {
            spinner: None,
            show_spinner,
            columns: columns.max(1),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, endpoint: &str) {
        let width = 64;
        let rule = "=".repeat(width).cyan();

        println!("\n{}", rule);
        println!("{}", format!("  symptom-check {} - Disease Prediction", version).bold().cyan());
        println!("{}", format!("  Service: {}", endpoint).dimmed());
        println!("{}\n", rule);
        println!(
            "Toggle symptoms by number or name, then {} ({} for commands, {} to quit)\n",
            "/predict".green(),
            "/help".green(),
            "/exit".green()
        );
    }

    pub fn show_checklist(&self, catalog: &SymptomCatalog, snapshot: &ReporterSnapshot) {
        print!("{}", view::render_checklist(catalog, &snapshot.selection, self.columns));
        println!("\n  {}\n", view::render_submit_control(snapshot));
    }

    pub fn show_selection(&self, selection: &SelectionSet) {
        println!("{}", view::render_selection(selection));
    }

    pub fn show_report(&self, snapshot: &ReporterSnapshot) {
        println!();
        print!("{}", view::render_report(snapshot.result.as_ref()));
        if let Some(at) = snapshot.completed_at {
            println!("  {}", format!("received {}", at.format("%Y-%m-%d %H:%M:%S UTC")).dimmed());
        }
        println!();
    }

    /// Start the busy indicator
    pub fn start_spinner(&mut self) {
        self.finish_spinner();
        if !self.show_spinner {
            println!("{}", BUSY_LABEL.yellow());
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} {elapsed:.dim}") {
            pb.set_style(style);
        }
        pb.set_message(BUSY_LABEL);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }

    /// Stop the busy indicator if running
    pub fn finish_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    pub fn show_error(&self, error: &str) {
        println!("{} {}", "✗".red().bold(), error.red());
    }

    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "⚠".yellow().bold(), warning.yellow());
    }

    pub fn show_info(&self, message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    pub fn show_success(&self, message: &str, duration_ms: u64) {
        println!("{} {} {}", "✓".green(), message, format!("({}ms)", duration_ms).dimmed());
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner.is_some()
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(true, 2)
    }
}
