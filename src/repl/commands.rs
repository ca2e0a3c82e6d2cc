//! Command handler for the interactive checklist
//!
//! Slash commands drive the session; any other input toggles symptoms.

use anyhow::Result;
use colored::*;

use crate::repl::display::DisplayManager;
use crate::repl::session::SessionManager;
use crate::reporter::SymptomReporter;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Selected,
    Toggle { inputs: Vec<String> },
    Predict,
    Report,
    Clear,
    History { limit: Option<usize> },
    Status,
    Verbose { enable: bool },
    Cls,
    Exit,
    Unknown { input: String },
}

/// What the session should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Submit,
    Exit,
}

/// Check if input is a slash command
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Split free-form toggle input into individual symptom references
///
/// `3 7 12` is three numbers; otherwise entries are separated by commas so
/// multi-word labels survive.
pub fn split_toggle_inputs(input: &str) -> Vec<String> {
    let words: Vec<&str> = input.split_whitespace().collect();
    if !words.is_empty() && words.iter().all(|w| w.trim_end_matches(',').parse::<usize>().is_ok()) {
        return words
            .iter()
            .map(|w| w.trim_end_matches(',').to_string())
            .collect();
    }

    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            let inputs = split_toggle_inputs(trimmed);
            if inputs.is_empty() {
                return Command::Unknown { input: input.to_string() };
            }
            return Command::Toggle { inputs };
        }

        let body = &trimmed[1..];
        let (name, rest) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (body, ""),
        };

        match name.to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "list" | "ls" => Command::List,
            "selected" | "sel" => Command::Selected,
            "toggle" | "t" => {
                let inputs = split_toggle_inputs(rest);
                if inputs.is_empty() {
                    Command::Unknown { input: input.to_string() }
                } else {
                    Command::Toggle { inputs }
                }
            }
            "predict" | "p" => Command::Predict,
            "report" | "r" => Command::Report,
            "clear" => Command::Clear,
            "history" => Command::History { limit: rest.parse().ok() },
            "status" => Command::Status,
            "verbose" => {
                let enable = if rest.is_empty() {
                    true
                } else {
                    let rest = rest.to_lowercase();
                    rest == "on" || rest == "1" || rest == "true"
                };
                Command::Verbose { enable }
            }
            "cls" => Command::Cls,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command that does not need the network
    ///
    /// `Predict` is returned as [`CommandOutcome::Submit`] for the session
    /// to run asynchronously.
    pub fn execute(
        &mut self,
        command: Command,
        reporter: &SymptomReporter,
        session: &mut SessionManager,
        display: &DisplayManager,
    ) -> Result<CommandOutcome> {
        match command {
            Command::Help => {
                self.show_help();
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                return Ok(CommandOutcome::Exit);
            }
            Command::List => {
                display.show_checklist(reporter.catalog(), &reporter.snapshot());
            }
            Command::Selected => {
                display.show_selection(&reporter.selection());
            }
            Command::Toggle { inputs } => {
                self.toggle(&inputs, reporter, display);
                display.show_selection(&reporter.selection());
            }
            Command::Predict => {
                return Ok(CommandOutcome::Submit);
            }
            Command::Report => {
                display.show_report(&reporter.snapshot());
            }
            Command::Clear => {
                reporter.clear_selection();
                println!("{}", "Selection cleared.".yellow());
            }
            Command::History { limit } => {
                self.show_history(session, limit.unwrap_or(10));
            }
            Command::Status => {
                self.show_status(reporter, session);
            }
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
            }
            Command::Cls => {
                display.clear_screen()?;
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
        }
        Ok(CommandOutcome::Continue)
    }

    fn toggle(&self, inputs: &[String], reporter: &SymptomReporter, display: &DisplayManager) {
        for input in inputs {
            match reporter.catalog().resolve(input) {
                Some(label) => {
                    let label = label.to_string();
                    let selected = reporter.toggle(&label);
                    if self.verbose {
                        let verb = if selected { "checked" } else { "unchecked" };
                        println!("  {} {}", verb.dimmed(), label);
                    }
                }
                None => {
                    display.show_warning(&format!("Unknown symptom: {}", input));
                }
            }
        }
    }

    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("<n> [n ...]", "Toggle symptoms by checklist number"),
            ("<label>[, label]", "Toggle symptoms by name"),
            ("/toggle, /t", "Toggle symptoms (numbers or names)"),
            ("/list, /ls", "Show the checklist"),
            ("/selected, /sel", "Show checked symptoms"),
            ("/predict, /p", "Send checked symptoms for a diagnosis"),
            ("/report, /r", "Show the diagnosis report"),
            ("/clear", "Uncheck all symptoms"),
            ("/history [n]", "Show last n submissions (default: 10)"),
            ("/status", "Show session status and statistics"),
            ("/verbose [on|off]", "Toggle verbose output"),
            ("/cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }
        println!();
    }

    fn show_history(&self, session: &SessionManager, limit: usize) {
        let history = session.get_history(limit);

        if history.is_empty() {
            println!("{}", "No submissions yet.".yellow());
            return;
        }

        println!("\n{}", format!("Submissions (last {}):", history.len()).bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        for (i, record) in history.iter().enumerate() {
            let index = history.len() - i;
            let status_icon = if record.success { "✓".green() } else { "✗".red() };
            let outcome = record.disease.as_deref().unwrap_or("no diagnosis");
            println!(
                "  {}. {} {} {} {}",
                index.to_string().cyan(),
                status_icon,
                record.timestamp.format("%H:%M:%S"),
                outcome,
                format!("({}ms)", record.duration_ms).dimmed()
            );

            if self.verbose {
                println!("     Symptoms: {}", record.symptoms.join(", ").dimmed());
            }
        }
        println!();
    }

    fn show_status(&self, reporter: &SymptomReporter, session: &SessionManager) {
        let snapshot = reporter.snapshot();
        let stats = reporter.telemetry().get_stats();

        println!("\n{}", "Session Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());
        println!("  {:<20} {}", "Duration:", format_duration(session.session_duration()));
        println!("  {:<20} {}", "Selected:", snapshot.selection.len());
        println!("  {:<20} {}", "Request phase:", snapshot.phase);
        println!("  {:<20} {}", "Submissions:", stats.submissions);
        println!("  {:<20} {}", "Succeeded:", stats.successes.to_string().green());
        println!("  {:<20} {}", "Failed:", stats.failures.to_string().red());
        println!("  {:<20} {}", "Rejected:", stats.rejected);
        println!("  {:<20} {}", "History entries:", session.history_len());
        if let Some(latency) = stats.last_latency_ms {
            println!("  {:<20} {}ms", "Last latency:", latency);
        }
        println!(
            "  {:<20} {}",
            "Verbose:",
            if self.verbose { "on" } else { "off" }
        );
        println!();
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
