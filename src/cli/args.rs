//! Command-line argument parsing for symptom-check
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// symptom-check - pick your symptoms, get a diagnosis from the prediction service
#[derive(Parser, Debug)]
#[command(name = "symptom-check")]
#[command(version)]
#[command(about = "Terminal symptom checklist backed by a remote disease prediction service", long_about = None)]
pub struct Args {
    /// Prediction endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (warnings), -v (info), -vv (debug), -vvv (trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive checklist (default)
    Start,

    /// Submit symptoms once and print the diagnosis
    Predict {
        /// Symptom label or checklist number (repeatable)
        #[arg(short = 's', long = "symptom", value_name = "SYMPTOM", required = true)]
        symptoms: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the symptom catalog
    Symptoms,

    /// Display current configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,

        /// Replace an existing file when used with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
    Trace,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::VeryVerbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
            Verbosity::Trace => "trace",
        }
    }

    /// Log level for the crate's own events
    pub fn log_level(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// Check if should show the spinner
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["symptom-check"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["symptom-check", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["symptom-check", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["symptom-check", "-vv"]).verbosity(), Verbosity::VeryVerbose);
        assert_eq!(parse(&["symptom-check", "-vvvv"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(parse(&["symptom-check", "-q", "-vv"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_no_subcommand() {
        let args = parse(&["symptom-check"]);
        assert!(args.command.is_none());
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn test_predict_subcommand() {
        let args = parse(&[
            "symptom-check",
            "--endpoint",
            "http://localhost:5000/predict",
            "predict",
            "-s",
            "headache",
            "--symptom",
            "26",
            "--json",
        ]);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:5000/predict"));
        match args.command {
            Some(Commands::Predict { symptoms, json }) => {
                assert_eq!(symptoms, vec!["headache".to_string(), "26".to_string()]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_predict_requires_a_symptom() {
        assert!(Args::try_parse_from(["symptom-check", "predict"]).is_err());
    }

    #[test]
    fn test_global_verbosity_after_subcommand() {
        let args = parse(&["symptom-check", "symptoms", "-v"]);
        assert_eq!(args.verbosity(), Verbosity::Verbose);
        assert!(matches!(args.command, Some(Commands::Symptoms)));
    }

    #[test]
    fn test_config_init_flags() {
        let args = parse(&["symptom-check", "config", "--init", "--force"]);
        assert!(matches!(args.command, Some(Commands::Config { init: true, force: true })));

        let args = parse(&["symptom-check", "config"]);
        assert!(matches!(args.command, Some(Commands::Config { init: false, force: false })));

        assert!(Args::try_parse_from(["symptom-check", "config", "--force"]).is_err());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(Verbosity::Quiet.log_level(), "error");
        assert_eq!(Verbosity::Normal.log_level(), "warn");
        assert_eq!(Verbosity::VeryVerbose.log_level(), "debug");
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
    }
}
