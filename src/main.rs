//! symptom-check - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing::{debug, warn};

use symptom_check::{
    catalog::SymptomCatalog,
    cli::{Args, Commands, Config},
    errors::ReportError,
    logging,
    prediction::HttpPredictionClient,
    repl::{ReplConfig, ReplSession},
    reporter::SymptomReporter,
    view,
};

/// Exit code when the service could not produce a diagnosis
const EXIT_CODE_PREDICTION_FAILED: i32 = 1;

/// Exit code when the request was rejected before any network call
const EXIT_CODE_USAGE: i32 = 2;

fn build_reporter(config: &Config) -> Result<Arc<SymptomReporter>> {
    let catalog = config.symptom_catalog()?;
    let client = HttpPredictionClient::new(config.service.endpoint.clone(), config.timeout())
        .context("Failed to build HTTP client")?;
    Ok(Arc::new(SymptomReporter::new(catalog, Arc::new(client))))
}

async fn run_repl(config: &Config) -> Result<()> {
    let reporter = build_reporter(config)?;
    let repl_config = ReplConfig {
        history_file: ReplConfig::default_history_file(),
        show_spinner: config.display.show_spinner,
        columns: config.display.columns,
    };

    let mut session = ReplSession::new(reporter, repl_config)?;
    session.show_welcome(env!("CARGO_PKG_VERSION"), &config.service.endpoint);
    session.run().await
}

/// Map a command-line symptom to a catalog label
///
/// Numbers must be in range. Names outside the catalog are passed through
/// as typed.
fn resolve_symptom(catalog: &SymptomCatalog, input: &str) -> Result<String> {
    if let Some(label) = catalog.resolve(input) {
        return Ok(label.to_string());
    }
    if input.trim().parse::<usize>().is_ok() {
        anyhow::bail!("No symptom numbered {} (catalog has {})", input.trim(), catalog.len());
    }
    warn!(symptom = input, "symptom is not in the catalog; sending as typed");
    Ok(input.trim().to_string())
}

async fn run_predict(config: &Config, symptoms: &[String], json: bool, show_progress: bool) -> Result<()> {
    let reporter = build_reporter(config)?;

    for input in symptoms {
        let label = resolve_symptom(reporter.catalog(), input)?;
        if !reporter.selection().contains(&label) {
            reporter.toggle(&label);
        }
    }
    debug!(selected = reporter.selection().len(), "one-shot prediction");

    let spinner = if show_progress && !json && config.display.show_spinner {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_message(symptom_check::reporter::BUSY_LABEL);
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let outcome = reporter.submit().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match outcome {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", view::render_report(Some(&result)));
            }
            Ok(())
        }
        Err(err) if err.is_local() => {
            eprintln!("{} {}", "⚠".yellow().bold(), err.notice().yellow());
            std::process::exit(EXIT_CODE_USAGE);
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red().bold(), err.notice().red());
            if let ReportError::Collaborator(cause) = &err {
                debug!(error = %cause, "prediction failure detail");
            }
            std::process::exit(EXIT_CODE_PREDICTION_FAILED);
        }
    }
}

fn list_symptoms(config: &Config) -> Result<()> {
    let catalog = config.symptom_catalog()?;
    println!("\nSymptoms ({}):\n", catalog.len());
    print!(
        "{}",
        view::render_checklist(&catalog, &Default::default(), config.display.columns)
    );
    println!();
    Ok(())
}

fn init_config(args: &Args, config: &Config, force: bool) -> Result<()> {
    let path = args
        .config
        .clone()
        .or_else(Config::default_path)
        .context("No home directory; pass --config to choose a path")?;

    config.write_new(&path, force)?;
    println!("{} Wrote {}", "✓".green().bold(), path.display());
    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    println!("\n{}", "symptom-check Configuration".bold().cyan());
    println!("{}\n", "=".repeat(56).cyan());

    let source = match (&args.config, Config::default_path()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    };

    println!("Source:  {}", source);
    println!();
    println!("Service:");
    println!("  Endpoint: {}", config.service.endpoint);
    println!(
        "  Timeout:  {}",
        config
            .service
            .timeout_secs
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "none".to_string())
    );
    println!();
    println!("Catalog:");
    println!(
        "  {} symptoms ({})",
        config.symptom_catalog()?.len(),
        if config.catalog.symptoms.is_some() { "configured" } else { "built-in" }
    );
    println!();
    println!("Display:");
    println!("  Colors:    {}", if config.display.color_output { "enabled" } else { "disabled" });
    println!("  Spinner:   {}", if config.display.show_spinner { "enabled" } else { "disabled" });
    println!("  Columns:   {}", config.display.columns);
    println!("  Verbosity: {}", args.verbosity().as_str());
    println!();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // `config --init` may name a file that does not exist yet
    let creating = matches!(args.command, Some(Commands::Config { init: true, .. }))
        && args.config.as_ref().is_some_and(|path| !path.exists());
    let config = if creating {
        Config::default()
    } else {
        Config::load(args.config.clone()).context("Failed to load configuration")?
    }
    .with_endpoint(args.endpoint.clone())?;

    let color = config.display.color_output && !args.no_color;
    if !color {
        colored::control::set_override(false);
    }
    logging::init(args.verbosity(), color);
    debug!(endpoint = %config.service.endpoint, "configuration loaded");

    match &args.command {
        None | Some(Commands::Start) => {
            run_repl(&config).await?;
        }
        Some(Commands::Predict { symptoms, json }) => {
            run_predict(&config, symptoms, *json, args.verbosity().show_progress()).await?;
        }
        Some(Commands::Symptoms) => {
            list_symptoms(&config)?;
        }
        Some(Commands::Config { init: true, force }) => {
            init_config(&args, &config, *force)?;
        }
        Some(Commands::Config { .. }) => {
            show_config(&args, &config)?;
        }
    }

    Ok(())
}
