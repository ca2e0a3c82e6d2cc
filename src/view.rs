//! Rendering of the checklist, the submit control, and the report panel
//!
//! Everything here returns strings so the REPL and the one-shot command share
//! one rendering and tests can inspect it.

use colored::*;

use crate::catalog::SymptomCatalog;
use crate::prediction::PredictionResult;
use crate::reporter::ReporterSnapshot;
use crate::selection::SelectionSet;

/// Text of the report panel before any successful prediction
pub const NO_DIAGNOSIS: &str = "No diagnosis yet.";

/// Render the catalog as a numbered checklist laid out in `columns` columns
pub fn render_checklist(catalog: &SymptomCatalog, selection: &SelectionSet, columns: usize) -> String {
    let columns = columns.max(1);
    let rows = catalog.len().div_ceil(columns);
    let label_width = catalog.labels().iter().map(|l| l.len()).max().unwrap_or(0);
    let number_width = catalog.len().to_string().len();

    let mut out = String::new();
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..columns {
            // Column-major so numbers read top to bottom
            let index = col * rows + row;
            let Some(label) = catalog.labels().get(index) else {
                continue;
            };
            let mark = if selection.contains(label) {
                "[x]".green().bold().to_string()
            } else {
                "[ ]".dimmed().to_string()
            };
            line.push_str(&format!(
                "  {} {:>nw$}. {:<lw$}",
                mark,
                index + 1,
                label,
                nw = number_width,
                lw = label_width
            ));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render the selected labels on one line
pub fn render_selection(selection: &SelectionSet) -> String {
    if selection.is_empty() {
        return "No symptoms selected.".dimmed().to_string();
    }
    format!(
        "{} {}",
        format!("Selected ({}):", selection.len()).bold(),
        selection.iter().collect::<Vec<_>>().join(", ")
    )
}

/// Render the submit control for the current state
pub fn render_submit_control(snapshot: &ReporterSnapshot) -> String {
    let label = format!("[ {} ]", snapshot.submit_label());
    if snapshot.busy {
        label.yellow().to_string()
    } else {
        label.cyan().bold().to_string()
    }
}

/// Render the diagnosis report panel
pub fn render_report(result: Option<&PredictionResult>) -> String {
    let mut out = format!("{}\n", "Diagnosis Report".bold().cyan());
    match result {
        None => {
            out.push_str(&format!("  {}\n", NO_DIAGNOSIS.dimmed()));
        }
        Some(result) => {
            let accuracy = format!("{}%", result.accuracy_text());
            let rows = [
                ("Disease:", result.disease.as_str()),
                ("Cure:", result.cure.as_str()),
                ("Consult:", result.doctor.as_str()),
                ("Risk Level:", result.risk_level.as_str()),
                ("Accuracy:", accuracy.as_str()),
            ];
            for (label, value) in rows {
                out.push_str(&format!("  {} {}\n", format!("{:<12}", label).bold(), value));
            }
        }
    }
    out
}
