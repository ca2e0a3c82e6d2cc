//! Logging setup
//!
//! Logs go to stderr so they never interleave with the checklist or report
//! printed on stdout. `RUST_LOG` overrides the level picked from `-q`/`-v`.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbosity: Verbosity) -> String {
    format!("warn,symptom_check={}", verbosity.log_level())
}

/// Install the global subscriber
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init(verbosity: Verbosity, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(Verbosity::Normal), "warn,symptom_check=warn");
        assert_eq!(default_filter(Verbosity::VeryVerbose), "warn,symptom_check=debug");
    }

    #[test]
    fn test_init_twice() {
        init(Verbosity::Quiet, false);
        init(Verbosity::Verbose, false);
    }
}
