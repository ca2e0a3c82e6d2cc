//! Request lifecycle phase

use std::fmt;

/// Lifecycle of the current or most recent submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// Nothing submitted yet this session
    #[default]
    Idle,
    /// Waiting for the prediction service
    InFlight,
    /// Last submission produced a result
    Completed,
    /// Last submission failed
    Failed,
}

impl RequestPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPhase::Idle => "idle",
            RequestPhase::InFlight => "in flight",
            RequestPhase::Completed => "completed",
            RequestPhase::Failed => "failed",
        }
    }
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
