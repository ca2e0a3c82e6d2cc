//! Submission history for the interactive session
//!
//! The reporter only keeps the latest result; this keeps a bounded log of
//! every attempt so `/history` can show what was asked and what came back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of submissions to keep in history
const MAX_HISTORY_SIZE: usize = 200;

/// Record of one submission attempt that reached the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub symptoms: Vec<String>,
    pub disease: Option<String>,
    pub success: bool,
    pub duration_ms: u64,
    pub timestamp: DateTime<Utc>,
}

/// Session manager holding the submission log
pub struct SessionManager {
    history: VecDeque<SubmissionRecord>,
    session_start: DateTime<Utc>,
    submission_count: usize,
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager {
            history: VecDeque::with_capacity(16),
            session_start: Utc::now(),
            submission_count: 0,
        }
    }

    /// Record a finished submission
    pub fn record(&mut self, record: SubmissionRecord) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(record);
        self.submission_count += 1;
    }

    /// Get submission history (newest first)
    pub fn get_history(&self, limit: usize) -> Vec<&SubmissionRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    pub fn submission_count(&self) -> usize {
        self.submission_count
    }

    /// Session duration in whole seconds
    pub fn session_duration(&self) -> u64 {
        (Utc::now() - self.session_start).num_seconds().max(0) as u64
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
