//! # Grading Ledger
//!
//! The durable record of every graded answer. Entries are keyed by submission timestamp,
//! respondent and question id, so re-running a grading pass over the same responses never
//! grades (or counts) an answer twice.

use chrono::{DateTime, Utc};
use quiz_marker::error::MarkerError;
use quiz_marker::report::QuestionReport;
use quiz_marker::types::GradingResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::error;

/// Identifies one graded answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GradedKey {
    pub timestamp: String,
    pub respondent: String,
    pub question_id: String,
}

impl GradedKey {
    pub fn new(timestamp: &str, respondent: &str, question_id: &str) -> Self {
        Self {
            timestamp: timestamp.trim().to_string(),
            respondent: respondent.trim().to_string(),
            question_id: question_id.trim().to_string(),
        }
    }
}

/// Escapes the key separator so that distinct keys never share a string form.
fn escape_part(part: &str) -> String {
    part.replace('\\', "\\\\").replace('|', "\\|")
}

impl fmt::Display for GradedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            escape_part(&self.timestamp),
            escape_part(&self.respondent),
            escape_part(&self.question_id)
        )
    }
}

/// One recorded grading outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub timestamp: String,
    pub respondent: String,
    pub question_id: String,
    pub result: GradingResult,
    pub possible: u32,
    #[serde(default)]
    pub resolved_answer: Vec<String>,
    #[serde(default)]
    pub feedback: String,
    pub graded_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn from_report(key: &GradedKey, report: &QuestionReport, graded_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: key.timestamp.clone(),
            respondent: key.respondent.clone(),
            question_id: key.question_id.clone(),
            result: report.result,
            possible: report.possible,
            resolved_answer: report.resolved_answer.clone(),
            feedback: report.feedback.clone(),
            graded_at,
        }
    }

    pub fn key(&self) -> GradedKey {
        GradedKey::new(&self.timestamp, &self.respondent, &self.question_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    entries: BTreeMap<String, LedgerEntry>,
}

impl Ledger {
    pub fn contains(&self, key: &GradedKey) -> bool {
        self.entries.contains_key(&key.to_string())
    }

    pub fn get(&self, key: &GradedKey) -> Option<&LedgerEntry> {
        self.entries.get(&key.to_string())
    }

    /// Records `entry` unless its key is already present.
    ///
    /// Returns `true` if the entry was added. An existing entry is never overwritten.
    pub fn record(&mut self, entry: LedgerEntry) -> bool {
        let key = entry.key().to_string();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads the ledger at `path`. A missing file is an empty ledger.
    pub fn load(path: &Path) -> Result<Self, MarkerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read ledger {}: {}", path.display(), e);
            MarkerError::IoError("Failed to load ledger".to_string())
        })?;

        serde_json::from_str(&content).map_err(|e| {
            error!("Invalid JSON in ledger {}: {}", path.display(), e);
            MarkerError::InvalidJson("Failed to parse ledger".to_string())
        })
    }

    /// Writes the ledger to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), MarkerError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create ledger directory {}: {}", parent.display(), e);
                MarkerError::IoError("Failed to save ledger".to_string())
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            error!("Failed to serialize ledger: {}", e);
            MarkerError::InvalidJson("Failed to serialize ledger".to_string())
        })?;

        fs::write(path, json).map_err(|e| {
            error!("Failed to write ledger {}: {}", path.display(), e);
            MarkerError::IoError("Failed to save ledger".to_string())
        })
    }
}
