//! # Grading Runner
//!
//! Runs grading passes over captured responses. A pass holds the ledger lock for its whole
//! duration, so two passes never interleave. A pass that cannot take the lock within the
//! configured wait is skipped rather than queued; the next scheduled pass picks up the work.

use crate::leaderboard::{Standing, build_leaderboard};
use crate::ledger::{GradedKey, Ledger, LedgerEntry};
use crate::loader::Response;
use chrono::Utc;
use quiz_marker::GradingJob;
use quiz_marker::error::MarkerError;
use quiz_marker::resolver::resolve_multi_select;
use quiz_marker::types::{Question, QuestionType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Counters describing one completed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Responses examined.
    pub responses: usize,
    /// Answers graded and recorded during this pass.
    pub graded: usize,
    /// Answers skipped because the ledger already held them.
    pub already_graded: usize,
    /// Multi-select questions whose correct answer resolves to nothing.
    pub integrity_warnings: usize,
    /// Points awarded during this pass.
    pub earned: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// Another pass held the ledger for longer than the lock wait.
    Skipped,
}

/// The report file written after a pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub leaderboard: Vec<Standing>,
}

#[derive(Clone)]
pub struct GradingRunner {
    questions: Arc<Vec<Question>>,
    ledger: Arc<Mutex<Ledger>>,
    lock_wait: Duration,
}

impl GradingRunner {
    pub fn new(questions: Vec<Question>, ledger: Ledger, lock_wait: Duration) -> Self {
        Self {
            questions: Arc::new(questions),
            ledger: Arc::new(Mutex::new(ledger)),
            lock_wait,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Shared handle to the ledger lock.
    pub fn ledger_handle(&self) -> Arc<Mutex<Ledger>> {
        Arc::clone(&self.ledger)
    }

    pub async fn ledger_snapshot(&self) -> Ledger {
        self.ledger.lock().await.clone()
    }

    /// Grades every answer in `responses` that the ledger does not hold yet.
    ///
    /// Answers to questions a response omits are graded as empty answers.
    pub async fn run(&self, responses: &[Response]) -> RunOutcome {
        let mut ledger = match timeout(self.lock_wait, self.ledger.lock()).await {
            Ok(guard) => guard,
            Err(_) => {
                info!(
                    "Grading pass skipped: ledger busy for more than {} ms",
                    self.lock_wait.as_millis()
                );
                return RunOutcome::Skipped;
            }
        };

        let mut summary = RunSummary {
            responses: responses.len(),
            integrity_warnings: self.check_integrity(),
            ..RunSummary::default()
        };

        let job = GradingJob::new(&self.questions);
        for response in responses {
            for question in job.questions() {
                let key = GradedKey::new(&response.timestamp, &response.respondent, &question.id);
                if ledger.contains(&key) {
                    summary.already_graded += 1;
                    continue;
                }

                let answer = response
                    .answers
                    .get(&question.id)
                    .map(String::as_str)
                    .unwrap_or_default();
                let report = job.grade_question(question, answer);
                let entry = LedgerEntry::from_report(&key, &report, Utc::now());

                if ledger.record(entry) {
                    summary.graded += 1;
                    summary.earned += report.result.earned_points;
                } else {
                    summary.already_graded += 1;
                }
            }
        }

        info!(
            "Grading pass complete: {} responses, {} graded, {} already graded, {} points awarded",
            summary.responses, summary.graded, summary.already_graded, summary.earned
        );
        RunOutcome::Completed(summary)
    }

    fn check_integrity(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.question_type == QuestionType::MultiSelect)
            .filter(|q| resolve_multi_select(&q.correct_answer, &q.present_options()).is_empty())
            .inspect(|q| {
                warn!(
                    "Question '{}' has a correct answer that resolves to no options; it can never award points",
                    q.id
                )
            })
            .count()
    }
}

impl RunReport {
    pub fn new(summary: RunSummary, ledger: &Ledger) -> Self {
        Self {
            summary,
            leaderboard: build_leaderboard(ledger),
        }
    }

    /// Writes the report as pretty JSON, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<(), MarkerError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create report directory {}: {}", parent.display(), e);
                MarkerError::IoError("Failed to write report".to_string())
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            error!("Failed to serialize report: {}", e);
            MarkerError::InvalidJson("Failed to serialize report".to_string())
        })?;

        fs::write(path, json).map_err(|e| {
            error!("Failed to write report {}: {}", path.display(), e);
            MarkerError::IoError("Failed to write report".to_string())
        })
    }
}
