//! # Quiz Runner
//!
//! Orchestration around the grading core: loads a quiz and its responses from JSON, grades
//! every response that has not been graded yet, keeps an idempotent ledger of results and
//! derives a leaderboard.
//!
//! - [`loader`]: reading and validating quiz and response files.
//! - [`ledger`]: the durable record of graded answers, keyed by timestamp, respondent and question.
//! - [`runner`]: serialized, skip-if-busy grading runs over the ledger.
//! - [`leaderboard`]: respondent standings computed from the ledger.

pub mod leaderboard;
pub mod ledger;
pub mod loader;
pub mod runner;
