//! Runtime configuration for the grading runner.
//!
//! Values come from a `.env` file (if present) and the process environment. Every setting has
//! a default, so an empty environment yields a usable configuration.

use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_LEVEL: &str = "quiz_runner=info,quiz_marker=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub quiz_path: PathBuf,
    pub responses_path: PathBuf,
    pub ledger_path: PathBuf,
    pub report_path: PathBuf,
    /// How long a run waits for the ledger lock before it is skipped.
    pub lock_wait_ms: u64,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Config {
    /// Reads the configuration from the current environment without caching it.
    pub fn from_env() -> Self {
        Self {
            project_name: var_or("PROJECT_NAME", "quiz-grader"),
            log_level: var_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_file: var_or("LOG_FILE", "logs/grader.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "true").eq_ignore_ascii_case("true"),
            quiz_path: var_or("QUIZ_PATH", "data/quiz.json").into(),
            responses_path: var_or("RESPONSES_PATH", "data/responses.json").into(),
            ledger_path: var_or("LEDGER_PATH", "data/ledger.json").into(),
            report_path: var_or("REPORT_PATH", "data/report.json").into(),
            lock_wait_ms: env::var("LOCK_WAIT_MS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(5000),
        }
    }

    /// Loads `env_path` (missing files are ignored) and caches the resulting configuration.
    ///
    /// Later calls return the cached value.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();
        CONFIG.get_or_init(Self::from_env)
    }

    /// The cached configuration, loading it from the environment on first use.
    pub fn get() -> &'static Self {
        CONFIG.get_or_init(Self::from_env)
    }

    pub fn lock_wait(&self) -> Duration {
        Duration::from_millis(self.lock_wait_ms)
    }
}
