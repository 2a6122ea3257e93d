//!
//! Quiz and Response Loader
//!
//! Reads the quiz definition and the captured responses from JSON files, enforcing a maximum
//! file size, and validates the quiz before anything is graded.
//!
//! # Error Handling
//!
//! Returns [`MarkerError`] variants with short, general messages; the specific cause (path,
//! parser error) is logged with `tracing::error!`.

use quiz_marker::error::MarkerError;
use quiz_marker::types::Question;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::error;

/// Maximum allowed size for JSON input files.
const MAX_JSON_SIZE: u64 = 2 * 1024 * 1024; // 2MB

/// A quiz file: the questions in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

/// One captured form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Submission time as captured by the form backend.
    pub timestamp: String,
    /// Respondent (team or participant) identifier.
    pub respondent: String,
    /// Raw answers keyed by question id.
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSheet {
    pub responses: Vec<Response>,
}

/// Checks that a file exists, is a file, and does not exceed [`MAX_JSON_SIZE`].
fn check_file(path: &Path) -> Result<(), MarkerError> {
    if !path.exists() {
        error!("File not found: {}", path.display());
        return Err(MarkerError::IoError("File not found".to_string()));
    }

    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return Err(MarkerError::IoError("Invalid file type".to_string()));
    }

    let metadata = fs::metadata(path).map_err(|e| {
        error!("File unreadable: {} - {}", path.display(), e);
        MarkerError::IoError("File unreadable".to_string())
    })?;

    if metadata.len() > MAX_JSON_SIZE {
        error!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_JSON_SIZE
        );
        return Err(MarkerError::IoError("File too large".to_string()));
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, MarkerError> {
    check_file(path)?;

    let bytes = fs::read(path).map_err(|e| {
        error!("Failed to read {} file {}: {}", what, path.display(), e);
        MarkerError::IoError(format!("Failed to load {}", what))
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        error!("Invalid JSON in {} file {}: {}", what, path.display(), e);
        MarkerError::InvalidJson(format!("Failed to parse {}", what))
    })
}

/// Validates every question and rejects duplicate ids.
pub fn validate_quiz(questions: &[Question]) -> Result<(), MarkerError> {
    let mut seen = HashSet::new();
    for question in questions {
        question.validate()?;
        if !seen.insert(question.id.as_str()) {
            return Err(MarkerError::DuplicateQuestion(question.id.clone()));
        }
    }
    Ok(())
}

/// Loads and validates the quiz at `path`.
pub fn load_quiz(path: &Path) -> Result<Vec<Question>, MarkerError> {
    let quiz: Quiz = read_json(path, "quiz")?;
    validate_quiz(&quiz.questions)?;
    Ok(quiz.questions)
}

/// Loads the captured responses at `path`.
pub fn load_responses(path: &Path) -> Result<Vec<Response>, MarkerError> {
    let sheet: ResponseSheet = read_json(path, "responses")?;
    Ok(sheet.responses)
}
