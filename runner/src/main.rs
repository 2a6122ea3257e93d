use anyhow::{Context, Result};
use common::config::Config;
use common::logger::init_logging;
use quiz_runner::ledger::Ledger;
use quiz_runner::loader::{load_quiz, load_responses};
use quiz_runner::runner::{GradingRunner, RunOutcome, RunReport};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration and initialize logging
    let config = Config::init(".env");
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    info!("Starting {}", config.project_name);

    let questions = load_quiz(&config.quiz_path)
        .with_context(|| format!("loading quiz from {}", config.quiz_path.display()))?;
    let responses = load_responses(&config.responses_path).with_context(|| {
        format!("loading responses from {}", config.responses_path.display())
    })?;
    let ledger = Ledger::load(&config.ledger_path)
        .with_context(|| format!("loading ledger from {}", config.ledger_path.display()))?;

    info!(
        "Loaded {} questions, {} responses, {} ledger entries",
        questions.len(),
        responses.len(),
        ledger.len()
    );

    let runner = GradingRunner::new(questions, ledger, config.lock_wait());
    let summary = match runner.run(&responses).await {
        RunOutcome::Completed(summary) => summary,
        RunOutcome::Skipped => return Ok(()),
    };

    let ledger = runner.ledger_snapshot().await;
    ledger
        .save(&config.ledger_path)
        .with_context(|| format!("saving ledger to {}", config.ledger_path.display()))?;

    let report = RunReport::new(summary, &ledger);
    report
        .write(&config.report_path)
        .with_context(|| format!("writing report to {}", config.report_path.display()))?;

    for standing in &report.leaderboard {
        info!(
            "#{} {}: {} points ({} of {} correct)",
            standing.rank, standing.respondent, standing.points, standing.correct, standing.answered
        );
    }

    Ok(())
}
