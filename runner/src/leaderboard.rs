//! Respondent standings derived from the ledger.

use crate::ledger::Ledger;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// Competition rank: tied respondents share a rank and the next rank is skipped.
    pub rank: usize,
    pub respondent: String,
    pub points: u32,
    /// Answers graded fully correct.
    pub correct: usize,
    /// Answers graded in total.
    pub answered: usize,
}

/// Totals every ledger entry per respondent and ranks them by points.
///
/// Ties are ordered by respondent name and share a rank (1, 1, 3).
pub fn build_leaderboard(ledger: &Ledger) -> Vec<Standing> {
    let mut totals: BTreeMap<&str, (u32, usize, usize)> = BTreeMap::new();
    for entry in ledger.entries() {
        let total = totals.entry(entry.respondent.as_str()).or_default();
        total.0 += entry.result.earned_points;
        total.1 += usize::from(entry.result.is_correct);
        total.2 += 1;
    }

    let mut standings: Vec<Standing> = totals
        .into_iter()
        .map(|(respondent, (points, correct, answered))| Standing {
            rank: 0,
            respondent: respondent.to_string(),
            points,
            correct,
            answered,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.respondent.cmp(&b.respondent))
    });

    let mut previous: Option<u32> = None;
    let mut rank = 0;
    for (index, standing) in standings.iter_mut().enumerate() {
        if previous != Some(standing.points) {
            rank = index + 1;
            previous = Some(standing.points);
        }
        standing.rank = rank;
    }

    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerEntry;
    use chrono::Utc;
    use quiz_marker::types::GradingResult;

    fn entry(respondent: &str, question_id: &str, result: GradingResult) -> LedgerEntry {
        LedgerEntry {
            timestamp: "t".to_string(),
            respondent: respondent.to_string(),
            question_id: question_id.to_string(),
            result,
            possible: 4,
            resolved_answer: vec![],
            feedback: String::new(),
            graded_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_ledger() {
        assert!(build_leaderboard(&Ledger::default()).is_empty());
    }

    #[test]
    fn test_ranking_with_ties() {
        let mut ledger = Ledger::default();
        ledger.record(entry("zulu", "q1", GradingResult::full(4)));
        ledger.record(entry("alpha", "q1", GradingResult::partial(2, 4)));
        ledger.record(entry("alpha", "q2", GradingResult::partial(2, 4)));
        ledger.record(entry("mike", "q1", GradingResult::partial(1, 4)));

        let standings = build_leaderboard(&ledger);
        let order: Vec<(&str, usize, u32)> = standings
            .iter()
            .map(|s| (s.respondent.as_str(), s.rank, s.points))
            .collect();
        assert_eq!(
            order,
            vec![("alpha", 1, 4), ("zulu", 1, 4), ("mike", 3, 1)]
        );

        assert_eq!(standings[0].answered, 2);
        assert_eq!(standings[0].correct, 0);
        assert_eq!(standings[1].correct, 1);
    }
}
