//! Fill unanswered records from a corpus of answered ones.
//!
//! Matching uses [`LooseKey`]: generalized question plus the set of offered
//! variants. Correctness flags and image path are ignored, so a placeholder
//! with every variant marked incorrect still finds its answered twin.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dedup::unify;
use crate::identity::LooseKey;
use crate::record::Record;

/// Counts collected while solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Records passed in to solve.
    pub total: usize,
    /// Distinct identities among them.
    pub unique: usize,
    /// Distinct identities without a correct answer.
    pub unanswered: usize,
    /// Records that already had an answer and passed through.
    pub already_answered: usize,
    /// Placeholders replaced by a corpus record.
    pub found: usize,
}

/// Output of [`solve`]: records in input order plus counts.
#[derive(Debug, Clone)]
pub struct Solved {
    pub records: Vec<Record>,
    pub report: SolveReport,
}

/// Replace every unanswered record of `to_solve` with a matching answered
/// record from `answered`.
///
/// The output has the same length and order as `to_solve`. Unmatched
/// placeholders stay in place, still unanswered. When several answered
/// records share a key, the first one in `answered` wins.
pub fn solve(answered: &[Record], to_solve: &[Record]) -> Solved {
    let corpus = unify(answered.iter().filter(|r| r.is_answered()).cloned());
    let mut index: HashMap<LooseKey, usize> = HashMap::with_capacity(corpus.len());
    for (idx, record) in corpus.iter().enumerate() {
        index.entry(record.loose_key()).or_insert(idx);
    }

    let unique: HashSet<&Record> = to_solve.iter().collect();
    let mut report = SolveReport {
        total: to_solve.len(),
        unique: unique.len(),
        unanswered: unique.iter().filter(|r| !r.is_answered()).count(),
        ..SolveReport::default()
    };
    info!(
        "Solving: {}, unique {}, without answer {}",
        report.total, report.unique, report.unanswered
    );

    let records = to_solve
        .iter()
        .map(|record| {
            if record.is_answered() {
                report.already_answered += 1;
                return record.clone();
            }
            match index.get(&record.loose_key()) {
                Some(&idx) => {
                    report.found += 1;
                    corpus[idx].clone()
                }
                None => record.clone(),
            }
        })
        .collect();

    info!("{}/{} tests found", report.found, report.unanswered);
    Solved { records, report }
}
