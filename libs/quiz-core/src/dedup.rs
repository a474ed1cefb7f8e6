//! Deduplication over generalized record identity.
//!
//! Records with the same question wording but a different answer key are
//! distinct items and survive unification.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::record::Record;

/// Counts over a parsed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupReport {
    pub total: usize,
    pub unique: usize,
    /// Identities that occur more than once.
    pub repeated: usize,
}

/// One representative per identity that occurs more than once, ordered by
/// the position of its first repeat.
pub fn duplicates(records: &[Record]) -> Vec<Record> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dup = Vec::new();

    for record in records {
        if !seen.insert(record) && reported.insert(record) {
            dup.push(record.clone());
        }
    }

    dup
}

/// Keep the first occurrence of each identity, preserving input order.
pub fn unify<I>(records: I) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}

/// Count totals, unique identities and repeated identities, and log them.
pub fn dedup_report(records: &[Record]) -> DedupReport {
    let unique: HashSet<&Record> = records.iter().collect();
    let report = DedupReport {
        total: records.len(),
        unique: unique.len(),
        repeated: duplicates(records).len(),
    };
    info!(
        "Total parsed: {}, unique {}, appears multiple times: {}",
        report.total, report.unique, report.repeated
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(question: &str, answers: &[(&str, bool)]) -> Record {
        let mut builder = Record::builder(question);
        for (variant, correct) in answers {
            builder.add_one_answer(variant, *correct);
        }
        builder.build()
    }

    fn batch() -> Vec<Record> {
        vec![
            record("First?", &[("a", true), ("b", false)]),
            record("Second", &[("c", true)]),
            record("first", &[("B", false), ("A", true)]),
            record("Second.", &[("c", true)]),
            record("FIRST", &[("a.", true), ("b", false)]),
            record("Third", &[("d", false)]),
        ]
    }

    #[test]
    fn duplicates_lists_each_group_once() {
        let dup = duplicates(&batch());
        assert_eq!(dup.len(), 2);
        assert_eq!(dup[0].question(), "first");
        assert_eq!(dup[1].question(), "Second.");
    }

    #[test]
    fn duplicates_empty_for_unique_batch() {
        let records = vec![record("A", &[("x", true)]), record("B", &[("x", true)])];
        assert!(duplicates(&records).is_empty());
    }

    #[test]
    fn unify_keeps_first_occurrence_in_order() {
        let input = batch();
        let unified = unify(input.clone());
        assert!(unified.len() < input.len());
        let questions: Vec<_> = unified.iter().map(Record::question).collect();
        assert_eq!(questions, vec!["First?", "Second", "Third"]);
    }

    #[test]
    fn unify_is_idempotent() {
        let once = unify(batch());
        let twice = unify(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn different_answer_key_is_not_a_duplicate() {
        let records = vec![
            record("Same wording", &[("a", true), ("b", false)]),
            record("Same wording", &[("a", false), ("b", true)]),
        ];
        assert!(duplicates(&records).is_empty());
        assert_eq!(unify(records).len(), 2);
    }

    #[test]
    fn report_counts_batch() {
        let report = dedup_report(&batch());
        assert_eq!(
            report,
            DedupReport {
                total: 6,
                unique: 3,
                repeated: 2,
            }
        );
    }
}
