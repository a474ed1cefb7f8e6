//! Batch pipeline: load, report, solve, filter, unify, sort, export.

use std::fs;
use std::path::Path;

use quiz_core::{
    dedup_report, duplicates, mytestx, solve, sort_by_display, to_crib, unify, DedupReport,
    Record, SolveReport,
};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::loader::load_files;

/// Result of a batch run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub records: Vec<Record>,
    pub dedup: DedupReport,
    pub duplicates: Vec<Record>,
    pub solve: Option<SolveReport>,
}

/// Apply the configured transformations to already loaded records.
///
/// With `to_solve`, the output holds only the solved records.
pub fn process(config: &Config, records: Vec<Record>, to_solve: Option<Vec<Record>>) -> Outcome {
    let dedup = dedup_report(&records);
    let dup = duplicates(&records);

    let (mut records, solve_report) = match to_solve {
        Some(to_solve) => {
            info!("Output will contain only tests passed to solve");
            let solved = solve(&records, &to_solve);
            (solved.records, Some(solved.report))
        }
        None => (records, None),
    };

    if config.has_answer {
        records.retain(Record::is_answered);
    }
    if config.unify {
        records = unify(records);
    }
    if config.sort || config.to_crib.is_some() {
        sort_by_display(&mut records);
    }

    Outcome {
        records,
        dedup,
        duplicates: dup,
        solve: solve_report,
    }
}

/// Load inputs, process them and write every configured output.
pub fn execute(config: &Config) -> Result<Outcome> {
    let records = load_files(&config.inputs)?;
    let to_solve = if config.solve.is_empty() {
        None
    } else {
        Some(load_files(&config.solve)?)
    };

    let outcome = process(config, records, to_solve);

    if config.duplicates {
        for record in &outcome.duplicates {
            println!("{}", record);
        }
    }
    if config.print {
        println!("{}", mytestx::render(&outcome.records));
    }
    if let Some(path) = &config.to_mytestx {
        write_crlf(path, &mytestx::render(&outcome.records))?;
    }
    if let Some(path) = &config.to_crib {
        write_crlf(path, &to_crib(&outcome.records))?;
    }

    Ok(outcome)
}

/// Write text with `\r\n` line endings.
fn write_crlf(path: &Path, text: &str) -> Result<()> {
    info!(path = %path.display(), "writing");
    fs::write(path, text.replace('\n', "\r\n")).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Vec<Record> {
        mytestx::parse(text).unwrap()
    }

    #[test]
    fn test_process_reports_duplicates() {
        let records = parse("# A\n+ x\n# a.\n+ X\n# B\n- y");
        let outcome = process(&Config::default(), records, None);
        assert_eq!(outcome.dedup.total, 3);
        assert_eq!(outcome.dedup.unique, 2);
        assert_eq!(outcome.duplicates.len(), 1);
        assert_eq!(outcome.records.len(), 3);
    }

    #[test]
    fn test_process_filters_unifies_and_sorts() {
        let config = Config {
            has_answer: true,
            unify: true,
            sort: true,
            ..Config::default()
        };
        let records = parse("# b\n+ x\n# A\n+ y\n# B.\n+ X\n# c\n- z");
        let outcome = process(&config, records, None);
        let questions: Vec<_> = outcome.records.iter().map(Record::question).collect();
        assert_eq!(questions, vec!["A", "b"]);
    }

    #[test]
    fn test_process_solve_replaces_output() {
        let answered = parse("# Q1\n+ a\n- b\n# Q2\n+ c");
        let to_solve = parse("# q1\n- b\n- a\n# Q3\n- d");
        let outcome = process(&Config::default(), answered, Some(to_solve));
        let report = outcome.solve.unwrap();
        assert_eq!(report.found, 1);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].question(), "Q1");
        assert_eq!(outcome.records[1].question(), "Q3");
    }
}
