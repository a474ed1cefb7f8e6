//! Core quiz library shared by the batch tools.
//!
//! Provides:
//! - Uniform quiz record with exact and generalized identity
//! - Deduplication over generalized identity
//! - Solving unanswered records against an answered corpus
//! - Crib (cheat sheet) shortening
//! - Canonical MyTestX plain-text reader and writer

pub mod crib;
pub mod dedup;
pub mod error;
pub mod identity;
pub mod mytestx;
pub mod record;
pub mod solve;

pub use crib::{min_diff, short, sort_by_display, to_crib};
pub use dedup::{dedup_report, duplicates, unify, DedupReport};
pub use error::{ParseError, RecordError, Result};
pub use identity::{generalize, LooseKey};
pub use mytestx::{parse, render};
pub use record::{Answer, Record, RecordBuilder};
pub use solve::{solve, SolveReport, Solved};
