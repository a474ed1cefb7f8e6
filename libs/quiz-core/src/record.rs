//! Uniform quiz record and its builder.
//!
//! Parsers accumulate answers on a [`RecordBuilder`]; [`RecordBuilder::build`]
//! freezes it into a [`Record`] whose generalized forms are computed once and
//! used for equality and hashing. A `Record` has no mutating methods, so it
//! is safe to keep in hashed collections.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RecordError;
use crate::identity::{generalize, generalize_answers, trim_variant, LooseKey};

/// One answer variant with its correctness flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub variant: String,
    pub correct: bool,
}

/// Mutable record under construction.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    question: String,
    answers: Vec<Answer>,
    image_path: String,
}

impl RecordBuilder {
    /// Start a record for `question`.
    pub fn new(question: impl Into<String>) -> Self {
        let question = question.into();
        if question.is_empty() {
            warn!("empty question added");
        }
        Self {
            question,
            answers: Vec::new(),
            image_path: String::new(),
        }
    }

    /// Add one variant-correctness pair.
    ///
    /// A variant that is already present keeps its position. A variant
    /// already marked correct is never downgraded to incorrect.
    pub fn add_one_answer(&mut self, variant: &str, correct: bool) -> &mut Self {
        let variant = trim_variant(variant);
        match self.answers.iter_mut().find(|a| a.variant == variant) {
            Some(existing) => {
                warn!(
                    question = %self.question,
                    variant,
                    "question already has this variant"
                );
                if existing.correct {
                    warn!(
                        question = %self.question,
                        "duplicated variant marked as true previously, refusing to mark it as false"
                    );
                } else {
                    existing.correct = correct;
                }
            }
            None => self.answers.push(Answer {
                variant: variant.to_string(),
                correct,
            }),
        }
        self
    }

    /// Add variants paired with correctness flags.
    ///
    /// Variants without a flag are added as incorrect, so `[false]` marks a
    /// whole list as unknown. More flags than variants is rejected before
    /// anything is added.
    pub fn add_multiple_answers<S: AsRef<str>>(
        &mut self,
        variants: &[S],
        corrects: &[bool],
    ) -> Result<&mut Self, RecordError> {
        if corrects.len() > variants.len() {
            return Err(RecordError::InsufficientChoices {
                question: self.question.clone(),
                variants: variants.len(),
                flags: corrects.len(),
            });
        }
        for (idx, variant) in variants.iter().enumerate() {
            let correct = corrects.get(idx).copied().unwrap_or(false);
            self.add_one_answer(variant.as_ref(), correct);
        }
        Ok(self)
    }

    /// Set the image attached to the question.
    pub fn add_image_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.image_path = path.into();
        self
    }

    /// Order variants by their text.
    pub fn sort_answers(&mut self) -> &mut Self {
        self.answers.sort_by(|a, b| a.variant.cmp(&b.variant));
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Freeze the record and compute its comparison forms.
    pub fn build(self) -> Record {
        let question_generalized = generalize(&self.question);
        let answers_generalized = generalize_answers(
            self.answers.iter().map(|a| (a.variant.as_str(), a.correct)),
        );
        Record {
            question: self.question,
            answers: self.answers,
            image_path: self.image_path,
            question_generalized,
            answers_generalized,
        }
    }
}

/// A frozen quiz item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct Record {
    question: String,
    answers: Vec<Answer>,
    image_path: String,
    #[serde(skip_serializing)]
    question_generalized: String,
    #[serde(skip_serializing)]
    answers_generalized: BTreeMap<String, bool>,
}

/// Serialized shape of a record; replayed through the builder on load.
#[derive(Deserialize)]
struct RawRecord {
    question: String,
    #[serde(default)]
    answers: Vec<Answer>,
    #[serde(default)]
    image_path: String,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        let mut builder = RecordBuilder::new(raw.question);
        for answer in &raw.answers {
            builder.add_one_answer(&answer.variant, answer.correct);
        }
        builder.add_image_path(raw.image_path);
        builder.build()
    }
}

impl Record {
    /// Start building a record for `question`.
    pub fn builder(question: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(question)
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Variant-correctness pairs in insertion order.
    pub fn answers(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.answers.iter().map(|a| (a.variant.as_str(), a.correct))
    }

    /// Variants marked correct, in insertion order.
    pub fn correct(&self) -> impl Iterator<Item = &str> + '_ {
        self.answers
            .iter()
            .filter(|a| a.correct)
            .map(|a| a.variant.as_str())
    }

    pub fn image_path(&self) -> Option<&str> {
        if self.image_path.is_empty() {
            None
        } else {
            Some(&self.image_path)
        }
    }

    /// True if at least one variant is marked correct.
    pub fn is_answered(&self) -> bool {
        self.answers.iter().any(|a| a.correct)
    }

    pub fn question_generalized(&self) -> &str {
        &self.question_generalized
    }

    pub fn answers_generalized(&self) -> &BTreeMap<String, bool> {
        &self.answers_generalized
    }

    /// Key matching this record regardless of correctness flags and image.
    pub fn loose_key(&self) -> LooseKey {
        LooseKey {
            question: self.question_generalized.clone(),
            variants: self.answers_generalized.keys().cloned().collect(),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.question_generalized == other.question_generalized
            && self.image_path == other.image_path
            && self.answers_generalized == other.answers_generalized
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.question_generalized.hash(state);
        self.image_path.hash(state);
        self.answers_generalized.hash(state);
    }
}

/// Canonical MyTestX rendering:
///
/// ```text
/// # Question
/// @ image.jpg
/// + Right answer
/// - Wrong answer
/// ```
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.question)?;
        if let Some(path) = self.image_path() {
            writeln!(f, "@ {}", path)?;
        }
        for answer in &self.answers {
            let mark = if answer.correct { '+' } else { '-' };
            writeln!(f, "{} {}", mark, answer.variant)?;
        }
        Ok(())
    }
}
