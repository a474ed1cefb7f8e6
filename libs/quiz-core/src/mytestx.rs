//! MyTestX plain-text reader and writer.
//!
//! # Format
//! ```text
//! // Comment
//! # Question in one line
//! @ image_path.jpg
//! + Valid
//! - Invalid
//! Invalid too
//! # Next question
//! ```

use crate::error::{ParseError, Result};
use crate::record::{Record, RecordBuilder};

/// Parse MyTestX content into records.
pub fn parse(content: &str) -> Result<Vec<Record>> {
    let mut parser = Parser::new();

    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }

    Ok(parser.finalize())
}

/// Render records in canonical form, separated by an empty line.
pub fn render(records: &[Record]) -> String {
    records
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

enum LineType<'a> {
    Question(&'a str),
    Image(&'a str),
    Answer(&'a str, bool),
    Skip,
}

struct Parser {
    current: Option<RecordBuilder>,
    records: Vec<Record>,
}

impl Parser {
    fn new() -> Self {
        Self {
            current: None,
            records: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        let line = line.replace('\t', " ");
        match Self::parse_line(&line) {
            LineType::Question(text) => {
                if let Some(done) = self.current.replace(RecordBuilder::new(text)) {
                    self.records.push(done.build());
                }
            }
            LineType::Image(path) => {
                self.current
                    .as_mut()
                    .ok_or(ParseError::OrphanImage { line: line_num })?
                    .add_image_path(path);
            }
            LineType::Answer(variant, correct) => {
                self.current
                    .as_mut()
                    .ok_or(ParseError::OrphanAnswer { line: line_num })?
                    .add_one_answer(variant, correct);
            }
            LineType::Skip => {}
        }
        Ok(())
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with("//") {
            LineType::Skip
        } else if let Some(rest) = trimmed.strip_prefix('#') {
            LineType::Question(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix('@') {
            LineType::Image(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            LineType::Answer(rest.trim(), true)
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            LineType::Answer(rest.trim(), false)
        } else {
            LineType::Answer(trimmed, false)
        }
    }

    fn finalize(mut self) -> Vec<Record> {
        if let Some(done) = self.current.take() {
            self.records.push(done.build());
        }
        self.records
    }
}
