//! Crib export: one shortened line per question.
//!
//! Words longer than [`MAX_WORD`] characters are cut down to their first
//! three and last two characters. [`min_diff`] keeps just enough words of a
//! string to tell it apart from the string sorted right before it.

use crate::record::Record;

/// Words up to this many characters are never shortened.
pub const MAX_WORD: usize = 7;

fn shorten_word(word: &str, count_stripped: bool) -> String {
    let len = word.chars().count();
    if len <= MAX_WORD {
        return word.to_string();
    }
    let head: String = word.chars().take(3).collect();
    let tail: String = word.chars().skip(len - 2).collect();
    if count_stripped {
        format!("{}{}{}", head, len - 5, tail)
    } else {
        format!("{}-{}", head, tail)
    }
}

/// Shorten every long word and join with single spaces.
///
/// ```
/// use quiz_core::short;
///
/// let words: Vec<_> = "Something wrong with compatibility regressions.".split_whitespace().collect();
/// assert_eq!(short(&words, false), "Som-ng wrong with com-ty reg-s.");
/// assert_eq!(short(&words, true), "Som4ng wrong with com8ty reg7s.");
/// ```
pub fn short<S: AsRef<str>>(words: &[S], count_stripped: bool) -> String {
    words
        .iter()
        .map(|w| shorten_word(w.as_ref(), count_stripped))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shortest distinguishable renderings of an already sorted string list.
///
/// A string that contains its predecessor keeps one word more than the
/// predecessor has; everything else is shortened whole. The input must be
/// sorted case-insensitively; this is not checked.
pub fn min_diff<S: AsRef<str>>(sorted: &[S]) -> Vec<String> {
    let mut remaining: Vec<&str> = sorted.iter().map(|s| s.as_ref()).collect();
    let mut out = Vec::with_capacity(remaining.len());

    while let Some(last) = remaining.pop() {
        let words: Vec<&str> = last.split_whitespace().collect();
        let keep = match remaining.last() {
            Some(&prelast) if last.contains(prelast) => {
                (prelast.split_whitespace().count() + 1).min(words.len())
            }
            _ => words.len(),
        };
        out.push(short(&words[..keep], false));
    }

    out.reverse();
    out
}

/// Sort records case-insensitively by their canonical rendering.
pub fn sort_by_display(records: &mut [Record]) {
    records.sort_by_cached_key(|r| r.to_string().to_lowercase());
}

/// Render records as crib lines `"<question>: <answer>, <answer>"`.
///
/// Records must already be sorted, see [`sort_by_display`].
pub fn to_crib(records: &[Record]) -> String {
    let questions: Vec<&str> = records.iter().map(Record::question).collect();
    let mut crib = String::new();
    for (question, record) in min_diff(&questions).iter().zip(records) {
        let mut correct: Vec<&str> = record.correct().collect();
        correct.sort_unstable();
        crib.push_str(question);
        crib.push_str(": ");
        crib.push_str(&min_diff(&correct).join(", "));
        crib.push('\n');
    }
    if crib.is_empty() {
        crib.push('\n');
    }
    crib
}
