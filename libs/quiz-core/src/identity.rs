//! Comparison forms of quiz text.
//!
//! Generalized text is only ever used to compare and hash records; display
//! always goes through the raw text kept on [`Record`](crate::Record).

use std::collections::BTreeMap;

/// Characters stripped from both ends of text before comparison.
pub const COMPARE_BOUNDARY: &[char] = &['\n', '\t', ' ', ':', ';', '.', '?'];

/// Characters stripped from both ends of a variant before it becomes a key.
pub const VARIANT_BOUNDARY: &[char] = &[';', ',', '.', ' '];

/// Case-fold `text` and strip [`COMPARE_BOUNDARY`] from both ends.
pub fn generalize(text: &str) -> String {
    text.to_lowercase()
        .trim_matches(COMPARE_BOUNDARY)
        .to_string()
}

/// Trim a raw answer variant the way records store it.
pub(crate) fn trim_variant(variant: &str) -> &str {
    variant.trim_matches(VARIANT_BOUNDARY)
}

/// Generalize every variant of an answer list, keeping its correctness flag.
///
/// Later entries win when two variants collapse to the same generalized text.
pub(crate) fn generalize_answers<'a, I>(answers: I) -> BTreeMap<String, bool>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    answers
        .into_iter()
        .map(|(variant, correct)| (generalize(variant), correct))
        .collect()
}

/// Key used by the solver: generalized question plus the set of offered
/// variants, ignoring correctness flags and image path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LooseKey {
    pub question: String,
    /// Sorted generalized variants.
    pub variants: Vec<String>,
}
