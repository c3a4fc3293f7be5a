//! Word Transformer: single word to Pig Latin
//!
//! A word starting with a vowel keeps its spelling and gains `yay`. Any
//! other word has its leading consonant cluster moved to the end, followed
//! by `ay`; the result is lowercased and re-capitalized when the source
//! word was.

use crate::classify::is_vowel;
use crate::error::{ensure_not_blank, Result};

/// Suffix appended to vowel-initial words
pub const VOWEL_SUFFIX: &str = "yay";

/// Suffix appended after the moved consonant cluster
pub const CONSONANT_SUFFIX: &str = "ay";

const WORD_ARG: &str = "word";

/// Translate a single word to Pig Latin
///
/// # Examples
///
/// ```
/// use piglatin_core::word_to_pig_latin;
///
/// assert_eq!(word_to_pig_latin("apple").unwrap(), "appleyay");
/// assert_eq!(word_to_pig_latin("Glove").unwrap(), "Oveglay");
/// assert!(word_to_pig_latin("  ").is_err());
/// ```
pub fn word_to_pig_latin(word: &str) -> Result<String> {
    ensure_not_blank(word, WORD_ARG)?;
    let capitalized = word.chars().next().is_some_and(|ch| ch.is_ascii_uppercase());

    Ok(transform(word, capitalized))
}

/// Rewrite a non-blank word run; `capitalized` is the casing of its first character
pub(crate) fn transform(word: &str, capitalized: bool) -> String {
    if word.chars().next().is_some_and(is_vowel) {
        let mut out = String::with_capacity(word.len() + VOWEL_SUFFIX.len());
        out.push_str(word);
        out.push_str(VOWEL_SUFFIX);
        return out;
    }

    let lower = word.to_ascii_lowercase();

    // Whole word is the cluster when no vowel is present.
    let split = lower
        .char_indices()
        .find(|&(_, ch)| is_vowel(ch))
        .map_or(lower.len(), |(idx, _)| idx);
    let (cluster, rest) = lower.split_at(split);

    let mut out = String::with_capacity(lower.len() + CONSONANT_SUFFIX.len());
    out.push_str(rest);
    out.push_str(cluster);
    out.push_str(CONSONANT_SUFFIX);

    if capitalized {
        capitalize_first(&mut out);
    }

    out
}

/// Uppercase the first character in place when it is ASCII
fn capitalize_first(s: &mut str) {
    if let Some(head) = s.get_mut(0..1) {
        head.make_ascii_uppercase();
    }
}
