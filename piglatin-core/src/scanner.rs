//! Phrase Scanner: whole phrase to Pig Latin
//!
//! Word runs are translated one at a time; every other character is copied
//! to the output at its original position.

use crate::error::{ensure_not_blank, Result};
use crate::segment::{segments, Segment};
use crate::word::{transform, VOWEL_SUFFIX};

const PHRASE_ARG: &str = "phrase";

/// Translate a phrase to Pig Latin, preserving punctuation and spacing
///
/// # Examples
///
/// ```
/// use piglatin_core::translate_to_pig_latin;
///
/// assert_eq!(
///     translate_to_pig_latin("Smile, Glove!").unwrap(),
///     "Ilesmay, Oveglay!"
/// );
/// assert!(translate_to_pig_latin("   ").is_err());
/// ```
pub fn translate_to_pig_latin(phrase: &str) -> Result<String> {
    ensure_not_blank(phrase, PHRASE_ARG)?;

    // Each word grows by at most the longer suffix.
    let mut out = String::with_capacity(phrase.len() + phrase.len() / 2 * VOWEL_SUFFIX.len());
    for segment in segments(phrase) {
        match segment {
            Segment::Word(word) => out.push_str(&transform(word.text(), word.is_capitalized())),
            Segment::Separator { text, .. } => out.push_str(text),
        }
    }

    Ok(out)
}
