//! Character classification for word-run detection
//!
//! Classification is locale independent: letters are ASCII `a-z`/`A-Z`,
//! vowels are the five ASCII vowels in either case. The right single
//! quotation mark (U+2019) is word-internal punctuation.

/// Right single quotation mark, kept inside word runs (`don’t`)
pub const APOSTROPHE: char = '\u{2019}';

/// Classification of characters for phrase scanning
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII alphabetic character
    Letter,
    /// U+2019, extends a word run without being a letter
    Apostrophe,
    /// Anything else; passed through unchanged
    Separator,
}

impl CharClass {
    /// Whether characters of this class belong to a word run
    pub fn is_word_char(self) -> bool {
        matches!(self, CharClass::Letter | CharClass::Apostrophe)
    }
}

/// Classify a character
pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii_alphabetic() {
        CharClass::Letter
    } else if ch == APOSTROPHE {
        CharClass::Apostrophe
    } else {
        CharClass::Separator
    }
}

/// Check if character is part of a word run
pub fn is_word_char(ch: char) -> bool {
    classify(ch).is_word_char()
}

/// Check if character is one of `a e i o u`, case-insensitively
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
