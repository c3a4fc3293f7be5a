//! Phrase segmentation into word runs and separators
//!
//! A phrase is split into maximal runs of word characters (ASCII letters
//! and U+2019) and single separator characters. Concatenating the source
//! text of every segment in order reproduces the phrase exactly.

use crate::classify::is_word_char;
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

/// A maximal run of word characters within a phrase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Word<'a> {
    /// Source text of the run
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the run in the phrase
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for runs produced by [`segments`]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the first character is an uppercase ASCII letter
    pub fn is_capitalized(&self) -> bool {
        self.text
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_uppercase())
    }
}

/// One piece of a scanned phrase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A word run, to be transformed
    Word(Word<'a>),
    /// A single non-word character, passed through unchanged
    Separator {
        /// Byte offset in the phrase
        offset: usize,
        /// The character as a slice of the phrase
        text: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// Source text covered by this segment
    pub fn source(&self) -> &'a str {
        match self {
            Segment::Word(word) => word.text(),
            Segment::Separator { text, .. } => text,
        }
    }

    /// Byte offset in the phrase
    pub fn offset(&self) -> usize {
        match self {
            Segment::Word(word) => word.offset(),
            Segment::Separator { offset, .. } => *offset,
        }
    }

    /// Check if this segment is a word run
    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }
}

/// Iterator over the segments of a phrase, see [`segments`]
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    phrase: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let phrase = self.phrase;
        let &(start, ch) = self.chars.peek()?;

        if !is_word_char(ch) {
            self.chars.next();
            return Some(Segment::Separator {
                offset: start,
                text: &phrase[start..start + ch.len_utf8()],
            });
        }

        // Consume the run; a run still open at end of input ends there.
        let mut end = phrase.len();
        while let Some(&(idx, ch)) = self.chars.peek() {
            if !is_word_char(ch) {
                end = idx;
                break;
            }
            self.chars.next();
        }

        Some(Segment::Word(Word {
            text: &phrase[start..end],
            offset: start,
        }))
    }
}

impl FusedIterator for Segments<'_> {}

/// Split a phrase into word runs and separators, in order
///
/// # Examples
///
/// ```
/// use piglatin_core::segments;
///
/// let parts: Vec<&str> = segments("Hi, you!").map(|s| s.source()).collect();
/// assert_eq!(parts, ["Hi", ",", " ", "you", "!"]);
/// ```
pub fn segments(phrase: &str) -> Segments<'_> {
    Segments {
        phrase,
        chars: phrase.char_indices().peekable(),
    }
}
