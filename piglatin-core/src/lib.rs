//! English to Pig Latin translation
//!
//! The crate has two layers:
//! - **Word Transformer** ([`word_to_pig_latin`]): rewrites one word run by its
//!   leading vowel/consonant pattern.
//! - **Phrase Scanner** ([`translate_to_pig_latin`]): splits a phrase into word
//!   runs and separators ([`segments`]), translates the runs and copies
//!   everything else through unchanged.
//!
//! Letter, vowel and case handling is ASCII-only, so output never depends on
//! the host locale. All functions are pure and safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use piglatin_core::{translate_to_pig_latin, word_to_pig_latin};
//!
//! assert_eq!(word_to_pig_latin("Smile").unwrap(), "Ilesmay");
//! assert_eq!(
//!     translate_to_pig_latin("Eat an apple, Glove!").unwrap(),
//!     "Eatyay anyay appleyay, Oveglay!"
//! );
//! ```

pub mod classify;
pub mod error;
pub mod scanner;
pub mod segment;
pub mod word;

pub use classify::{classify, is_vowel, is_word_char, CharClass, APOSTROPHE};
pub use error::{Result, TranslateError};
pub use scanner::translate_to_pig_latin;
pub use segment::{segments, Segment, Segments, Word};
pub use word::{word_to_pig_latin, CONSONANT_SUFFIX, VOWEL_SUFFIX};
