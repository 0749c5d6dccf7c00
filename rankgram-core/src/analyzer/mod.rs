//! Text analysis pipeline.
//!
//! This module provides the stages that turn raw text into grams:
//! - **Normalizer**: Strips punctuation, digits and newlines
//! - **Tokenizer**: Splits normalized text on spaces
//! - **Runes**: Rune ↔ byte offset conversion
//! - **Ngram**: Extracts padded, rune-safe grams of every length up to `depth + 1`

pub mod ngram;
pub mod normalizer;
pub mod runes;
pub mod tokenizer;

pub use ngram::GramGenerator;
pub use normalizer::TextNormalizer;
pub use runes::RuneBoundaries;
pub use tokenizer::Tokenizer;
