//! Streaming Tokenizer Module
//!
//! Splits normalized text into word tokens. It is the second stage of the
//! profile pipeline, taking the output of the normalizer and handing each
//! word to the gram generator.
//!
//! ## What It Does
//!
//! Given normalized input like `"the cat  sat"`, it emits every slice between
//! literal space bytes, together with its position:
//!
//! ```ignore
//! ("the", 0)
//! ("cat", 1)
//! ("", 2)
//! ("sat", 3)
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the original string
//! - **Streaming**: Tokens go to a callback, no intermediate collection
//! - **Fast**: memchr scan for ASCII space (0x20)
//! - **Exact**: No trimming and no dropping of empty tokens, so `n` spaces
//!   always yield `n + 1` tokens. Empty tokens are harmless downstream since
//!   the gram generator ignores them.
//!
//! ## Usage
//!
//! ```rust
//! use rankgram_core::analyzer::tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::new();
//! let mut words = Vec::new();
//! tokenizer.tokenize("hello world", |text, _position| words.push(text));
//! assert_eq!(words, ["hello", "world"]);
//! ```

use core::str;
use memchr::memchr_iter;

/// Streaming tokenizer - splits normalized text on the space byte.
///
/// Only `0x20` separates tokens. Tabs, carriage returns and other whitespace
/// that survived normalization stay inside tokens.
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(text, position)` for every
    /// space-separated slice, empty slices included.
    ///
    /// Position is the 0-based index of the slice.
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, usize),
    {
        let bytes = normalized.as_bytes();
        let mut start = 0usize;
        let mut pos = 0usize;

        for i in memchr_iter(b' ', bytes) {
            // SAFETY: `normalized` is valid UTF-8. We split only on ASCII space (0x20),
            // which is never a continuation byte, so `bytes[start..i]` is always a
            // valid UTF-8 subslice.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
            emit(text, pos);
            pos += 1;
            start = i + 1;
        }

        // SAFETY: `start` is 0 or one past an ASCII space byte.
        let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
        emit(text, pos);
    }

    /// Number of tokens [`Tokenizer::tokenize`] would emit.
    #[inline]
    #[must_use]
    pub fn count_tokens(&self, normalized: &str) -> usize {
        memchr_iter(b' ', normalized.as_bytes()).count() + 1
    }
}
