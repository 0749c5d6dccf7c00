//! Rune-safe n-gram extraction.
//!
//! Every token is cut into grams of each length from 1 up to `depth + 1`
//! runes. Grams are byte slices of the token, but their edges always fall on
//! rune boundaries, so a gram is never a partial UTF-8 sequence.
//!
//! ## Padding
//!
//! A token whose first rune is a single byte is wrapped in one space on each
//! side before slicing, so word starts and ends show up as grams like `" t"`
//! and `"e "`. Tokens that start with a multi-byte rune are sliced unpadded.
//! The lone-space gram produced at either pad is never emitted.
//!
//! ```
//! use rankgram_core::analyzer::ngram::extract_grams;
//!
//! let mut grams = Vec::new();
//! extract_grams("ab", 1, |g| grams.push(g.to_string()));
//! assert_eq!(grams, [
//!     "a", "b",                    // length 1
//!     " a", "ab", "b ",            // length 2
//! ]);
//! ```

use crate::analyzer::runes::{byte_offset, RuneBoundaries};
use rankgram_types::gram_len_for_depth;

/// Returns `true` if `token` gets boundary padding.
///
/// That is the case when its second rune starts at byte 1, i.e. its first
/// rune is one byte long. A one-rune token counts when that rune is one byte.
#[inline]
#[must_use]
pub fn should_pad(token: &str) -> bool {
    byte_offset(token.as_bytes(), 1) == 1
}

/// Reusable gram generator for a fixed gram depth.
///
/// Keeps the padded-token buffer and the rune boundary table between tokens,
/// so generating grams for a whole text allocates only when a token outgrows
/// the previous ones.
#[derive(Debug, Clone)]
pub struct GramGenerator {
    max_gram_len: usize,
    padded: String,
    boundaries: RuneBoundaries,
}

impl GramGenerator {
    /// Creates a generator emitting grams of length `1..=gram_depth + 1`.
    ///
    /// The upper length saturates, so `usize::MAX` emits every length.
    pub fn new(gram_depth: usize) -> Self {
        Self {
            max_gram_len: gram_len_for_depth(gram_depth),
            padded: String::with_capacity(32),
            boundaries: RuneBoundaries::default(),
        }
    }

    /// Longest gram emitted, in runes.
    #[inline(always)]
    #[must_use]
    pub fn max_gram_len(&self) -> usize {
        self.max_gram_len
    }

    /// Emits every gram of `token`, shortest lengths first and left to right
    /// within a length. Empty tokens emit nothing.
    pub fn generate<F>(&mut self, token: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        if token.is_empty() {
            return;
        }

        self.padded.clear();
        if should_pad(token) {
            self.padded.push(' ');
            self.padded.push_str(token);
            self.padded.push(' ');
        } else {
            self.padded.push_str(token);
        }
        self.boundaries.rebuild(&self.padded);

        let text = self.padded.as_str();
        let bounds = &self.boundaries;
        let rune_len = bounds.rune_len();
        let byte_len = bounds.byte_len();

        for n in 1..=self.max_gram_len {
            if n > rune_len {
                break;
            }
            for p in 0..=rune_len - n {
                let start = bounds.byte_offset(p);
                let end = bounds.byte_offset(p + n);
                if start == end || end > byte_len || start >= byte_len {
                    break;
                }

                let gram = &text[start..end];
                if gram == " " {
                    continue;
                }
                emit(gram);
            }
        }
    }
}

/// Emits every gram of `token` up to length `gram_depth + 1`.
///
/// Convenience wrapper over [`GramGenerator`] for one-off tokens.
pub fn extract_grams<F>(token: &str, gram_depth: usize, emit: F)
where
    F: FnMut(&str),
{
    GramGenerator::new(gram_depth).generate(token, emit);
}

/// Number of grams [`extract_grams`] emits for `token`.
pub fn count_grams(token: &str, gram_depth: usize) -> usize {
    let mut count = 0usize;
    extract_grams(token, gram_depth, |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(token: &str, depth: usize) -> Vec<String> {
        let mut out = Vec::new();
        extract_grams(token, depth, |g| out.push(g.to_string()));
        out
    }

    #[test]
    fn unigrams_of_padded_word() {
        assert_eq!(grams("the", 0), ["t", "h", "e"]);
    }

    #[test]
    fn bigrams_include_word_edges() {
        assert_eq!(
            grams("the", 1),
            ["t", "h", "e", " t", "th", "he", "e "]
        );
    }

    #[test]
    fn full_window_covers_padded_token() {
        // " ab " has 4 runes; the 4-gram is the whole padded token
        let out = grams("ab", 3);
        assert_eq!(
            out,
            ["a", "b", " a", "ab", "b ", " ab", "ab ", " ab "]
        );
    }

    #[test]
    fn lengths_past_token_emit_nothing() {
        assert_eq!(grams("a", 5), ["a", " a", "a ", " a "]);
    }

    #[test]
    fn empty_token_emits_nothing() {
        assert!(grams("", 5).is_empty());
        assert_eq!(count_grams("", 5), 0);
    }

    #[test]
    fn multibyte_lead_skips_padding() {
        assert!(!should_pad("über"));
        assert_eq!(grams("über", 0), ["ü", "b", "e", "r"]);
        assert_eq!(grams("über", 1), ["ü", "b", "e", "r", "üb", "be", "er"]);
    }

    #[test]
    fn single_multibyte_rune_token() {
        assert!(!should_pad("é"));
        assert_eq!(grams("é", 2), ["é"]);
    }

    #[test]
    fn ascii_lead_pads() {
        assert!(should_pad("a"));
        assert!(should_pad("café"));
        assert!(!should_pad("日本"));
    }

    #[test]
    fn multibyte_inside_padded_token() {
        assert_eq!(grams("café", 0), ["c", "a", "f", "é"]);
        assert_eq!(
            grams("café", 1),
            ["c", "a", "f", "é", " c", "ca", "af", "fé", "é "]
        );
    }

    #[test]
    fn grams_are_whole_runes() {
        for token in ["café", "naïve", "日本語", "a🌍b", "Ωmega", "żółw"] {
            let mut generator = GramGenerator::new(4);
            generator.generate(token, |g| {
                assert!(!g.is_empty());
                assert!(token.contains(g.trim_matches(' ')) || g.trim().is_empty());
            });
        }
    }

    #[test]
    fn lone_space_never_emitted() {
        let out = grams("hello", 5);
        assert!(out.iter().all(|g| g != " "));
    }

    #[test]
    fn count_grams_for_padded_token() {
        // "the" padded to 5 runes: lengths 1..=3 give 3 + 4 + 3 grams
        assert_eq!(count_grams("the", 2), 10);
    }

    #[test]
    fn generator_is_reusable_across_tokens() {
        let mut generator = GramGenerator::new(1);
        assert_eq!(generator.max_gram_len(), 2);

        let mut first = Vec::new();
        generator.generate("日本語", |g| first.push(g.to_string()));
        assert_eq!(first, ["日", "本", "語", "日本", "本語"]);

        let mut second = Vec::new();
        generator.generate("ok", |g| second.push(g.to_string()));
        assert_eq!(second, ["o", "k", " o", "ok", "k "]);
    }

    #[test]
    fn huge_depth_saturates() {
        let generator = GramGenerator::new(usize::MAX);
        assert_eq!(generator.max_gram_len(), usize::MAX);
        assert_eq!(grams("ab", usize::MAX), grams("ab", 3));
    }

    #[test]
    fn replacement_char_is_an_ordinary_rune() {
        // U+FFFD in valid text is a 3-byte rune like any other
        assert_eq!(
            grams("a\u{FFFD}b", 1),
            ["a", "\u{FFFD}", "b", " a", "a\u{FFFD}", "\u{FFFD}b", "b "]
        );
    }

    #[test]
    fn tab_inside_token_is_a_rune() {
        assert_eq!(grams("a\tb", 0), ["a", "\t", "b"]);
    }
}
