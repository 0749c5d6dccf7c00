//! Gram occurrence counting.

use crate::analyzer::{GramGenerator, TextNormalizer, Tokenizer};
use rankgram_types::OccurrenceMap;

/// Accumulates gram occurrences over one or more texts.
///
/// Runs normalize → tokenize → gram generation and bumps a single map for
/// every gram of every length. Counts are raw frequencies. The normalization
/// buffer and gram scratch space are reused across calls to
/// [`OccurrenceCounter::add_text`].
#[derive(Debug, Clone)]
pub struct OccurrenceCounter {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
    generator: GramGenerator,
    norm_buf: String,
    counts: OccurrenceMap,
    tokens: usize,
}

impl OccurrenceCounter {
    /// Creates a counter generating grams of length `1..=gram_depth + 1`.
    pub fn new(gram_depth: usize) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
            generator: GramGenerator::new(gram_depth),
            norm_buf: String::with_capacity(256),
            counts: OccurrenceMap::default(),
            tokens: 0,
        }
    }

    /// Counts the grams of `text` into the running totals.
    pub fn add_text(&mut self, text: &str) {
        let Self {
            normalizer,
            tokenizer,
            generator,
            norm_buf,
            counts,
            tokens,
        } = self;

        normalizer.normalize_into(text, norm_buf);
        tokenizer.tokenize(norm_buf, |token, _| {
            *tokens += 1;
            generator.generate(token, |gram| record(counts, gram));
        });
    }

    /// Running gram → occurrence totals.
    #[inline(always)]
    #[must_use]
    pub fn counts(&self) -> &OccurrenceMap {
        &self.counts
    }

    /// Number of tokens seen so far, empty tokens included.
    #[inline(always)]
    #[must_use]
    pub fn tokens_seen(&self) -> usize {
        self.tokens
    }

    /// Sum of all occurrence counts.
    #[must_use]
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Consumes the counter and returns the occurrence map.
    pub fn finish(self) -> OccurrenceMap {
        self.counts
    }
}

#[inline]
fn record(counts: &mut OccurrenceMap, gram: &str) {
    match counts.get_mut(gram) {
        Some(count) => *count = count.saturating_add(1),
        None => {
            counts.insert(gram.to_owned(), 1);
        }
    }
}

/// Builds the gram → occurrence map of `text` for grams up to `gram_depth + 1` runes.
pub fn build_occurrence_map(text: &str, gram_depth: usize) -> OccurrenceMap {
    let mut counter = OccurrenceCounter::new(gram_depth);
    counter.add_text(text);
    counter.finish()
}
