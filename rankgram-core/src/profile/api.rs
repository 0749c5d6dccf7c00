//! Public API for building profiles.

use tracing::{debug, debug_span, warn};

use crate::profile::occurrence::OccurrenceCounter;
use crate::profile::rank::{build_rank_map_with_limit, into_rank_map};
use crate::profile::stats::ProfileStats;
use crate::profile::types::ProfileAnalyzer;
use rankgram_types::{
    OccurrenceMap, Profile, ProfileConfig, ProfileError, RankMap, Result, DEFAULT_GRAM_DEPTH,
};

impl ProfileAnalyzer {
    /// Counts every gram of `text` up to the configured depth.
    pub fn occurrences(&self, text: &str) -> OccurrenceMap {
        let mut counter = OccurrenceCounter::new(self.config.gram_depth);
        counter.add_text(text);
        counter.finish()
    }

    /// Ranks `occurrences`, truncated to the configured profile size.
    pub fn ranks(&self, occurrences: &OccurrenceMap) -> RankMap {
        build_rank_map_with_limit(occurrences, self.config.max_profile_size)
    }

    /// Builds the rank profile of `text` under `name`.
    ///
    /// Never fails: empty text gives an empty profile. The input size limit
    /// is not enforced here; see [`ProfileAnalyzer::try_analyze`].
    pub fn analyze(&self, text: &str, name: &str) -> Profile {
        self.analyze_with_stats(text, name).0
    }

    /// Builds the rank profile of `text` and reports what the pipeline saw.
    pub fn analyze_with_stats(&self, text: &str, name: &str) -> (Profile, ProfileStats) {
        let _span = debug_span!(
            "analyze",
            profile = name,
            depth = self.config.gram_depth,
            bytes = text.len()
        )
        .entered();

        let mut counter = OccurrenceCounter::new(self.config.gram_depth);
        counter.add_text(text);

        let tokens = counter.tokens_seen();
        let total_occurrences = counter.total_occurrences();
        let occurrences = counter.finish();
        let distinct_grams = occurrences.len();

        let ranks = into_rank_map(occurrences, self.config.max_profile_size);

        let stats = ProfileStats {
            tokens,
            distinct_grams,
            total_occurrences,
            retained_grams: ranks.len(),
        };

        if stats.truncated() {
            debug!(
                kept = stats.retained_grams,
                dropped = stats.dropped_grams(),
                "profile truncated to size cap"
            );
        }
        debug!(%stats, "built rank profile");

        (Profile::new(name, ranks), stats)
    }

    /// Builds the rank profile of `text`, enforcing the configured input size limit.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InputTooLarge`] if `text` is longer than
    /// `max_input_bytes`.
    pub fn try_analyze(&self, text: &str, name: &str) -> Result<Profile> {
        if let Some(max_size) = self.config.max_input_bytes {
            if text.len() > max_size {
                warn!(
                    profile = name,
                    size = text.len(),
                    max_size,
                    "rejecting oversized input"
                );
                return Err(ProfileError::InputTooLarge {
                    size: text.len(),
                    max_size,
                });
            }
        }
        Ok(self.analyze(text, name))
    }
}

/// Builds the rank profile of `text` with the default gram depth and profile size.
pub fn analyze(text: &str, name: &str) -> Profile {
    analyze_with_depth(text, name, DEFAULT_GRAM_DEPTH)
}

/// Builds the rank profile of `text` with grams up to `gram_depth + 1` runes.
///
/// A depth of `0` is degenerate and produces a profile of single runes. The
/// gram length saturates, so a depth past any token's length keeps every
/// gram length the text has instead of overflowing.
pub fn analyze_with_depth(text: &str, name: &str, gram_depth: usize) -> Profile {
    ProfileAnalyzer::new(ProfileConfig::new().with_gram_depth(gram_depth)).analyze(text, name)
}
