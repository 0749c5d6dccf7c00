//! Statistics and ProfileStats.

/// A snapshot of what one analysis produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    /// Tokens produced by the tokenizer, empty tokens included.
    pub tokens: usize,
    /// Distinct grams seen before truncation.
    pub distinct_grams: usize,
    /// Sum of all gram occurrences.
    pub total_occurrences: u64,
    /// Grams kept in the profile.
    pub retained_grams: usize,
}

impl ProfileStats {
    /// Returns `true` if the profile size cap dropped any grams.
    #[inline(always)]
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.retained_grams < self.distinct_grams
    }

    /// Number of grams dropped by the profile size cap.
    #[inline(always)]
    #[must_use]
    pub fn dropped_grams(&self) -> usize {
        self.distinct_grams - self.retained_grams
    }

    /// Approximate heap footprint of the rank map in bytes, ignoring gram text.
    pub fn rank_map_bytes(&self) -> usize {
        self.retained_grams * (std::mem::size_of::<String>() + std::mem::size_of::<u32>())
    }
}

impl core::fmt::Display for ProfileStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} occurrences, {} distinct grams",
            self.tokens, self.total_occurrences, self.distinct_grams
        )?;

        if self.truncated() {
            write!(
                f,
                ", kept {} (dropped {})",
                self.retained_grams,
                self.dropped_grams()
            )?;
        }

        Ok(())
    }
}
