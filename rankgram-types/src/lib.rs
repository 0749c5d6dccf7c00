//! Core types shared across the rankgram crates.
//!
//! A rank profile is the statistical fingerprint of a text sample: every
//! character n-gram seen in the text, ranked by how often it occurs. This
//! crate holds the vocabulary that producers and consumers of profiles agree
//! on, so a comparison engine can depend on it without pulling in the
//! analysis pipeline:
//!
//! - **[`Profile`]**: a named, immutable gram → rank table
//! - **[`Token`]**: a gram with its occurrence count, ordered by rank
//! - **[`ProfileConfig`]**: explicit analysis settings (no process globals)
//! - **[`ProfileError`]**: failures of the opt-in input guards

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

use rustc_hash::FxHashMap;

/// Raw occurrence count of a gram.
pub type Occurrence = u32;

/// Rank of a gram within a profile. `1` is the most frequent gram.
pub type Rank = u32;

/// Gram → raw occurrence count across one analyzed text.
pub type OccurrenceMap = FxHashMap<String, Occurrence>;

/// Gram → rank, dense from `1` to the number of retained grams.
pub type RankMap = FxHashMap<String, Rank>;

/// Default gram depth. Grams of length `1..=DEFAULT_GRAM_DEPTH + 1` are generated.
pub const DEFAULT_GRAM_DEPTH: usize = 5;

/// Default cap on the number of grams kept in a profile.
pub const DEFAULT_MAX_PROFILE_SIZE: usize = 100_000;

/// Largest gram depth accepted by [`ProfileConfig::validate`].
pub const MAX_GRAM_DEPTH: usize = 32;

/// Longest gram, in runes, generated at `gram_depth`.
///
/// Saturates at `usize::MAX`, so an absurd depth means "every length the
/// token has" rather than an overflow.
#[inline(always)]
#[must_use]
pub const fn gram_len_for_depth(gram_depth: usize) -> usize {
    gram_depth.saturating_add(1)
}

/// Profile size cap for a `max_profile_size` setting, or `None` for `0`.
#[inline(always)]
#[must_use]
pub const fn profile_limit_for(max_profile_size: usize) -> Option<usize> {
    if max_profile_size == 0 {
        None
    } else {
        Some(max_profile_size)
    }
}

/// Result type for fallible profile operations.
pub type Result<T, E = ProfileError> = core::result::Result<T, E>;

/// A gram together with the number of times it occurred.
///
/// Tokens order by rank: a token compares *greater* when it occurs more
/// often, and among equal counts when its gram is lexicographically smaller.
/// Sorting descending therefore yields rank order, and because grams are
/// unique within one text the order is total and reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The gram text.
    pub gram: String,
    /// Raw occurrence count.
    pub occurrence: Occurrence,
}

impl Token {
    /// Creates a new token.
    #[inline]
    pub fn new(gram: impl Into<String>, occurrence: Occurrence) -> Self {
        Self {
            gram: gram.into(),
            occurrence,
        }
    }
}

impl PartialOrd for Token {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        // Primary: occurrence (more frequent = greater)
        // Secondary: gram, reversed so the smaller gram ranks first on ties
        self.occurrence
            .cmp(&other.occurrence)
            .then_with(|| other.gram.cmp(&self.gram))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} x{}", self.gram, self.occurrence)
    }
}

/// A named n-gram rank profile.
///
/// Immutable once built. Consumers compare profiles through [`Profile::rank_of`]
/// or by iterating [`Profile::ranks`]; nothing in this crate mutates a profile
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    name: String,
    ranks: RankMap,
}

impl Profile {
    /// Creates a profile from a display name and a rank map.
    pub fn new(name: impl Into<String>, ranks: RankMap) -> Self {
        Self {
            name: name.into(),
            ranks,
        }
    }

    /// Display name of the profile, typically a language name.
    #[inline(always)]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The gram → rank table.
    #[inline(always)]
    #[must_use]
    pub fn ranks(&self) -> &RankMap {
        &self.ranks
    }

    /// Rank of `gram`, if the profile retained it.
    #[inline]
    #[must_use]
    pub fn rank_of(&self, gram: &str) -> Option<Rank> {
        self.ranks.get(gram).copied()
    }

    /// Number of grams in the profile.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns `true` if the profile holds no grams.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Grams collected in rank order, best rank first.
    pub fn to_ranked_vec(&self) -> Vec<(&str, Rank)> {
        let mut out: Vec<(&str, Rank)> = self
            .ranks
            .iter()
            .map(|(gram, &rank)| (gram.as_str(), rank))
            .collect();
        out.sort_unstable_by_key(|&(_, rank)| rank);
        out
    }

    /// Consumes the profile, returning its name and rank map.
    pub fn into_parts(self) -> (String, RankMap) {
        (self.name, self.ranks)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} grams)", self.name, self.ranks.len())
    }
}

/// Errors raised by the opt-in guards of the analysis pipeline.
///
/// Plain analysis never fails; these only come from validated configuration
/// and from size-checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// Input text exceeds the configured byte limit.
    #[error("input too large: {size} bytes (max: {max_size} bytes)")]
    InputTooLarge {
        /// The actual size of the input in bytes.
        size: usize,
        /// The configured maximum in bytes.
        max_size: usize,
    },
    /// Gram depth is above [`MAX_GRAM_DEPTH`].
    #[error("gram depth {depth} exceeds the maximum of {max_depth}")]
    GramDepthTooLarge {
        /// The requested depth.
        depth: usize,
        /// The largest accepted depth.
        max_depth: usize,
    },
}

/// Analysis settings.
///
/// Threaded explicitly through the analyzer; there is no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileConfig {
    /// Maximum gram length minus one. `0` is degenerate and yields 1-grams only.
    pub gram_depth: usize,
    /// Maximum number of grams kept in a profile. `0` keeps every gram.
    pub max_profile_size: usize,
    /// Upper bound on input size for size-checked analysis. `None` disables the check.
    pub max_input_bytes: Option<usize>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileConfig {
    /// Default depth and profile size cap, no input size limit.
    pub const fn new() -> Self {
        Self {
            gram_depth: DEFAULT_GRAM_DEPTH,
            max_profile_size: DEFAULT_MAX_PROFILE_SIZE,
            max_input_bytes: None,
        }
    }

    /// Keeps every gram regardless of profile size.
    pub const fn unbounded() -> Self {
        Self {
            gram_depth: DEFAULT_GRAM_DEPTH,
            max_profile_size: 0,
            max_input_bytes: None,
        }
    }

    /// Short grams and a small profile, for cheap comparisons.
    pub const fn compact() -> Self {
        Self {
            gram_depth: 3,
            max_profile_size: 400,
            max_input_bytes: None,
        }
    }

    /// Returns a copy with the given gram depth.
    #[must_use]
    pub const fn with_gram_depth(mut self, gram_depth: usize) -> Self {
        self.gram_depth = gram_depth;
        self
    }

    /// Returns a copy with the given profile size cap.
    #[must_use]
    pub const fn with_max_profile_size(mut self, max_profile_size: usize) -> Self {
        self.max_profile_size = max_profile_size;
        self
    }

    /// Returns a copy that rejects inputs above `max_input_bytes` in checked analysis.
    #[must_use]
    pub const fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = Some(max_input_bytes);
        self
    }

    /// Longest gram generated, in runes.
    #[inline(always)]
    #[must_use]
    pub const fn max_gram_len(&self) -> usize {
        gram_len_for_depth(self.gram_depth)
    }

    /// Profile size cap, or `None` when every gram is kept.
    #[inline(always)]
    #[must_use]
    pub const fn profile_limit(&self) -> Option<usize> {
        profile_limit_for(self.max_profile_size)
    }

    /// Checks the configuration against hard limits.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::GramDepthTooLarge`] when `gram_depth` exceeds
    /// [`MAX_GRAM_DEPTH`].
    pub fn validate(&self) -> Result<()> {
        if self.gram_depth > MAX_GRAM_DEPTH {
            return Err(ProfileError::GramDepthTooLarge {
                depth: self.gram_depth,
                max_depth: MAX_GRAM_DEPTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(pairs: &[(&str, Rank)]) -> RankMap {
        pairs.iter().map(|&(g, r)| (g.to_string(), r)).collect()
    }

    #[test]
    fn token_orders_by_occurrence() {
        let frequent = Token::new("e", 10);
        let rare = Token::new("q", 1);
        assert!(frequent > rare);
    }

    #[test]
    fn token_ties_prefer_smaller_gram() {
        let a = Token::new("a", 3);
        let b = Token::new("b", 3);
        assert!(a > b);

        let mut tokens = vec![b.clone(), Token::new("z", 5), a.clone()];
        tokens.sort_unstable_by(|x, y| y.cmp(x));
        assert_eq!(tokens[0].gram, "z");
        assert_eq!(tokens[1], a);
        assert_eq!(tokens[2], b);
    }

    #[test]
    fn token_equal_only_when_identical() {
        assert_eq!(Token::new("ab", 2).cmp(&Token::new("ab", 2)), Ordering::Equal);
        assert_ne!(Token::new("ab", 2), Token::new("ab", 3));
    }

    #[test]
    fn token_display() {
        assert_eq!(format!("{}", Token::new("th", 4)), "\"th\" x4");
    }

    #[test]
    fn profile_accessors() {
        let profile = Profile::new("english", ranks(&[("e", 1), ("t", 2), ("th", 3)]));
        assert_eq!(profile.name(), "english");
        assert_eq!(profile.len(), 3);
        assert!(!profile.is_empty());
        assert_eq!(profile.rank_of("t"), Some(2));
        assert_eq!(profile.rank_of("zz"), None);
    }

    #[test]
    fn profile_to_ranked_vec_is_rank_order() {
        let profile = Profile::new("x", ranks(&[("c", 3), ("a", 1), ("b", 2)]));
        let ordered = profile.to_ranked_vec();
        assert_eq!(ordered, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn empty_profile() {
        let profile = Profile::new("x", RankMap::default());
        assert!(profile.is_empty());
        assert!(profile.to_ranked_vec().is_empty());
        assert_eq!(format!("{profile}"), "x (0 grams)");
    }

    #[test]
    fn profile_into_parts() {
        let profile = Profile::new("de", ranks(&[("e", 1)]));
        let (name, map) = profile.into_parts();
        assert_eq!(name, "de");
        assert_eq!(map.get("e"), Some(&1));
    }

    #[test]
    fn config_defaults() {
        let config = ProfileConfig::default();
        assert_eq!(config.gram_depth, DEFAULT_GRAM_DEPTH);
        assert_eq!(config.max_gram_len(), DEFAULT_GRAM_DEPTH + 1);
        assert_eq!(config.profile_limit(), Some(DEFAULT_MAX_PROFILE_SIZE));
        assert_eq!(config.max_input_bytes, None);
    }

    #[test]
    fn zero_cap_means_unbounded() {
        assert_eq!(ProfileConfig::unbounded().profile_limit(), None);
        assert_eq!(
            ProfileConfig::default().with_max_profile_size(0).profile_limit(),
            None
        );
        assert_eq!(
            ProfileConfig::default().with_max_profile_size(7).profile_limit(),
            Some(7)
        );
    }

    #[test]
    fn gram_len_saturates_at_huge_depth() {
        assert_eq!(gram_len_for_depth(0), 1);
        assert_eq!(gram_len_for_depth(usize::MAX), usize::MAX);
        assert_eq!(
            ProfileConfig::new().with_gram_depth(usize::MAX).max_gram_len(),
            usize::MAX
        );
    }

    #[test]
    fn config_builders() {
        let config = ProfileConfig::compact()
            .with_gram_depth(1)
            .with_max_input_bytes(1024);
        assert_eq!(config.gram_depth, 1);
        assert_eq!(config.max_profile_size, 400);
        assert_eq!(config.max_input_bytes, Some(1024));
    }

    #[test]
    fn validate_rejects_deep_grams() {
        assert!(ProfileConfig::default().validate().is_ok());
        assert!(ProfileConfig::default().with_gram_depth(0).validate().is_ok());
        assert!(ProfileConfig::default()
            .with_gram_depth(MAX_GRAM_DEPTH)
            .validate()
            .is_ok());

        let err = ProfileConfig::default()
            .with_gram_depth(MAX_GRAM_DEPTH + 1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ProfileError::GramDepthTooLarge {
                depth: MAX_GRAM_DEPTH + 1,
                max_depth: MAX_GRAM_DEPTH,
            }
        );
    }

    #[test]
    fn error_messages() {
        let err = ProfileError::InputTooLarge {
            size: 10,
            max_size: 4,
        };
        assert_eq!(err.to_string(), "input too large: 10 bytes (max: 4 bytes)");

        let err = ProfileError::GramDepthTooLarge {
            depth: 40,
            max_depth: 32,
        };
        assert_eq!(err.to_string(), "gram depth 40 exceeds the maximum of 32");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn profile_serde_roundtrip() {
        let profile = Profile::new("fr", ranks(&[("e", 1), ("es", 2)]));
        let json = serde_json::to_string(&profile).expect("serialize");
        let back: Profile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, profile);
    }
}
