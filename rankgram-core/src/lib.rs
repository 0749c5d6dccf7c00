//! N-gram frequency-rank profiles for language identification.
//!
//! Texts in the same language share similar orderings of their most common
//! character n-grams. This crate turns a text sample into that ordering:
//!
//! ```text
//! raw text ─▶ normalize ─▶ tokenize ─▶ grams (1..=depth+1 runes) ─▶ count ─▶ rank
//! ```
//!
//! The result is a [`Profile`]: a name plus a gram → rank table, where rank
//! `1` is the most frequent gram. Comparing profiles is left to the caller.
//!
//! # Example
//!
//! ```
//! use rankgram_core::{analyze_with_depth, ProfileAnalyzer, ProfileConfig};
//!
//! let profile = analyze_with_depth("the cat sat", "english", 1);
//! assert!(profile.rank_of("t") < profile.rank_of("c"));
//!
//! let analyzer = ProfileAnalyzer::new(ProfileConfig::compact());
//! let small = analyzer.analyze("the cat sat on the mat", "english");
//! assert!(small.len() <= 400);
//! ```

pub mod analyzer;
pub mod profile;

pub use profile::{
    analyze, analyze_with_depth, build_occurrence_map, build_rank_map, build_rank_map_with_limit,
    OccurrenceCounter, ProfileAnalyzer, ProfileStats,
};
pub use rankgram_types::{
    OccurrenceMap, Profile, ProfileConfig, ProfileError, Rank, RankMap, Result, Token,
    DEFAULT_GRAM_DEPTH, DEFAULT_MAX_PROFILE_SIZE, MAX_GRAM_DEPTH,
};
