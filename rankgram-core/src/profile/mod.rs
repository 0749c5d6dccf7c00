//! N-gram rank profiles.
//!
//! Ties the analyzer stages together: occurrences are counted over every
//! gram length, then ranked by descending frequency into a dense, truncated
//! rank table.
//!
//! Threading:
//! - Every call builds and owns its own maps. [`ProfileAnalyzer`] holds only
//!   configuration, so it is `Send + Sync` and can be shared freely.

mod api;
mod occurrence;
mod rank;
mod stats;
mod types;

pub use api::{analyze, analyze_with_depth};
pub use occurrence::{build_occurrence_map, OccurrenceCounter};
pub use rank::{build_rank_map, build_rank_map_with_limit, into_rank_map, rank_tokens, ranked_tokens};
pub use stats::ProfileStats;
pub use types::ProfileAnalyzer;
