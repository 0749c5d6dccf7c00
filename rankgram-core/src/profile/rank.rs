//! Rank table construction.
//!
//! ## Ordering
//!
//! Grams are ranked by descending occurrence. Ties are broken by ascending
//! byte order of the gram, which is exactly the [`Token`] ordering reversed.
//! Grams are unique keys, so the order is total and the same input always
//! produces the same ranks.
//!
//! ## Truncation
//!
//! With a cap of `c` only the first `c` grams in that order are kept. A cap
//! of `0` keeps everything. When truncating, the top `c` are partitioned out
//! first so only they need a full sort.

use core::cmp::Ordering;

use rankgram_types::{
    profile_limit_for, OccurrenceMap, Rank, RankMap, Token, DEFAULT_MAX_PROFILE_SIZE,
};

#[inline(always)]
fn rank_order(a: &Token, b: &Token) -> Ordering {
    b.cmp(a)
}

/// Sorts `tokens` into rank order and keeps the first `max_profile_size`.
///
/// `0` keeps every token.
pub fn rank_tokens(tokens: &mut Vec<Token>, max_profile_size: usize) {
    let limit = profile_limit_for(max_profile_size)
        .map_or(tokens.len(), |cap| cap.min(tokens.len()));

    if limit < tokens.len() {
        // limit >= 1 here: a zero cap means no cap
        tokens.select_nth_unstable_by(limit - 1, rank_order);
        tokens.truncate(limit);
    }

    tokens.sort_unstable_by(rank_order);
}

/// All grams of `occurrences` as tokens, in rank order.
pub fn ranked_tokens(occurrences: &OccurrenceMap) -> Vec<Token> {
    let mut tokens: Vec<Token> = occurrences
        .iter()
        .map(|(gram, &occurrence)| Token::new(gram.as_str(), occurrence))
        .collect();
    rank_tokens(&mut tokens, 0);
    tokens
}

/// 1-based rank of the token at `index`, pinned to `Rank::MAX` past its range.
#[inline]
fn rank_at(index: usize) -> Rank {
    Rank::try_from(index.saturating_add(1)).unwrap_or(Rank::MAX)
}

/// Assigns dense 1-based ranks to already ranked tokens.
fn assign_ranks(tokens: Vec<Token>) -> RankMap {
    let mut ranks = RankMap::default();
    ranks.reserve(tokens.len());
    for (i, token) in tokens.into_iter().enumerate() {
        ranks.insert(token.gram, rank_at(i));
    }
    ranks
}

/// Builds the rank map of `occurrences` with the default profile size cap.
pub fn build_rank_map(occurrences: &OccurrenceMap) -> RankMap {
    build_rank_map_with_limit(occurrences, DEFAULT_MAX_PROFILE_SIZE)
}

/// Builds the rank map of `occurrences`, keeping at most `max_profile_size`
/// grams (`0` for no cap).
pub fn build_rank_map_with_limit(occurrences: &OccurrenceMap, max_profile_size: usize) -> RankMap {
    let mut tokens: Vec<Token> = occurrences
        .iter()
        .map(|(gram, &occurrence)| Token::new(gram.as_str(), occurrence))
        .collect();
    rank_tokens(&mut tokens, max_profile_size);
    assign_ranks(tokens)
}

/// Like [`build_rank_map_with_limit`], but moves the gram strings out of
/// `occurrences` instead of cloning them.
pub fn into_rank_map(occurrences: OccurrenceMap, max_profile_size: usize) -> RankMap {
    let mut tokens: Vec<Token> = occurrences
        .into_iter()
        .map(|(gram, occurrence)| Token { gram, occurrence })
        .collect();
    rank_tokens(&mut tokens, max_profile_size);
    assign_ranks(tokens)
}
