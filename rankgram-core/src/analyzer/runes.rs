//! Rune ↔ byte offset conversion.
//!
//! Grams are measured in runes (Unicode code points) but sliced out of UTF-8
//! bytes. Everything that turns a rune position into a byte position goes
//! through this module so the saturating edge cases live in one place.
//!
//! - [`byte_offset`] works on raw bytes and tolerates malformed UTF-8.
//! - [`RuneBoundaries`] precomputes the table for one `&str` so a token can
//!   be sliced at every rune position without rescanning it.

use smallvec::SmallVec;

/// Counts runes the way [`byte_offset`] does: each undecodable byte is one rune.
pub fn rune_count(bytes: &[u8]) -> usize {
    bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
        .sum()
}

/// Returns the byte position at which `rune_offset` runes have been consumed.
///
/// Saturating rather than failing:
/// - `0` → `0`
/// - negative, or at least the total rune count → `bytes.len()`
///
/// A position only counts when the rune just consumed decoded cleanly. If the
/// target lands on an undecodable byte, no later prefix can have exactly
/// `rune_offset` runes, so the scan runs off the end and saturates.
pub fn byte_offset(bytes: &[u8], rune_offset: isize) -> usize {
    let len = bytes.len();
    let Ok(target) = usize::try_from(rune_offset) else {
        return len;
    };
    if rune_count(bytes) <= target {
        return len;
    }
    if target == 0 {
        return 0;
    }

    let mut consumed = 0usize;
    let mut pos = 0usize;

    for chunk in bytes.utf8_chunks() {
        for ch in chunk.valid().chars() {
            consumed += 1;
            pos += ch.len_utf8();
            if consumed == target {
                return pos;
            }
        }

        let invalid = chunk.invalid().len();
        if consumed + invalid >= target {
            return len;
        }
        consumed += invalid;
        pos += invalid;
    }

    len
}

/// Byte offset of every rune start in a string, plus its end.
///
/// Short tokens keep the table inline.
#[derive(Debug, Clone, Default)]
pub struct RuneBoundaries {
    offsets: SmallVec<[usize; 24]>,
}

impl RuneBoundaries {
    /// Builds the table for `text`.
    pub fn new(text: &str) -> Self {
        let mut boundaries = Self::default();
        boundaries.rebuild(text);
        boundaries
    }

    /// Replaces the table with the boundaries of `text`, keeping capacity.
    pub fn rebuild(&mut self, text: &str) {
        self.offsets.clear();
        self.offsets.extend(text.char_indices().map(|(i, _)| i));
        self.offsets.push(text.len());
    }

    /// Number of runes in the indexed text.
    #[inline(always)]
    #[must_use]
    pub fn rune_len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Byte length of the indexed text.
    #[inline(always)]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// Byte offset of rune `rune`, saturating to the byte length at or past the end.
    #[inline(always)]
    #[must_use]
    pub fn byte_offset(&self, rune: usize) -> usize {
        match self.offsets.get(rune) {
            Some(&offset) => offset,
            None => self.byte_len(),
        }
    }
}
