//! Text cleanup ahead of tokenization.
//!
//! Punctuation and newlines become spaces, ASCII digits disappear, and each
//! pair of consecutive spaces in the result is folded into one. Nothing else
//! is touched: case, letters from any script, tabs and other whitespace all
//! pass through unchanged.

/// Byte class for the ASCII characters the normalizer rewrites.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Class {
    Keep = 0,
    Space = 1,
    Drop = 2,
}

const fn build_class_table() -> [Class; 256] {
    let mut table = [Class::Keep; 256];

    let spaces = b"\n,#/\\.!?:;-'\"_* ";
    let mut i = 0;
    while i < spaces.len() {
        table[spaces[i] as usize] = Class::Space;
        i += 1;
    }

    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = Class::Drop;
        d += 1;
    }

    table
}

static CLASS_TABLE: [Class; 256] = build_class_table();

/// Punctuation, newline and digit stripper.
///
/// Rewrites, in one pass over the bytes:
/// - newline `, # / \ . ! ? : ; - ' " _ *` → a single space
/// - ASCII digits `0`–`9` → removed
/// - two consecutive spaces (after the rewrites above) → one space
///
/// The pair folding is deliberately narrow. It matches non-overlapping pairs
/// left to right, so a run of `k` spaces shrinks to `ceil(k / 2)` spaces
/// rather than to one, and leading or trailing spaces are kept.
///
/// # Examples
///
/// ```
/// use rankgram_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("go1.2"), "go ");
/// assert_eq!(normalizer.normalize("a  b"), "a b");
/// assert_eq!(normalizer.normalize("a   b"), "a  b");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());
        let mut buf = std::mem::take(out).into_bytes();

        // An unpaired space is the last byte written. The next space pairs
        // with it and is folded away; dropped digits leave the state alone.
        let mut open_space = false;

        for &b in input.as_bytes() {
            match CLASS_TABLE[b as usize] {
                Class::Keep => {
                    buf.push(b);
                    open_space = false;
                }
                Class::Space => {
                    if open_space {
                        open_space = false;
                    } else {
                        buf.push(b' ');
                        open_space = true;
                    }
                }
                Class::Drop => {}
            }
        }

        // SAFETY: only ASCII bytes are replaced or removed, and ASCII bytes are
        // never part of a multi-byte sequence, so every sequence in `input` is
        // copied whole and `buf` stays valid UTF-8.
        *out = unsafe { String::from_utf8_unchecked(buf) };
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::default().normalize(input)
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(norm("hello world"), "hello world");
        assert_eq!(norm("Hello World"), "Hello World");
    }

    #[test]
    fn punctuation_becomes_space() {
        assert_eq!(norm("a,b"), "a b");
        assert_eq!(norm("a#b/c\\d"), "a b c d");
        assert_eq!(norm("a.b!c?d"), "a b c d");
        assert_eq!(norm("a:b;c-d"), "a b c d");
        assert_eq!(norm("a'b\"c_d*e"), "a b c d e");
        assert_eq!(norm("a\nb"), "a b");
    }

    #[test]
    fn digits_removed() {
        assert_eq!(norm("abc123"), "abc");
        assert_eq!(norm("0123456789"), "");
        assert_eq!(norm("r2d2"), "rd");
    }

    #[test]
    fn digit_and_punctuation_mix() {
        assert_eq!(norm("go1.2"), "go ");
        assert_eq!(norm("v1.0.0"), "v ");
    }

    #[test]
    fn double_space_collapses() {
        assert_eq!(norm("a  b"), "a b");
    }

    #[test]
    fn triple_space_keeps_two() {
        assert_eq!(norm("a   b"), "a  b");
    }

    #[test]
    fn space_runs_halve() {
        assert_eq!(norm("a    b"), "a  b");
        assert_eq!(norm("a     b"), "a   b");
    }

    #[test]
    fn punctuation_followed_by_space_collapses() {
        assert_eq!(norm("Hello, world."), "Hello world ");
        assert_eq!(norm("end.\nNext"), "end Next");
    }

    #[test]
    fn digits_between_spaces_collapse() {
        assert_eq!(norm("a 1 b"), "a b");
        assert_eq!(norm("a 12 b"), "a b");
    }

    #[test]
    fn leading_and_trailing_spaces_kept() {
        assert_eq!(norm(" hello "), " hello ");
        assert_eq!(norm(".hello."), " hello ");
    }

    #[test]
    fn other_whitespace_passthrough() {
        assert_eq!(norm("a\tb"), "a\tb");
        assert_eq!(norm("a\r\nb"), "a\r b");
    }

    #[test]
    fn other_punctuation_passthrough() {
        assert_eq!(norm("(a)[b]{c}"), "(a)[b]{c}");
        assert_eq!(norm("a&b+c=d"), "a&b+c=d");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn unicode_passthrough() {
        assert_eq!(norm("café"), "café");
        assert_eq!(norm("Straße, München"), "Straße München");
        assert_eq!(norm("こんにちは。世界"), "こんにちは。世界");
        assert_eq!(norm("привет, мир!"), "привет мир ");
        assert_eq!(norm("Hello 🌍 World"), "Hello 🌍 World");
    }

    #[test]
    fn unicode_digits_kept() {
        // Only ASCII digits are removed.
        assert_eq!(norm("٣٤"), "٣٤");
    }

    #[test]
    fn idempotent_without_space_runs() {
        let n = TextNormalizer::default();
        let samples = ["hello world", "Der Hund, die Katze.", "ÜBER Café 42"];

        for s in samples {
            let once = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn second_pass_continues_folding_long_runs() {
        let n = TextNormalizer::default();
        let once = n.normalize("a   b");
        assert_eq!(once, "a  b");
        assert_eq!(n.normalize(&once), "a b");
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("hello, world", &mut buf);
        assert_eq!(buf, "hello world");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("42 cats", &mut buf);
        assert_eq!(buf, " cats");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn output_never_longer_than_input() {
        let inputs = ["a,,b", "1 2 3", "x  y", "été...", "a - b"];
        for input in inputs {
            assert!(norm(input).len() <= input.len());
        }
    }

    #[test]
    fn output_always_valid_utf8() {
        let inputs = ["hello", "café", "İstanbul", "ΠΡΟΒΛΗΜΑ", "مرحبا", "こんにちは"];

        for input in inputs {
            let out = norm(input);
            assert!(std::str::from_utf8(out.as_bytes()).is_ok());
        }
    }
}
