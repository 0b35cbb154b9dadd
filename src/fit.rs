//! Middle-ellipsis fitting
//!
//! Pure search for the longest symmetric abbreviation of a label that fits a
//! given width. Measurement is supplied by the caller, so the same search
//! drives pixel layouts (egui galleys) and terminal columns alike.

use tracing::trace;

/// Character inserted between the kept prefix and suffix.
pub const ELLIPSIS: char = '\u{2026}';

/// Fits `full` into `avail` width units, abbreviating in the middle if needed.
///
/// # Arguments
/// * `full` - The complete label
/// * `avail` - Available width in the same units `measure` reports
/// * `measure` - Rendered width of a candidate string; must be non-decreasing
///   in the number of characters for a fixed font
///
/// # Returns
/// * `None` if `avail` is zero, negative or NaN (layout not settled yet, the
///   caller keeps whatever it showed before)
/// * `Some(full)` if the whole text fits, or cannot be abbreviated at all
/// * `Some(prefix + "…" + suffix)` with equal-length prefix and suffix otherwise,
///   using the largest half-length that fits, never less than one character
pub fn fit<M>(full: &str, avail: f32, mut measure: M) -> Option<String>
where
    M: FnMut(&str) -> f32,
{
    if full.is_empty() {
        return Some(String::new());
    }

    // NaN fails this comparison too
    if !(avail > 0.0) {
        trace!(avail, "width not settled, skipping fit");
        return None;
    }

    if measure(full) <= avail {
        return Some(full.to_string());
    }

    let len = full.chars().count();
    let mut hi = max_half_length(len);
    if hi == 0 {
        return Some(full.to_string());
    }

    let mut lo = 1;
    while lo < hi {
        let mid = (lo + hi).div_ceil(2);
        let candidate = truncate_middle(full, mid);
        let width = measure(&candidate);
        trace!(lo, hi, mid, width, avail, "probing half-length");
        if width <= avail {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    Some(truncate_middle(full, lo))
}

/// Largest half-length worth trying for a text of `len` characters.
///
/// Bounded by `len / 2` so prefix and suffix never overlap, and zero when even
/// a one-character prefix and suffix would not be shorter than the text.
pub fn max_half_length(len: usize) -> usize {
    if len <= 2 {
        0
    } else {
        len / 2
    }
}

/// Builds `full[..k] + "…" + full[len - k..]`, counting in `char`s.
///
/// `k` is clamped to half of the text length.
pub fn truncate_middle(full: &str, k: usize) -> String {
    let len = full.chars().count();
    let k = k.min(len / 2);

    let prefix_end = byte_offset(full, k);
    let suffix_start = byte_offset(full, len - k);

    let mut result = String::with_capacity(prefix_end + ELLIPSIS.len_utf8() + full.len() - suffix_start);
    result.push_str(&full[..prefix_end]);
    result.push(ELLIPSIS);
    result.push_str(&full[suffix_start..]);
    result
}

/// Byte offset of the `n`-th char, or the string length past the end.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

/// Splits an abbreviation produced by [`truncate_middle`] back into its
/// prefix and suffix. Returns `None` for text without exactly one ellipsis.
pub fn split_truncation(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.split(ELLIPSIS);
    let prefix = parts.next()?;
    let suffix = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((prefix, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn char_len(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(fit("hello", 5.0, char_len).as_deref(), Some("hello"));
        assert_eq!(fit("hello", 100.0, char_len).as_deref(), Some("hello"));
    }

    #[test]
    fn test_worked_example() {
        // k=3 gives width 7, k=4 gives 9
        assert_eq!(fit("abcdefghij", 7.0, char_len).as_deref(), Some("abc…hij"));
    }

    #[test]
    fn test_zero_width_is_not_ready() {
        assert_eq!(fit("abcdefghij", 0.0, char_len), None);
        assert_eq!(fit("abcdefghij", -3.0, char_len), None);
        assert_eq!(fit("abcdefghij", f32::NAN, char_len), None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(fit("", 0.0, char_len).as_deref(), Some(""));
        assert_eq!(fit("", 10.0, char_len).as_deref(), Some(""));
    }

    #[test]
    fn test_narrow_container_degrades_to_one_char() {
        assert_eq!(fit("abcdefghij", 1.0, char_len).as_deref(), Some("a…j"));
    }

    #[test]
    fn test_too_short_to_abbreviate() {
        assert_eq!(fit("ab", 1.0, char_len).as_deref(), Some("ab"));
        assert_eq!(fit("a", 0.5, char_len).as_deref(), Some("a"));
        assert_eq!(fit("abc", 1.0, char_len).as_deref(), Some("a…c"));
    }

    #[test]
    fn test_odd_length_never_overlaps() {
        // len 7, max half-length 3
        assert_eq!(fit("abcdefg", 6.9, char_len).as_deref(), Some("ab…fg"));
        assert_eq!(truncate_middle("abcdefg", 10), "abc…efg");
    }

    #[test]
    fn test_multibyte_chars() {
        let full = "日本語のテキストです";
        let result = fit(full, 5.0, char_len).unwrap();
        assert_eq!(result, "日本…です");
    }

    #[test]
    fn test_measurement_calls_are_logarithmic() {
        let calls = Cell::new(0usize);
        let full = "x".repeat(1024);
        let result = fit(&full, 100.0, |s| {
            calls.set(calls.get() + 1);
            char_len(s)
        })
        .unwrap();
        assert_eq!(result.chars().count(), 99);
        // one full measurement plus at most ceil(log2(512)) search steps
        assert!(calls.get() <= 1 + 10, "made {} measurement calls", calls.get());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for avail in [1.0, 3.0, 4.0, 7.0, 8.5, 20.0] {
            let once = fit("the quick brown fox", avail, char_len).unwrap();
            let twice = fit(&once, avail, char_len).unwrap();
            assert_eq!(once, twice, "avail {}", avail);
        }
    }

    #[test]
    fn test_proportional_measure() {
        // 'w' is three times as wide as anything else
        let measure = |s: &str| s.chars().map(|c| if c == 'w' { 3.0 } else { 1.0 }).sum::<f32>();
        let result = fit("wwwwabcdefgh", 9.0, measure).unwrap();
        assert_eq!(result, "ww…gh");
        assert!(measure(&result) <= 9.0);
    }

    #[test]
    fn test_split_truncation() {
        assert_eq!(split_truncation("abc…hij"), Some(("abc", "hij")));
        assert_eq!(split_truncation("plain"), None);
        assert_eq!(split_truncation("a…b…c"), None);
    }

    #[test]
    fn test_max_half_length() {
        assert_eq!(max_half_length(0), 0);
        assert_eq!(max_half_length(2), 0);
        assert_eq!(max_half_length(3), 1);
        assert_eq!(max_half_length(10), 5);
        assert_eq!(max_half_length(11), 5);
    }
}
