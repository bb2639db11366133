//! Fixed-capacity text helpers: truncating writes and greedy word wrap.

use core::fmt;

use heapless::{String, Vec};

/// `fmt::Write` adapter that keeps as many characters as fit and silently
/// drops the rest.
///
/// `heapless::String::push_str` rejects a whole chunk once it no longer fits,
/// which would lose the tail of a formatted message mid-word. This pushes
/// character by character instead.
pub struct Truncating<'a, const N: usize>(pub &'a mut String<N>);

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Copy `s` into a fixed-capacity string, cutting at a character boundary.
pub fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    fmt::Write::write_str(&mut Truncating(&mut out), s).ok();
    out
}

/// Format arguments into a fixed-capacity string, truncating on overflow.
pub fn format_truncated<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut out = String::new();
    fmt::write(&mut Truncating(&mut out), args).ok();
    out
}

/// Byte range and character count of one whitespace-separated word.
struct Word {
    start: usize,
    end: usize,
    chars: usize,
}

/// Iterate over the words of `text` with their byte offsets.
fn words(text: &str) -> impl Iterator<Item = Word> + '_ {
    let mut chars = text.char_indices().peekable();
    core::iter::from_fn(move || {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        let (start, _) = *chars.peek()?;
        let mut end = start;
        let mut count = 0;
        while let Some((i, c)) = chars.next_if(|(_, c)| !c.is_whitespace()) {
            end = i + c.len_utf8();
            count += 1;
        }
        Some(Word {
            start,
            end,
            chars: count,
        })
    })
}

/// Greedy whitespace word wrap for monospace text.
///
/// Lines are slices of `text` at most `max_chars` characters long. Words longer
/// than a line are split hard. Lines past `N` are dropped.
pub fn wrap_words<const N: usize>(
    text: &str,
    max_chars: usize,
) -> Vec<&str, N> {
    let mut lines: Vec<&str, N> = Vec::new();
    if max_chars == 0 {
        return lines;
    }

    // Current line as a byte range plus its character count
    let mut line: Option<(usize, usize, usize)> = None;

    for word in words(text) {
        if let Some((start, end, count)) = line.take() {
            if count + 1 + word.chars <= max_chars {
                line = Some((start, word.end, count + 1 + word.chars));
                continue;
            }
            if lines.push(&text[start..end]).is_err() {
                return lines;
            }
        }

        // Word starts a fresh line; split it if it cannot fit on one
        let mut rest = &text[word.start..word.end];
        let mut rest_start = word.start;
        let mut rest_chars = word.chars;
        while rest_chars > max_chars {
            let split = rest.char_indices().nth(max_chars).map_or(rest.len(), |(i, _)| i);
            if lines.push(&rest[..split]).is_err() {
                return lines;
            }
            rest = &rest[split..];
            rest_start += split;
            rest_chars -= max_chars;
        }
        line = Some((rest_start, rest_start + rest.len(), rest_chars));
    }

    if let Some((start, end, _)) = line {
        lines.push(&text[start..end]).ok();
    }
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_cuts_at_capacity() {
        let s: String<5> = truncated("Berryessa");
        assert_eq!(s.as_str(), "Berry");
    }

    #[test]
    fn test_truncated_respects_char_boundary() {
        // 'é' is two bytes; only one fits after "ab"
        let s: String<4> = truncated("abéé");
        assert_eq!(s.as_str(), "abé");
    }

    #[test]
    fn test_format_truncated() {
        let s: String<12> = format_truncated(format_args!("Error: {}", "timed out"));
        assert_eq!(s.as_str(), "Error: timed");
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines: Vec<&str, 4> = wrap_words("Asking BART", 24);
        assert_eq!(lines.as_slice(), &["Asking BART"]);
    }

    #[test]
    fn test_wrap_breaks_on_whitespace() {
        let lines: Vec<&str, 4> = wrap_words("Asking BART for train ETAs...", 12);
        assert_eq!(lines.as_slice(), &["Asking BART", "for train", "ETAs..."]);
    }

    #[test]
    fn test_wrap_starts_each_overflowing_word_on_a_new_line() {
        let lines: Vec<&str, 4> = wrap_words("one two three four", 8);
        assert_eq!(lines.as_slice(), &["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_collapses_leading_and_trailing_whitespace() {
        let lines: Vec<&str, 4> = wrap_words("   one  two   ", 24);
        assert_eq!(lines.as_slice(), &["one  two"]);
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let lines: Vec<&str, 4> = wrap_words("ab abcdefghij", 4);
        assert_eq!(lines.as_slice(), &["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_drops_lines_past_capacity() {
        let lines: Vec<&str, 2> = wrap_words("a b c d e f", 1);
        assert_eq!(lines.as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        let lines: Vec<&str, 2> = wrap_words("   ", 10);
        assert!(lines.is_empty());
    }
}
