//! Word-boundary offsets of a line.

/// Boundary table for one line.
///
/// Boundary offsets are: 0, every offset that ends a whitespace run, the
/// line length and the line length + 1. A match is kept when its start is a
/// boundary and `end + 2` is a boundary: inside a line the match must be
/// followed by one separator byte and then the next word; at the end of a
/// line one trailing byte (usually punctuation) is allowed.
#[derive(Debug, Clone)]
pub struct WordBoundaries {
    flags: Vec<bool>,
}

impl WordBoundaries {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let len = bytes.len();
        let mut flags = vec![false; len + 2];
        flags[0] = true;
        for (i, pair) in bytes.windows(2).enumerate() {
            if pair[0].is_ascii_whitespace() && !pair[1].is_ascii_whitespace() {
                flags[i + 1] = true;
            }
        }
        flags[len] = true;
        flags[len + 1] = true;
        Self { flags }
    }

    /// Whether `offset` is a boundary. Offsets past the sentinels are not.
    pub fn contains(&self, offset: usize) -> bool {
        self.flags.get(offset).copied().unwrap_or(false)
    }

    /// Whether a match spanning `start..=end` survives the boundary filter.
    pub fn accepts(&self, start: usize, end: usize) -> bool {
        self.contains(start) && self.contains(end + 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_follow_whitespace_runs_and_sentinels() {
        let b = WordBoundaries::new("the  cat sat");
        let set: Vec<usize> = (0..20).filter(|&i| b.contains(i)).collect();
        assert_eq!(set, vec![0, 5, 9, 12, 13]);
    }

    #[test]
    fn empty_line_has_only_sentinels() {
        let b = WordBoundaries::new("");
        assert!(b.contains(0));
        assert!(b.contains(1));
        assert!(!b.contains(2));
    }

    #[test]
    fn match_must_be_followed_by_one_separator_and_a_word() {
        // "cat sat": end + 2 = 4 is the start of "sat".
        assert!(WordBoundaries::new("cat sat").accepts(0, 2));
        // "cats are": end + 2 = 4 is the space, not a boundary.
        assert!(!WordBoundaries::new("cats are").accepts(0, 2));
        // "cat, sat": same story with punctuation mid-line.
        assert!(!WordBoundaries::new("cat, sat").accepts(0, 2));
    }

    #[test]
    fn one_trailing_byte_is_tolerated_at_line_end() {
        assert!(WordBoundaries::new("the cat").accepts(4, 6));
        assert!(WordBoundaries::new("the cat.").accepts(4, 6));
        assert!(!WordBoundaries::new("the cat.)").accepts(4, 6));
    }
}
