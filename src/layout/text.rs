//! Word wrapping for fixed-width answer rows.
//!
//! Lengths are counted in `char`s so Cyrillic and accented Latin text wrap
//! at the same visual width as ASCII.

/// Splits `text` into at most `max_lines` lines of at most `max_len` chars.
///
/// Words are separated by any whitespace and re-joined with single spaces.
/// A word longer than `max_len` is cut into `max_len`-sized pieces. Lines
/// past `max_lines` are dropped.
pub fn split_text(text: &str, max_len: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_len == 0 || max_lines == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_len {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_len) {
                if chunk.len() == max_len {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
        } else if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_len {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }

        if lines.len() >= max_lines {
            break;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines.truncate(max_lines);
    lines
}

/// Number of rendered lines `text` needs at `max_chars_per_line`.
///
/// Each explicit line break starts a new line; empty lines count as zero.
pub fn estimate_line_count(text: &str, max_chars_per_line: usize) -> usize {
    if max_chars_per_line == 0 {
        return 0;
    }
    text.split('\n')
        .map(|line| line.chars().count().div_ceil(max_chars_per_line))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = split_text("the quick brown fox jumps over", 10, 5);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over"]);
    }

    #[test]
    fn fits_exactly_at_max_len() {
        assert_eq!(split_text("abcd efghi", 10, 2), vec!["abcd efghi"]);
        assert_eq!(split_text("abcd efghij", 10, 2), vec!["abcd", "efghij"]);
    }

    #[test]
    fn truncates_to_max_lines() {
        let lines = split_text("one two three four five six", 5, 2);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn collapses_whitespace_runs() {
        let lines = split_text("  служил \n\t в   армии  ", 40, 1);
        assert_eq!(lines, vec!["служил в армии"]);
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 6 Cyrillic chars occupy 12 bytes
        let lines = split_text("привет мир", 6, 3);
        assert_eq!(lines, vec!["привет", "мир"]);
    }

    #[test]
    fn oversized_words_are_cut_anywhere() {
        assert_eq!(split_text("abcdefghij", 4, 5), vec!["abcd", "efgh", "ij"]);
        assert_eq!(
            split_text("see abcdefghij ok", 4, 5),
            vec!["see", "abcd", "efgh", "ij", "ok"]
        );
        assert_eq!(split_text("abcdefgh", 4, 5), vec!["abcd", "efgh"]);
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(split_text("", 10, 3).is_empty());
        assert!(split_text("   \n ", 10, 3).is_empty());
        assert!(split_text("text", 0, 3).is_empty());
        assert!(split_text("text", 10, 0).is_empty());
    }

    #[test]
    fn line_estimate_respects_breaks() {
        assert_eq!(estimate_line_count("", 75), 0);
        assert_eq!(estimate_line_count(&"x".repeat(75), 75), 1);
        assert_eq!(estimate_line_count(&"x".repeat(76), 75), 2);
        assert_eq!(estimate_line_count("a\n\nb", 75), 2);
        assert_eq!(estimate_line_count(&"x".repeat(150), 75), 2);
    }
}
