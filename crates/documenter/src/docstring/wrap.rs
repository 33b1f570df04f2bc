use unicode_width::{
    UnicodeWidthChar,
    UnicodeWidthStr,
};

/// Greedy word wrap of `text` to at most `width` display columns per line.
///
/// Runs of whitespace collapse to a single space. Words wider than `width` are split across
/// lines. Always returns at least one line, which is empty for blank input.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in split_wide_word(word, width) {
            let piece_width = piece.width();
            if current.is_empty() {
                current.push_str(piece);
                current_width = piece_width;
            } else if current_width + 1 + piece_width <= width {
                current.push(' ');
                current.push_str(piece);
                current_width += 1 + piece_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(piece);
                current_width = piece_width;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_wide_word(word: &str, width: usize) -> Vec<&str> {
    if word.width() <= width {
        return vec![word];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut piece_width = 0;
    for (idx, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if piece_width + w > width && idx > start {
            pieces.push(&word[start..idx]);
            start = idx;
            piece_width = 0;
        }
        piece_width += w;
    }
    pieces.push(&word[start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(wrap("User object", 50), vec!["User object"]);
    }

    #[test]
    fn test_blank_text_yields_one_empty_line() {
        assert_eq!(wrap("", 50), vec![""]);
        assert_eq!(wrap("   ", 50), vec![""]);
    }

    #[test]
    fn test_wraps_on_word_boundaries() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_splits_words_wider_than_width() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        // each of these takes two columns
        assert_eq!(wrap("日本語テキスト", 6), vec!["日本語", "テキス", "ト"]);
    }
}
