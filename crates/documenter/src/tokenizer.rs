//! Splits one line of REPL input into tokens.
//!
//! The grammar is intentionally tiny: a token is either a run of characters up to the next space,
//! or everything between a pair of double quotes. There are no escapes and no nesting, and a quote
//! only opens a quoted token when it is the first character of that token.

use crate::error::DocError;

const QUOTE: char = '"';
const DELIMITER: char = ' ';

/// Tokenizes `line`, stripping the quotes from quoted tokens.
///
/// Exactly one delimiter is skipped after every token: the space after a bare word, or the
/// character following a closing quote. Consecutive spaces therefore produce empty tokens.
pub fn tokenize(line: &str) -> Result<Vec<String>, DocError> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == QUOTE {
            let start = i + 1;
            let Some(len) = chars[start..].iter().position(|&c| c == QUOTE) else {
                return Err(DocError::MalformedInput { column: i });
            };
            tokens.push(chars[start..start + len].iter().collect());
            i = start + len + 1;
        } else {
            let len = chars[i..]
                .iter()
                .position(|&c| c == DELIMITER)
                .unwrap_or(chars.len() - i);
            tokens.push(chars[i..i + len].iter().collect());
            i += len;
        }

        i += 1;
    }

    Ok(tokens)
}
