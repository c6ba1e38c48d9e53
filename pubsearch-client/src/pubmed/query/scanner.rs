//! Tokenizer for explicit boolean keyword strings

use super::options::SearchMode;

/// A lexical unit of an explicit boolean keyword string
///
/// Slices borrow from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Double-quoted phrase, quotes included
    Phrase(&'a str),
    Open,
    Close,
    Operator(SearchMode),
    /// Run of ASCII letters and digits
    Word(&'a str),
}

/// Length in bytes of a quoted phrase at the start of `rest`, quotes included
///
/// A phrase needs at least one character between its quotes.
fn phrase_len(rest: &str) -> Option<usize> {
    rest.strip_prefix('"')?
        .find('"')
        .filter(|&inner| inner > 0)
        .map(|inner| inner + 2)
}

/// Split `input` into tokens, left to right
///
/// At each position the scanner tries, in order: a quoted phrase, a parenthesis, an
/// alphanumeric run. A run spelling `and`/`or` in any case becomes an operator.
/// Characters that start none of these (punctuation, whitespace, non-ASCII letters,
/// an unmatched quote) are skipped.
pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = input[pos..].chars().next() {
        let rest = &input[pos..];

        let consumed = match c {
            '"' => phrase_len(rest).map(|len| {
                tokens.push(Token::Phrase(&rest[..len]));
                len
            }),
            '(' => {
                tokens.push(Token::Open);
                Some(1)
            }
            ')' => {
                tokens.push(Token::Close);
                Some(1)
            }
            c if c.is_ascii_alphanumeric() => {
                let len = rest
                    .find(|ch: char| !ch.is_ascii_alphanumeric())
                    .unwrap_or(rest.len());
                let word = &rest[..len];
                tokens.push(match SearchMode::from_word(word) {
                    Some(op) => Token::Operator(op),
                    None => Token::Word(word),
                });
                Some(len)
            }
            _ => None,
        };

        pos += consumed.unwrap_or(c.len_utf8());
    }

    tokens
}
