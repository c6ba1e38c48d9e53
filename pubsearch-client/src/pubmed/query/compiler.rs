//! Compilation of free-form keyword strings into PubMed boolean queries
//!
//! Two input grammars are accepted:
//!
//! - **Complex**: explicit boolean syntax such as `(SRM 1950 OR SRM1950) AND HILIC`.
//!   Parentheses and operators are kept, adjacent bare words are grouped into a
//!   quoted phrase, and every term gets the field tag.
//! - **Simple**: comma-separated terms such as `SRM 1950, HILIC`, joined with the
//!   requested [`SearchMode`].

use std::fmt;

use super::options::{SearchField, SearchMode};
use super::scanner::{Token, tokenize};

/// Input grammar detected for a keyword string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Comma-separated terms
    Simple,
    /// Parentheses and/or `AND`/`OR` operators
    Complex,
}

impl Grammar {
    /// Complex when the input has a parenthesis or a whole-word `and`/`or` in any case
    ///
    /// Word characters are letters, digits and `_`.
    pub fn detect(keywords: &str) -> Self {
        let has_parentheses = keywords.contains(['(', ')']);
        let has_operator = keywords
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .any(|word| SearchMode::from_word(word).is_some());

        if has_parentheses || has_operator {
            Grammar::Complex
        } else {
            Grammar::Simple
        }
    }
}

/// A compiled query together with the grammar it was compiled from
///
/// # Example
///
/// ```
/// use pubsearch_client::{CompiledQuery, Grammar, SearchField, SearchMode};
///
/// let query = CompiledQuery::compile("SRM 1950, HILIC", SearchMode::And, SearchField::All);
/// assert_eq!(query.as_str(), r#""SRM 1950" AND HILIC"#);
/// assert_eq!(query.grammar(), Grammar::Simple);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    query: String,
    grammar: Grammar,
}

impl CompiledQuery {
    pub fn compile(keywords: &str, mode: SearchMode, field: SearchField) -> Self {
        let grammar = Grammar::detect(keywords);
        let tag = field.tag();
        let query = match grammar {
            Grammar::Complex => compile_complex(keywords, tag),
            Grammar::Simple => compile_simple(keywords, mode, tag),
        };
        Self { query, grammar }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// An empty query must not be sent upstream
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn into_string(self) -> String {
        self.query
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

/// Compile `keywords` into a PubMed boolean query string
///
/// `mode` only affects the simple grammar; explicit operators in the complex grammar
/// are kept as written (uppercased). Empty or whitespace-only input compiles to `""`.
///
/// # Example
///
/// ```
/// use pubsearch_client::{SearchField, SearchMode, compile};
///
/// assert_eq!(
///     compile("(SRM 1950 OR SRM1950) AND HILIC", SearchMode::And, SearchField::Title),
///     r#"( "SRM 1950"[Title] OR SRM1950[Title] ) AND HILIC[Title]"#
/// );
/// assert_eq!(compile("   ", SearchMode::Or, SearchField::All), "");
/// ```
pub fn compile(keywords: &str, mode: SearchMode, field: SearchField) -> String {
    CompiledQuery::compile(keywords, mode, field).into_string()
}

fn compile_complex(keywords: &str, tag: &str) -> String {
    let mut tokens = tokenize(keywords.trim()).into_iter().peekable();
    let mut parts: Vec<String> = Vec::new();

    while let Some(token) = tokens.next() {
        let part = match token {
            Token::Open => "(".to_string(),
            Token::Close => ")".to_string(),
            Token::Operator(op) => op.as_str().to_string(),
            Token::Phrase(phrase) => format!("{phrase}{tag}"),
            Token::Word(word) => {
                let mut words = vec![word];
                while let Some(Token::Word(next)) = tokens.peek() {
                    words.push(*next);
                    tokens.next();
                }
                if words.len() > 1 {
                    format!("\"{}\"{tag}", words.join(" "))
                } else {
                    format!("{word}{tag}")
                }
            }
        };
        parts.push(part);
    }

    parts.join(" ")
}

fn compile_simple(keywords: &str, mode: SearchMode, tag: &str) -> String {
    let mut terms: Vec<&str> = keywords
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect();

    if terms.is_empty() {
        let whole = keywords.trim();
        if whole.is_empty() {
            return String::new();
        }
        terms.push(whole);
    }

    let joiner = format!(" {} ", mode.as_str());
    terms
        .iter()
        .map(|term| {
            if term.contains(' ') {
                format!("\"{term}\"{tag}")
            } else {
                format!("{term}{tag}")
            }
        })
        .collect::<Vec<_>>()
        .join(&joiner)
}
