use std::result;

use thiserror::Error;

/// Error types for EFetch document parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// The document ended while elements were still open
    #[error("Unexpected end of document: <{tag}> was never closed")]
    UnclosedElement { tag: String },

    /// A closing tag did not match the innermost open element
    #[error("Mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedTag { expected: String, found: String },

    /// The document contains no root element
    #[error("Document has no root element")]
    EmptyDocument,

    /// Element content found after the root element was closed
    #[error("Unexpected content after root element: <{tag}>")]
    TrailingContent { tag: String },
}

pub type Result<T> = result::Result<T, ParseError>;
