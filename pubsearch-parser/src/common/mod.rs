//! XML plumbing shared by the record extractors

pub mod tree;
pub mod xml_utils;

pub use tree::{Descendants, Element, parse_document};
pub use xml_utils::strip_inline_html_tags;
