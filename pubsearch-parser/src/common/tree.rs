//! A small owned element tree built from `quick_xml::Reader` events
//!
//! EFetch records are shallow and the extractor only needs "first element named X
//! anywhere below Y" lookups, so the whole document is materialized once and then
//! queried with [`Element::find_all`] and [`Element::find_path`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::instrument;

use super::xml_utils::strip_inline_html_tags;
use crate::error::{ParseError, Result};

/// An XML element with its attributes, direct text content and child elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|err| ParseError::XmlError(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| ParseError::XmlError(err.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Tag name of this element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute `name`, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct text content, whitespace-trimmed
    ///
    /// Returns `None` when the element carries no text of its own (an empty element
    /// or one that only contains child elements).
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Direct children in document order
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// First direct child named `name`
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All elements below this one in document (pre-)order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// All descendants named `name`, in document order
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |e| e.name == name)
    }

    /// Resolve a relative path such as `["PubDate", "Year"]`
    ///
    /// The first step matches any descendant; every further step matches a direct
    /// child of the previous one. Returns the first match, anchored on descendants in
    /// document order.
    pub fn find_path(&self, path: &[&str]) -> Option<&Element> {
        let (first, rest) = path.split_first()?;
        self.descendants()
            .filter(|e| e.name == *first)
            .find_map(|anchor| anchor.resolve_children(rest))
    }

    fn resolve_children(&self, path: &[&str]) -> Option<&Element> {
        match path.split_first() {
            None => Some(self),
            Some((step, rest)) => self
                .children
                .iter()
                .filter(|c| c.name == *step)
                .find_map(|c| c.resolve_children(rest)),
        }
    }
}

/// Pre-order iterator over the descendants of an [`Element`]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// Create a configured `Reader` from a string slice.
///
/// `expand_empty_elements(true)` turns `<tag/>` into `Start` + `End` events so the
/// tree builder only has to handle one shape. Text is not trimmed by the reader;
/// [`Element::text`] trims the collected content instead.
fn make_reader(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().expand_empty_elements = true;
    reader
}

/// Parse a whole XML document into its root [`Element`]
///
/// Inline formatting tags are stripped first (see
/// [`strip_inline_html_tags`](super::xml_utils::strip_inline_html_tags)). The
/// document must be well formed: exactly one root element, every element closed by a
/// matching tag.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed XML, mismatched or missing closing tags,
/// a document without a root element, or elements following the root.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_document(xml: &str) -> Result<Element> {
    let cleaned = strip_inline_html_tags(xml);
    let mut reader = make_reader(&cleaned);
    let mut buf = Vec::new();

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let element = Element::from_start(e)?;
                if root.is_some() {
                    return Err(ParseError::TrailingContent { tag: element.name });
                }
                stack.push(element);
            }
            Ok(Event::End(ref e)) => {
                let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let element = stack.pop().ok_or_else(|| {
                    ParseError::XmlError(format!("closing tag </{found}> without an open element"))
                })?;
                if element.name != found {
                    return Err(ParseError::MismatchedTag {
                        expected: element.name,
                        found,
                    });
                }
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| ParseError::XmlError(err.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::XmlError(e.to_string())),
            // Declarations, DOCTYPE, comments and processing instructions carry no data
            Ok(_) => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.into_iter().next() {
        return Err(ParseError::UnclosedElement { tag: open.name });
    }

    root.ok_or(ParseError::EmptyDocument)
}
