//! Record extraction for PubMed EFetch responses
//!
//! Every `PubmedArticle` element below the document root becomes one [`Article`].
//! Missing sub-fields are replaced with placeholders so a single defective record
//! never prevents its siblings from being extracted.

use tracing::{debug, instrument, warn};

use super::models::{Article, Source};
use crate::common::{Element, parse_document};

/// Candidate element paths tried in order; the first one that yields text wins.
///
/// The first step of a path matches any descendant of the article element, every
/// further step a direct child of the previous one.
type FieldPaths = &'static [&'static [&'static str]];

const PMID_PATHS: FieldPaths = &[&["PMID"]];
const TITLE_PATHS: FieldPaths = &[&["ArticleTitle"]];
const ABSTRACT_PATHS: FieldPaths = &[&["AbstractText"]];
const YEAR_PATHS: FieldPaths = &[&["PubDate", "Year"]];
const JOURNAL_PATHS: FieldPaths = &[&["Journal", "Title"], &["Journal", "ISOAbbreviation"]];

const UNKNOWN_ID: &str = "unknown";
const NO_TITLE: &str = "No title";
const NO_ABSTRACT: &str = "No abstract available";

/// Evaluate `candidates` in order and return the text of the first match
fn first_text<'a>(element: &'a Element, candidates: FieldPaths) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|path| element.find_path(path).and_then(Element::text))
}

/// Display names of every `Author` in document order
///
/// `"<ForeName> <LastName>"` when both are present, the bare last name otherwise.
/// Entries without a last name (collective names, investigators) are skipped.
fn author_names(element: &Element) -> Vec<String> {
    element
        .find_all("Author")
        .filter_map(|author| {
            let last_name = author.child("LastName").and_then(Element::text)?;
            Some(match author.child("ForeName").and_then(Element::text) {
                Some(fore_name) => format!("{fore_name} {last_name}"),
                None => last_name.to_string(),
            })
        })
        .collect()
}

/// An article counts as open access when it has a PMC identifier or a publication
/// type mentioning open access.
fn is_open_access(element: &Element) -> bool {
    let has_pmc_id = element
        .find_all("ArticleId")
        .any(|id| id.attr("IdType") == Some("pmc"));

    has_pmc_id
        || element
            .find_all("PublicationType")
            .filter_map(Element::text)
            .any(|text| text.to_lowercase().contains("open access"))
}

/// Build an [`Article`] from a single `PubmedArticle` element
///
/// Never fails: absent fields take the placeholders `"unknown"`, `"No title"` and
/// `"No abstract available"`, or `None` for optional fields.
pub fn extract_article(element: &Element) -> Article {
    let source = Source::PubMed;
    let id = first_text(element, PMID_PATHS)
        .unwrap_or(UNKNOWN_ID)
        .to_string();

    Article {
        title: first_text(element, TITLE_PATHS)
            .unwrap_or(NO_TITLE)
            .to_string(),
        authors: author_names(element),
        abstract_text: first_text(element, ABSTRACT_PATHS)
            .unwrap_or(NO_ABSTRACT)
            .to_string(),
        publication_date: first_text(element, YEAR_PATHS).map(str::to_string),
        source,
        url: source.article_url(&id),
        journal: first_text(element, JOURNAL_PATHS).map(str::to_string),
        is_open_access: Some(is_open_access(element)),
        has_dataset: None,
        classification_reason: None,
        data_availability: None,
        labels: None,
        method_types: None,
        id,
    }
}

/// Extract all articles from an EFetch XML response
///
/// `expected_ids` is the identifier list the response was requested for. It is only
/// used for diagnostics: articles are returned in document order whether or not they
/// match the list.
///
/// A document that cannot be parsed yields an empty list and a logged warning.
///
/// # Example
///
/// ```
/// use pubsearch_parser::extract_articles;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article><ArticleTitle>Example Article</ArticleTitle></Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let articles = extract_articles(xml, &["12345678"]);
/// assert_eq!(articles.len(), 1);
/// assert_eq!(articles[0].title, "Example Article");
/// assert_eq!(articles[0].abstract_text, "No abstract available");
/// ```
#[instrument(skip(xml, expected_ids), fields(xml_size = xml.len(), expected = expected_ids.len()))]
pub fn extract_articles<S: AsRef<str>>(xml: &str, expected_ids: &[S]) -> Vec<Article> {
    let root = match parse_document(xml) {
        Ok(root) => root,
        Err(e) => {
            warn!(error = %e, "Failed to parse EFetch XML, returning no articles");
            return Vec::new();
        }
    };

    let articles: Vec<Article> = root
        .find_all("PubmedArticle")
        .map(extract_article)
        .collect();

    if articles.len() != expected_ids.len() {
        debug!(
            requested = expected_ids.len(),
            extracted = articles.len(),
            "EFetch returned a different number of articles than requested"
        );
    }

    articles
}
