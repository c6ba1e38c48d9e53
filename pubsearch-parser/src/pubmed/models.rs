use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::deserializers::{deserialize_reason, null_as_default};

/// Literature backend an article was retrieved from
///
/// # Example
///
/// ```
/// use pubsearch_parser::Source;
///
/// let source: Source = "pubmed".parse().unwrap();
/// assert_eq!(source, Source::PubMed);
/// assert_eq!(source.article_url("31978945"), "https://pubmed.ncbi.nlm.nih.gov/31978945/");
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    #[serde(rename = "pubmed")]
    PubMed,
    #[serde(rename = "biorxiv")]
    BioRxiv,
}

impl Source {
    /// Tag used in requests and in serialized articles
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::PubMed => "pubmed",
            Source::BioRxiv => "biorxiv",
        }
    }

    /// Canonical landing page for a record of this source
    pub fn article_url(&self, id: &str) -> String {
        match self {
            Source::PubMed => format!("https://pubmed.ncbi.nlm.nih.gov/{id}/"),
            Source::BioRxiv => format!("https://www.biorxiv.org/content/{id}"),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a source tag is neither `pubmed` nor `biorxiv`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid source '{0}'. Use 'pubmed' or 'biorxiv'")]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pubmed" => Ok(Source::PubMed),
            "biorxiv" => Ok(Source::BioRxiv),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

/// A normalized article record
///
/// Created by the record extractor from one EFetch `PubmedArticle` element. The
/// enrichment fields (`has_dataset` onwards) stay `None` until
/// [`Article::apply_classification`] is called.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Article {
    /// External accession (PMID for PubMed); `"unknown"` when the record has none
    pub id: String,
    pub title: String,
    /// Display names in document order
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Publication year
    pub publication_date: Option<String>,
    pub source: Source,
    pub url: String,
    pub journal: Option<String>,
    pub is_open_access: Option<bool>,
    pub has_dataset: Option<bool>,
    pub classification_reason: Option<String>,
    pub data_availability: Option<String>,
    /// Article type labels, e.g. "Method Development", "Review"
    pub labels: Option<Vec<String>>,
    /// Analytical methods, e.g. "LC-MS", "NMR"
    pub method_types: Option<Vec<String>>,
}

impl Article {
    /// Copy a classification verdict onto the article's enrichment fields
    pub fn apply_classification(&mut self, classification: &ClassificationResult) {
        self.has_dataset = Some(classification.has_dataset);
        self.classification_reason = Some(classification.reason.clone());
        self.data_availability = classification.data_availability.clone();
        self.labels = Some(classification.labels.clone());
        self.method_types = Some(classification.method_types.clone());
    }
}

/// Confidence reported alongside a classification
///
/// Deserialization is case-insensitive; unrecognized or missing values become
/// [`Confidence::Low`].
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    #[default]
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Dataset-availability and topical classification of an abstract
///
/// Every key is optional in the JSON form; missing keys (and explicit `null`s) take
/// the defaults `false`, `low`, `"Unable to determine"`, `null`, `[]`, `[]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_dataset: bool,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(
        default = "ClassificationResult::default_reason",
        deserialize_with = "deserialize_reason"
    )]
    pub reason: String,
    #[serde(default)]
    pub data_availability: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method_types: Vec<String>,
}

impl ClassificationResult {
    pub(crate) const DEFAULT_REASON: &'static str = "Unable to determine";

    fn default_reason() -> String {
        Self::DEFAULT_REASON.to_string()
    }
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            has_dataset: false,
            confidence: Confidence::Low,
            reason: Self::default_reason(),
            data_availability: None,
            labels: Vec::new(),
            method_types: Vec::new(),
        }
    }
}
