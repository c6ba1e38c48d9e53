//! Search mode and field-scope options for the query compiler

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How comma-separated terms are combined, and the boolean operators of the
/// explicit grammar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    #[default]
    And,
    Or,
}

impl SearchMode {
    /// Uppercase operator keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::And => "AND",
            SearchMode::Or => "OR",
        }
    }

    /// Recognize a bare `and`/`or` word, in any case
    pub(crate) fn from_word(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(SearchMode::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(SearchMode::Or)
        } else {
            None
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchMode::from_word(s.trim()).ok_or_else(|| InvalidOption {
            option: "search_mode",
            value: s.to_string(),
            expected: "'AND' or 'OR'",
        })
    }
}

/// Document fields a search is restricted to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// No restriction
    #[default]
    All,
    Title,
    Abstract,
    TitleAbstract,
}

impl SearchField {
    /// Field tag appended to every term, empty for [`SearchField::All`]
    pub fn tag(&self) -> &'static str {
        match self {
            SearchField::All => "",
            SearchField::Title => "[Title]",
            SearchField::Abstract => "[Abstract]",
            SearchField::TitleAbstract => "[Title/Abstract]",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::All => "all",
            SearchField::Title => "title",
            SearchField::Abstract => "abstract",
            SearchField::TitleAbstract => "title_abstract",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SearchField::All),
            "title" => Ok(SearchField::Title),
            "abstract" => Ok(SearchField::Abstract),
            "title_abstract" => Ok(SearchField::TitleAbstract),
            _ => Err(InvalidOption {
                option: "search_fields",
                value: s.to_string(),
                expected: "'all', 'title', 'abstract' or 'title_abstract'",
            }),
        }
    }
}

/// Error returned when a search option string is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {option} '{value}'. Use {expected}")]
pub struct InvalidOption {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}
