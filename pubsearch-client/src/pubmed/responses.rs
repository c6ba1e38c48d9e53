use serde::{Deserialize, Serialize};

/// ESearch JSON envelope
///
/// Every level is optional: a body without `esearchresult` or `idlist` is read as an
/// empty identifier list.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(default)]
    pub esearchresult: Option<ESearchData>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub idlist: Option<Vec<String>>,
    /// How PubMed interpreted and translated the search query
    #[serde(default)]
    pub querytranslation: Option<String>,
}

impl ESearchResult {
    /// Identifiers in upstream order, empty when the body carries none
    pub fn into_ids(self) -> Vec<String> {
        self.esearchresult
            .and_then(|data| data.idlist)
            .unwrap_or_default()
    }
}
