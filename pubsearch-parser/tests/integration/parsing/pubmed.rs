//! EFetch record extraction tests against fixture documents
//!
//! Fixtures live in `tests/integration/test_data/efetch` and mirror the layout of real
//! EFetch responses (DOCTYPE, nested `MedlineCitation`/`PubmedData`, inline markup).

#[path = "../common/mod.rs"]
mod common;

use rstest::rstest;
use tracing_test::traced_test;

use pubsearch_parser::{Source, extract_articles};

use common::{efetch_fixture_names, read_efetch_fixture};

#[test]
fn test_full_records_are_extracted_in_document_order() {
    let xml = read_efetch_fixture("metabolomics_pair.xml");
    let articles = extract_articles(&xml, &["38012345", "37999999"]);

    assert_eq!(articles.len(), 2);
    let first = &articles[0];
    assert_eq!(first.id, "38012345");
    assert_eq!(
        first.title,
        "Untargeted LC-MS metabolomics of human plasma in type 2 diabetes."
    );
    assert_eq!(first.authors, vec!["Jane A Smith", "Hans Müller"]);
    assert_eq!(
        first.abstract_text,
        "Plasma metabolite profiles & insulin resistance."
    );
    assert_eq!(first.publication_date.as_deref(), Some("2024"));
    assert_eq!(
        first.journal.as_deref(),
        Some("Metabolomics : Official journal of the Metabolomic Society")
    );
    assert_eq!(first.source, Source::PubMed);
    assert_eq!(first.url, "https://pubmed.ncbi.nlm.nih.gov/38012345/");
    assert_eq!(first.is_open_access, Some(true));
    assert_eq!(first.has_dataset, None);
    assert_eq!(first.labels, None);
}

#[test]
fn test_second_record_uses_fallbacks() {
    let xml = read_efetch_fixture("metabolomics_pair.xml");
    let articles = extract_articles(&xml, &["38012345", "37999999"]);
    let second = &articles[1];

    assert_eq!(second.id, "37999999");
    assert_eq!(second.title, "NMR spectroscopy for lipidomics: a review");
    assert_eq!(second.authors, vec!["Tanaka"]);
    assert_eq!(second.abstract_text, "No abstract available");
    // MedlineDate only, no Year
    assert_eq!(second.publication_date, None);
    assert_eq!(second.journal.as_deref(), Some("Anal Chem"));
    assert_eq!(second.is_open_access, Some(false));
}

#[test]
#[traced_test]
fn test_sparse_record_takes_placeholders() {
    let xml = read_efetch_fixture("sparse_record.xml");
    let articles = extract_articles(&xml, &["1", "2"]);

    assert_eq!(articles.len(), 1);
    let article = &articles[0];
    assert_eq!(article.id, "unknown");
    assert_eq!(article.title, "No title");
    assert_eq!(article.abstract_text, "No abstract available");
    assert!(article.authors.is_empty());
    assert_eq!(article.publication_date, None);
    assert_eq!(article.journal, None);
    assert_eq!(article.url, "https://pubmed.ncbi.nlm.nih.gov/unknown/");
    assert_eq!(article.is_open_access, Some(true));

    assert!(logs_contain("different number of articles"));
}

#[traced_test]
#[rstest]
#[case::truncated("<PubmedArticleSet><PubmedArticle><PMID>1</PMID>")]
#[case::mismatched("<PubmedArticleSet><PubmedArticle></PubmedArticleSet>")]
#[case::not_xml("Service temporarily unavailable")]
#[case::empty("")]
fn test_malformed_documents_yield_no_articles(#[case] xml: &str) {
    assert!(extract_articles(xml, &["1"]).is_empty());
    assert!(logs_contain("Failed to parse EFetch XML"));
}

#[test]
fn test_articles_outside_a_set_are_still_found() {
    let xml = "<Wrapper><Batch><PubmedArticle><PMID>7</PMID></PubmedArticle></Batch></Wrapper>";
    let articles = extract_articles(xml, &["7"]);
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, "7");
}

#[test]
fn test_root_article_is_not_counted() {
    let xml = "<PubmedArticle><PMID>7</PMID></PubmedArticle>";
    let ids: &[&str] = &[];
    assert!(extract_articles(xml, ids).is_empty());
}

#[test]
fn test_extraction_is_idempotent_for_every_fixture() {
    let names = efetch_fixture_names();
    assert!(!names.is_empty());

    for name in names {
        let xml = read_efetch_fixture(&name);
        let ids: &[&str] = &[];
        assert_eq!(
            extract_articles(&xml, ids),
            extract_articles(&xml, ids),
            "extraction of {name} is not deterministic"
        );
    }
}

#[test]
fn test_articles_serialize_with_wire_keys() {
    let xml = read_efetch_fixture("metabolomics_pair.xml");
    let articles = extract_articles(&xml, &["38012345", "37999999"]);
    let json = serde_json::to_value(&articles).unwrap();

    assert_eq!(json[0]["abstract"], "Plasma metabolite profiles & insulin resistance.");
    assert_eq!(json[0]["source"], "pubmed");
    assert!(json[1]["publication_date"].is_null());
    assert!(json[1]["has_dataset"].is_null());
}
