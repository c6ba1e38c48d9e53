//! Fixed prompt text for the enrichment calls

pub(crate) const QUERY_GENERATION_SYSTEM: &str = "You are an expert in scientific literature search and PubMed query optimization, specializing in metabolomics and analytical chemistry.";

pub(crate) const CLASSIFICATION_SYSTEM: &str =
    "You are a scientific literature analyst specializing in metabolomics research.";

/// User message asking for a PubMed query for `natural_language_query`
pub(crate) fn query_generation(natural_language_query: &str) -> String {
    format!(
        r#"You are an expert in PubMed search query optimization and metabolomics research terminology.

Convert the following natural language search request into an optimized PubMed search query.

User's request: "{natural_language_query}"

Your task:
1. Extract the main keywords and concepts
2. Identify synonyms, abbreviations, and related terms that should be included
3. Construct a PubMed query using boolean operators (AND, OR) and parentheses
4. Use OR to group synonyms/related terms, and AND to combine different concepts
5. Consider common variations (e.g., "SRM 1950" vs "SRM1950", "HILIC" vs "hydrophilic interaction liquid chromatography")

Examples:
- Input: "Find databases related to SRM 1950 and HILIC"
  Output: (SRM 1950 OR SRM1950 OR "standard reference material 1950") AND (HILIC OR "hydrophilic interaction liquid chromatography" OR "hydrophilic interaction chromatography") AND (database OR repository OR data)

- Input: "metabolomics studies using mass spectrometry"
  Output: (metabolomics OR metabolome OR "metabolic profiling") AND ("mass spectrometry" OR MS OR "mass spec" OR LC-MS OR GC-MS)

Respond in JSON format with:
- "pubmed_query": the optimized PubMed search query string
- "extracted_concepts": array of main concepts identified
- "synonyms_used": object mapping each concept to its synonyms/variations included
- "explanation": brief explanation of the query strategy (1-2 sentences)
"#
    )
}

/// User message asking for a dataset/label classification of `abstract_text`
pub(crate) fn classification(abstract_text: &str) -> String {
    format!(
        r#"Analyze the following metabolomics scientific abstract and provide a comprehensive classification.

## DATASET CLASSIFICATION (Primary)
Only classify as "has_dataset": true if the abstract EXPLICITLY mentions:
1. Data availability in a public repository (e.g., MetaboLights, Metabolomics Workbench, GNPS, etc.)
2. Data deposition with accession numbers
3. Clear statement that data is publicly accessible or available upon request

DO NOT classify as having a dataset if:
- The abstract only describes methods or analytical techniques
- It mentions using existing reference materials (like SRM 1950) without publishing new data
- It compares methods without explicit data availability statements
- Data availability is not mentioned or unclear

## ARTICLE TYPE LABELS
Assign appropriate labels from this list (can be multiple):
- "Method Development" - Focuses on developing, comparing, or optimizing analytical methods
- "Review" - Review article or meta-analysis
- "Application Study" - Applies metabolomics to study biological questions
- "Reference Material" - Characterizes reference materials or standards
- "Software/Tool" - Presents new software, databases, or computational tools

## METHOD TYPES (if Method Development label applies)
If the article is about method development, extract the analytical method types mentioned:
Examples: "LC-MS", "GC-MS", "NMR", "CE-MS", "HILIC", "UPLC", "QTOF", "Orbitrap", "FT-ICR", etc.
Only include if explicitly mentioned in the abstract.

Abstract:
{abstract_text}

Respond in JSON format with:
- "has_dataset": true or false (be STRICT - only true if data availability is explicitly stated)
- "confidence": "high", "medium", or "low"
- "reason": brief explanation of your decision (1-2 sentences)
- "data_availability": if has_dataset is true, extract the data availability statement or repository information; otherwise null
- "labels": array of applicable labels from the list above (e.g., ["Method Development", "Application Study"])
- "method_types": array of method types if Method Development label applies; otherwise empty array or null
"#
    )
}
