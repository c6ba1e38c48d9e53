//! Route tests driving the router in-process, with E-utilities and the chat
//! completion endpoint mocked

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pubsearch_client::{
    BioRxivClient, ClientConfig, LlmClient, LlmConfig, PubMedClient, Searcher,
};
use pubsearch_server::{AppState, build_router};

const EFETCH_XML: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">38012345</PMID>
      <Article>
        <Journal>
          <JournalIssue><PubDate><Year>2023</Year></PubDate></JournalIssue>
          <Title>Analytical Chemistry</Title>
        </Journal>
        <ArticleTitle>HILIC profiling of SRM 1950 plasma</ArticleTitle>
        <Abstract><AbstractText>Data are deposited in MetaboLights.</AbstractText></Abstract>
        <AuthorList>
          <Author><LastName>Doe</LastName><ForeName>Jane</ForeName></Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

const ORIGIN: &str = "http://localhost:5173";

/// Router against `upstream` for both E-utilities and the LLM endpoint
fn app(upstream: &MockServer, openai_key: Option<&str>) -> Router {
    app_with_origins(upstream, openai_key, &[ORIGIN.to_string()])
}

fn app_with_origins(upstream: &MockServer, openai_key: Option<&str>, origins: &[String]) -> Router {
    let pubmed =
        PubMedClient::with_config(ClientConfig::new().with_base_url(upstream.uri())).unwrap();
    let llm = LlmClient::new(
        LlmConfig::new()
            .with_optional_api_key(openai_key.map(str::to_string))
            .with_base_url(format!("{}/v1", upstream.uri())),
    )
    .unwrap();

    let state = AppState::new(Searcher::new(pubmed, BioRxivClient::new()), llm);
    build_router(state, origins)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn completion(content: Value) -> Value {
    json!({
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content.to_string()},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_root_reports_service() {
    let upstream = MockServer::start().await;
    let request = Request::get("/").body(Body::empty()).unwrap();

    let (status, body) = send(app(&upstream, None), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Publication Search API", "version": "1.0"})
    );
}

#[tokio::test]
#[traced_test]
async fn test_search_returns_extracted_articles() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", r#""SRM 1950"[Title/Abstract] AND HILIC[Title/Abstract]"#))
        .and(query_param("retmax", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "esearchresult": {"count": "1", "idlist": ["38012345"]}
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "38012345"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_XML))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, None),
        "/search",
        json!({
            "keywords": "SRM 1950, HILIC",
            "max_results": 3,
            "search_fields": "title_abstract"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let articles = body.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["id"], "38012345");
    assert_eq!(articles[0]["title"], "HILIC profiling of SRM 1950 plasma");
    assert_eq!(articles[0]["authors"], json!(["Jane Doe"]));
    assert_eq!(articles[0]["abstract"], "Data are deposited in MetaboLights.");
    assert_eq!(articles[0]["publication_date"], "2023");
    assert_eq!(articles[0]["source"], "pubmed");
    assert_eq!(articles[0]["url"], "https://pubmed.ncbi.nlm.nih.gov/38012345/");
    assert_eq!(articles[0]["has_dataset"], Value::Null);
    assert!(logs_contain("Search completed"));
}

#[tokio::test]
async fn test_invalid_source_is_rejected_before_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, None),
        "/search",
        json!({"keywords": "HILIC", "source": "scholar"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"detail": "Invalid source. Use 'pubmed' or 'biorxiv'"})
    );
}

#[tokio::test]
async fn test_invalid_options_are_bad_requests() {
    let upstream = MockServer::start().await;

    for body in [
        json!({"keywords": "HILIC", "search_mode": "NOT"}),
        json!({"keywords": "HILIC", "search_fields": "mesh"}),
        json!({"keywords": "HILIC", "max_results": 0}),
    ] {
        let (status, response) = post_json(app(&upstream, None), "/search", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(response["detail"].is_string());
    }

    let (_, response) = post_json(
        app(&upstream, None),
        "/search",
        json!({"keywords": "HILIC", "search_mode": "NOT"}),
    )
    .await;
    assert_eq!(
        response["detail"],
        "Invalid search_mode 'NOT'. Use 'AND' or 'OR'"
    );
}

#[tokio::test]
async fn test_missing_keywords_is_unprocessable() {
    let upstream = MockServer::start().await;

    let (status, body) = post_json(app(&upstream, None), "/search", json!({"source": "pubmed"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("keywords"));
}

#[tokio::test]
async fn test_biorxiv_search_is_empty() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, None),
        "/search",
        json!({"keywords": "metabolomics", "source": "biorxiv"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_esearch_failure_is_a_server_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstream)
        .await;

    let (status, body) =
        post_json(app(&upstream, None), "/search", json!({"keywords": "HILIC"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_llm_routes_require_api_key() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, None),
        "/generate-query",
        json!({"natural_language_query": "HILIC studies"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "OpenAI API key not configured"}));

    let (status, body) = post_json(
        app(&upstream, None),
        "/classify",
        json!({"article_id": "1", "abstract": "text"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "OpenAI API key not configured"}));
}

#[tokio::test]
async fn test_generate_query_fills_missing_keys() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion(json!({"pubmed_query": "HILIC AND plasma"}))),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, Some("sk-test")),
        "/generate-query",
        json!({"natural_language_query": "HILIC in plasma"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "pubmed_query": "HILIC AND plasma",
            "extracted_concepts": [],
            "synonyms_used": {},
            "explanation": ""
        })
    );
}

#[tokio::test]
async fn test_generate_query_reports_upstream_detail() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, Some("sk-bad")),
        "/generate-query",
        json!({"natural_language_query": "HILIC"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["detail"],
        "Query generation failed: [401] Incorrect API key provided"
    );
}

#[tokio::test]
async fn test_classify_echoes_article_id_with_defaults() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "has_dataset": true,
            "confidence": "HIGH",
            "labels": ["Application"]
        }))))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, Some("sk-test")),
        "/classify",
        json!({"article_id": "38012345", "abstract": "Data are deposited in MetaboLights."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "article_id": "38012345",
            "has_dataset": true,
            "confidence": "high",
            "reason": "Unable to determine",
            "data_availability": null,
            "labels": ["Application"],
            "method_types": []
        })
    );
}

#[tokio::test]
async fn test_classify_malformed_completion() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        app(&upstream, Some("sk-test")),
        "/classify",
        json!({"article_id": "1", "abstract": "text"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Classification error: ")
    );
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let upstream = MockServer::start().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/search")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app(&upstream, None).oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
}

#[tokio::test]
async fn test_cors_ignores_unlisted_origin() {
    let upstream = MockServer::start().await;
    let request = Request::get("/")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = app(&upstream, None).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_cors_wildcard_mirrors_any_origin() {
    let upstream = MockServer::start().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/classify")
        .header(header::ORIGIN, "http://lab.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app_with_origins(&upstream, None, &["*".to_string()])
        .oneshot(request)
        .await
        .unwrap();
    let headers = response.headers();

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://lab.example");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
