//! Integration tests for the Wikipedia client using wiremock

use integration_wikipedia::{EncyclopediaClient, WikipediaClient, WikipediaConfig, WikipediaError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn client_for(server: &MockServer) -> WikipediaClient {
    WikipediaClient::new(WikipediaConfig::for_testing(&format!("{}/w/api.php", server.uri())))
        .expect("client")
}

async fn mount_search(server: &MockServer, titles: &[&str]) {
    let hits: Vec<_> = titles
        .iter()
        .map(|t| serde_json::json!({"ns": 0, "title": t}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "batchcomplete": true,
            "query": {"search": hits}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn lookup_returns_article_extract() {
    let server = MockServer::start().await;
    mount_search(&server, &["Artificial intelligence in India"]).await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "extracts|info"))
        .and(query_param("explaintext", "1"))
        .and(query_param("titles", "Artificial intelligence in India"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": {"pages": [{
                "pageid": 42,
                "title": "Artificial intelligence in India",
                "extract": "AI adoption in India has grown rapidly.",
                "fullurl": "https://en.wikipedia.org/wiki/Artificial_intelligence_in_India"
            }]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = client_for(&server)
        .lookup("AI trends in India", 1)
        .await
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Artificial intelligence in India");
    assert_eq!(articles[0].extract, "AI adoption in India has grown rapidly.");
}

#[tokio::test]
async fn lookup_keeps_search_rank_order() {
    let server = MockServer::start().await;
    mount_search(&server, &["First", "Second"]).await;

    Mock::given(method("GET"))
        .and(query_param("prop", "extracts|info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": {"pages": [
                {"title": "Second", "extract": "two"},
                {"title": "First", "extract": "one"}
            ]}
        })))
        .mount(&server)
        .await;

    let articles = client_for(&server).lookup("ordering", 2).await.unwrap();

    let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn no_search_hits_skips_extract_request() {
    let server = MockServer::start().await;
    mount_search(&server, &[]).await;

    Mock::given(method("GET"))
        .and(query_param("prop", "extracts|info"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let articles = client_for(&server).lookup("qwertyuiop", 1).await.unwrap();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn api_error_object_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": {"code": "badvalue", "info": "Unrecognized value for parameter"}
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("anything", 1).await;

    assert!(matches!(result, Err(WikipediaError::ApiError { code, .. }) if code == "badvalue"));
}

#[tokio::test]
async fn server_error_is_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("anything", 1).await;

    assert!(matches!(result, Err(WikipediaError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("anything", 1).await;

    assert!(matches!(result, Err(WikipediaError::ParseError(_))));
}

#[tokio::test]
async fn search_error_wins_over_partial_hits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": {"code": "maxlag", "info": "Waiting for a database server"},
            "query": {"search": [{"ns": 0, "title": "Solar power"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("prop", "extracts|info"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("solar power", 1).await;

    assert!(matches!(result, Err(WikipediaError::ApiError { code, .. }) if code == "maxlag"));
}

#[tokio::test]
async fn extract_error_after_successful_search() {
    let server = MockServer::start().await;
    mount_search(&server, &["Solar power"]).await;

    Mock::given(method("GET"))
        .and(query_param("prop", "extracts|info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": {"code": "toomanyvalues", "info": "Too many values supplied"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("solar power", 1).await;

    assert!(
        matches!(result, Err(WikipediaError::ApiError { code, .. }) if code == "toomanyvalues")
    );
}
