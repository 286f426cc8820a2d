//! Integration tests for the arXiv client using wiremock

use integration_arxiv::{ArxivClient, ArxivConfig, ArxivError, PreprintClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query</title>
  <entry>
    <id>http://arxiv.org/abs/2405.11111v1</id>
    <published>2024-05-17T10:00:00Z</published>
    <title>AI Adoption in Indian Agriculture</title>
    <summary>A survey of machine learning deployments on Indian farms.</summary>
    <author><name>Meera Iyer</name></author>
    <link href="http://arxiv.org/abs/2405.11111v1" rel="alternate" type="text/html"/>
  </entry>
</feed>"#;

fn client_for(server: &MockServer) -> ArxivClient {
    ArxivClient::new(ArxivConfig::for_testing(&server.uri())).expect("client")
}

#[tokio::test]
async fn search_parses_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:AI in India"))
        .and(query_param("max_results", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/atom+xml")
                .set_body_string(FEED),
        )
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server).search("AI in India", 2).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "AI Adoption in Indian Agriculture");
    assert_eq!(entries[0].authors, vec!["Meera Iyer"]);
}

#[tokio::test]
async fn requested_count_is_capped_by_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("max_results", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).search("anything", 25).await.unwrap();
}

#[tokio::test]
async fn empty_feed_is_ok_and_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>none</title></feed>"#,
        ))
        .mount(&server)
        .await;

    let entries = client_for(&server).search("zzzzzz", 2).await.unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn server_error_is_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).search("anything", 2).await;

    assert!(matches!(result, Err(ArxivError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn html_error_page_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>busy</body></html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).search("anything", 2).await;

    assert!(matches!(result, Err(ArxivError::ParseError(_))));
}
