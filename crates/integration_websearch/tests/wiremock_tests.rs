//! Integration tests for web search clients using WireMock
//!
//! These tests mock HTTP responses to verify client behavior without
//! making actual API calls.

use integration_websearch::{
    BraveSearchClient, DuckDuckGoClient, SearchProvider, WebSearchClient, WebSearchConfig,
    WebSearchError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn brave_success_response() -> serde_json::Value {
    serde_json::json!({
        "query": { "original": "Latest AI trends in India" },
        "web": {
            "results": [
                {
                    "title": "India's AI mission",
                    "url": "https://indiaai.gov.in/",
                    "description": "India is investing in sovereign compute for AI."
                },
                {
                    "title": "Generative AI adoption",
                    "url": "https://example.com/genai-india",
                    "description": "Enterprises in India are piloting generative AI."
                }
            ]
        }
    })
}

/// A results page shaped like html.duckduckgo.com, with one ad block
fn duckduckgo_results_page() -> String {
    r##"<!DOCTYPE html>
<html><body><div id="links" class="results">
  <div class="result result--ad results_links">
    <h2 class="result__title"><a class="result__a" href="https://ads.example.com/">Sponsored</a></h2>
    <a class="result__snippet" href="https://ads.example.com/">Buy now</a>
  </div>
  <div class="result results_links results_links_deep web-result">
    <h2 class="result__title">
      <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fen.wikipedia.org%2Fwiki%2FArtificial_intelligence_in_India&amp;rut=1">Artificial intelligence in India</a>
    </h2>
    <a class="result__snippet" href="#">Artificial intelligence in India covers <b>research</b> and industry.</a>
  </div>
  <div class="result results_links results_links_deep web-result">
    <h2 class="result__title"><a class="result__a" href="https://indiaai.gov.in/">IndiaAI</a></h2>
    <a class="result__snippet" href="https://indiaai.gov.in/">National AI portal</a>
  </div>
</div></body></html>"##
        .to_string()
}

fn duckduckgo_config(server: &MockServer) -> WebSearchConfig {
    WebSearchConfig {
        duckduckgo_base_url: server.uri(),
        ..WebSearchConfig::for_testing()
    }
}

fn brave_config(server: &MockServer) -> WebSearchConfig {
    WebSearchConfig {
        brave_api_key: Some("test-api-key".to_string()),
        brave_base_url: format!("{}/res/v1", server.uri()),
        ..WebSearchConfig::for_testing()
    }
}

// =============================================================================
// Brave Search Client Tests
// =============================================================================

#[tokio::test]
async fn brave_search_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/res/v1/web/search"))
        .and(query_param("q", "Latest AI trends in India"))
        .and(query_param("count", "5"))
        .and(header("X-Subscription-Token", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brave_success_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = BraveSearchClient::new(&brave_config(&server)).unwrap();
    let response = client.search("Latest AI trends in India", 5).await.unwrap();

    assert_eq!(response.provider, "brave");
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].source, "indiaai.gov.in");
    assert_eq!(
        response.results[1].snippet,
        "Enterprises in India are piloting generative AI."
    );
}

#[tokio::test]
async fn brave_search_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "60"))
        .expect(1)
        .mount(&server)
        .await;

    let client = BraveSearchClient::new(&brave_config(&server)).unwrap();
    let result = client.search("test", 5).await;

    assert!(matches!(
        result,
        Err(WebSearchError::RateLimitExceeded {
            retry_after_secs: Some(60)
        })
    ));
}

#[tokio::test]
async fn brave_search_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = BraveSearchClient::new(&brave_config(&server)).unwrap();
    let result = client.search("test", 5).await;

    assert!(matches!(result, Err(WebSearchError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn brave_search_empty_results_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "web": { "results": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BraveSearchClient::new(&brave_config(&server)).unwrap();
    let response = client.search("xyznonexistent123", 5).await.unwrap();

    assert!(!response.has_results());
}

#[tokio::test]
async fn brave_search_blank_query_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = BraveSearchClient::new(&brave_config(&server)).unwrap();
    let result = client.search("   ", 5).await;

    assert!(matches!(result, Err(WebSearchError::InvalidQuery(_))));
}

// =============================================================================
// DuckDuckGo Client Tests
// =============================================================================

#[tokio::test]
async fn duckduckgo_search_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "AI in India"))
        .and(query_param("kp", "-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(duckduckgo_results_page())
                .insert_header("content-type", "text/html; charset=UTF-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = DuckDuckGoClient::new(&duckduckgo_config(&server)).unwrap();
    let response = client.search("AI in India", 5).await.unwrap();

    assert_eq!(response.provider, "duckduckgo");
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].title, "Artificial intelligence in India");
    assert_eq!(
        response.results[0].url,
        "https://en.wikipedia.org/wiki/Artificial_intelligence_in_India"
    );
    assert_eq!(
        response.results[0].snippet,
        "Artificial intelligence in India covers research and industry."
    );
    assert_eq!(response.results[1].source, "indiaai.gov.in");
}

#[tokio::test]
async fn duckduckgo_page_without_results_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><div class="no-results">No results found.</div></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = DuckDuckGoClient::new(&duckduckgo_config(&server)).unwrap();
    let response = client.search("xyznonexistent", 5).await.unwrap();

    assert!(response.results.is_empty());
}

#[tokio::test]
async fn duckduckgo_empty_body_is_empty_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = DuckDuckGoClient::new(&duckduckgo_config(&server)).unwrap();
    let response = client.search("Latest AI trends in India", 5).await.unwrap();

    assert!(response.results.is_empty());
}

#[tokio::test]
async fn duckduckgo_accepted_challenge_is_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(202).set_body_string("<html>challenge</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = DuckDuckGoClient::new(&duckduckgo_config(&server)).unwrap();
    let result = client.search("Latest AI trends in India", 5).await;

    assert!(matches!(
        result,
        Err(WebSearchError::RateLimitExceeded {
            retry_after_secs: None
        })
    ));
}

#[tokio::test]
async fn duckduckgo_server_error_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = DuckDuckGoClient::new(&duckduckgo_config(&server)).unwrap();
    let result = client.search("test", 5).await;

    assert!(matches!(result, Err(WebSearchError::ServiceUnavailable(_))));
}

// =============================================================================
// Combined WebSearchClient Tests
// =============================================================================

#[tokio::test]
async fn combined_client_prefers_brave() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brave_success_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = WebSearchClient::new(brave_config(&server)).unwrap();
    let response = client.search("AI", 5).await.unwrap();

    assert_eq!(response.provider, "brave");
}

#[tokio::test]
async fn combined_client_falls_back_on_brave_error() {
    let brave_server = MockServer::start().await;
    let ddg_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&brave_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(duckduckgo_results_page()))
        .expect(1)
        .mount(&ddg_server)
        .await;

    let config = WebSearchConfig {
        duckduckgo_base_url: ddg_server.uri(),
        ..brave_config(&brave_server)
    };

    let client = WebSearchClient::new(config).unwrap();
    let response = client.search("AI", 5).await.unwrap();

    assert_eq!(response.provider, "duckduckgo");
}

#[tokio::test]
async fn combined_client_falls_back_on_empty_brave_results() {
    let brave_server = MockServer::start().await;
    let ddg_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"web": {"results": []}})),
        )
        .mount(&brave_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(duckduckgo_results_page()))
        .expect(1)
        .mount(&ddg_server)
        .await;

    let config = WebSearchConfig {
        duckduckgo_base_url: ddg_server.uri(),
        ..brave_config(&brave_server)
    };

    let response = WebSearchClient::new(config)
        .unwrap()
        .search("AI", 5)
        .await
        .unwrap();

    assert_eq!(response.provider, "duckduckgo");
}

#[tokio::test]
async fn combined_client_without_fallback_reports_brave_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = WebSearchConfig {
        fallback_enabled: false,
        ..brave_config(&server)
    };

    let result = WebSearchClient::new(config).unwrap().search("AI", 5).await;

    assert!(matches!(result, Err(WebSearchError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn combined_client_caps_result_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brave_success_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = WebSearchConfig {
        max_results: 1,
        ..brave_config(&server)
    };

    let response = WebSearchClient::new(config)
        .unwrap()
        .search("AI", 10)
        .await
        .unwrap();

    assert_eq!(response.results.len(), 1);
}
