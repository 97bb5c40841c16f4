//! Integration tests for `MissionsClient::fetch_missions`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made. Covers the happy path, the empty page,
//! the promo filter, retry behaviour, and the error variants.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vbwatch_scraper::{MissionsClient, ScrapeError};

/// Builds a `MissionsClient` suitable for tests: 5-second timeout,
/// descriptive UA, no retries.
fn test_client() -> MissionsClient {
    MissionsClient::new(5, "vbwatch-test/0.1", 0, 0).expect("failed to build test MissionsClient")
}

fn missions_page_html() -> &'static str {
    r#"
    <html><body>
    <div class="news-link">
        <div class="infonotice">500 80PL Defend in Stonewood</div>
        <div class="infonotice">Use code "iFeral" in the item shop!</div>
        <div class="infonotice">300 90 Survive the Storm in Canny Valley</div>
    </div>
    </body></html>
    "#
}

#[tokio::test]
async fn fetch_missions_parses_page_in_document_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timed-missions/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(missions_page_html()))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/timed-missions/", server.uri());
    let missions = client.fetch_missions(&url).await.unwrap();

    assert_eq!(missions.len(), 2);
    assert_eq!(missions[0].amount, "500");
    assert_eq!(missions[0].power_level, "80");
    assert_eq!(missions[0].mission_type, "PL Defend");
    assert_eq!(missions[0].area, "Stonewood");
    assert_eq!(missions[1].area, "Canny Valley");
}

#[tokio::test]
async fn fetch_missions_empty_page_returns_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timed-missions/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/timed-missions/", server.uri());
    let missions = client.fetch_missions(&url).await.unwrap();
    assert!(missions.is_empty());
}

#[tokio::test]
async fn fetch_missions_propagates_not_found_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timed-missions/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = MissionsClient::new(5, "vbwatch-test/0.1", 3, 0).unwrap();
    let url = format!("{}/timed-missions/", server.uri());
    let err = client.fetch_missions(&url).await.unwrap_err();
    assert!(
        matches!(err, ScrapeError::UnexpectedStatus { status: 404, .. }),
        "expected UnexpectedStatus(404), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_missions_retries_server_errors_until_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timed-missions/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/timed-missions/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(missions_page_html()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MissionsClient::new(5, "vbwatch-test/0.1", 3, 0).unwrap();
    let url = format!("{}/timed-missions/", server.uri());
    let missions = client.fetch_missions(&url).await.unwrap();
    assert_eq!(missions.len(), 2);
}

#[tokio::test]
async fn fetch_missions_surfaces_rate_limiting_with_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timed-missions/"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "120"))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/timed-missions/", server.uri());
    let err = client.fetch_missions(&url).await.unwrap_err();
    assert!(
        matches!(
            err,
            ScrapeError::RateLimited {
                retry_after_secs: 120
            }
        ),
        "expected RateLimited(120), got: {err:?}"
    );
}
