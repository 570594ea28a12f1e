use bingo_rs::{Bing, BingClient, BingError, ErrorKind, NewsCategoryParams, NewsSearchParams};
use httpmock::{Method::GET, MockServer};
use url::Url;

use crate::common::client_for;

#[tokio::test]
async fn status_error_with_undecodable_body_keeps_status_and_decode_source() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/bing/v5.0/news/");
        then.status(403).body("<html>Forbidden</html>");
    });

    let bing = Bing::from_client(&client_for(&server));
    let err = bing
        .search
        .news
        .category(&NewsCategoryParams::new())
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::Status);
    assert_eq!(err.status(), Some(403));
    match err {
        BingError::Status { status, url, source } => {
            assert_eq!(status, 403);
            assert!(url.contains("/bing/v5.0/news/"));
            assert!(source.is_syntax());
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_error_with_mismatched_json_body_is_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/bing/v5.0/news/search");
        then.status(429)
            .header("content-type", "application/json")
            .body(r#"{"_type":"ErrorResponse","value":"rate limit exceeded"}"#);
    });

    let bing = Bing::from_client(&client_for(&server));
    let err = bing
        .search
        .news
        .search(&NewsSearchParams::new("golang"))
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.status(), Some(429));
    match err {
        BingError::Status { source, .. } => assert!(source.is_data()),
        other => panic!("expected Status error, got {other:?}"),
    }
}

// The provider answers quota errors with a JSON object that shares no fields with the
// envelope. It decodes into an empty envelope, and that is what the caller receives.
#[tokio::test]
async fn status_error_body_that_decodes_is_returned_as_value() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/bing/v5.0/news/");
        then.status(403)
            .header("content-type", "application/json")
            .body(r#"{"statusCode":403,"message":"Out of call volume quota. Quota will be replenished in 2.12:34:56."}"#);
    });

    let bing = Bing::from_client(&client_for(&server));
    let resp = bing
        .search
        .news
        .category(&NewsCategoryParams::new())
        .await
        .unwrap();
    mock.assert();

    assert_eq!(resp, bingo_rs::NewsCategory::default());
}

#[tokio::test]
async fn status_error_body_with_type_tag_is_partially_populated() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/bing/v5.0/news/trendingtopics");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"_type":"ErrorResponse","errors":[{"code":"InvalidAuthorization","message":"Missing key"}]}"#);
    });

    let bing = Bing::from_client(&client_for(&server));
    let resp = bing.search.news.trending_topics().await.unwrap();
    mock.assert();

    assert_eq!(resp.type_, "ErrorResponse");
    assert!(resp.value.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Port 9 (discard) on loopback is not expected to accept connections.
    let client = BingClient::builder("k")
        .base_url(Url::parse("http://127.0.0.1:9/bing/v5.0/").unwrap())
        .build()
        .unwrap();

    let err = Bing::from_client(&client)
        .search
        .news
        .trending_topics()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, BingError::Http(_)));
    assert_eq!(err.status(), None);
}
