use bingo_rs::{Bing, ErrorKind, VideoSearchParams};
use chrono::{TimeZone, Utc};
use httpmock::{Method::GET, MockServer};

use crate::common::{API_KEY, client_for, fixture};

#[tokio::test]
async fn offline_video_search_decodes_fixture() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/bing/v5.0/videos/search")
            .query_param("q", "ferris")
            .query_param("count", "2")
            .query_param("offset", "0")
            .query_param("mkt", "en-US")
            .header("ocp-apim-subscription-key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("video_search", "ferris"));
    });

    let params = VideoSearchParams::new("ferris").count(2).offset(0).mkt("en-US");
    let bing = Bing::from_client(&client_for(&server));
    let resp = bing.search.video.search(&params).await.unwrap();
    mock.assert();

    assert_eq!(resp.type_, "Videos");
    assert_eq!(resp.total_estimated_matches, 842);
    assert_eq!(resp.next_offset, 2);
    assert_eq!(resp.value.len(), 2);

    let first = &resp.value[0];
    assert_eq!(first.creator.name, "Rustacean Station");
    assert_eq!(first.publisher[0].name, "YouTube");
    assert_eq!(first.duration, "PT3M21S");
    assert!(first.allow_https_embed);
    assert_eq!(first.thumbnail.height, 168);
    assert_eq!(
        first.date_published,
        Some(Utc.with_ymd_and_hms(2017, 3, 23, 21, 5, 30).unwrap())
    );

    let second = &resp.value[1];
    assert_eq!(second.video_id, "DEF456");
    assert_eq!(second.creator.name, "");
}

#[tokio::test]
async fn offline_video_status_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/bing/v5.0/videos/search");
        then.status(500).body("upstream failure");
    });

    let bing = Bing::from_client(&client_for(&server));
    let err = bing
        .search
        .video
        .search(&VideoSearchParams::new("ferris"))
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::Status);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn facade_routes_news_and_video_through_one_client() {
    let server = MockServer::start();
    let news = server.mock(|when, then| {
        when.method(GET)
            .path("/bing/v5.0/news/trendingtopics")
            .header("ocp-apim-subscription-key", API_KEY);
        then.status(200).body(r#"{"_type":"TrendingTopics","value":[]}"#);
    });
    let video = server.mock(|when, then| {
        when.method(GET)
            .path("/bing/v5.0/videos/search")
            .header("ocp-apim-subscription-key", API_KEY);
        then.status(200).body(r#"{"_type":"Videos","value":[]}"#);
    });

    let bing = Bing::from_client(&client_for(&server));
    let topics = bing.search.news.trending_topics().await.unwrap();
    let videos = bing
        .search
        .video
        .search(&VideoSearchParams::new("crab"))
        .await
        .unwrap();

    news.assert();
    video.assert();
    assert_eq!(topics.type_, "TrendingTopics");
    assert_eq!(videos.type_, "Videos");
}
