use bingo_rs::{Bing, VideoSearchParams};

#[tokio::test]
#[ignore]
async fn live_video_search_smoke_and_or_record() {
    let Some(key) = crate::common::live_api_key() else {
        return;
    };
    let bing = Bing::new(key).unwrap();

    let resp = bing
        .search
        .video
        .search(&VideoSearchParams::new("ferris").count(5))
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert_eq!(resp.type_, "Videos");
        assert!(!resp.value.is_empty(), "expected at least one video");
    }
}
