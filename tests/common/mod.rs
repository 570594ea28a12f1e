#![allow(dead_code)]

use bingo_rs::BingClient;
use httpmock::MockServer;
use std::{env, fs, path::Path};
use url::Url;

pub const API_KEY: &str = "test-subscription-key";

/// Path prefix the mock server serves the API under, mirroring the real host.
pub const API_ROOT: &str = "/bing/v5.0/";

pub fn fixture(endpoint: &str, key: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{key}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose API root points at `server`.
pub fn client_for(server: &MockServer) -> BingClient {
    BingClient::builder(API_KEY)
        .base_url(Url::parse(&format!("{}{}", server.base_url(), API_ROOT)).unwrap())
        .build()
        .unwrap()
}

pub fn is_recording() -> bool {
    env::var("BINGO_RECORD").ok().as_deref() == Some("1")
}

pub fn live_or_record_enabled() -> bool {
    env::var("BINGO_LIVE").ok().as_deref() == Some("1") || is_recording()
}

/// The key for live runs, when live runs are enabled and a key is present.
pub fn live_api_key() -> Option<String> {
    if !live_or_record_enabled() {
        return None;
    }
    env::var("BING_API_KEY").ok().filter(|k| !k.is_empty())
}
