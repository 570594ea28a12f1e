//! Centralized constants for default endpoints, headers and UA.

/// Identifies this crate to the provider unless overridden on the builder.
pub(crate) const USER_AGENT: &str = concat!("bingo-rs/", env!("CARGO_PKG_VERSION"));

/// Bing Search v5 API root. Endpoint paths are joined onto it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.cognitive.microsoft.com/bing/v5.0/";

/// Header carrying the subscription key on every request.
pub(crate) const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// News root, relative to the API root (category listing lives here).
pub(crate) const NEWS_PATH: &str = "news/";

/// News keyword search, relative to the news root.
pub(crate) const NEWS_SEARCH_PATH: &str = "search";

/// Trending topics, relative to the news root.
pub(crate) const NEWS_TRENDING_PATH: &str = "trendingtopics";

/// Video keyword search, relative to the API root.
pub(crate) const VIDEO_SEARCH_PATH: &str = "videos/search";
