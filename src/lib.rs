//! bingo-rs: a small async client for the Bing Search v5 news and video endpoints.
//!
//! Every call is one signed GET followed by a JSON decode. There is no retrying,
//! caching or pagination.
//!
//! ```no_run
//! # use bingo_rs::{Bing, NewsCategoryParams};
//! # #[tokio::main]
//! # async fn main() -> Result<(), bingo_rs::BingError> {
//! let bing = Bing::new(std::env::var("BING_API_KEY").unwrap_or_default())?;
//! let business = bing
//!     .search
//!     .news
//!     .category(&NewsCategoryParams::new().category("Business"))
//!     .await?;
//! println!("{} headlines", business.value.len());
//! # Ok(())
//! # }
//! ```

mod bing;
pub mod core;
pub mod news;
pub mod search;
pub mod video;

pub use bing::Bing;
pub use crate::core::{BingClient, BingClientBuilder, BingError, ErrorKind};
pub use news::{
    NewsAbout, NewsApi, NewsCategory, NewsCategoryParams, NewsImage, NewsInstrumentation,
    NewsItem, NewsProvider, NewsSearch, NewsSearchItem, NewsSearchParams, NewsTrendingTopic,
    NewsTrendingTopicImage, NewsTrendingTopics, SafeSearch, Thumbnail,
};
pub use search::SearchApi;
pub use video::{Video, VideoApi, VideoParty, VideoSearch, VideoSearchParams, VideoThumbnail};

/// Installs a global `tracing` subscriber that prints to stderr, filtered by `RUST_LOG`.
///
/// Meant for demos and manual test runs. Does nothing if a subscriber is already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
