use crate::{BingClient, news::NewsApi, video::VideoApi};

/// The search API groups, sharing one transport.
#[derive(Debug, Clone)]
pub struct SearchApi {
    /// News category listing, search and trending topics.
    pub news: NewsApi,
    /// Video search.
    pub video: VideoApi,
}

impl SearchApi {
    /// Wires both groups to the same client (and so the same connection pool).
    pub fn new(client: &BingClient) -> Self {
        Self {
            news: NewsApi::new(client),
            video: VideoApi::new(client),
        }
    }
}
