mod model;
mod params;

pub use model::{Video, VideoParty, VideoSearch, VideoThumbnail};
pub use params::VideoSearchParams;

use crate::core::{BingClient, BingError, net};

/// Client for the video search endpoint.
#[derive(Debug, Clone)]
pub struct VideoApi {
    client: BingClient,
}

impl VideoApi {
    /// Creates a video client on top of a shared transport.
    pub fn new(client: &BingClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Searches videos by keyword.
    ///
    /// Error handling matches [`NewsApi`](crate::news::NewsApi): a non-success body is
    /// logged and still decoded.
    ///
    /// # Errors
    ///
    /// Returns a `BingError` if the request cannot be executed, or if the body cannot be
    /// decoded into a [`VideoSearch`].
    #[tracing::instrument(skip(self), err)]
    pub async fn search(&self, params: &VideoSearchParams) -> Result<VideoSearch, BingError> {
        let mut url = self.client.base_video().clone();
        params.query_pairs().apply(&mut url);

        net::fetch_json(&self.client, url, "video_search", &params.q).await
    }
}
