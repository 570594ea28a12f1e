mod api;
mod model;
mod params;

pub use model::{
    NewsAbout, NewsCategory, NewsImage, NewsInstrumentation, NewsItem, NewsProvider, NewsSearch,
    NewsSearchItem, NewsTrendingTopic, NewsTrendingTopicImage, NewsTrendingTopics, Thumbnail,
};
pub use params::{NewsCategoryParams, NewsSearchParams, SafeSearch};

use crate::core::{BingClient, BingError};

/// Client for the news endpoints: category listing, keyword search and trending topics.
///
/// A non-success response is logged and its body is still decoded into the expected
/// envelope; see [`BingError::Status`] for what happens when that decode fails.
#[derive(Debug, Clone)]
pub struct NewsApi {
    client: BingClient,
}

impl NewsApi {
    /// Creates a news client on top of a shared transport.
    pub fn new(client: &BingClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Lists headlines, optionally restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns a `BingError` if the request cannot be executed, or if the body cannot be
    /// decoded into a [`NewsCategory`].
    #[tracing::instrument(skip(self), err)]
    pub async fn category(&self, params: &NewsCategoryParams) -> Result<NewsCategory, BingError> {
        api::fetch_category(&self.client, params).await
    }

    /// Searches news articles by keyword.
    ///
    /// # Errors
    ///
    /// Returns a `BingError` if the request cannot be executed, or if the body cannot be
    /// decoded into a [`NewsSearch`].
    #[tracing::instrument(skip(self), err)]
    pub async fn search(&self, params: &NewsSearchParams) -> Result<NewsSearch, BingError> {
        api::fetch_search(&self.client, params).await
    }

    /// Fetches the topics currently trending on the provider.
    ///
    /// # Errors
    ///
    /// Returns a `BingError` if the request cannot be executed, or if the body cannot be
    /// decoded into [`NewsTrendingTopics`].
    #[tracing::instrument(skip(self), err)]
    pub async fn trending_topics(&self) -> Result<NewsTrendingTopics, BingError> {
        api::fetch_trending_topics(&self.client).await
    }
}
