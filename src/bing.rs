use crate::{BingClient, BingError, search::SearchApi};

/// Entry point to the Bing Search API.
///
/// # Example
///
/// ```no_run
/// # use bingo_rs::{Bing, NewsSearchParams};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bing = Bing::new("my-subscription-key")?;
///
/// let results = bing
///     .search
///     .news
///     .search(&NewsSearchParams::new("rust").count(5))
///     .await?;
/// for hit in &results.value {
///     println!("{} ({})", hit.item.name, hit.item.url);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Bing {
    pub search: SearchApi,
}

impl Bing {
    /// Creates a client for the public endpoint with the given subscription key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> Result<Self, BingError> {
        BingClient::builder(api_key).build().map(|c| Self::from_client(&c))
    }

    /// Creates the facade from a client configured with [`BingClient::builder`].
    pub fn from_client(client: &BingClient) -> Self {
        Self {
            search: SearchApi::new(client),
        }
    }
}
