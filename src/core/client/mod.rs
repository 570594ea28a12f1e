//! Public client surface + builder.
//! Defaults (endpoints, header name, UA) live in `constants`.

mod constants;

pub(crate) use constants::{NEWS_SEARCH_PATH, NEWS_TRENDING_PATH};

use crate::core::BingError;
use constants::{
    DEFAULT_BASE_URL, NEWS_PATH, SUBSCRIPTION_KEY_HEADER, USER_AGENT, VIDEO_SEARCH_PATH,
};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// The signed transport shared by every API group.
///
/// Holds the HTTP client, the API root and the subscription key. Cloning is cheap: the
/// underlying `reqwest::Client` is reference counted, so clones share one connection pool.
#[derive(Clone)]
pub struct BingClient {
    http: Client,
    api_key: String,
    base_url: Url,
    base_news: Url,
    base_video: Url,
}

impl fmt::Debug for BingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BingClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Raw outcome of one signed GET: the status and body, whatever the status was.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) url: String,
    pub(crate) body: String,
}

impl RawResponse {
    pub(crate) const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

impl BingClient {
    /// Create a new builder for the given subscription key.
    pub fn builder(api_key: impl Into<String>) -> BingClientBuilder {
        BingClientBuilder::new(api_key)
    }

    /// The API root every endpoint is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) const fn base_video(&self) -> &Url {
        &self.base_video
    }

    /// Performs one signed GET against a fully-formed URL.
    ///
    /// A non-success status is not an error at this level: the status and body are
    /// returned so the caller can decide how to treat them. Only failures to execute the
    /// request (or read its body) are errors.
    pub(crate) async fn get(&self, url: Url) -> Result<RawResponse, BingError> {
        tracing::debug!(url = %url, "GET");

        let resp = self
            .http
            .get(url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(RawResponse {
            status,
            url: url.to_string(),
            body,
        })
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures a [`BingClient`].
pub struct BingClientBuilder {
    api_key: String,
    base_url: Option<Url>,
    user_agent: Option<String>,
    http: Option<Client>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl BingClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            user_agent: None,
            http: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Override the API root (e.g., `https://api.cognitive.microsoft.com/bing/v5.0/`).
    ///
    /// A trailing slash is added when missing so that endpoint paths join underneath it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Use a pre-configured `reqwest::Client`.
    ///
    /// When set, `user_agent`, `timeout` and `connect_timeout` are ignored.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client
    /// cannot be initialized.
    pub fn build(self) -> Result<BingClient, BingError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let base_news = base_url.join(NEWS_PATH)?;
        let base_video = base_url.join(VIDEO_SEARCH_PATH)?;

        let http = match self.http {
            Some(c) => c,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(BingClient {
            http,
            api_key: self.api_key,
            base_url,
            base_news,
            base_video,
        })
    }
}
