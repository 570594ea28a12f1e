use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{BingClient, BingError, client::RawResponse};

/// Performs a signed GET and decodes the body into `T`.
///
/// `endpoint` and `key` only name the recorded fixture in `test-mode`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &BingClient,
    url: Url,
    _endpoint: &str,
    _key: &str,
) -> Result<T, BingError> {
    let raw = client.get(url).await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("BINGO_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, "json", &raw.body)
        {
            tracing::warn!(error = %e, endpoint = _endpoint, "BINGO_RECORD: failed to write fixture");
        }
    }

    decode(raw)
}

/// Decodes a raw response.
///
/// A non-success body is logged and still decoded, since the provider answers errors
/// with structured JSON. If it decodes into `T` the value is returned; otherwise the
/// status wins and the decode failure is attached as its source.
pub(crate) fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T, BingError> {
    if raw.is_success() {
        return serde_json::from_str(&raw.body).map_err(BingError::Json);
    }

    tracing::warn!(status = raw.status, url = %raw.url, body = %raw.body, "non-success response");

    serde_json::from_str(&raw.body).map_err(|source| BingError::Status {
        status: raw.status,
        url: raw.url,
        source,
    })
}
