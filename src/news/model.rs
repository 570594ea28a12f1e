use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::wire::de_published;

/// Image metadata attached to a news item or video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thumbnail {
    /// Where the image can be downloaded.
    pub content_url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// The image of a news item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsImage {
    pub thumbnail: Thumbnail,
}

/// An entity the article is about (person, place, organization).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsAbout {
    /// API link that returns details about the entity.
    pub read_link: String,
    pub name: String,
}

/// The publisher of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsProvider {
    /// Provider type tag, usually `"Organization"`.
    #[serde(rename = "_type")]
    pub provider_type: String,
    pub name: String,
}

/// Tracking URLs returned by the provider. Not interpreted by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsInstrumentation {
    pub ping_url_base: String,
    pub page_load_ping_url: String,
}

/// A single news article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsItem {
    /// The headline.
    pub name: String,
    /// Link to the article on the publisher's site.
    pub url: String,
    pub image: NewsImage,
    /// A short snippet of the article.
    pub description: String,
    pub about: Vec<NewsAbout>,
    pub provider: Vec<NewsProvider>,
    /// When the provider published the article, normalized to UTC.
    #[serde(deserialize_with = "de_published")]
    pub date_published: Option<DateTime<Utc>>,
    /// Category tag, e.g. `"ScienceAndTechnology"`.
    pub category: String,
}

/// Envelope returned by the category listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsCategory {
    #[serde(rename = "_type")]
    pub type_: String,
    pub value: Vec<NewsItem>,
}

/// A search hit: a news item plus its click-tracking suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsSearchItem {
    #[serde(flatten)]
    pub item: NewsItem,
    pub url_ping_suffix: String,
}

/// Envelope returned by the news search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsSearch {
    #[serde(rename = "_type")]
    pub type_: String,
    pub instrumentation: NewsInstrumentation,
    /// Link to the full result set.
    pub read_link: String,
    /// Estimated number of matching articles. Only an estimate.
    pub total_estimated_matches: u64,
    pub value: Vec<NewsSearchItem>,
}

/// Image shown for a trending topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsTrendingTopicImage {
    pub url: String,
    pub provider: Vec<NewsProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsTrendingTopic {
    pub name: String,
    pub image: NewsTrendingTopicImage,
    /// Bing web search for the topic.
    pub web_search_url: String,
    pub web_search_url_ping_suffix: String,
    pub is_breaking_news: bool,
}

/// Envelope returned by the trending topics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsTrendingTopics {
    #[serde(rename = "_type")]
    pub type_: String,
    pub instrumentation: NewsInstrumentation,
    pub value: Vec<NewsTrendingTopic>,
}
