use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::wire::de_published;
use crate::news::NewsInstrumentation;

/// A named party attached to a video (publisher or creator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoParty {
    pub name: String,
}

/// Dimensions of the thumbnail at `thumbnailUrl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoThumbnail {
    pub width: u32,
    pub height: u32,
}

/// A single video result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    pub name: String,
    pub description: String,
    pub web_search_url: String,
    pub thumbnail_url: String,
    /// When the video was published, normalized to UTC.
    #[serde(deserialize_with = "de_published")]
    pub date_published: Option<DateTime<Utc>>,
    pub publisher: Vec<VideoParty>,
    pub creator: VideoParty,
    /// Direct link to the media.
    pub content_url: String,
    /// Page that hosts the video.
    pub host_page_url: String,
    pub host_page_display_url: String,
    pub encoding_format: String,
    pub width: u32,
    pub height: u32,
    /// ISO 8601 duration as sent by the provider, e.g. `"PT3M21S"`.
    pub duration: String,
    pub motion_thumbnail_url: String,
    pub embed_html: String,
    pub allow_https_embed: bool,
    pub view_count: u64,
    pub thumbnail: VideoThumbnail,
    pub video_id: String,
    pub allow_mobile_embed: bool,
    pub is_superfresh: bool,
}

/// Envelope returned by the video search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoSearch {
    #[serde(rename = "_type")]
    pub type_: String,
    pub instrumentation: NewsInstrumentation,
    pub read_link: String,
    pub web_search_url: String,
    pub total_estimated_matches: u64,
    /// Offset to pass for the next page of results.
    pub next_offset: u32,
    pub value: Vec<Video>,
}
