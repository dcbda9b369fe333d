use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{VideoInfo, VideoInfoSource};
use crate::config::Config;
use crate::utils::{format_count, format_iso8601_duration, format_publish_date};
use crate::{ExtractError, Result};

const VIDEO_PARTS: &str = "snippet,statistics,contentDetails";

/// YouTube Data API v3 client for video metadata
pub struct YoutubeDataClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YoutubeDataClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("yt-extract/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_base_url.clone(),
        })
    }
}

#[async_trait]
impl VideoInfoSource for YoutubeDataClient {
    async fn video_info(&self, video_id: &str) -> Result<VideoInfo> {
        tracing::debug!("Requesting video details for: {}", video_id);

        // The request URL carries the API key; transport errors must not echo it.
        let response = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", VIDEO_PARTS),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.without_url())?;

        if !status.is_success() {
            return Err(ExtractError::Api {
                status: status.as_u16(),
                message: api_error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string()),
            });
        }

        parse_video_response(video_id, &body)
    }
}

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoResource>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoResource {
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
    #[serde(default)]
    content_details: ContentDetails,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
}

// The API encodes counts as decimal strings.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

#[derive(Deserialize, Default)]
struct ContentDetails {
    duration: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn parse_video_response(video_id: &str, body: &str) -> Result<VideoInfo> {
    let list: VideoListResponse = serde_json::from_str(body)?;
    let video = list
        .items
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::VideoNotFound(video_id.to_string()))?;

    let count = |value: Option<String>| value.and_then(|v| v.parse::<u64>().ok());

    Ok(VideoInfo {
        video_id: video_id.to_string(),
        title: video.snippet.title,
        channel: video.snippet.channel_title,
        published_at: video.snippet.published_at,
        duration: video.content_details.duration,
        views: count(video.statistics.view_count),
        likes: count(video.statistics.like_count),
        comments: count(video.statistics.comment_count),
        tags: video.snippet.tags,
        description: video.snippet.description,
    })
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

/// Render video details as labeled plain text
pub fn format_video_info(info: &VideoInfo) -> String {
    let or_na = |value: Option<u64>| value.map(format_count).unwrap_or_else(|| "N/A".to_string());

    let mut lines = vec![
        format!("Title: {}", info.title),
        format!("Channel: {}", info.channel),
        format!("Published: {}", format_publish_date(&info.published_at)),
        format!(
            "Duration: {}",
            info.duration
                .as_deref()
                .and_then(format_iso8601_duration)
                .unwrap_or_else(|| "N/A".to_string())
        ),
        format!("Views: {}", or_na(info.views)),
        format!("Likes: {}", or_na(info.likes)),
        format!("Comments: {}", or_na(info.comments)),
    ];

    if !info.tags.is_empty() {
        lines.push(format!("Tags: {}", info.tags.join(", ")));
    }

    lines.push(String::new());
    lines.push("Description:".to_string());
    lines.push(info.description.clone());

    lines.join("\n")
}
