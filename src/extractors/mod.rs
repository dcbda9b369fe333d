use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod metadata;
pub mod transcript;

pub use metadata::{format_video_info, YoutubeDataClient};
pub use transcript::YoutubeTranscriptClient;

use crate::Result;

/// Descriptive fields for a single video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Identifier used for the lookup
    pub video_id: String,

    pub title: String,

    /// Channel display name
    pub channel: String,

    /// Publish timestamp as returned by the API (RFC 3339)
    pub published_at: String,

    /// ISO 8601 duration, e.g. `PT3M33S`
    pub duration: Option<String>,

    /// View count, `None` when hidden
    pub views: Option<u64>,

    /// Like count, `None` when hidden
    pub likes: Option<u64>,

    /// Comment count, `None` when comments are disabled
    pub comments: Option<u64>,

    pub tags: Vec<String>,

    pub description: String,
}

/// Result of a transcript lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOutcome {
    /// Transcript text
    Available(String),

    /// Why no transcript could be produced
    Unavailable(String),
}

impl TranscriptOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, TranscriptOutcome::Available(text) if !text.is_empty())
    }
}

/// Source of video metadata
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoInfoSource: Send + Sync {
    /// Look up descriptive fields for a video
    async fn video_info(&self, video_id: &str) -> Result<VideoInfo>;
}

/// Source of video transcripts
///
/// Failures are reported through [`TranscriptOutcome::Unavailable`], never as errors:
/// a missing transcript is an expected outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn transcript(&self, video_id: &str) -> TranscriptOutcome;
}
