use crate::config::Config;
use crate::extractors::{
    format_video_info, TranscriptSource, VideoInfoSource, YoutubeDataClient,
    YoutubeTranscriptClient,
};
use crate::output::Report;
use crate::Result;

/// Which sections a run should retrieve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractMode {
    pub info: bool,
    pub transcript: bool,
}

impl Default for ExtractMode {
    fn default() -> Self {
        Self {
            info: true,
            transcript: true,
        }
    }
}

impl ExtractMode {
    /// Each flag independently skips the other section; setting both selects nothing.
    pub fn from_flags(info_only: bool, transcript_only: bool) -> Self {
        Self {
            info: !transcript_only,
            transcript: !info_only,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.info && !self.transcript
    }
}

/// Retrieves video details and transcript and assembles them into a [`Report`]
pub struct ExtractionPipeline {
    info_source: Box<dyn VideoInfoSource>,
    transcript_source: Box<dyn TranscriptSource>,
}

impl ExtractionPipeline {
    /// Create a pipeline backed by the YouTube clients
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_sources(
            Box::new(YoutubeDataClient::new(config)?),
            Box::new(YoutubeTranscriptClient::new(config)?),
        ))
    }

    pub fn with_sources(
        info_source: Box<dyn VideoInfoSource>,
        transcript_source: Box<dyn TranscriptSource>,
    ) -> Self {
        Self {
            info_source,
            transcript_source,
        }
    }

    /// Run the selected lookups in order: details first, then transcript
    pub async fn run(&self, video_id: &str, mode: ExtractMode) -> Result<Report> {
        let mut report = Report::default();

        if mode.is_empty() {
            tracing::debug!("Both sections skipped for {}, nothing to fetch", video_id);
            return Ok(report);
        }

        if mode.info {
            tracing::info!("Fetching video information for: {}", video_id);
            let info = self.info_source.video_info(video_id).await?;
            report.info = Some(format_video_info(&info));
        }

        if mode.transcript {
            tracing::info!("Fetching transcript for: {}", video_id);
            let transcript = self.transcript_source.transcript(video_id).await;
            if !transcript.is_available() {
                tracing::warn!("No transcript available for {}", video_id);
            }
            report.transcript = Some(transcript);
        }

        Ok(report)
    }
}
