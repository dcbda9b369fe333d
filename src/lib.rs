//! YT Extract - A Rust CLI tool for pulling information and transcripts out of YouTube videos
//!
//! This library provides the pieces behind the `yt-extract` binary: environment-based
//! configuration, clients for the YouTube Data API and the caption service, and a small
//! pipeline that assembles both into a labeled plain-text report.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod output;
pub mod pipeline;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use extractors::{TranscriptOutcome, TranscriptSource, VideoInfo, VideoInfoSource};
pub use output::Report;
pub use pipeline::{ExtractMode, ExtractionPipeline};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Error types specific to the extractor
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("YOUTUBE_API_KEY not found in environment variables")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Video not found: {0}")]
    VideoNotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`ExtractError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Network,
    Io,
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::MissingApiKey => ErrorKind::Config,
            ExtractError::Http(_)
            | ExtractError::Api { .. }
            | ExtractError::VideoNotFound(_)
            | ExtractError::InvalidUrl(_)
            | ExtractError::Decode(_) => ErrorKind::Network,
            ExtractError::Io(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for this error. Every kind currently maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Config | ErrorKind::Network | ErrorKind::Io => 1,
        }
    }
}
