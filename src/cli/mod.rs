use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::ExtractMode;

#[derive(Parser, Debug)]
#[command(
    name = "yt-extract",
    about = "Extract YouTube video information and transcript",
    version,
    long_about = "Fetches a video's details from the YouTube Data API and its transcript from the caption service, then prints both as a labeled text report. Requires YOUTUBE_API_KEY in the environment or a .env file."
)]
pub struct Cli {
    /// YouTube video ID (e.g., dQw4w9WgXcQ) or a video URL
    #[arg(value_name = "VIDEO_ID")]
    pub video_id: String,

    /// Get only video information, skip transcript
    #[arg(long)]
    pub info_only: bool,

    /// Get only transcript, skip video info
    #[arg(long)]
    pub transcript_only: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn mode(&self) -> ExtractMode {
        ExtractMode::from_flags(self.info_only, self.transcript_only)
    }
}
