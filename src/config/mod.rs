use std::env;
use std::path::PathBuf;

use crate::{ExtractError, Result};

pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const API_BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";
pub const WATCH_BASE_URL_VAR: &str = "YOUTUBE_WATCH_BASE_URL";
pub const TRANSCRIPT_LANGS_VAR: &str = "YOUTUBE_TRANSCRIPT_LANGS";

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_WATCH_BASE_URL: &str = "https://www.youtube.com";

#[derive(Clone)]
pub struct Config {
    /// YouTube Data API key
    pub api_key: String,

    /// Base URL of the Data API
    pub api_base_url: String,

    /// Base URL serving watch pages and caption tracks
    pub watch_base_url: String,

    /// Preferred caption languages, most preferred first
    pub transcript_languages: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("watch_base_url", &self.watch_base_url)
            .field("transcript_languages", &self.transcript_languages)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment as it stands
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = value(API_KEY_VAR).ok_or(ExtractError::MissingApiKey)?;

        let api_base_url = value(API_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let watch_base_url = value(WATCH_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_WATCH_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut transcript_languages: Vec<String> = value(TRANSCRIPT_LANGS_VAR)
            .map(|s| {
                s.split(',')
                    .map(|lang| lang.trim().to_string())
                    .filter(|lang| !lang.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if transcript_languages.is_empty() {
            transcript_languages.push("en".to_string());
        }

        Ok(Self {
            api_key,
            api_base_url,
            watch_base_url,
            transcript_languages,
        })
    }
}

/// Merge the nearest `.env` file into the process environment.
///
/// Existing variables win over file entries. Call before any other thread exists.
pub fn load_env_file() -> EnvFileStatus {
    dotenvy::dotenv()
}

pub type EnvFileStatus = std::result::Result<PathBuf, dotenvy::Error>;

/// Report the outcome of [`load_env_file`]
pub fn log_env_file(status: &EnvFileStatus) {
    match status {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::debug!("Skipping .env file: {}", e),
    }
}
