use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::sync::OnceLock;
use url::Url;

use super::{TranscriptOutcome, TranscriptSource};
use crate::config::Config;
use crate::Result;

/// Transcript client that reads caption tracks advertised on the watch page
pub struct YoutubeTranscriptClient {
    client: Client,
    watch_base_url: String,
    languages: Vec<String>,
}

impl YoutubeTranscriptClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36")
            .build()?;

        Ok(Self {
            client,
            watch_base_url: config.watch_base_url.clone(),
            languages: config.transcript_languages.clone(),
        })
    }

    async fn fetch(&self, video_id: &str) -> Result<TranscriptOutcome> {
        tracing::debug!("Fetching watch page for: {}", video_id);

        let html = self
            .client
            .get(format!("{}/watch", self.watch_base_url))
            .query(&[("v", video_id)])
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let Some(player_json) = extract_player_response(&html) else {
            return Ok(TranscriptOutcome::Unavailable(format!(
                "Transcript error: no player data found on the watch page for {}",
                video_id
            )));
        };
        let player: PlayerResponse = serde_json::from_str(player_json)?;

        if let Some(status) = &player.playability_status {
            if status.status != "OK" {
                return Ok(TranscriptOutcome::Unavailable(format!(
                    "Could not retrieve a transcript for the video {}: {}",
                    video_id,
                    status.reason.as_deref().unwrap_or("the video is unavailable")
                )));
            }
        }

        let tracks = player
            .captions
            .map(|c| c.player_captions_tracklist_renderer.caption_tracks)
            .unwrap_or_default();

        let Some(track) = select_track(&tracks, &self.languages) else {
            return Ok(TranscriptOutcome::Unavailable(format!(
                "Could not retrieve a transcript for the video {}: subtitles are disabled for this video",
                video_id
            )));
        };
        tracing::debug!(
            "Using caption track '{}' (generated: {})",
            track.language_code,
            track.is_generated()
        );

        let track_url = json3_url(&self.watch_base_url, &track.base_url)?;
        let body = self
            .client
            .get(track_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let captions: Json3Captions = serde_json::from_str(&body)?;
        let text = captions_to_text(&captions);

        if text.is_empty() {
            return Ok(TranscriptOutcome::Unavailable(format!(
                "Could not retrieve a transcript for the video {}: the caption track is empty",
                video_id
            )));
        }

        Ok(TranscriptOutcome::Available(text))
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptClient {
    async fn transcript(&self, video_id: &str) -> TranscriptOutcome {
        match self.fetch(video_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Transcript lookup failed for {}: {}", video_id, e);
                TranscriptOutcome::Unavailable(format!("Transcript error: {}", e))
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Deserialize)]
struct PlayabilityStatus {
    status: String,
    reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: TracklistRenderer,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

#[derive(Deserialize)]
struct Json3Captions {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Deserialize)]
struct Json3Event {
    segs: Option<Vec<Json3Segment>>,
}

#[derive(Deserialize)]
struct Json3Segment {
    #[serde(default)]
    utf8: String,
}

fn player_response_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)ytInitialPlayerResponse\s*=\s*(\{.+?\})\s*;\s*(?:var\s|</script>)")
            .expect("player response pattern is valid")
    })
}

fn extract_player_response(html: &str) -> Option<&str> {
    player_response_pattern()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Pick a caption track: manual tracks in preferred language order, then generated ones,
/// then whatever comes first.
fn select_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    let language_matches = |track: &CaptionTrack, lang: &str| {
        track.language_code == lang
            || track
                .language_code
                .split('-')
                .next()
                .is_some_and(|base| base == lang)
    };

    for generated in [false, true] {
        for lang in languages {
            if let Some(track) = tracks
                .iter()
                .find(|t| t.is_generated() == generated && language_matches(*t, lang.as_str()))
            {
                return Some(track);
            }
        }
    }

    tracks.first()
}

fn json3_url(watch_base_url: &str, base_url: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/", watch_base_url))?.join(base_url)?;

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "fmt")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("fmt", "json3");

    Ok(url)
}

fn captions_to_text(captions: &Json3Captions) -> String {
    captions
        .events
        .iter()
        .filter_map(|event| event.segs.as_ref())
        .map(|segs| {
            let raw: String = segs.iter().map(|s| s.utf8.as_str()).collect();
            html_escape::decode_html_entities(&raw)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
