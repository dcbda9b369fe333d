use std::path::Path;

use crate::extractors::TranscriptOutcome;
use crate::Result;

pub const INFO_HEADER: &str = "=== VIDEO INFORMATION ===";
pub const TRANSCRIPT_HEADER: &str = "=== TRANSCRIPT ===";

/// Sections gathered for one video
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Formatted video information, if requested
    pub info: Option<String>,

    /// Transcript lookup result, if requested
    pub transcript: Option<TranscriptOutcome>,
}

impl Report {
    /// Render as plain text: labeled sections joined by newlines
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if let Some(info) = &self.info {
            lines.push(INFO_HEADER.to_string());
            lines.push(info.clone());
            lines.push(String::new());
        }

        if let Some(transcript) = &self.transcript {
            lines.push(TRANSCRIPT_HEADER.to_string());
            lines.push(match transcript {
                TranscriptOutcome::Available(text) if !text.is_empty() => text.clone(),
                TranscriptOutcome::Available(text) | TranscriptOutcome::Unavailable(text) => {
                    format!("Transcript issue: {}", text)
                }
            });
        }

        lines.join("\n")
    }
}

/// Save rendered report to file
pub fn save_to_file(content: &str, path: &Path) -> Result<()> {
    fs_err::write(path, content)?;
    Ok(())
}

/// Print rendered report to console
pub fn print_to_console(content: &str) {
    println!("{}", content);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_both_sections() {
        let report = Report {
            info: Some("Title: Test".into()),
            transcript: Some(TranscriptOutcome::Available("hello world".into())),
        };
        assert_eq!(
            report.render(),
            "=== VIDEO INFORMATION ===\nTitle: Test\n\n=== TRANSCRIPT ===\nhello world"
        );
    }

    #[test]
    fn test_render_info_only_keeps_trailing_blank() {
        let report = Report {
            info: Some("Title: Test".into()),
            transcript: None,
        };
        assert_eq!(report.render(), "=== VIDEO INFORMATION ===\nTitle: Test\n");
    }

    #[test]
    fn test_render_unavailable_transcript() {
        let report = Report {
            info: None,
            transcript: Some(TranscriptOutcome::Unavailable(
                "Could not retrieve a transcript for the video abc".into(),
            )),
        };
        assert_eq!(
            report.render(),
            "=== TRANSCRIPT ===\nTranscript issue: Could not retrieve a transcript for the video abc"
        );
    }

    #[test]
    fn test_render_empty_transcript_is_an_issue() {
        let report = Report {
            info: None,
            transcript: Some(TranscriptOutcome::Available(String::new())),
        };
        assert_eq!(report.render(), "=== TRANSCRIPT ===\nTranscript issue: ");
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(Report::default().render(), "");
    }

    #[test]
    fn test_save_to_file_writes_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let content = "=== TRANSCRIPT ===\nhéllo wörld";

        save_to_file(content, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let err = save_to_file("x", &path).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Io);
    }
}
