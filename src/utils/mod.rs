use url::Url;

/// Format a duration in seconds in human-readable form
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Parse an ISO 8601 video duration (`PT1H2M3S`, `P1DT2H`) into seconds
pub fn parse_iso8601_duration(value: &str) -> Option<u64> {
    let rest = value.strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, time),
        None => (rest, ""),
    };

    let mut total = 0u64;
    let mut parse_units = |part: &str, units: &[(char, u64)]| -> Option<()> {
        let mut number = String::new();
        for c in part.chars() {
            if c.is_ascii_digit() {
                number.push(c);
                continue;
            }
            let (_, factor) = units.iter().find(|(unit, _)| *unit == c)?;
            let amount = number.parse::<u64>().ok()?.checked_mul(*factor)?;
            total = total.checked_add(amount)?;
            number.clear();
        }
        number.is_empty().then_some(())
    };

    parse_units(date_part, &[('W', 604_800), ('D', 86_400)])?;
    parse_units(time_part, &[('H', 3600), ('M', 60), ('S', 1)])?;

    Some(total)
}

/// Human-readable form of an ISO 8601 duration, `None` if it cannot be parsed
pub fn format_iso8601_duration(value: &str) -> Option<String> {
    parse_iso8601_duration(value).map(format_duration)
}

/// Format a count with thousands separators
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Reduce an RFC 3339 timestamp to its calendar date, passing anything else through
pub fn format_publish_date(value: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| value.to_string())
}

fn is_youtube_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == "youtube.com" || host == "youtu.be" || host.ends_with(".youtube.com")
}

/// Pull the video id out of a YouTube URL. Any other input is returned unchanged.
pub fn resolve_video_id(input: &str) -> String {
    let trimmed = input.trim();
    let Ok(parsed) = Url::parse(trimmed) else {
        return input.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return input.to_string();
    };
    if !is_youtube_host(host) {
        return input.to_string();
    }

    let mut segments = parsed.path_segments().into_iter().flatten();
    let first = segments.next().unwrap_or("");
    let second = segments.next().unwrap_or("");

    let id = if host.eq_ignore_ascii_case("youtu.be") {
        Some(first.to_string())
    } else if first == "watch" {
        parsed
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
    } else if matches!(first, "shorts" | "embed" | "live" | "v") {
        Some(second.to_string())
    } else {
        None
    };

    id.filter(|id| !id.is_empty())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30), "30s");
        assert_eq!(format_duration(90), "1m 30s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
    }

    #[test]
    fn test_parse_iso8601_duration() {
        assert_eq!(parse_iso8601_duration("PT3M33S"), Some(213));
        assert_eq!(parse_iso8601_duration("PT1H"), Some(3600));
        assert_eq!(parse_iso8601_duration("P1DT2H"), Some(93_600));
        assert_eq!(parse_iso8601_duration("P0D"), Some(0));
        assert_eq!(parse_iso8601_duration("PT12"), None);
        assert_eq!(parse_iso8601_duration("3M"), None);
        assert_eq!(parse_iso8601_duration("PT5X"), None);
    }

    #[test]
    fn test_parse_iso8601_duration_overflow() {
        assert_eq!(parse_iso8601_duration("P99999999999999999W"), None);
        assert_eq!(parse_iso8601_duration("P18446744073709551615DT1S"), None);
        assert_eq!(parse_iso8601_duration("PT18446744073709551615S"), Some(u64::MAX));
    }

    #[test]
    fn test_format_iso8601_duration() {
        assert_eq!(format_iso8601_duration("PT3M33S").as_deref(), Some("3m 33s"));
        assert_eq!(format_iso8601_duration("bogus"), None);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_publish_date() {
        assert_eq!(format_publish_date("2009-10-25T06:57:33Z"), "2009-10-25");
        assert_eq!(format_publish_date("yesterday"), "yesterday");
        assert_eq!(format_publish_date(""), "");
    }

    #[test]
    fn test_resolve_video_id() {
        assert_eq!(resolve_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(
            resolve_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(resolve_video_id("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(
            resolve_video_id("https://m.youtube.com/shorts/abc123"),
            "abc123"
        );
        assert_eq!(
            resolve_video_id("https://www.youtube.com/embed/abc123"),
            "abc123"
        );
    }

    #[test]
    fn test_resolve_video_id_passes_through_unknown_input() {
        assert_eq!(resolve_video_id("https://vimeo.com/123"), "https://vimeo.com/123");
        assert_eq!(
            resolve_video_id("https://www.youtube.com/channel/xyz"),
            "https://www.youtube.com/channel/xyz"
        );
        assert_eq!(resolve_video_id("not a url"), "not a url");
    }
}
