use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};

/// `Jan 2, 2006 3:04 PM` in local time; empty when the timestamp is unknown.
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    format_timestamp_in(timestamp, &Local)
}

pub fn format_timestamp_in<Tz>(timestamp: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match timestamp {
        Some(ts) => ts.with_timezone(tz).format("%b %-d, %Y %-I:%M %p").to_string(),
        None => String::new(),
    }
}

/// Coarse human duration: `1h 5m`, `12m`, `40s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (hours, minutes) = (secs / 3600, (secs % 3600) / 60);
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", secs)
    }
}

/// Compact token count: `950`, `1.2k`, `3.4M`.
pub fn format_token_count(count: u64) -> String {
    match count {
        0..=999 => count.to_string(),
        1_000..=999_999 => format!("{:.1}k", count as f64 / 1_000.0),
        _ => format!("{:.1}M", count as f64 / 1_000_000.0),
    }
}

/// Readable project label from an encoded project directory name.
///
/// `-home-alice-code-app` becomes `app`; otherwise the last two dash-separated parts are
/// kept and joined with `/`. An empty name is the home directory, `~`.
pub fn format_project_name(name: &str) -> String {
    let name = name.strip_prefix("-home-").unwrap_or(name);

    let name = if let Some(idx) = name.rfind("-code-") {
        name[idx + "-code-".len()..].to_string()
    } else {
        let parts: Vec<&str> = name.split('-').collect();
        if parts.len() > 2 { parts[parts.len() - 2..].join("/") } else { name.to_string() }
    };

    let name = name.replace('-', "/");
    if name.is_empty() { "~".to_string() } else { name }
}
