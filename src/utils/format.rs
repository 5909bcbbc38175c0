//! Clock text formatting

use std::time::Duration;

/// Format a duration as zero-padded `HH:MM:SS`.
///
/// Sub-second parts are truncated and the hours field is not bounded, so a
/// run past 99 hours reads `100:00:00`.
pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse `HH:MM:SS` text back into whole seconds.
///
/// Accepts exactly what [`format_duration`] produces: two or more hour
/// digits, then two-digit minutes and seconds below 60.
pub fn parse_hms(text: &str) -> Option<Duration> {
    let mut parts = text.split(':');
    let (h, m, s) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if h.len() < 2 || m.len() != 2 || s.len() != 2 || ![h, m, s].into_iter().all(all_digits) {
        return None;
    }

    let hours: u64 = h.parse().ok()?;
    let minutes: u64 = m.parse().ok()?;
    let seconds: u64 = s.parse().ok()?;
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    hours
        .checked_mul(3600)
        .and_then(|t| t.checked_add(minutes * 60 + seconds))
        .map(Duration::from_secs)
}
