use chrono::DateTime;

use crate::matcher::KeywordSet;

pub const BOLD_RED: &str = "\x1b[1;31m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_BLUE: &str = "\x1b[1;34m";
pub const RESET: &str = "\x1b[0m";

/// Seconds to "M:SS", truncating sub-second precision. Minutes are not
/// wrapped into hours, so an offset past the hour renders as e.g. "61:01".
pub fn format_time(seconds: f64) -> String {
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Wrap every keyword match in bold red. Substitutions are applied one
/// keyword at a time in keyword order, so matches that overlap across
/// keywords can interleave with the inserted escape codes.
pub fn highlight(text: &str, keywords: &KeywordSet) -> String {
    let mut out = text.to_string();
    for re in keywords.patterns() {
        out = re
            .replace_all(&out, format!("{BOLD_RED}$0{RESET}").as_str())
            .into_owned();
    }
    out
}

/// RFC 3339 publish timestamp as day/month/year; unparseable input is
/// passed through unchanged
pub fn format_publish_date(published_at: &str) -> String {
    DateTime::parse_from_rfc3339(published_at)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| published_at.to_string())
}
