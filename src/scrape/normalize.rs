use chrono::{Local, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// ordinal day suffixes: "21st" -> "21"
static ORDINAL_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").unwrap());

// tried in order; first parse wins
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d", // 2024-03-21
    "%m/%d/%Y", // 03/21/2024
    "%B %d, %Y", // March 21, 2024
    "%d %B %Y", // 21 March 2024
    "%Y.%m.%d", // 2024.03.21
];

/// Convert a freeform date string to YYYY-MM-DD. Never fails: anything that
/// does not match a supported format becomes the current date.
pub fn normalize_date(raw: &str) -> String {
    let cleaned = ORDINAL_SUFFIX.replace_all(raw, "$1");
    let cleaned = cleaned.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, fmt) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    debug!(raw, "unparseable date, falling back to today");
    today()
}

/// Current local date as YYYY-MM-DD.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Split a freeform time string into (start, end), each HH:MM 24-hour.
/// A range ("2:30 PM - 3:45 PM", "9 to 5") yields both ends; a single time
/// yields only a start. Never fails: unparseable slots become "00:00".
pub fn parse_time(raw: &str) -> (Option<String>, Option<String>) {
    let raw = raw.trim();
    if raw.contains('-') || raw.contains("to") {
        let joined = raw.replace("to", "-");
        // split on the first '-' only; multi-dash inputs mis-segment
        let (start, end) = match joined.split_once('-') {
            Some(pair) => pair,
            None => (joined.as_str(), ""),
        };
        (
            Some(to_24_hour(start.trim())),
            Some(to_24_hour(end.trim())),
        )
    } else {
        (Some(to_24_hour(raw)), None)
    }
}

fn to_24_hour(raw: &str) -> String {
    let upper = raw.to_uppercase();
    // already 24-hour
    if raw.contains(':') && !upper.contains("AM") && !upper.contains("PM") {
        return raw.to_string();
    }
    match NaiveTime::parse_from_str(&upper, "%I:%M %p") {
        Ok(time) => time.format("%H:%M").to_string(),
        Err(_) => {
            debug!(raw, "unparseable time, falling back to 00:00");
            "00:00".to_string()
        }
    }
}
