//! Number and time formatting
//!
//! The feeds deliver timestamps in three shapes: unix seconds (numeric or a
//! digit string), ISO-8601, and a legacy `MM-DD-YYYY HH:mm:ss` form. Parsing
//! is lenient: unparseable input yields `None` (and an empty relative-time
//! string), never an error, since these strings end up in captions where a
//! blank beats a crash.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Australian Eastern Standard Time. Sydney local display uses the fixed
/// +10:00 offset rather than a tz database, so DST is not applied.
const AEST_SECONDS: i32 = 10 * 3600;

/// Round to a whole number and group thousands with commas
pub fn commas(num: f64) -> String {
    if !num.is_finite() {
        return String::new();
    }
    let rounded = num.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parse any of the supported timestamp shapes to UTC
///
/// Accepts unix seconds as a digit string, ISO-8601 (offset or naive, any
/// sub-second precision), and `MM-DD-YYYY HH:mm:ss` (treated as UTC).
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        let secs = input.parse::<i64>().ok()?;
        return Utc.timestamp_opt(secs, 0).single();
    }

    if input.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(dt.with_timezone(&Utc));
        }
        // Naive ISO without an offset
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&naive));
        }
        tracing::warn!(input, "unparseable ISO timestamp");
        return None;
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%m-%d-%Y %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    None
}

/// Unix seconds for an ISO date string
pub fn iso_to_unix(iso: &str) -> Option<i64> {
    parse_timestamp(iso).map(|dt| dt.timestamp())
}

/// Human-friendly relative time for a timestamp string, against now
pub fn time_ago(input: &str) -> String {
    time_ago_at(input, Utc::now())
}

/// Human-friendly relative time for unix seconds, against now
pub fn time_ago_unix(secs: i64) -> String {
    match Utc.timestamp_opt(secs, 0).single() {
        Some(time) => relative(Utc::now() - time),
        None => String::new(),
    }
}

/// [`time_ago`] against an explicit now, for deterministic tests
pub fn time_ago_at(input: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(input) {
        Some(time) => relative(now - time),
        None => String::new(),
    }
}

fn relative(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds();
    if secs < 10 {
        return "just now".to_string();
    }
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 60 {
        plural(secs, "second")
    } else if mins < 60 {
        plural(mins, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(days, "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Render unix seconds as an en-AU style local timestamp at Australian
/// Eastern time
pub fn sydney_local(secs: i64) -> String {
    let offset = match FixedOffset::east_opt(AEST_SECONDS) {
        Some(offset) => offset,
        None => return String::new(),
    };
    match offset.timestamp_opt(secs, 0).single() {
        Some(local) => local.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => String::new(),
    }
}
