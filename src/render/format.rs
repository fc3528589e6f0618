//! Text formatting helpers shared by the HTML and terminal renderers.

use chrono::{DateTime, Utc};
use unicode_segmentation::UnicodeSegmentation;

/// `Dec 20, 2024`
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// `5 hours ago` under a day, `3 days ago` under a week, else a date.
pub fn format_relative_time(ts: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = *now - *ts;
    let hours = elapsed.num_hours();
    let days = hours / 24;

    if hours < 24 {
        format!("{hours} hours ago")
    } else if days < 7 {
        format!("{days} days ago")
    } else {
        format_date(ts)
    }
}

/// Sign-prefixed percent delta: `+5%`, `-2%`, `0%`.
pub fn format_delta(delta: i32) -> String {
    if delta > 0 {
        format!("+{delta}%")
    } else {
        format!("{delta}%")
    }
}

/// Truncate to at most `max` grapheme clusters, ending with an ellipsis.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = graphemes[..max - 1].concat();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}
