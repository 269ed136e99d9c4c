//! Descriptive values and timestamps written onto each scene.

use super::naming::TITLE_SEPARATOR;
use chrono::{Duration as TimeDelta, NaiveDateTime, NaiveTime};
use scenesplit_common::{is_date_only, Scene};

/// Every clip's timestamp is recorded as UTC.
pub const TIMEZONE_MARKER: &str = "&timezone=0";

/// Added when only the calendar date of the capture is known.
pub const DATE_PRECISION_MARKER: &str = "&datePrecision=8";

/// Values handed to the metadata writer for one scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneMetadata {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub comment: String,
    pub track: u32,
    pub timestamp: NaiveDateTime,
    /// The source date had no time of day and `timestamp` was synthesized.
    pub date_only: bool,
}

/// Derive the metadata for a scene.
pub fn compose(scene: &Scene) -> SceneMetadata {
    let subject = non_empty(&scene.subject);
    let title = non_empty(&scene.title);
    let date_only = is_date_only(&scene.date);

    let combined_title = match (subject, title) {
        (Some(s), Some(t)) => Some(format!("{}{}{}", s, TITLE_SEPARATOR, t)),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(t)) => Some(t.to_string()),
        (None, None) => None,
    };

    let mut comment = TIMEZONE_MARKER.to_string();
    if date_only {
        comment.push(' ');
        comment.push_str(DATE_PRECISION_MARKER);
    }

    let timestamp = if date_only {
        synthesize_timestamp(&scene.date, scene.ordinal)
    } else {
        scene.date
    };

    SceneMetadata {
        title: combined_title,
        subject: subject.map(str::to_string),
        comment,
        track: scene.ordinal,
        timestamp,
        date_only,
    }
}

/// Noon on the scene's day, plus the ordinal read as a number of seconds.
///
/// Keeps same-day clips distinct and in order. Ordinals of 43,200 and up roll
/// past midnight into the following day, so ordering across days is no longer
/// guaranteed there. Nothing clamps this.
pub fn synthesize_timestamp(date: &NaiveDateTime, ordinal: u32) -> NaiveDateTime {
    let ordinal = i64::from(ordinal);
    let hours = ordinal / (60 * 60);
    let minutes = (ordinal / 60) % 60;
    let seconds = ordinal % 60;

    let noon = date.date().and_time(NaiveTime::MIN) + TimeDelta::hours(12);
    noon + TimeDelta::hours(hours) + TimeDelta::minutes(minutes) + TimeDelta::seconds(seconds)
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
