//! Segment and scene definitions.
//!
//! A [`Segment`] is one row of the operator's plan for a recording. A
//! [`Scene`] is derived from a kept segment during planning and lives only
//! while one source file is processed.

use chrono::{NaiveDateTime, Timelike};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// What to do with the span that starts at a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Start a new scene.
    Keep,
    /// Drop the span.
    Discard,
    /// Merge the span into the scene immediately preceding it.
    AddToPrevious,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "Keep"),
            Self::Discard => write!(f, "Discard"),
            Self::AddToPrevious => write!(f, "AddToPrevious"),
        }
    }
}

impl FromStr for Disposition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "discard" | "drop" => Ok(Self::Discard),
            "addtoprevious" | "add" | "+" => Ok(Self::AddToPrevious),
            other => Err(format!("Unknown disposition: {}", other)),
        }
    }
}

/// One row of the segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Offset from the start of the source media.
    pub position: Duration,
    pub disposition: Disposition,
    /// Capture timestamp. Date-only values have a zero time of day.
    pub date: NaiveDateTime,
    pub subject: String,
    pub title: String,
}

impl Segment {
    /// Create a segment with an empty label and the minimum date.
    pub fn new(position: Duration, disposition: Disposition) -> Self {
        Self {
            position,
            disposition,
            date: NaiveDateTime::MIN,
            subject: String::new(),
            title: String::new(),
        }
    }

    /// Set the capture date.
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn is_keep(&self) -> bool {
        self.disposition == Disposition::Keep
    }
}

/// A contiguous span of the source destined to become one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// 1-based sequence number within the capture day. Zero until assigned.
    pub ordinal: u32,
    pub start: Duration,
    pub end: Duration,
    pub date: NaiveDateTime,
    pub subject: String,
    pub title: String,
}

impl Scene {
    /// Length of the scene.
    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }
}

/// A destination path guaranteed not to exist when it was generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub path: PathBuf,
    /// Disambiguation letter, if the plain name was taken.
    pub letter: Option<char>,
}

/// Whether a timestamp carries only a calendar date.
pub fn is_date_only(date: &NaiveDateTime) -> bool {
    date.hour() == 0 && date.minute() == 0 && date.second() == 0
}

/// Format a media position as `H:MM:SS.mmm`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use scenesplit_common::format_position;
///
/// assert_eq!(format_position(Duration::from_millis(3_723_004)), "1:02:03.004");
/// ```
pub fn format_position(position: Duration) -> String {
    let secs = position.as_secs();
    format!(
        "{}:{:02}:{:02}.{:03}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        position.subsec_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_disposition_from_str() {
        assert_eq!("Keep".parse::<Disposition>(), Ok(Disposition::Keep));
        assert_eq!(" discard ".parse::<Disposition>(), Ok(Disposition::Discard));
        assert_eq!(
            "AddToPrevious".parse::<Disposition>(),
            Ok(Disposition::AddToPrevious)
        );
        assert_eq!("+".parse::<Disposition>(), Ok(Disposition::AddToPrevious));
        assert!("maybe".parse::<Disposition>().is_err());
    }

    #[test]
    fn test_disposition_display_parses_back() {
        for d in [Disposition::Keep, Disposition::Discard, Disposition::AddToPrevious] {
            assert_eq!(d.to_string().parse::<Disposition>(), Ok(d));
        }
    }

    #[test]
    fn test_is_date_only() {
        let day = NaiveDate::from_ymd_opt(1994, 7, 4).unwrap();
        assert!(is_date_only(&day.and_hms_opt(0, 0, 0).unwrap()));
        assert!(!is_date_only(&day.and_hms_opt(0, 0, 1).unwrap()));
        assert!(!is_date_only(&day.and_hms_opt(18, 30, 0).unwrap()));
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(Duration::ZERO), "0:00:00.000");
        assert_eq!(format_position(Duration::from_millis(59_966)), "0:00:59.966");
        assert_eq!(format_position(Duration::from_secs(2 * 3600)), "2:00:00.000");
    }

    #[test]
    fn test_scene_duration() {
        let scene = Scene {
            ordinal: 1,
            start: Duration::from_secs(10),
            end: Duration::from_secs(25),
            date: NaiveDateTime::MIN,
            subject: "Party".into(),
            title: String::new(),
        };
        assert_eq!(scene.duration(), Duration::from_secs(15));
    }
}
