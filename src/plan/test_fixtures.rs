use chrono::{NaiveDate, NaiveDateTime};
use scenesplit_common::{Disposition, Segment};
use std::time::Duration;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

pub fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

pub fn keep(pos: Duration, date: NaiveDateTime, subject: &str) -> Segment {
    Segment::new(pos, Disposition::Keep)
        .with_date(date)
        .with_subject(subject)
}

pub fn discard(pos: Duration) -> Segment {
    Segment::new(pos, Disposition::Discard)
}

pub fn merge(pos: Duration) -> Segment {
    Segment::new(pos, Disposition::AddToPrevious)
}

/// Party at 0:00, discard at 1:00, Cake at 1:05, all on 2020-01-01.
pub fn party_and_cake() -> Vec<Segment> {
    vec![
        keep(secs(0), day(2020, 1, 1), "Party"),
        discard(secs(60)),
        keep(secs(65), day(2020, 1, 1), "Cake"),
    ]
}
