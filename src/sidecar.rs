//! Reading a recording's segment list from its CSV sidecar.
//!
//! One row per segment with the columns `Position, Disposition, Date,
//! Subject, Title`. A header row is optional, blank rows are skipped and
//! missing trailing columns read as empty.

use chrono::{NaiveDate, NaiveDateTime};
use scenesplit_common::paths::sidecar_path;
use scenesplit_common::{Disposition, Error, Result, Segment};
use std::io::Read;
use std::path::Path;
use std::time::Duration;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Load the segment list that accompanies `source`.
///
/// # Errors
///
/// [`Error::SourceNotFound`] if there is no sidecar next to the source, and
/// [`Error::Sidecar`] for rows that cannot be read.
pub fn load_for_source(source: &Path) -> Result<Vec<Segment>> {
    let path = sidecar_path(source);
    if !path.is_file() {
        return Err(Error::SourceNotFound { path });
    }
    load(&path)
}

/// Load a segment list from a CSV file.
pub fn load(path: &Path) -> Result<Vec<Segment>> {
    let file = std::fs::File::open(path)?;
    let segments = parse(file, path)?;
    tracing::debug!("Loaded {} segments from {:?}", segments.len(), path);
    Ok(segments)
}

/// Parse segment rows from any reader. `path` is only used in errors.
pub fn parse<R: Read>(reader: R, path: &Path) -> Result<Vec<Segment>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut segments = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            let row = e.position().map(|p| p.line() as usize).unwrap_or(index + 1);
            sidecar_error(path, row, e.to_string())
        })?;
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        let field = |i: usize| record.get(i).unwrap_or("");
        if record.iter().all(str::is_empty) {
            continue;
        }
        if index == 0 && field(0).eq_ignore_ascii_case("position") {
            continue;
        }

        let position = parse_position(field(0)).map_err(|m| sidecar_error(path, row, m))?;
        let disposition: Disposition = field(1)
            .parse()
            .map_err(|m: String| sidecar_error(path, row, m))?;

        let date = match field(2) {
            "" if disposition == Disposition::Keep => {
                return Err(sidecar_error(path, row, "kept segment has no date"));
            }
            "" => NaiveDateTime::MIN,
            s => parse_date(s).map_err(|m| sidecar_error(path, row, m))?,
        };

        segments.push(
            Segment::new(position, disposition)
                .with_date(date)
                .with_subject(field(3))
                .with_title(field(4)),
        );
    }

    Ok(segments)
}

fn sidecar_error(path: &Path, row: usize, message: impl Into<String>) -> Error {
    Error::Sidecar {
        path: path.to_path_buf(),
        row,
        message: message.into(),
    }
}

/// Parse `H:MM:SS.fff`, `MM:SS.fff` or plain seconds.
pub fn parse_position(s: &str) -> std::result::Result<Duration, String> {
    let invalid = || format!("Invalid position: {:?}", s);

    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid());
    }

    let (secs_part, whole_parts) = parts.split_last().ok_or_else(invalid)?;
    let mut total_secs: u64 = 0;
    for (i, part) in whole_parts.iter().enumerate() {
        let value: u64 = part.parse().map_err(|_| invalid())?;
        // Only the leading field may exceed 59.
        if i > 0 && value >= 60 {
            return Err(invalid());
        }
        total_secs = accumulate(total_secs, value).ok_or_else(invalid)?;
    }

    let (secs, frac) = match secs_part.split_once('.') {
        Some((secs, frac)) => (secs, frac),
        None => (*secs_part, ""),
    };
    let secs: u64 = secs.parse().map_err(|_| invalid())?;
    if !whole_parts.is_empty() && secs >= 60 {
        return Err(invalid());
    }
    total_secs = accumulate(total_secs, secs).ok_or_else(invalid)?;

    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let nanos: u32 = format!("{:0<9}", frac)
        .get(..9)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    Ok(Duration::new(total_secs, nanos))
}

fn accumulate(total: u64, next: u64) -> Option<u64> {
    total.checked_mul(60)?.checked_add(next)
}

/// Parse a capture date, with or without time of day.
pub fn parse_date(s: &str) -> std::result::Result<NaiveDateTime, String> {
    let s = s.trim();
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d.and_time(chrono::NaiveTime::MIN));
        }
    }
    Err(format!("Invalid date: {:?}", s))
}
