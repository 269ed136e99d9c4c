//! FFprobe-based media probing.

use super::MediaInfo;
use crate::{tools, Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// Tool name used in errors and lookups.
pub const FFPROBE: &str = "ffprobe";

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    format_name: String,
    duration: Option<String>,
}

/// Probe a media file using the ffprobe executable at `ffprobe`.
pub fn probe_with_ffprobe(ffprobe: &Path, path: &Path) -> Result<MediaInfo> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let output = tools::run(
        FFPROBE,
        Command::new(ffprobe)
            .args(["-v", "quiet", "-print_format", "json", "-show_format"])
            .arg(path),
    )?;

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error(FFPROBE, format!("Invalid UTF-8: {}", e)))?;

    parse_ffprobe_output(path, &json_str)
}

fn parse_ffprobe_output(path: &Path, json_str: &str) -> Result<MediaInfo> {
    let output: FfprobeOutput = serde_json::from_str(json_str)?;

    let duration = match output.format.duration {
        Some(s) => Some(parse_duration(&s)?),
        None => None,
    };

    Ok(MediaInfo {
        file_path: path.to_path_buf(),
        container: output.format.format_name,
        duration,
    })
}

fn parse_duration(secs: &str) -> Result<Duration> {
    let value: f64 = secs
        .trim()
        .parse()
        .map_err(|_| Error::parse_error(FFPROBE, format!("Invalid duration: {}", secs)))?;
    Duration::try_from_secs_f64(value)
        .map_err(|_| Error::parse_error(FFPROBE, format!("Invalid duration: {}", secs)))
}
