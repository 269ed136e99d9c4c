//! Cutting a span out of a recording with ffmpeg.

use crate::{tools, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Tool name used in errors and lookups.
pub const FFMPEG: &str = "ffmpeg";

/// Source container families that get different encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Progressive sources (mp4, mov, ...).
    Progressive,
    /// AVI captures, which are interlaced and need deinterlacing.
    Avi,
}

impl SourceKind {
    /// Classify a source by its extension.
    pub fn of(path: &Path) -> Self {
        let is_avi = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("avi"))
            .unwrap_or(false);
        if is_avi {
            SourceKind::Avi
        } else {
            SourceKind::Progressive
        }
    }
}

/// Encoder arguments per source kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    pub progressive: Vec<String>,
    pub avi: Vec<String>,
}

impl EncodeOptions {
    /// Arguments to use for the given source.
    pub fn for_source(&self, source: &Path) -> &[String] {
        match SourceKind::of(source) {
            SourceKind::Progressive => &self.progressive,
            SourceKind::Avi => &self.avi,
        }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            progressive: default_progressive_args(),
            avi: default_avi_args(),
        }
    }
}

/// Sharpened H.264 main profile with AAC audio.
pub fn default_progressive_args() -> Vec<String> {
    to_args(&[
        "-vf", "unsharp", "-c:v", "libx264", "-profile:v", "main", "-level:v", "3.1", "-crf",
        "20", "-c:a", "aac", "-movflags", "+faststart",
    ])
}

/// Same as progressive, deinterlaced to one frame per field first.
pub fn default_avi_args() -> Vec<String> {
    to_args(&[
        "-vf",
        "yadif=1,unsharp",
        "-pix_fmt",
        "yuv420p",
        "-c:v",
        "libx264",
        "-profile:v",
        "main",
        "-level:v",
        "3.1",
        "-crf",
        "20",
        "-c:a",
        "aac",
        "-movflags",
        "+faststart",
    ])
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// A span to cut out of a source file.
#[derive(Debug, Clone)]
pub struct CutRequest {
    pub source: PathBuf,
    pub start: Duration,
    pub end: Duration,
    pub destination: PathBuf,
}

/// Build the ffmpeg invocation for a cut.
///
/// Seeking after `-i` decodes up to the cut point, which is slow but frame
/// accurate.
pub fn cut_command(ffmpeg: &Path, request: &CutRequest, options: &EncodeOptions) -> Command {
    let mut cmd = Command::new(ffmpeg);
    cmd.arg("-hide_banner")
        .arg("-nostdin")
        .arg("-n")
        .arg("-i")
        .arg(&request.source)
        .arg("-ss")
        .arg(microseconds(request.start))
        .arg("-to")
        .arg(microseconds(request.end))
        .args(options.for_source(&request.source))
        .arg(&request.destination);
    cmd
}

/// Cut `request.start..request.end` out of the source into a new file.
///
/// Blocks until ffmpeg exits.
pub fn cut(ffmpeg: &Path, request: &CutRequest, options: &EncodeOptions) -> Result<()> {
    let mut cmd = cut_command(ffmpeg, request, options);

    #[cfg(feature = "tracing")]
    tracing::debug!("Running {:?} {:?}", cmd.get_program(), cmd.get_args().collect::<Vec<_>>());

    tools::run(FFMPEG, &mut cmd)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Cut complete: {:?}", request.destination);

    Ok(())
}

fn microseconds(position: Duration) -> OsString {
    OsString::from(format!("{}us", position.as_micros()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_source_kind() {
        assert_eq!(SourceKind::of(Path::new("tape.AVI")), SourceKind::Avi);
        assert_eq!(SourceKind::of(Path::new("tape.mp4")), SourceKind::Progressive);
        assert_eq!(SourceKind::of(Path::new("tape")), SourceKind::Progressive);
    }

    #[test]
    fn test_cut_command_layout() {
        let request = CutRequest {
            source: PathBuf::from("/in/tape.mp4"),
            start: Duration::from_millis(1_500),
            end: Duration::from_millis(59_966),
            destination: PathBuf::from("/out/2020-01-01 (01) Party.mp4"),
        };
        let cmd = cut_command(Path::new("ffmpeg"), &request, &EncodeOptions::default());
        let args = args_of(&cmd);

        let ss = args.iter().position(|a| a == "-ss").unwrap();
        assert_eq!(args[ss + 1], "1500000us");
        let to = args.iter().position(|a| a == "-to").unwrap();
        assert_eq!(args[to + 1], "59966000us");
        let input = args.iter().position(|a| a == "-i").unwrap();
        assert!(input < ss, "seek must follow the input for accurate cuts");
        assert_eq!(args.last().unwrap(), "/out/2020-01-01 (01) Party.mp4");
        assert!(args.contains(&"unsharp".to_string()));
        assert!(!args.iter().any(|a| a.contains("yadif")));
    }

    #[test]
    fn test_cut_command_deinterlaces_avi() {
        let request = CutRequest {
            source: PathBuf::from("/in/tape.avi"),
            start: Duration::ZERO,
            end: Duration::from_secs(10),
            destination: PathBuf::from("/out/a.mp4"),
        };
        let args = args_of(&cut_command(
            Path::new("ffmpeg"),
            &request,
            &EncodeOptions::default(),
        ));
        assert!(args.contains(&"yadif=1,unsharp".to_string()));
        assert!(args.contains(&"yuv420p".to_string()));
    }
}
