//! Media file probing.
//!
//! Only what scene production needs: the container format and the total
//! duration, read from ffprobe's JSON output.

mod ffprobe;

pub use ffprobe::{probe_with_ffprobe, FFPROBE};

use std::path::PathBuf;
use std::time::Duration;

/// Information about a media file.
#[derive(Debug, Clone)]
pub struct MediaInfo {
    /// Path to the media file.
    pub file_path: PathBuf,
    /// Container format as reported by ffprobe (e.g. "mov,mp4,m4a,3gp,3g2,mj2", "avi").
    pub container: String,
    /// Duration of the media.
    pub duration: Option<Duration>,
}
