//! Path utilities for locating sidecar files and recognizing video sources.

use std::path::{Path, PathBuf};

/// Suffix that replaces a source file's extension to name its segment list.
pub const SIDECAR_SUFFIX: &str = " scenes.csv";

/// Extension of every produced scene.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "m4v", "mov", "mkv", "mts", "mpg", "mpeg"];

/// Path of the segment list that accompanies a source video.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use scenesplit_common::paths::sidecar_path;
///
/// assert_eq!(
///     sidecar_path(Path::new("/tapes/Tape 04.mp4")),
///     Path::new("/tapes/Tape 04 scenes.csv")
/// );
/// ```
pub fn sidecar_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = format!("{}{}", stem, SIDECAR_SUFFIX);
    match source.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Check if a path has a video file extension.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
