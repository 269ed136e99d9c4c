//! Seams to the outside world used while producing scenes.
//!
//! The executor only talks to these traits, so planning, naming and metadata
//! composition can run without ffmpeg or any real media.

use crate::plan::SceneMetadata;
use scenesplit_common::Result;
use std::path::Path;
use std::time::Duration;

/// Reports the total length of a recording.
pub trait DurationProbe {
    fn duration(&self, source: &Path) -> Result<Duration>;
}

/// Produces a new file holding `start..end` of the source.
///
/// Must not return until the output is complete.
pub trait Transcoder {
    fn transcode(&self, source: &Path, start: Duration, end: Duration, destination: &Path)
        -> Result<()>;
}

/// Persists composed metadata onto a produced file.
///
/// Either every value is written or the file is left as it was.
pub trait MetadataWriter {
    fn write(&self, file: &Path, metadata: &SceneMetadata) -> Result<()>;
}
