//! The ffmpeg/ffprobe backed implementations of the pipeline seams.

use super::{DurationProbe, MetadataWriter, Transcoder};
use crate::config::Config;
use crate::plan::SceneMetadata;
use scenesplit_av::actions::{self, CutRequest, EncodeOptions, Tags, FFMPEG};
use scenesplit_av::probe::{self, FFPROBE};
use scenesplit_av::tools::get_tool_path;
use scenesplit_common::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved tool locations plus the settings they run with.
#[derive(Debug, Clone)]
pub struct FfmpegTools {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
    encode: EncodeOptions,
    keywords: Vec<String>,
}

impl FfmpegTools {
    /// Locate ffmpeg and ffprobe, preferring configured paths over PATH.
    ///
    /// A tool that cannot be found is left as its bare name; the failure then
    /// surfaces as an external tool error when it is first needed, after the
    /// segment list has been checked.
    pub fn discover(config: &Config) -> Self {
        let ffmpeg = locate(FFMPEG, config.tools.ffmpeg_path.as_deref());
        let ffprobe = locate(FFPROBE, config.tools.ffprobe_path.as_deref());

        tracing::debug!("Using ffmpeg at {:?}, ffprobe at {:?}", ffmpeg, ffprobe);

        Self {
            ffmpeg,
            ffprobe,
            encode: EncodeOptions {
                progressive: config.encode.mp4.clone(),
                avi: config.encode.avi.clone(),
            },
            keywords: config.metadata.keywords.clone(),
        }
    }

    /// Tags for a scene, with the configured keywords.
    pub fn tags_for(&self, metadata: &SceneMetadata) -> Tags {
        Tags {
            title: metadata.title.clone(),
            subject: metadata.subject.clone(),
            comment: metadata.comment.clone(),
            keywords: self.keywords.clone(),
            track: metadata.track,
            timestamp: metadata.timestamp,
        }
    }
}

impl DurationProbe for FfmpegTools {
    fn duration(&self, source: &Path) -> Result<Duration> {
        let info = probe::probe_with_ffprobe(&self.ffprobe, source).map_err(external)?;
        tracing::debug!("Probed {:?}: container {}", info.file_path, info.container);
        info.duration
            .ok_or_else(|| Error::external_tool(FFPROBE, format!("no duration for {:?}", source)))
    }
}

impl Transcoder for FfmpegTools {
    fn transcode(
        &self,
        source: &Path,
        start: Duration,
        end: Duration,
        destination: &Path,
    ) -> Result<()> {
        let request = CutRequest {
            source: source.to_path_buf(),
            start,
            end,
            destination: destination.to_path_buf(),
        };
        actions::cut(&self.ffmpeg, &request, &self.encode).map_err(external)
    }
}

impl MetadataWriter for FfmpegTools {
    fn write(&self, file: &Path, metadata: &SceneMetadata) -> Result<()> {
        actions::tag_file(&self.ffmpeg, file, &self.tags_for(metadata)).map_err(external)
    }
}

fn locate(name: &str, configured: Option<&Path>) -> PathBuf {
    get_tool_path(name, configured).unwrap_or_else(|e| {
        tracing::warn!("{}", e);
        PathBuf::from(name)
    })
}

/// Fold a tool error into the common taxonomy.
fn external(err: scenesplit_av::Error) -> Error {
    match err {
        scenesplit_av::Error::Io(e) => Error::Io(e),
        other => {
            let tool = other.tool().unwrap_or(FFMPEG).to_string();
            Error::external_tool(tool, other.to_string())
        }
    }
}
