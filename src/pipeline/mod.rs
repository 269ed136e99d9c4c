mod capabilities;
pub mod executor;
pub mod ffmpeg;

pub use capabilities::{DurationProbe, MetadataWriter, Transcoder};
pub use executor::{FileReport, ProducedScene, ProgressCallback, SceneProducer};
pub use ffmpeg::FfmpegTools;

use crate::config::RunConfig;
use anyhow::Context;
use scenesplit_common::paths::is_video_file;
use scenesplit_common::{Error, Result};
use std::path::PathBuf;

/// Split every recording matched by the run's source pattern, in order.
///
/// `on_report` sees each file's report as soon as it is done. Processing
/// stops at the first failing file; clips from earlier files are kept and
/// later files are not touched. Returns the number of files processed.
pub fn run_all<F>(
    config: &RunConfig,
    probe: &dyn DurationProbe,
    transcoder: &dyn Transcoder,
    writer: &dyn MetadataWriter,
    mut on_report: F,
) -> anyhow::Result<usize>
where
    F: FnMut(&FileReport),
{
    let sources = expand_sources(&config.source_pattern)?;
    tracing::info!("{} recording(s) to split", sources.len());

    let producer = SceneProducer::new(config, probe, transcoder, writer);

    for source in &sources {
        let report = producer
            .process_file(source)
            .with_context(|| format!("Failed to process {:?}", source))?;
        on_report(&report);
    }

    Ok(sources.len())
}

/// Expand a source pattern into the recordings it names, in sorted order.
///
/// Only video files are kept, so a pattern like `tapes/*` skips the sidecars.
///
/// # Errors
///
/// [`Error::Argument`] for a malformed pattern, [`Error::NoMatches`] when no
/// video file matches.
pub fn expand_sources(pattern: &str) -> Result<Vec<PathBuf>> {
    let matches = glob::glob(pattern)
        .map_err(|e| Error::argument(format!("Invalid pattern {:?}: {}", pattern, e)))?;

    let mut sources = Vec::new();
    for entry in matches {
        let path = entry.map_err(|e| Error::Io(e.into()))?;
        if path.is_file() && is_video_file(&path) {
            sources.push(path);
        } else {
            tracing::debug!("Skipping {:?}", path);
        }
    }

    if sources.is_empty() {
        return Err(Error::NoMatches(pattern.to_string()));
    }

    sources.sort();
    Ok(sources)
}
