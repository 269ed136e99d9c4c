use super::{DurationProbe, MetadataWriter, Transcoder};
use crate::config::RunConfig;
use crate::plan::{self, SceneMetadata};
use crate::sidecar;
use scenesplit_common::{format_position, GeneratedName, Result, Scene};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(f32, &str) + Send + Sync>;

/// A scene that was produced (or, in a dry run, would be).
#[derive(Debug, Clone)]
pub struct ProducedScene {
    pub scene: Scene,
    pub name: GeneratedName,
    pub metadata: SceneMetadata,
}

/// Outcome of processing one source file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub source: PathBuf,
    pub scenes: Vec<ProducedScene>,
}

/// Produces the scenes of one recording at a time.
///
/// Each call to [`SceneProducer::process_file`] starts from scratch: nothing
/// carries over between source files.
pub struct SceneProducer<'a> {
    config: &'a RunConfig,
    probe: &'a dyn DurationProbe,
    transcoder: &'a dyn Transcoder,
    writer: &'a dyn MetadataWriter,
    progress_callback: Option<ProgressCallback>,
}

impl<'a> SceneProducer<'a> {
    pub fn new(
        config: &'a RunConfig,
        probe: &'a dyn DurationProbe,
        transcoder: &'a dyn Transcoder,
        writer: &'a dyn MetadataWriter,
    ) -> Self {
        Self {
            config,
            probe,
            transcoder,
            writer,
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    fn report_progress(&self, progress: f32, step: &str) {
        if let Some(ref cb) = self.progress_callback {
            cb(progress, step);
        }
        tracing::info!("[{:.0}%] {}", progress, step);
    }

    /// Split one recording into scenes.
    ///
    /// The whole segment list is validated before anything is produced. On
    /// error, scenes already finished stay in place and the failing scene's
    /// output is removed.
    pub fn process_file(&self, source: &Path) -> Result<FileReport> {
        tracing::info!("Processing: {:?}", source);

        let segments = sidecar::load_for_source(source)?;
        plan::validate(&segments, self.config.tolerate_out_of_order_dates)?;

        let total = self.probe.duration(source)?;
        tracing::debug!("Media duration: {}", format_position(total));

        let mut scenes = plan::plan_scenes(&segments, total)?;
        plan::assign_ordinals(&mut scenes);

        if scenes.is_empty() {
            tracing::warn!("No kept segments in {:?}", source);
        }

        let total_scenes = scenes.len();
        let mut claimed: HashSet<PathBuf> = HashSet::new();
        let mut produced = Vec::with_capacity(total_scenes);

        for (i, scene) in scenes.into_iter().enumerate() {
            let name = plan::generate_filename(&self.config.destination, &scene, |p| {
                claimed.contains(p) || p.exists()
            })?;
            claimed.insert(name.path.clone());

            let progress = (i as f32 / total_scenes as f32) * 100.0;
            self.report_progress(progress, &format!("Scene {}", name.path.display()));
            tracing::info!(
                "  start={} end={} length={} date={} ordinal={} subject={:?} title={:?}",
                format_position(scene.start),
                format_position(scene.end),
                format_position(scene.duration()),
                scene.date.format("%Y-%m-%d"),
                scene.ordinal,
                scene.subject,
                scene.title
            );

            let metadata = plan::compose(&scene);

            if self.config.dry_run {
                tracing::info!("[DRY RUN] Would produce {:?}", name.path);
            } else if let Err(e) = self.produce(source, &scene, &name.path, &metadata) {
                discard_partial(&name.path);
                return Err(e);
            }

            produced.push(ProducedScene {
                scene,
                name,
                metadata,
            });
        }

        self.report_progress(100.0, &format!("Finished {:?}", source));

        Ok(FileReport {
            source: source.to_path_buf(),
            scenes: produced,
        })
    }

    fn produce(
        &self,
        source: &Path,
        scene: &Scene,
        destination: &Path,
        metadata: &SceneMetadata,
    ) -> Result<()> {
        self.transcoder
            .transcode(source, scene.start, scene.end, destination)?;
        self.writer.write(destination, metadata)
    }
}

/// Remove whatever a failed scene left at its destination.
///
/// The name was free when it was generated, so anything there now is ours.
fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::warn!("Removed incomplete scene {:?}", path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove incomplete scene {:?}: {}", path, e),
    }
}
