//! Scratch space for rewriting a file in place.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Workspace for rewriting a produced file.
///
/// The temp directory is created next to the target so the final rename stays
/// on one filesystem and replaces the target atomically. If the workspace is
/// dropped without [`Workspace::finalize`], the target is left untouched and
/// the temp directory is removed.
///
/// # Example
///
/// ```no_run
/// use scenesplit_av::Workspace;
///
/// let workspace = Workspace::new("/clips/2020-01-01 (01) Party.mp4")?;
/// // write the rewritten file to workspace.output()
/// workspace.finalize()?;
/// # Ok::<(), scenesplit_av::Error>(())
/// ```
pub struct Workspace {
    temp_dir: TempDir,
    target_path: PathBuf,
    output_path: PathBuf,
}

impl Workspace {
    /// Create a workspace for rewriting `target`.
    pub fn new<P: AsRef<Path>>(target: P) -> Result<Self> {
        let target = target.as_ref();

        let file_name = target
            .file_name()
            .ok_or_else(|| Error::InvalidInput(format!("Invalid target path: {:?}", target)))?;
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp_dir = tempfile::Builder::new()
            .prefix(".scenesplit-")
            .tempdir_in(&parent)
            .map_err(|e| Error::Workspace(e.to_string()))?;
        let output_path = temp_dir.path().join(file_name);

        Ok(Self {
            temp_dir,
            target_path: target.to_path_buf(),
            output_path,
        })
    }

    /// Where the rewritten file must be written.
    pub fn output(&self) -> &Path {
        &self.output_path
    }

    /// Replace the target with the rewritten output.
    pub fn finalize(self) -> Result<PathBuf> {
        if !self.output_path.exists() {
            return Err(Error::Workspace(format!(
                "Output file does not exist: {:?}",
                self.output_path
            )));
        }

        std::fs::rename(&self.output_path, &self.target_path).map_err(|e| {
            Error::Workspace(format!("Failed to move output to destination: {}", e))
        })?;

        self.temp_dir
            .close()
            .map_err(|e| Error::Workspace(format!("Failed to remove temp dir: {}", e)))?;

        Ok(self.target_path)
    }
}
