//! Writing descriptive metadata and timestamps onto a produced file.

use super::cut::FFMPEG;
use crate::{tools, Error, Result, Workspace};
use chrono::NaiveDateTime;
use filetime::FileTime;
use std::path::Path;
use std::process::Command;

/// Metadata written onto a clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tags {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub comment: String,
    pub keywords: Vec<String>,
    pub track: u32,
    /// Creation and modification time, interpreted as UTC.
    pub timestamp: NaiveDateTime,
}

impl Tags {
    /// `key=value` pairs handed to ffmpeg's `-metadata`.
    pub fn metadata_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref title) = self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(ref subject) = self.subject {
            pairs.push(("description", subject.clone()));
        }
        if !self.keywords.is_empty() {
            pairs.push(("keywords", self.keywords.join(";")));
        }
        pairs.push(("track", self.track.to_string()));
        pairs.push(("comment", self.comment.clone()));
        pairs.push((
            "creation_time",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
        ));
        pairs
    }
}

/// Build the ffmpeg invocation that copies `input` to `output` with new tags.
pub fn tag_command(ffmpeg: &Path, input: &Path, output: &Path, tags: &Tags) -> Command {
    let mut cmd = Command::new(ffmpeg);
    cmd.args(["-hide_banner", "-nostdin", "-y", "-i"])
        .arg(input)
        .args(["-map", "0", "-c", "copy", "-map_metadata", "0"]);
    for (key, value) in tags.metadata_pairs() {
        cmd.arg("-metadata").arg(format!("{}={}", key, value));
    }
    cmd.args(["-movflags", "+faststart"]).arg(output);
    cmd
}

/// Persist `tags` onto `path`.
///
/// The tagged copy is written into a [`Workspace`] beside the file and only
/// replaces it once ffmpeg succeeds; on any failure the original clip stays
/// as it was and the workspace is cleaned up. The file times are set last.
pub fn tag_file(ffmpeg: &Path, path: &Path, tags: &Tags) -> Result<()> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let workspace = Workspace::new(path)?;
    let mut cmd = tag_command(ffmpeg, path, workspace.output(), tags);

    #[cfg(feature = "tracing")]
    tracing::debug!("Tagging {:?}: {:?}", path, tags.metadata_pairs());

    tools::run(FFMPEG, &mut cmd)?;
    workspace.finalize()?;

    set_file_times(path, &tags.timestamp)
}

/// Set access and modification time of `path` to `timestamp` (UTC).
pub fn set_file_times(path: &Path, timestamp: &NaiveDateTime) -> Result<()> {
    let utc = timestamp.and_utc();
    let time = FileTime::from_unix_time(utc.timestamp(), utc.timestamp_subsec_nanos());
    filetime::set_file_times(path, time, time)?;
    Ok(())
}
