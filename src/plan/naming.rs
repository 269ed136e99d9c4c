//! Output filenames for scenes.

use scenesplit_common::paths::OUTPUT_EXTENSION;
use scenesplit_common::{Error, GeneratedName, Result, Scene};
use std::path::Path;

/// Candidate names tried per scene: the plain name, then one letter each.
pub const MAX_ATTEMPTS: usize = 26;

/// Joins the title onto the rest of the name, and onto the subject in metadata.
pub const TITLE_SEPARATOR: &str = "+";

/// Format the file name for a scene, without folder.
///
/// `YYYY-MM-DD (NN[letter]) subject+title.mp4`, leaving out the subject or the
/// title when blank.
pub fn file_name(scene: &Scene, letter: Option<char>) -> String {
    let mut name = format!("{} ({:02}", scene.date.format("%Y-%m-%d"), scene.ordinal);
    if let Some(letter) = letter {
        name.push(letter);
    }
    name.push(')');

    let subject = scene.subject.trim();
    if !subject.is_empty() {
        name.push(' ');
        name.push_str(subject);
    }

    let title = scene.title.trim();
    if !title.is_empty() {
        name.push_str(TITLE_SEPARATOR);
        name.push_str(title);
    }

    name.push('.');
    name.push_str(OUTPUT_EXTENSION);
    name
}

/// Disambiguation letter for an attempt: none first, then `a`, `b`, ...
fn letter_for(attempt: usize) -> Option<char> {
    match attempt {
        0 => None,
        n => Some((b'a' + (n - 1) as u8) as char),
    }
}

/// Pick the first name for `scene` in `folder` that `exists` reports as free.
///
/// # Errors
///
/// [`Error::GenerationExhausted`] when all [`MAX_ATTEMPTS`] candidates exist.
pub fn generate_filename<F>(folder: &Path, scene: &Scene, exists: F) -> Result<GeneratedName>
where
    F: Fn(&Path) -> bool,
{
    for attempt in 0..MAX_ATTEMPTS {
        let letter = letter_for(attempt);
        let path = folder.join(file_name(scene, letter));
        if !exists(&path) {
            return Ok(GeneratedName { path, letter });
        }
    }

    Err(Error::GenerationExhausted {
        base: file_name(scene, None),
    })
}
