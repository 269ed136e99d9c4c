//! Media processing actions.
//!
//! - Cutting a span out of a recording into a new, re-encoded file
//! - Tagging a produced file with descriptive metadata and timestamps

mod cut;
mod tag;

pub use cut::{
    cut, cut_command, default_avi_args, default_progressive_args, CutRequest, EncodeOptions,
    SourceKind, FFMPEG,
};
pub use tag::{set_file_times, tag_command, tag_file, Tags};
