//! # scenesplit-av
//!
//! External tool plumbing for producing scenes from a recording.
//!
//! This crate provides functionality for:
//! - Locating ffmpeg and ffprobe
//! - Probing a recording's container and total duration
//! - Cutting a span into a new file
//! - Tagging a produced file, replacing it atomically
//!
//! All tool invocations block until the tool exits. There is no timeout.
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use scenesplit_av::{probe, require_tool};
//!
//! let ffprobe = require_tool("ffprobe")?;
//! let info = probe::probe_with_ffprobe(&ffprobe, "/tapes/tape.mp4".as_ref())?;
//! println!("Duration: {:?}", info.duration);
//! # Ok::<(), scenesplit_av::Error>(())
//! ```

pub mod actions;
mod error;
pub mod probe;
pub mod tools;
pub mod workspace;

// Re-exports
pub use error::{Error, Result};
pub use probe::MediaInfo;
pub use tools::{get_tool_path, require_tool};
pub use workspace::Workspace;
