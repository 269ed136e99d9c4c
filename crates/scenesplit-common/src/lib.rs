//! Scenesplit-Common: shared types, errors, and path utilities.
//!
//! - **Types**: [`Segment`], [`Disposition`], [`Scene`], [`GeneratedName`]
//! - **Errors**: the [`Error`] taxonomy every stage reports through
//! - **Paths**: sidecar location and video extension checks
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use scenesplit_common::{Disposition, Segment};
//!
//! let seg = Segment::new(Duration::from_secs(65), Disposition::Keep).with_subject("Cake");
//! assert!(seg.is_keep());
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
