//! Scene planning: everything between a segment list and the files to produce.
//!
//! Nothing here touches the filesystem; [`generate_filename`] is handed the
//! existence check it should use.

mod compose;
mod naming;
mod ordinal;
mod planner;
mod validate;

#[cfg(test)]
mod test_fixtures;

pub use compose::{
    compose, synthesize_timestamp, SceneMetadata, DATE_PRECISION_MARKER, TIMEZONE_MARKER,
};
pub use naming::{file_name, generate_filename, MAX_ATTEMPTS, TITLE_SEPARATOR};
pub use ordinal::assign_ordinals;
pub use planner::{plan_scenes, resolve_end, TRAILING_TRIM};
pub use validate::validate;
