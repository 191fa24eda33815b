//! File operations behind each command
//!
//! Operations take paths and settings, act on the filesystem, and return a
//! report. They never print; progress goes to the `log` facade.

mod journal;
mod merge;
mod organize;
mod split;

pub use journal::{StampOptions, collect, header_for, stamp};
pub use merge::merge;
pub use organize::{normalize_extensions, organize};
pub use split::split_log;
