//! dirtidy - housekeeping for folders of files and plain-text journals
//!
//! This library provides the operations behind the `dirtidy` CLI: merging
//! directory trees, gathering files by extension, filing and date-stamping
//! journal notes, and splitting chat logs into daily files.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    unsafe_code,
    unused_import_braces
)]
#![warn(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod fsops;
pub mod naming;
pub mod ops;
pub mod output;
pub mod paths;

pub use error::{Result, TidyError};
