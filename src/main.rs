//! dirtidy - housekeeping for folders of files and plain-text journals

#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code, unused_import_braces)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod cli;
mod commands;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        },
    }
}
