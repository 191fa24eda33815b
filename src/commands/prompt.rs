//! Interactive confirmation for commands that rewrite files in place

use std::io::{self, BufRead, Write};

use dirtidy::output::{OperationResult, OutputMode};

/// Ask a yes/no question on stderr and read the answer from stdin
///
/// Only `yes` (any case) confirms. End of input counts as no.
pub fn confirm(question: &str) -> anyhow::Result<bool> {
    eprint!("{question} (yes/no): ");
    io::stderr().flush()?;

    let mut answer = String::new();
    let read = io::stdin().lock().read_line(&mut answer)?;
    Ok(read > 0 && answer.trim().eq_ignore_ascii_case("yes"))
}

/// Report that the user declined
pub fn cancelled(mode: OutputMode) {
    OperationResult {
        success: false,
        message: "Operation cancelled.".to_string(),
    }
    .render(mode);
}
