//! Line-oriented I/O for the CLI
//!
//! Requests arrive as single JSON lines on stdin; responses leave as
//! single JSON lines on stdout. Log output never touches stdout.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read request lines from stdin until EOF. Blank lines are skipped.
pub fn read_lines() -> impl Iterator<Item = CliResult<String>> {
    io::stdin()
        .lock()
        .lines()
        .map(|line| line.map_err(CliError::from))
        .filter(|line| match line {
            Ok(text) => !text.trim().is_empty(),
            Err(_) => true,
        })
}

/// Write a success envelope to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(&response.to_string())
}

/// Write an error envelope to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(&response.to_string())
}

/// Write one raw line to stdout and flush
pub fn write_line(line: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}
