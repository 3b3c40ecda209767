use anyhow::{Error, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::exit::ExitCode;

pub const NO_ERRORS: &str = "No errors found.";
pub const LOAD_ERROR_PREFIX: &str = "Error loading JSON: ";

pub fn eprintln_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "error:");
    let _ = writeln!(stderr, "  {err}");

    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        let _ = writeln!(stderr, "caused by:");
        for cause in causes {
            let _ = writeln!(stderr, "  - {cause}");
        }
    }

    let _ = writeln!(stderr, "next:");
    for hint in next_steps(err) {
        let _ = writeln!(stderr, "  - {hint}");
    }
}

fn next_steps(err: &Error) -> &'static [&'static str] {
    if crate::exit::exit_code(err) == ExitCode::InvalidArgs.as_i32() {
        &[
            "fix the config file or LINTSUM_* variable named above, or pass `--config <PATH>` to use another file",
            "`lintsum --show-config` prints the resolved input path, encoding and format",
        ]
    } else {
        &["rerun with `--log-level debug` to see which step stopped the run"]
    }
}

/// The single stdout line for a report that could not be loaded. The whole
/// context chain is joined onto that one line.
pub fn load_error_line(err: &Error) -> String {
    let desc = format!("{err:#}").replace(['\r', '\n'], " ");
    format!("{LOAD_ERROR_PREFIX}{desc}")
}

pub fn print_load_error(err: &Error) -> Result<()> {
    write_lines(&[load_error_line(err)])
}

pub fn print_errors(lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        return write_lines(&[NO_ERRORS.to_string()]);
    }
    write_lines(lines)
}

pub fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut buf = serde_json::to_vec_pretty(value)?;
    buf.push(b'\n');
    write_stdout(&buf)
}

pub fn write_toml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let s = toml::to_string_pretty(value)?;
    write_stdout(s.as_bytes())
}

fn write_lines(lines: &[String]) -> Result<()> {
    let mut buf = String::new();
    for line in lines {
        buf.push_str(line);
        buf.push('\n');
    }
    write_stdout(buf.as_bytes())
}

fn write_stdout(buf: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(buf).and_then(|()| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err.into()),
    }
}
