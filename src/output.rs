//! Single key/value output channel for the computed version.
//!
//! Inside a GitHub Actions runner the `GITHUB_OUTPUT` variable names a file
//! that collects `name=value` lines. Elsewhere the pair goes to stdout.

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Environment variable naming the runner's output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Default output key for the computed version
pub const DEFAULT_OUTPUT_NAME: &str = "new_version";

/// Publish `name=value` to the runner output file, or stdout outside a runner
pub fn set_action_output(name: &str, value: &str) -> Result<()> {
    let path = std::env::var_os(GITHUB_OUTPUT_ENV).filter(|p| !p.is_empty());
    write_output(path.as_deref().map(Path::new), name, value)
}

/// Append `name=value` to `path`, or print it when no path is given
pub fn write_output(path: Option<&Path>, name: &str, value: &str) -> Result<()> {
    let line = format!("{}={}", name, value);
    match path {
        Some(path) => {
            log::debug!("appending '{}' to {}", line, path.display());
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}", line)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", line)?;
        }
    }
    Ok(())
}
