//! # Terminal
//!
//! Terminal dimensions behind a small trait, so layout code can run against a
//! real terminal or a fixed size.
//!
//! [`SttyProbe`] asks `stty size` about the terminal on the process's stdin.
//! When there is no terminal (output piped, running under CI, `stty` missing)
//! it reports [`TerminalSize::FALLBACK`] instead of failing.

use serde::{Deserialize, Serialize};
use std::io;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Rows and columns of a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSize {
    /// Number of rows.
    pub rows: u16,
    /// Number of columns.
    pub columns: u16,
}

impl TerminalSize {
    /// Size assumed when the terminal cannot be queried.
    pub const FALLBACK: TerminalSize = TerminalSize {
        rows: 40,
        columns: 80,
    };

    /// Create a size.
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    /// Parse `stty size` output, `"<rows> <columns>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use rolefinder_output::terminal::TerminalSize;
    ///
    /// assert_eq!(TerminalSize::parse("50 120\n"), Some(TerminalSize::new(50, 120)));
    /// assert_eq!(TerminalSize::parse("not a size"), None);
    /// ```
    pub fn parse(output: &str) -> Option<Self> {
        let mut parts = output.split_whitespace();
        let rows = parts.next()?.parse().ok()?;
        let columns = parts.next()?.parse().ok()?;
        Some(Self { rows, columns })
    }

    /// Columns as a `usize`, for layout arithmetic.
    pub fn columns(&self) -> usize {
        usize::from(self.columns)
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Source of terminal dimensions.
pub trait TerminalInfo {
    /// Current terminal size. Never fails; implementations fall back to a fixed size.
    fn size(&self) -> TerminalSize;
}

/// Queries the attached terminal by running `stty size`.
#[derive(Debug, Clone)]
pub struct SttyProbe {
    program: String,
    args: Vec<String>,
}

impl Default for SttyProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SttyProbe {
    pub fn new() -> Self {
        Self::with_command("stty", ["size"])
    }

    /// Run `program args..` instead of `stty size`. Its stdout must follow the
    /// `"<rows> <columns>"` format.
    pub fn with_command<I>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Decide the terminal size from the outcome of running the probe command.
///
/// A spawn failure, a non-zero exit, unparseable output or a zero width all
/// give [`TerminalSize::FALLBACK`].
pub fn size_from_output(result: io::Result<Output>) -> TerminalSize {
    match parse_output(result) {
        Some(size) => {
            debug!(rows = size.rows, columns = size.columns, "probed terminal size");
            size
        }
        None => {
            debug!(
                rows = TerminalSize::FALLBACK.rows,
                columns = TerminalSize::FALLBACK.columns,
                "using fallback terminal size"
            );
            TerminalSize::FALLBACK
        }
    }
}

fn parse_output(result: io::Result<Output>) -> Option<TerminalSize> {
    let output = match result {
        Ok(output) => output,
        Err(e) => {
            debug!(error = %e, "failed to run terminal size command");
            return None;
        }
    };

    if !output.status.success() {
        debug!(status = %output.status, "terminal size command exited unsuccessfully");
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let size = TerminalSize::parse(&stdout)?;
    // Pseudo terminals without a window report 0 0
    if size.columns == 0 {
        debug!("terminal reported zero columns");
        return None;
    }
    Some(size)
}

impl TerminalInfo for SttyProbe {
    fn size(&self) -> TerminalSize {
        let result = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::null())
            .output();
        size_from_output(result)
    }
}

/// A terminal of constant size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal(TerminalSize);

impl FixedTerminal {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self(TerminalSize::new(rows, columns))
    }

    /// A terminal `columns` wide with the fallback row count.
    pub fn with_columns(columns: u16) -> Self {
        Self(TerminalSize::new(TerminalSize::FALLBACK.rows, columns))
    }
}

impl TerminalInfo for FixedTerminal {
    fn size(&self) -> TerminalSize {
        self.0
    }
}
