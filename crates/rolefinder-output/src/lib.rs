//! # Role Finder Output
//!
//! Renders a list of role names for a terminal.
//!
//! ## Overview
//!
//! The rolefinder-output crate handles:
//! - **Columns**: Packing names of very different lengths into aligned columns
//! - **Terminal**: Finding out how wide the terminal is
//! - **Report**: The final text printed for a lookup
//!
//! ## Column Layout
//!
//! Names are sorted by length and laid out in fields that start 10 characters
//! wide. When a name does not fit, the field width doubles for it and every
//! following name, so short names share narrow columns and long names get wide
//! ones. Lines wrap before they would run past the terminal width minus a
//! 6 column margin.
//!
//! ## Usage
//!
//! ```rust
//! use rolefinder_output::{format_columns, FixedTerminal, Report, TerminalInfo};
//!
//! let names = vec!["admin".to_string(), "edit".to_string(), "view".to_string()];
//! let block = format_columns(&names, 80);
//! assert_eq!(block.trim_end(), "edit      view      admin");
//!
//! let terminal = FixedTerminal::new(24, 80);
//! let text = Report::new("pods", &names).render(terminal.size().columns());
//! assert!(text.starts_with("Those clusterRole has resource pods:\n"));
//! ```

pub mod columns;
pub mod report;
pub mod terminal;

// Re-export main types for convenience
pub use columns::{format_columns, ColumnState};
pub use report::Report;
pub use terminal::{size_from_output, FixedTerminal, SttyProbe, TerminalInfo, TerminalSize};
