//! # Report
//!
//! The text printed for one lookup.

use crate::columns::format_columns;

/// Result of a lookup, ready to be rendered.
///
/// # Example
///
/// ```
/// use rolefinder_output::Report;
///
/// let none: Vec<String> = Vec::new();
/// assert_eq!(
///     Report::new("secrets", &none).render(80),
///     "No clusterRole has resource secrets."
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    resource: &'a str,
    names: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(resource: &'a str, names: &'a [String]) -> Self {
        Self { resource, names }
    }

    /// True when no role matched.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render for a terminal `terminal_width` columns wide.
    ///
    /// With matches: a header line, the column block and a trailing newline.
    /// Without: a single sentence and no trailing newline.
    pub fn render(&self, terminal_width: usize) -> String {
        if self.is_empty() {
            return format!("No clusterRole has resource {}.", self.resource);
        }

        format!(
            "Those clusterRole has resource {}:\n{}\n",
            self.resource,
            format_columns(self.names, terminal_width)
        )
    }
}
