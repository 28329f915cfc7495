//! # Columns
//!
//! Length-sorted, width-doubling column layout.
//!
//! The layout is a fold of the sorted names over [`ColumnState`]: each name
//! becomes one field, and a line break is inserted whenever the current line
//! would grow past the limit.

/// Width of a field before any name has outgrown it.
pub const INITIAL_FIELD_WIDTH: usize = 10;

/// Columns kept free at the right edge of the terminal.
pub const WIDTH_MARGIN: usize = 6;

/// Separator between output lines.
pub const LINE_BREAK: &str = "\r\n";

/// Running state of the column layout.
///
/// # Example
///
/// ```
/// use rolefinder_output::columns::ColumnState;
///
/// let text = ColumnState::new(74).push("view").push("edit").finish();
/// assert_eq!(text, "view      edit      ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnState {
    /// Text emitted so far.
    text: String,
    /// Length of the current output line.
    line_len: usize,
    /// Current field width; doubles each time a name does not fit.
    field_width: usize,
    /// Position within the current width bucket.
    bucket_index: usize,
    /// Longest line allowed before wrapping.
    max_line_len: usize,
}

impl ColumnState {
    /// Start an empty layout whose lines may be at most `max_line_len` long.
    pub fn new(max_line_len: usize) -> Self {
        Self {
            text: String::new(),
            line_len: 0,
            field_width: INITIAL_FIELD_WIDTH,
            bucket_index: 0,
            max_line_len,
        }
    }

    /// Append one name as a field, wrapping first if the line would overflow.
    ///
    /// Names are expected in ascending length order.
    pub fn push(mut self, name: &str) -> Self {
        let field = self.next_field(name);
        self.bucket_index += 1;

        self.line_len += field.len();
        if self.line_len > self.max_line_len {
            self.text.push_str(LINE_BREAK);
            self.line_len = field.len();
            self.bucket_index = 0;
        }

        self.text.push_str(&field);
        self
    }

    /// Consume the state and return the laid out text.
    pub fn finish(self) -> String {
        self.text
    }

    fn next_field(&mut self, name: &str) -> String {
        if name.len() < self.field_width {
            return format!("{:<width$}", name, width = self.field_width);
        }

        // An odd position leaves half a wide column open; fill it before the name.
        let pad = if self.bucket_index % 2 == 1 {
            " ".repeat(self.field_width)
        } else {
            String::new()
        };
        self.field_width *= 2;
        self.bucket_index = 0;

        format!("{}{:<width$}", pad, name, width = self.field_width)
    }
}

/// Lay out `names` in columns for a terminal `terminal_width` columns wide.
///
/// Returns an empty string for an empty list. The result carries no trailing
/// newline.
///
/// # Example
///
/// ```
/// use rolefinder_output::columns::format_columns;
///
/// assert_eq!(format_columns(&["a"], 100), "a         ");
/// assert_eq!(format_columns::<&str>(&[], 100), "");
/// ```
pub fn format_columns<S: AsRef<str>>(names: &[S], terminal_width: usize) -> String {
    let mut sorted: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|name| name.len());

    sorted
        .into_iter()
        .fold(
            ColumnState::new(terminal_width.saturating_sub(WIDTH_MARGIN)),
            ColumnState::push,
        )
        .finish()
}
