use core::fmt;

use thiserror::Error;

/// Error returned when combining spans from different files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("locations are not of the same file: '{left}' and '{right}'")]
    FileMismatch { left: String, right: String },
}

/// A span of source text, addressed by line and column.
///
/// Locations are immutable. Combining two spans with [`Location::extend_with`]
/// yields a new location and leaves both inputs untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    file_name: String,
    start_line: u32,
    start_col: u32,
    end_line: u32,
    end_col: u32,
}

impl Location {
    pub fn new(
        file_name: impl Into<String>,
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// A zero-width location at `line:column`.
    pub fn at(file_name: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(file_name, line, column, line, column)
    }

    pub fn beginning_of_file(file_name: impl Into<String>) -> Self {
        Self::at(file_name, 0, 0)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn start(&self) -> (u32, u32) {
        (self.start_line, self.start_col)
    }

    pub fn end(&self) -> (u32, u32) {
        (self.end_line, self.end_col)
    }

    pub fn is_point(&self) -> bool {
        self.start() == self.end()
    }

    /// Span from the start of `self` to the end of `other`.
    ///
    /// Both locations must belong to the same file. The order of the two
    /// spans is not checked; callers pass them in source order.
    pub fn extend_with(&self, other: &Location) -> Result<Location, LocationError> {
        if self.file_name != other.file_name {
            return Err(LocationError::FileMismatch {
                left: self.file_name.clone(),
                right: other.file_name.clone(),
            });
        }

        Ok(Location {
            file_name: self.file_name.clone(),
            start_line: self.start_line,
            start_col: self.start_col,
            end_line: other.end_line,
            end_col: other.end_col,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}:{}:{}", self.file_name, self.start_line, self.start_col)
        } else {
            write!(
                f,
                "{}:(from {}:{} to {}:{})",
                self.file_name, self.start_line, self.start_col, self.end_line, self.end_col
            )
        }
    }
}
