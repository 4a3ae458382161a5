//! Error codes for findings.
//!
//! Codes are organized by checker:
//! - `E1xx` - Timeline (`gantt`) geometry
//! - `E2xx` - Quadrant chart character set

use std::fmt;

/// Error codes for categorizing findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Timeline Errors (E1xx)
    // =========================================================================
    /// Label wider than its bar.
    ///
    /// The estimated rendered width of a task label exceeds the pixel width
    /// of the task's bar, so the renderer computes a negative width for the
    /// bar's drawable rectangle.
    E100,

    // =========================================================================
    // Quadrant Errors (E2xx)
    // =========================================================================
    /// Non-ASCII character in a structural line.
    ///
    /// An axis, quadrant or data-point declaration contains a character
    /// outside 7-bit ASCII, which the quadrant chart parser rejects.
    E200,
}

impl ErrorCode {
    /// A short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "timeline label wider than its bar",
            ErrorCode::E200 => "non-ASCII character in quadrant chart syntax",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
