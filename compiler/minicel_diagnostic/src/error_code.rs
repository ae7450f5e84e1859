use std::fmt;

/// Error codes for all minicel diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Evaluation errors
/// - E9xxx: I/O and internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character in a formula
    E0001,

    // Parser Errors (E1xxx)
    /// Malformed cell reference
    E1001,
    /// Formula ended where an operand was expected
    E1002,

    // Evaluation Errors (E2xxx)
    /// Circular dependency between formula cells
    E2001,
    /// Text cell used in a numeric context
    E2002,
    /// Cell reference outside the table
    E2003,

    // I/O and Internal Errors (E9xxx)
    /// I/O failure
    E9001,
    /// Malformed AST dump
    E9002,
    /// Command expected a formula cell
    E9003,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            ErrorCode::E9003 => "E9003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
