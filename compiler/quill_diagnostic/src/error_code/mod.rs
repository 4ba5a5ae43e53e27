use std::fmt;

/// Error codes for every build-time and parse-time failure.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Parse errors (reported per input)
/// - E2xxx: Grammar errors (reported once, when the parser is built)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parse Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Input the lexer could not tokenize
    E1003,
    /// Syntax tree node without a reduction callback
    E1004,

    // Grammar Errors (E2xxx)
    /// Malformed rule string
    E2001,
    /// Left-recursive grammar
    E2002,
    /// Reference to an undefined non-terminal
    E2003,
    /// Starting rule is not defined
    E2004,
    /// EBNF construct used with the plain parser
    E2005,
    /// Invalid operator declaration
    E2006,
    /// Lexer construction failed or no lexer was configured
    E2007,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Parse
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            // Grammar
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
        }
    }

    /// Short machine-checkable name of the failure.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E1003 => "lexical error",
            ErrorCode::E1004 => "missing reduction callback",
            ErrorCode::E2001 => "malformed rule string",
            ErrorCode::E2002 => "left-recursive grammar",
            ErrorCode::E2003 => "undefined non-terminal",
            ErrorCode::E2004 => "missing starting rule",
            ErrorCode::E2005 => "EBNF construct in plain grammar",
            ErrorCode::E2006 => "invalid operator declaration",
            ErrorCode::E2007 => "lexer construction failed",
        }
    }

    /// Check if this is a parse error (E1xxx range).
    pub fn is_parse_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a grammar error (E2xxx range).
    pub fn is_grammar_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Parse a code from its string form.
    pub fn from_str_code(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How bad a build error is.
///
/// Every build error stops the build. `Fatal` marks grammars no parser
/// could run at all (malformed rules, invalid operators, left recursion);
/// the remaining checks still run and report alongside them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorLevel {
    Error,
    Fatal,
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLevel::Error => write!(f, "error"),
            ErrorLevel::Fatal => write!(f, "fatal"),
        }
    }
}

#[cfg(test)]
mod tests;
