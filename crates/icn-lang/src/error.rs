use std::fmt;

/// A recoverable problem found while parsing or interpreting ICN source.
///
/// None of these abort a parse or a render: each one is reported and the
/// offending input is replaced by a safe default (skipped token, `0.0`, or the
/// default color).
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Keyword not present in the operation table. The token is skipped.
    UnknownCommand { keyword: String, line: usize, col: usize },
    /// Fewer tokens remain than the keyword's signature requires.
    /// Only the keyword is skipped; no arguments are consumed.
    InsufficientArguments {
        keyword: String,
        expected: usize,
        available: usize,
        line: usize,
        col: usize,
    },
    /// Non-numeric or non-finite token in a numeric slot. Replaced by `0.0`.
    MalformedNumber { token: String, line: usize, col: usize },
    /// Color argument that is not 3 or 6 hex digits after stripping `#`.
    MalformedColor { text: String },
}

impl Diagnostic {
    /// 1-based `(line, col)` of the token that triggered this diagnostic, if known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Diagnostic::UnknownCommand { line, col, .. }
            | Diagnostic::InsufficientArguments { line, col, .. }
            | Diagnostic::MalformedNumber { line, col, .. } => Some((*line, *col)),
            Diagnostic::MalformedColor { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownCommand { keyword, line, col } => {
                write!(f, "icn {}:{}: unknown command {:?}", line, col, keyword)
            }
            Diagnostic::InsufficientArguments { keyword, expected, available, line, col } => {
                write!(
                    f,
                    "icn {}:{}: {:?} takes {} argument(s), only {} left",
                    line, col, keyword, expected, available
                )
            }
            Diagnostic::MalformedNumber { token, line, col } => {
                write!(f, "icn {}:{}: invalid number {:?}, using 0", line, col, token)
            }
            Diagnostic::MalformedColor { text } => {
                write!(f, "icn: invalid color {:?}", text)
            }
        }
    }
}

impl std::error::Error for Diagnostic {}
