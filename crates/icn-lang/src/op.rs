//! Static keyword → operation table.

/// Kind of value a signature slot accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgKind {
    Numeric,
    Text,
}

/// Closed set of ICN instructions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    SetColor,
    SetWidth,
    Square,
    Rect,
    Line,
    Continue,
    Dot,
    CutCircle,
    Ellipse,
    Triangle,
    Curve,
    Move,
    Back,
    Unknown,
}

use ArgKind::{Numeric as N, Text as T};

const SIG_NONE: &[ArgKind] = &[];
const SIG_TEXT: &[ArgKind] = &[T];
const SIG_NUM1: &[ArgKind] = &[N];
const SIG_NUM2: &[ArgKind] = &[N, N];
const SIG_NUM4: &[ArgKind] = &[N, N, N, N];
const SIG_NUM5: &[ArgKind] = &[N, N, N, N, N];
const SIG_NUM6: &[ArgKind] = &[N, N, N, N, N, N];

/// Every recognized keyword. `Unknown` has no entry.
pub const OPERATIONS: &[(&str, Operation)] = &[
    ("c", Operation::SetColor),
    ("w", Operation::SetWidth),
    ("square", Operation::Square),
    ("rect", Operation::Rect),
    ("line", Operation::Line),
    ("cont", Operation::Continue),
    ("dot", Operation::Dot),
    ("cutcircle", Operation::CutCircle),
    ("ellipse", Operation::Ellipse),
    ("tri", Operation::Triangle),
    ("curve", Operation::Curve),
    ("move", Operation::Move),
    ("back", Operation::Back),
];

impl Operation {
    /// Looks up a keyword. Matching is exact and case-sensitive.
    pub fn lookup(keyword: &str) -> Operation {
        OPERATIONS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|&(_, op)| op)
            .unwrap_or(Operation::Unknown)
    }

    /// Source keyword, or `None` for `Unknown`.
    pub fn keyword(self) -> Option<&'static str> {
        OPERATIONS.iter().find(|(_, op)| *op == self).map(|&(k, _)| k)
    }

    /// Argument kinds in authored order. Empty for `Back` and `Unknown`.
    pub fn signature(self) -> &'static [ArgKind] {
        match self {
            Operation::SetColor => SIG_TEXT,
            Operation::SetWidth => SIG_NUM1,
            Operation::Square | Operation::Rect | Operation::Line => SIG_NUM4,
            Operation::Move | Operation::Continue | Operation::Dot => SIG_NUM2,
            Operation::CutCircle | Operation::Ellipse => SIG_NUM5,
            Operation::Triangle | Operation::Curve => SIG_NUM6,
            Operation::Back | Operation::Unknown => SIG_NONE,
        }
    }

    #[inline]
    pub fn arity(self) -> usize {
        self.signature().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips() {
        for &(kw, op) in OPERATIONS {
            assert_eq!(Operation::lookup(kw), op);
            assert_eq!(op.keyword(), Some(kw));
        }
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(Operation::lookup("bogus"), Operation::Unknown);
        assert_eq!(Operation::lookup("LINE"), Operation::Unknown);
        assert_eq!(Operation::Unknown.keyword(), None);
        assert!(Operation::Unknown.signature().is_empty());
    }

    #[test]
    fn reference_arities() {
        assert_eq!(Operation::SetWidth.arity(), 1);
        assert_eq!(Operation::SetColor.signature(), &[ArgKind::Text]);
        assert_eq!(Operation::Square.arity(), 4);
        assert_eq!(Operation::Rect.arity(), 4);
        assert_eq!(Operation::Line.arity(), 4);
        assert_eq!(Operation::Move.arity(), 2);
        assert_eq!(Operation::Continue.arity(), 2);
        assert_eq!(Operation::Dot.arity(), 2);
        assert_eq!(Operation::CutCircle.arity(), 5);
        assert_eq!(Operation::Ellipse.arity(), 5);
        assert_eq!(Operation::Triangle.arity(), 6);
        assert_eq!(Operation::Curve.arity(), 6);
        assert_eq!(Operation::Back.arity(), 0);
    }

    #[test]
    fn only_set_color_takes_text() {
        for &(_, op) in OPERATIONS {
            let has_text = op.signature().contains(&ArgKind::Text);
            assert_eq!(has_text, op == Operation::SetColor, "{:?}", op);
        }
    }
}
