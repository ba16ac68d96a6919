// ── Token ─────────────────────────────────────────────────────────────────

/// A whitespace-free slice of the source plus its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub text: &'s str,
    pub line: usize,
    pub col: usize,
}

/// Token separators. Nothing else counts as whitespace: there is no quoting,
/// escaping, or comment syntax.
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    /// Splits the whole source. Never fails; empty input yields no tokens.
    pub fn tokenize(self) -> Vec<Token<'s>> {
        self.collect()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        while matches!(self.peek(), Some(c) if is_separator(c)) {
            self.advance();
        }

        let (start, line, col) = (self.pos, self.line, self.col);
        while matches!(self.peek(), Some(c) if !is_separator(c)) {
            self.advance();
        }

        if self.pos == start {
            None
        } else {
            Some(Token { text: &self.src[start..self.pos], line, col })
        }
    }
}

/// Convenience wrapper: token texts only, positions dropped.
pub fn tokenize(src: &str) -> Vec<&str> {
    Lexer::new(src).map(|t| t.text).collect()
}
