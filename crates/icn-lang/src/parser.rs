use crate::ast::{Arg, Command, CommandList};
use crate::error::Diagnostic;
use crate::lexer::{Lexer, Token};
use crate::op::{ArgKind, Operation};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser<'s> {
    tokens: Vec<Token<'s>>,
    pos: usize,
    commands: Vec<Command>,
    diagnostics: Vec<Diagnostic>,
}

impl<'s> Parser<'s> {
    pub fn new(tokens: Vec<Token<'s>>) -> Self {
        Self { tokens, pos: 0, commands: Vec::new(), diagnostics: Vec::new() }
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    fn report(&mut self, diag: Diagnostic) {
        log::warn!("{}", diag);
        self.diagnostics.push(diag);
    }

    /// Consumes the whole token stream. Never fails: malformed input is
    /// skipped or defaulted and recorded in the returned list's diagnostics.
    pub fn parse_program(mut self) -> CommandList {
        while self.pos < self.tokens.len() {
            self.parse_command();
        }
        CommandList { commands: self.commands, diagnostics: self.diagnostics }
    }

    // ── Command ───────────────────────────────────────────────────────────

    fn parse_command(&mut self) {
        let head = self.tokens[self.pos];
        let op = Operation::lookup(head.text);

        if op == Operation::Unknown {
            self.report(Diagnostic::UnknownCommand {
                keyword: head.text.to_string(),
                line: head.line,
                col: head.col,
            });
            self.pos += 1;
            return;
        }

        let sig = op.signature();
        let available = self.remaining() - 1;
        if available < sig.len() {
            self.report(Diagnostic::InsufficientArguments {
                keyword: head.text.to_string(),
                expected: sig.len(),
                available,
                line: head.line,
                col: head.col,
            });
            self.pos += 1;
            return;
        }

        let start = self.pos + 1;
        let mut args = Vec::with_capacity(sig.len());
        for (i, kind) in sig.iter().enumerate() {
            let tok = self.tokens[start + i];
            args.push(self.convert(tok, *kind));
        }
        self.pos = start + sig.len();

        // Arity and kinds were enforced above, so this always yields a command.
        if let Some(cmd) = Command::from_args(op, &args) {
            log::trace!("icn {}:{}: {}", head.line, head.col, cmd);
            self.commands.push(cmd);
        }
    }

    // ── Argument ──────────────────────────────────────────────────────────

    fn convert(&mut self, tok: Token<'s>, kind: ArgKind) -> Arg {
        match kind {
            ArgKind::Text => Arg::Text(tok.text.to_string()),
            ArgKind::Numeric => match tok.text.parse::<f32>() {
                Ok(v) if v.is_finite() => Arg::Number(v),
                _ => {
                    self.report(Diagnostic::MalformedNumber {
                        token: tok.text.to_string(),
                        line: tok.line,
                        col: tok.col,
                    });
                    Arg::Number(0.0)
                }
            },
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse ICN source into a [`CommandList`].
///
/// Pure: the same source always yields an equal list.
pub fn parse_str(src: &str) -> CommandList {
    Parser::new(Lexer::new(src).tokenize()).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmds(src: &str) -> Vec<Command> {
        parse_str(src).commands().to_vec()
    }

    // ── well-formed ───────────────────────────────────────────────────────

    #[test]
    fn empty_source() {
        let list = parse_str("");
        assert!(list.is_empty());
        assert!(list.diagnostics().is_empty());
    }

    #[test]
    fn width_color_line() {
        assert_eq!(
            cmds("w 2 c #ff0000 line 0 0 5 5"),
            vec![
                Command::SetWidth { width: 2.0 },
                Command::SetColor { hex: "#ff0000".into() },
                Command::Line { x1: 0.0, y1: 0.0, x2: 5.0, y2: 5.0 },
            ]
        );
    }

    #[test]
    fn back_takes_no_arguments() {
        assert_eq!(
            cmds("move 1 2 back dot 0 0"),
            vec![
                Command::Move { dx: 1.0, dy: 2.0 },
                Command::Back,
                Command::Dot { x: 0.0, y: 0.0 },
            ]
        );
    }

    #[test]
    fn curve_keeps_control_point_last() {
        assert_eq!(
            cmds("curve 0 0 10 0 5 5"),
            vec![Command::Curve { x1: 0.0, y1: 0.0, x2: 10.0, y2: 0.0, cx: 5.0, cy: 5.0 }]
        );
    }

    #[test]
    fn negative_and_fractional_numbers() {
        assert_eq!(cmds("dot -12.1 .5"), vec![Command::Dot { x: -12.1, y: 0.5 }]);
    }

    #[test]
    fn multiline_program() {
        let list = parse_str("w 2\nline -12.1 -5.4 2.2 -7.6\n\tcont 3 3\ncutcircle 0 0 5 9 90");
        assert_eq!(list.len(), 4);
        assert!(list.diagnostics().is_empty());
    }

    // ── recovery ──────────────────────────────────────────────────────────

    #[test]
    fn unknown_keyword_skips_one_token() {
        let list = parse_str("bogus line 0 0 1 1");
        assert_eq!(list.commands(), &[Command::Line { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 }]);
        assert_eq!(
            list.diagnostics(),
            &[Diagnostic::UnknownCommand { keyword: "bogus".into(), line: 1, col: 1 }]
        );
    }

    #[test]
    fn insufficient_arguments_skip_keyword_only() {
        let list = parse_str("line 0 0");
        assert!(list.is_empty());
        // `line` is short of arguments; each leftover `0` is then an unknown keyword.
        assert_eq!(list.diagnostics().len(), 3);
        assert_eq!(
            list.diagnostics()[0],
            Diagnostic::InsufficientArguments {
                keyword: "line".into(),
                expected: 4,
                available: 2,
                line: 1,
                col: 1,
            }
        );
    }

    #[test]
    fn short_trailing_command_keeps_earlier_ones() {
        let list = parse_str("dot 1 1 tri 0 0 1 1 2");
        assert_eq!(list.commands(), &[Command::Dot { x: 1.0, y: 1.0 }]);
        assert!(matches!(
            list.diagnostics()[0],
            Diagnostic::InsufficientArguments { expected: 6, available: 5, .. }
        ));
    }

    #[test]
    fn malformed_number_becomes_zero() {
        let list = parse_str("dot abc 3");
        assert_eq!(list.commands(), &[Command::Dot { x: 0.0, y: 3.0 }]);
        assert_eq!(
            list.diagnostics(),
            &[Diagnostic::MalformedNumber { token: "abc".into(), line: 1, col: 5 }]
        );
    }

    #[test]
    fn non_finite_numbers_are_malformed() {
        let list = parse_str("cutcircle 0 0 1 0 inf\nw NaN\ndot 1e39 -infinity");
        assert_eq!(
            list.commands(),
            &[
                Command::CutCircle { x: 0.0, y: 0.0, radius: 1.0, angle: 0.0, filled: 0.0 },
                Command::SetWidth { width: 0.0 },
                Command::Dot { x: 0.0, y: 0.0 },
            ]
        );
        let at: Vec<_> = list.diagnostics().iter().map(Diagnostic::position).collect();
        assert_eq!(at, vec![Some((1, 19)), Some((2, 3)), Some((3, 5)), Some((3, 10))]);
        assert!(matches!(
            &list.diagnostics()[0],
            Diagnostic::MalformedNumber { token, .. } if token == "inf"
        ));
    }

    #[test]
    fn malformed_number_still_consumes_its_slot() {
        // `line` is taken as the first argument of `dot`, not as a keyword.
        assert_eq!(
            cmds("dot line 2 w 3"),
            vec![Command::Dot { x: 0.0, y: 2.0 }, Command::SetWidth { width: 3.0 }]
        );
    }

    #[test]
    fn color_text_is_not_validated_at_parse_time() {
        let list = parse_str("c nothex");
        assert_eq!(list.commands(), &[Command::SetColor { hex: "nothex".into() }]);
        assert!(list.diagnostics().is_empty());
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn parse_is_deterministic() {
        let src = "w 2 bogus c abc square 0 0 3 3 line 1";
        assert_eq!(parse_str(src), parse_str(src));
    }

    #[test]
    fn display_reparses_to_same_commands() {
        let src = "w 1.5 c #00ff00 tri 0 0 1 0 0 1 move -2 3 back ellipse 0 0 4 0.5 30";
        let first = parse_str(src);
        let second = parse_str(&first.to_string());
        assert_eq!(first.commands(), second.commands());
    }
}
