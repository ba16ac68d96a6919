use std::fmt;

use crate::error::Diagnostic;
use crate::op::{ArgKind, Operation};

/// A single argument value, tagged by the signature slot it filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Number(f32),
    Text(String),
}

impl Arg {
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Number(_) => ArgKind::Numeric,
            Arg::Text(_) => ArgKind::Text,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Number(n) => write!(f, "{}", n),
            Arg::Text(s) => f.write_str(s),
        }
    }
}

/// One parsed instruction. Coordinates are in authored units
/// (+y up, unscaled); the interpreter maps them to screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetColor { hex: String },
    SetWidth { width: f32 },
    /// Stroked outline; `(x, y)` is the center, `(w, h)` the half extents.
    Square { x: f32, y: f32, w: f32, h: f32 },
    /// Filled; same geometry as `Square`.
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Continue { x: f32, y: f32 },
    Dot { x: f32, y: f32 },
    /// `angle` is in tens of degrees; `filled` is the swept span in degrees.
    CutCircle { x: f32, y: f32, radius: f32, angle: f32, filled: f32 },
    /// `ratio` scales `rx` into the second semi-axis; `rotation` is in degrees.
    Ellipse { x: f32, y: f32, rx: f32, ratio: f32, rotation: f32 },
    Triangle { x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32 },
    /// Endpoints first, control point last.
    Curve { x1: f32, y1: f32, x2: f32, y2: f32, cx: f32, cy: f32 },
    Move { dx: f32, dy: f32 },
    Back,
}

impl Command {
    /// Builds a typed command from an operation and its arguments.
    ///
    /// Returns `None` when `args` does not match `op.signature()` in length or
    /// kind, or when `op` is `Unknown`.
    pub fn from_args(op: Operation, args: &[Arg]) -> Option<Command> {
        let sig = op.signature();
        if args.len() != sig.len() || args.iter().zip(sig).any(|(a, k)| a.kind() != *k) {
            return None;
        }

        let n = |i: usize| match &args[i] {
            Arg::Number(v) => *v,
            Arg::Text(_) => 0.0,
        };

        Some(match op {
            Operation::SetColor => match &args[0] {
                Arg::Text(s) => Command::SetColor { hex: s.clone() },
                Arg::Number(_) => return None,
            },
            Operation::SetWidth => Command::SetWidth { width: n(0) },
            Operation::Square => Command::Square { x: n(0), y: n(1), w: n(2), h: n(3) },
            Operation::Rect => Command::Rect { x: n(0), y: n(1), w: n(2), h: n(3) },
            Operation::Line => Command::Line { x1: n(0), y1: n(1), x2: n(2), y2: n(3) },
            Operation::Continue => Command::Continue { x: n(0), y: n(1) },
            Operation::Dot => Command::Dot { x: n(0), y: n(1) },
            Operation::CutCircle => Command::CutCircle {
                x: n(0),
                y: n(1),
                radius: n(2),
                angle: n(3),
                filled: n(4),
            },
            Operation::Ellipse => Command::Ellipse {
                x: n(0),
                y: n(1),
                rx: n(2),
                ratio: n(3),
                rotation: n(4),
            },
            Operation::Triangle => Command::Triangle {
                x1: n(0),
                y1: n(1),
                x2: n(2),
                y2: n(3),
                x3: n(4),
                y3: n(5),
            },
            Operation::Curve => Command::Curve {
                x1: n(0),
                y1: n(1),
                x2: n(2),
                y2: n(3),
                cx: n(4),
                cy: n(5),
            },
            Operation::Move => Command::Move { dx: n(0), dy: n(1) },
            Operation::Back => Command::Back,
            Operation::Unknown => return None,
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Command::SetColor { .. } => Operation::SetColor,
            Command::SetWidth { .. } => Operation::SetWidth,
            Command::Square { .. } => Operation::Square,
            Command::Rect { .. } => Operation::Rect,
            Command::Line { .. } => Operation::Line,
            Command::Continue { .. } => Operation::Continue,
            Command::Dot { .. } => Operation::Dot,
            Command::CutCircle { .. } => Operation::CutCircle,
            Command::Ellipse { .. } => Operation::Ellipse,
            Command::Triangle { .. } => Operation::Triangle,
            Command::Curve { .. } => Operation::Curve,
            Command::Move { .. } => Operation::Move,
            Command::Back => Operation::Back,
        }
    }

    /// Untyped view in signature order.
    pub fn args(&self) -> Vec<Arg> {
        use Arg::Number as N;
        match self {
            Command::SetColor { hex } => vec![Arg::Text(hex.clone())],
            Command::SetWidth { width } => vec![N(*width)],
            Command::Square { x, y, w, h } | Command::Rect { x, y, w, h } => {
                vec![N(*x), N(*y), N(*w), N(*h)]
            }
            Command::Line { x1, y1, x2, y2 } => vec![N(*x1), N(*y1), N(*x2), N(*y2)],
            Command::Continue { x, y } | Command::Dot { x, y } => vec![N(*x), N(*y)],
            Command::CutCircle { x, y, radius, angle, filled } => {
                vec![N(*x), N(*y), N(*radius), N(*angle), N(*filled)]
            }
            Command::Ellipse { x, y, rx, ratio, rotation } => {
                vec![N(*x), N(*y), N(*rx), N(*ratio), N(*rotation)]
            }
            Command::Triangle { x1, y1, x2, y2, x3, y3 } => {
                vec![N(*x1), N(*y1), N(*x2), N(*y2), N(*x3), N(*y3)]
            }
            Command::Curve { x1, y1, x2, y2, cx, cy } => {
                vec![N(*x1), N(*y1), N(*x2), N(*y2), N(*cx), N(*cy)]
            }
            Command::Move { dx, dy } => vec![N(*dx), N(*dy)],
            Command::Back => Vec::new(),
        }
    }
}

/// Writes the command back as ICN source (`keyword arg arg ...`).
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every `Command` variant maps to a keyword; `Unknown` has no variant.
        f.write_str(self.operation().keyword().unwrap_or("?"))?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// One parsed ICN program: commands in execution order plus whatever the
/// parser had to recover from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    pub(crate) commands: Vec<Command>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl CommandList {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands, diagnostics: Vec::new() }
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Canonical source form: one command per line.
impl fmt::Display for CommandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}
