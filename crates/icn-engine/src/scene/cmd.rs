use crate::scene::shapes::{CircleCmd, CurveCmd, LineCmd, RectCmd, TriangleCmd};

/// Renderer-agnostic draw command: one variant per [`Canvas`](crate::Canvas)
/// primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Circle(CircleCmd),
    Rect(RectCmd),
    Triangle(TriangleCmd),
    Curve(CurveCmd),
}
