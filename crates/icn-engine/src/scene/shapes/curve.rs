use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Quadratic Bézier stroke payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveCmd {
    pub from: Vec2,
    pub control: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl CurveCmd {
    #[inline]
    pub fn new(from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, control, to, width, color }
    }

    /// Point on the curve at `t` in `[0, 1]`.
    #[inline]
    pub fn eval(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.from * (u * u) + self.control * (2.0 * u * t) + self.to * (t * t)
    }
}

impl DrawList {
    /// Records a quadratic curve stroke.
    #[inline]
    pub fn push_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCmd::Curve(CurveCmd::new(from, control, to, width, color)));
    }
}
