use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled triangle payload. Vertex order is preserved as recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub color: Color,
}

impl TriangleCmd {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, c: Vec2, color: Color) -> Self {
        Self { a, b, c, color }
    }

    /// Twice the signed area, `(b - a) × (c - a)`, in screen space.
    #[inline]
    pub fn signed_area2(&self) -> f32 {
        (self.b - self.a).cross(self.c - self.a)
    }
}

impl DrawList {
    /// Records a filled triangle.
    #[inline]
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push(DrawCmd::Triangle(TriangleCmd::new(a, b, c, color)));
    }
}
