use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Flat-ended stroke payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, to, width, color }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        let d = self.to - self.from;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl DrawList {
    /// Records a straight stroke.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, width, color)));
    }
}
