use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::DrawCmd;

/// Recorded draw stream.
///
/// Commands keep the order they were issued in; ICN has no z-ordering, so
/// paint order is call order.
///
/// ```
/// use icn_engine::{DrawList, IconRenderer, Vec2};
///
/// let renderer = IconRenderer::new();
/// let mut list = DrawList::new();
/// renderer.render(&mut list, "dot 0 0", Vec2::new(50.0, 50.0), 10.0);
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in issue order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Re-issues every recorded command onto another backend.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for cmd in &self.items {
            match cmd {
                DrawCmd::Line(l) => canvas.draw_line(l.from, l.to, l.width, l.color),
                DrawCmd::Circle(c) => canvas.fill_circle(c.center, c.radius, c.color),
                DrawCmd::Rect(r) => canvas.fill_rect(r.rect, r.color),
                DrawCmd::Triangle(t) => canvas.fill_triangle(t.a, t.b, t.c, t.color),
                DrawCmd::Curve(q) => {
                    canvas.draw_quad_curve(q.from, q.control, q.to, q.width, q.color)
                }
            }
        }
    }
}

impl Canvas for DrawList {
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push_line(from, to, width, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push_circle(center, radius, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, color);
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push_triangle(a, b, c, color);
    }

    fn draw_quad_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color) {
        self.push_curve(from, control, to, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DrawList {
        let mut list = DrawList::new();
        list.draw_line(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 2.0, Color::WHITE);
        list.fill_circle(Vec2::new(1.0, 1.0), 0.5, Color::BLACK);
        list.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::WHITE);
        list.fill_triangle(Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Color::BLACK);
        let (from, control, to) = (Vec2::zero(), Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        list.draw_quad_curve(from, control, to, 1.0, Color::WHITE);
        list
    }

    #[test]
    fn records_in_call_order() {
        let list = sample();
        assert_eq!(list.len(), 5);
        assert!(matches!(list.items()[0], DrawCmd::Line(_)));
        assert!(matches!(list.items()[1], DrawCmd::Circle(_)));
        assert!(matches!(list.items()[2], DrawCmd::Rect(_)));
        assert!(matches!(list.items()[3], DrawCmd::Triangle(_)));
        assert!(matches!(list.items()[4], DrawCmd::Curve(_)));
    }

    #[test]
    fn replay_reproduces_stream() {
        let list = sample();
        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }

    #[test]
    fn clear_empties() {
        let mut list = sample();
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn payload_helpers() {
        let list = sample();
        match &list.items()[0] {
            DrawCmd::Line(l) => assert_eq!(l.length(), 5.0),
            other => panic!("unexpected {:?}", other),
        }
        match &list.items()[3] {
            DrawCmd::Triangle(t) => assert_eq!(t.signed_area2(), 1.0),
            other => panic!("unexpected {:?}", other),
        }
        match &list.items()[4] {
            DrawCmd::Curve(q) => {
                assert_eq!(q.eval(0.0), Vec2::zero());
                assert_eq!(q.eval(1.0), Vec2::new(2.0, 0.0));
                assert_eq!(q.eval(0.5), Vec2::new(1.0, 0.5));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
