use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Drawing-capability surface the interpreter renders into.
///
/// These five primitives are everything ICN needs from a backend. Rounded
/// strokes, outlines, ellipses and arcs are composed from them in
/// [`crate::icon::geometry`], so every backend renders them identically.
///
/// All coordinates are screen pixels (top-left origin, +Y down).
pub trait Canvas {
    /// Straight stroke with flat ends.
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// `rect` is always normalized (non-negative size).
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Vertices arrive with a consistent winding (see
    /// [`crate::icon::geometry::fill_triangle`]).
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// Quadratic Bézier stroke from `from` to `to` bending toward `control`.
    fn draw_quad_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    #[inline]
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        (**self).draw_line(from, to, width, color);
    }

    #[inline]
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        (**self).fill_circle(center, radius, color);
    }

    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }

    #[inline]
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        (**self).fill_triangle(a, b, c, color);
    }

    #[inline]
    fn draw_quad_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, color: Color) {
        (**self).draw_quad_curve(from, control, to, width, color);
    }
}
