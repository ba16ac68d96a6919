//! Derived shapes built only from [`Canvas`] primitives.
//!
//! Keeping these here (rather than in each backend) makes the rounded
//! joints, ellipse tessellation and arc stepping identical everywhere.

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Parametric samples used to approximate an ellipse outline.
pub const ELLIPSE_SEGMENTS: usize = 256;

/// Angular span of one cut-circle segment, in degrees.
pub const ARC_STEP_DEG: f32 = 6.0;

/// Segments needed to close a full circle at [`ARC_STEP_DEG`]; longer sweeps
/// would only retrace it.
pub const MAX_ARC_SEGMENTS: usize = 60;

/// Stroke with a round cap (a filled circle of `width / 2`) at both ends.
/// Consecutive capsules therefore join without gaps.
pub fn capsule_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    from: Vec2,
    to: Vec2,
    width: f32,
    color: Color,
) {
    let r = width / 2.0;
    canvas.draw_line(from, to, width, color);
    canvas.fill_circle(from, r, color);
    canvas.fill_circle(to, r, color);
}

/// Four capsule edges, clockwise on screen from the top-left corner.
pub fn rect_outline<C: Canvas + ?Sized>(canvas: &mut C, rect: Rect, width: f32, color: Color) {
    let corners = rect.corners();
    for i in 0..4 {
        capsule_line(canvas, corners[i], corners[(i + 1) % 4], width, color);
    }
}

/// Closed polyline through [`ELLIPSE_SEGMENTS`] points of the ellipse with
/// semi-axes `rx`/`ry`, rotated by `rotation_deg` about `center`.
///
/// Uses plain lines: capping each of the many short segments would bulge
/// the outline at every joint.
pub fn ellipse_outline<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Vec2,
    rx: f32,
    ry: f32,
    rotation_deg: f32,
    width: f32,
    color: Color,
) {
    let step = std::f32::consts::TAU / ELLIPSE_SEGMENTS as f32;
    let sample = |i: usize| {
        let t = step * i as f32;
        center + Vec2::new(t.cos() * rx, t.sin() * ry).rotated(rotation_deg)
    };

    let first = sample(0);
    let mut prev = first;
    for i in 1..ELLIPSE_SEGMENTS {
        let p = sample(i);
        canvas.draw_line(prev, p, width, color);
        prev = p;
    }
    canvas.draw_line(prev, first, width, color);
}

/// Point on a circle for a compass-style angle: 0° is straight up on screen,
/// increasing clockwise.
#[inline]
pub fn compass_point(center: Vec2, radius: f32, degrees: f32) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec2::new(center.x + s * radius, center.y - c * radius)
}

/// Start angle (degrees) and segment count for a cut circle.
///
/// `angle` is authored in tens of degrees and marks where the sweep ends;
/// `filled` is the swept span. The count truncates `filled / 3 + 1` toward
/// zero and draws one fewer segment than that, so negative spans draw nothing.
/// The count is capped at [`MAX_ARC_SEGMENTS`].
pub fn cut_circle_span(angle: f32, filled: f32) -> (f32, usize) {
    let start = angle * 10.0 - filled;
    let steps = (filled / 3.0 + 1.0) as i64;
    let segments = (steps - 1).clamp(0, MAX_ARC_SEGMENTS as i64) as usize;
    (start, segments)
}

/// Chain of `segments` capsule strokes around `center`, each spanning
/// [`ARC_STEP_DEG`], starting at `start_deg`.
pub fn arc_chain<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Vec2,
    radius: f32,
    start_deg: f32,
    segments: usize,
    width: f32,
    color: Color,
) {
    let mut angle = start_deg;
    let mut prev = compass_point(center, radius, angle);
    for _ in 0..segments {
        angle += ARC_STEP_DEG;
        let next = compass_point(center, radius, angle);
        capsule_line(canvas, prev, next, width, color);
        prev = next;
    }
}

/// Filled triangle with normalized winding.
///
/// The vertices are passed through when `(b - a) × (c - a)` is negative in
/// screen space (counter-clockwise as seen on screen); otherwise `b` and `c`
/// are swapped. Returns the order actually drawn.
pub fn fill_triangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    a: Vec2,
    b: Vec2,
    c: Vec2,
    color: Color,
) -> [Vec2; 3] {
    let ordered = if (b - a).cross(c - a) < 0.0 { [a, b, c] } else { [a, c, b] };
    canvas.fill_triangle(ordered[0], ordered[1], ordered[2], color);
    ordered
}

/// Quadratic curve stroke with round caps on both endpoints.
pub fn capped_curve<C: Canvas + ?Sized>(
    canvas: &mut C,
    from: Vec2,
    control: Vec2,
    to: Vec2,
    width: f32,
    color: Color,
) {
    let r = width / 2.0;
    canvas.draw_quad_curve(from, control, to, width, color);
    canvas.fill_circle(from, r, color);
    canvas.fill_circle(to, r, color);
}
