use icn_lang::Command;

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::geometry;

/// Stroke width at scale 1 before any `w` command.
pub const DEFAULT_WIDTH: f32 = 2.5;

/// Interpreter state for one render pass.
///
/// Coordinates are kept in two spaces:
/// - *local*: authored units × scale with +Y flipped down, relative to the
///   current offset
/// - *screen*: local + offset, what the [`Canvas`] receives
///
/// The save point is local, so a `move` between `line` and `cont` shifts the
/// continuation along with everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    origin: Vec2,
    scale: f32,
    offset: Vec2,
    color: Color,
    width: f32,
    save: Vec2,
}

impl Pen {
    pub fn new(origin: Vec2, scale: f32) -> Self {
        Self {
            origin,
            scale,
            offset: origin,
            color: Color::default(),
            width: DEFAULT_WIDTH * scale,
            save: Vec2::zero(),
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Last point established by a drawing command, in local space.
    #[inline]
    pub fn save_point(&self) -> Vec2 {
        self.save
    }

    /// Authored point → local space.
    #[inline]
    fn local(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, -y) * self.scale
    }

    #[inline]
    fn screen(&self, local: Vec2) -> Vec2 {
        local + self.offset
    }

    /// Executes one command: updates pen state and issues draw calls.
    pub fn apply<C: Canvas + ?Sized>(&mut self, cmd: &Command, canvas: &mut C) {
        let s = self.scale;
        match *cmd {
            Command::SetColor { ref hex } => {
                self.color = Color::from_hex(hex).unwrap_or_else(|diag| {
                    log::warn!("{}", diag);
                    Color::default()
                });
            }
            Command::SetWidth { width } => self.width = width * s,
            Command::Move { dx, dy } => {
                let delta = self.local(dx, dy);
                self.offset += delta;
            }
            Command::Back => self.offset = self.origin,
            Command::Line { x1, y1, x2, y2 } => {
                let (a, b) = (self.local(x1, y1), self.local(x2, y2));
                let (from, to) = (self.screen(a), self.screen(b));
                geometry::capsule_line(canvas, from, to, self.width, self.color);
                self.save = b;
            }
            Command::Continue { x, y } => {
                let p = self.local(x, y);
                let (from, to) = (self.screen(self.save), self.screen(p));
                geometry::capsule_line(canvas, from, to, self.width, self.color);
                self.save = p;
            }
            Command::Dot { x, y } => {
                let p = self.local(x, y);
                canvas.fill_circle(self.screen(p), self.width / 2.0, self.color);
                self.save = p;
            }
            Command::Square { x, y, w, h } => {
                let (center, size) = (self.local(x, y), Vec2::new(w, h) * (2.0 * s));
                let rect = Rect::from_center(self.screen(center), size);
                geometry::rect_outline(canvas, rect, self.width, self.color);
                self.save = center + size / 2.0;
            }
            Command::Rect { x, y, w, h } => {
                let (center, size) = (self.local(x, y), Vec2::new(w, h) * (2.0 * s));
                let rect = Rect::from_center(self.screen(center), size);
                canvas.fill_rect(rect.normalized(), self.color);
                self.save = center + size / 2.0;
            }
            Command::Triangle { x1, y1, x2, y2, x3, y3 } => {
                let third = self.local(x3, y3);
                geometry::fill_triangle(
                    canvas,
                    self.screen(self.local(x1, y1)),
                    self.screen(self.local(x2, y2)),
                    self.screen(third),
                    self.color,
                );
                self.save = third;
            }
            Command::CutCircle { x, y, radius, angle, filled } => {
                let center = self.screen(self.local(x, y));
                let (start, segments) = geometry::cut_circle_span(angle, filled);
                let (width, color) = (self.width, self.color);
                geometry::arc_chain(canvas, center, radius * s, start, segments, width, color);
            }
            Command::Ellipse { x, y, rx, ratio, rotation } => {
                let center = self.screen(self.local(x, y));
                let rx = rx * s;
                let (width, color) = (self.width, self.color);
                geometry::ellipse_outline(canvas, center, rx, rx * ratio, rotation, width, color);
            }
            Command::Curve { x1, y1, x2, y2, cx, cy } => {
                let end = self.local(x2, y2);
                geometry::capped_curve(
                    canvas,
                    self.screen(self.local(x1, y1)),
                    self.screen(self.local(cx, cy)),
                    self.screen(end),
                    self.width,
                    self.color,
                );
                self.save = end;
            }
        }
    }
}
