//! Screen-space geometry types.
//!
//! Canonical space for everything handed to a [`Canvas`](crate::Canvas):
//! - pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! ICN source is authored with +Y up; the interpreter flips it.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
