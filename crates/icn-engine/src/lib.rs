//! ICN engine crate.
//!
//! Interprets parsed ICN programs into calls on a small [`Canvas`] surface.
//! Rasterization is left to whatever implements that trait; [`DrawList`]
//! records the stream for inspection or replay.

pub mod canvas;
pub mod coords;
pub mod icon;
pub mod logging;
pub mod paint;
pub mod scene;

pub use icn_lang::{self, Command, CommandList, Diagnostic};

pub use canvas::Canvas;
pub use coords::{Rect, Vec2};
pub use icon::{IconRenderer, ParseCache, Pen, SourceCache, render_commands};
pub use paint::Color;
pub use scene::{DrawCmd, DrawList};
