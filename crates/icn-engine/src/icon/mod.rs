//! ICN interpreter.
//!
//! Resolves source through a [`ParseCache`], then walks the command list once
//! with a fresh [`Pen`], issuing primitives to a [`Canvas`].
//!
//! Coordinate convention: authored values are multiplied by `scale`, +Y is
//! flipped to point down, and the pen offset (initially the render origin) is
//! added.

mod cache;
pub mod geometry;
mod pen;


use std::sync::Arc;

use icn_lang::CommandList;

use crate::canvas::Canvas;
use crate::coords::Vec2;

pub use cache::{ParseCache, SourceCache};
pub use pen::{DEFAULT_WIDTH, Pen};

/// Parses, caches and renders ICN icons.
///
/// Holds no per-render state, so one renderer can serve any number of
/// canvases (and threads, when `P: Sync`).
///
/// ```
/// use icn_engine::{DrawList, IconRenderer, Vec2};
///
/// let icn = IconRenderer::new();
/// let mut list = DrawList::new();
/// icn.render(&mut list, "w 2 c #ff0000 line 0 0 5 5", Vec2::new(400.0, 400.0), 10.0);
/// assert_eq!(list.len(), 3); // stroke + two round caps
/// ```
#[derive(Debug, Default)]
pub struct IconRenderer<P = SourceCache> {
    cache: P,
}

impl IconRenderer<SourceCache> {
    pub fn new() -> Self {
        Self::with_cache(SourceCache::new())
    }
}

impl<P: ParseCache> IconRenderer<P> {
    /// Renderer backed by a caller-supplied cache (fresh, pre-populated, or
    /// shared via `Arc`).
    pub fn with_cache(cache: P) -> Self {
        Self { cache }
    }

    #[inline]
    pub fn cache(&self) -> &P {
        &self.cache
    }

    /// Parsed form of `source`, memoized by the cache.
    pub fn parse(&self, source: &str) -> Arc<CommandList> {
        self.cache.get_or_parse(source)
    }

    /// Draws `source` with its origin at `origin`, one authored unit spanning
    /// `scale` pixels. Malformed input degrades (see `icn_lang::Diagnostic`);
    /// this never fails.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        source: &str,
        origin: Vec2,
        scale: f32,
    ) {
        let commands = self.parse(source);
        render_commands(canvas, &commands, origin, scale);
    }
}

/// Executes an already-parsed program. Pen state starts fresh on every call.
pub fn render_commands<C: Canvas + ?Sized>(
    canvas: &mut C,
    commands: &CommandList,
    origin: Vec2,
    scale: f32,
) {
    let mut pen = Pen::new(origin, scale);
    for cmd in commands {
        pen.apply(cmd, canvas);
    }
}
