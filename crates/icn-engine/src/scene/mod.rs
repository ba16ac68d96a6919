//! Recorded draw streams.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in call order
//! - act as a [`Canvas`](crate::Canvas) so an ICN render can be captured,
//!   inspected, and replayed onto any other backend
//! - keep shape payloads isolated per file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
