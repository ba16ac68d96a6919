//! Paint model handed to drawing backends.
//!
//! ICN draws with a single solid color per primitive; there are no gradients
//! or blend modes.

pub mod color;

pub use color::Color;
