pub(crate) mod circle;
pub(crate) mod curve;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod triangle;

pub use circle::CircleCmd;
pub use curve::CurveCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use triangle::TriangleCmd;
