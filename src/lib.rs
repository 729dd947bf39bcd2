mod convert;
mod error;
mod grid;
mod line;

pub use crate::error::DrawError;
pub use crate::grid::Grid;
pub use crate::line::{
    cells, draw, draw_path, trace, Axis, LineSegment, Point, Regime,
};
