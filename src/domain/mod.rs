mod cell;
mod grid;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, StampReport, presets};
