//! Board representation, symmetry, and winning-line analysis

pub mod grid;
pub mod lines;
pub mod symmetry;

pub use grid::{Board, Cell, Coord, Mark};
pub use lines::WINNING_LINES;
pub use symmetry::D4Transform;
