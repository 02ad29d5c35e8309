//! Canonical tic-tac-toe board atlas with two-ply route tables
//!
//! This crate provides:
//! - Exhaustive enumeration of balanced, non-winning boards up to D4 symmetry
//! - A stable canonical index for every equivalence class
//! - Per-board route tables mapping every ordered pair of moves (X then O)
//!   to the canonical index of the resulting position
//! - Plain-data JSON/CSV exports for presentation layers

pub mod atlas;
pub mod board;
pub mod cli;
pub mod enumerate;
pub mod error;
pub mod export;
pub mod routes;

pub use atlas::Atlas;
pub use board::{Board, Cell, Coord, D4Transform, Mark, WINNING_LINES};
pub use enumerate::{CanonicalSet, SEED_SPACE};
pub use error::{Error, Result};
pub use routes::{RouteEntry, RouteTable, build_route_table};
