//! Conway's Game of Life on a bounded field.
//!
//! Cells beyond the edges are treated as permanently dead; there is no wrap-around.

mod config;
mod error;
mod grid;
mod neighbors;

pub use config::Config;
pub use error::{Error, Result};
pub use grid::{every_cell, Grid};
pub use neighbors::{NeighborOffsets, Offset};
