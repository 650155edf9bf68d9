//! **loopmaze** generates fully connected grid mazes with a few extra loops, and finds shortest
//! paths through them, for maze navigation games.
//!
//! A level builds a `grid::Grid`, carves it once with `generators::generate` and from then on only
//! reads it: movement checks `Grid::wall_open`, path overlays call `pathing::find_path`.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_traits;
pub mod levels;
pub mod pathing;
pub mod units;
mod utils;
