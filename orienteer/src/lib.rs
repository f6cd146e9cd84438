//! Orienteer — least-cost routes across terrain rasters with elevation.
//!
//! A route visits an ordered list of waypoints. Each leg between two
//! consecutive waypoints is found independently by A* over the implicit
//! 8-connected [`TerrainGraph`], drawn onto a copy of the raster, and measured
//! in meters using the map's per-cell scale and the elevation grid.

pub mod cli;
pub mod config;
pub mod finder;
pub mod graph;

pub use config::{FinderConfig, HIGHLIGHT, Heuristic};
pub use finder::{PathFinder, Route, Segment};
pub use graph::TerrainGraph;
