//! **orienteer-core** — foundational types for terrain routing.
//!
//! This crate provides the data the route finder works over: integer grid
//! geometry, elevation-aware [`Point3`] values with an anisotropic distance,
//! the colored [`TerrainRaster`], the co-registered [`ElevationGrid`] and the
//! [`TerrainCostModel`] mapping raster colors to traversal costs.
//!
//! Everything here is immutable once built, except the raster, which is
//! mutated only when a route is drawn onto a working copy.

pub mod cost;
pub mod elevation;
pub mod error;
pub mod geom;
pub mod raster;

pub use cost::{Cost, Terrain, TerrainCostModel};
pub use elevation::ElevationGrid;
pub use error::{Error, Result};
pub use geom::{Point, Point3, Range, Scale};
pub use raster::{Rgb, TerrainRaster};
