//! File formats read and written by the route finder.
//!
//! - terrain rasters in any format the `image` crate decodes, written back
//!   in the format implied by the output extension
//! - elevation grids as whitespace-separated text, one row per line
//! - waypoint lists as `x y` integer pairs, one per line

mod elevation;
mod error;
mod raster;
mod waypoints;

pub use elevation::{load_elevation, parse_elevation};
pub use error::IoError;
pub use raster::{from_image, load_raster, save_raster, to_image};
pub use waypoints::{load_waypoints, parse_waypoints};

use std::path::Path;

/// Read a whole text file, attaching the path to any failure.
pub(crate) fn read_text(path: &Path) -> Result<String, IoError> {
    std::fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}
