//! Run configuration for [`PathFinder`](crate::PathFinder).

use orienteer_core::{Rgb, Scale};

/// Color written over every cell of a drawn route.
pub const HIGHLIGHT: Rgb = Rgb::new(118, 63, 231);

/// How A* estimates the remaining cost to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Heuristic {
    /// Scaled straight-line distance to the goal, elevation included.
    ///
    /// This is measured in meters while step costs are terrain multipliers,
    /// so it can overestimate and the search then favors speed over a
    /// least-cost result.
    #[default]
    Physical,
    /// Remaining 8-connected steps times the cheapest terrain cost on the
    /// map. Never overestimates, so routes are least-cost.
    Normalized,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FinderConfig {
    /// Real-world size of one cell, used for reported distances and the
    /// physical heuristic.
    pub scale: Scale,
    pub heuristic: Heuristic,
    pub highlight: Rgb,
    /// Trim elevation rows that are wider than the raster instead of
    /// rejecting them.
    pub trim_elevation: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            scale: Scale::ORIENTEERING_MAP,
            heuristic: Heuristic::default(),
            highlight: HIGHLIGHT,
            trim_elevation: false,
        }
    }
}
