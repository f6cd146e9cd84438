//! Multi-waypoint route finding: one A* search per leg, stitched in order.

use orienteer_core::{
    ElevationGrid, Error, Point, Point3, Result, TerrainCostModel, TerrainRaster,
};
use orienteer_paths::{PathRange, path_length};

use crate::config::FinderConfig;
use crate::graph::TerrainGraph;

/// The route between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Both endpoints included; empty if `to` cannot be reached.
    pub path: Vec<Point3>,
    /// Scaled length of `path` in meters.
    pub distance: f64,
}

impl Segment {
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Result of [`PathFinder::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub segments: Vec<Segment>,
    /// Total length in meters. Unreachable segments contribute nothing.
    pub distance: f64,
}

impl Route {
    /// All segment points in order, junction waypoints repeated.
    pub fn points(&self) -> impl Iterator<Item = &Point3> {
        self.segments.iter().flat_map(|s| s.path.iter())
    }

    /// Number of segments whose goal was unreachable.
    pub fn unreachable(&self) -> usize {
        self.segments.iter().filter(|s| !s.found()).count()
    }
}

/// Finds and draws a route through an ordered list of waypoints.
pub struct PathFinder {
    graph: TerrainGraph,
    waypoints: Vec<Point>,
    config: FinderConfig,
    output: TerrainRaster,
    pr: PathRange,
}

impl PathFinder {
    /// Validate the inputs and prepare a search.
    ///
    /// `raster` becomes the working copy that routes are drawn onto.
    pub fn new(
        raster: TerrainRaster,
        elevation: ElevationGrid,
        waypoints: Vec<Point>,
        model: &TerrainCostModel,
        config: FinderConfig,
    ) -> Result<Self> {
        let elevation = if config.trim_elevation && elevation.width() > raster.width() {
            log::info!(
                "trimming elevation grid from {} to {} columns",
                elevation.width(),
                raster.width()
            );
            elevation.truncate_columns(raster.width())
        } else {
            elevation
        };
        let graph = TerrainGraph::new(&raster, elevation, model, config.scale, config.heuristic)?;

        if waypoints.len() < 2 {
            return Err(Error::TooFewWaypoints(waypoints.len()));
        }
        if let Some(&p) = waypoints.iter().find(|&&p| !raster.contains(p)) {
            return Err(Error::WaypointOutOfBounds(p));
        }

        let pr = PathRange::new(graph.bounds());
        Ok(Self {
            graph,
            waypoints,
            config,
            output: raster,
            pr,
        })
    }

    /// Search every leg in order, drawing each onto the output raster as
    /// soon as it is found.
    ///
    /// An unreachable leg yields an empty segment and the remaining legs are
    /// still searched from their own start waypoint.
    pub fn solve(&mut self) -> Route {
        let legs = self.waypoints.len() - 1;
        let mut segments = Vec::with_capacity(legs);

        for (i, pair) in self.waypoints.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            log::info!("segment {}/{legs}: {from} -> {to}", i + 1);

            let found = self.pr.astar_path(&self.graph, from, to);
            let stats = self.pr.last_stats();
            log::debug!(
                "segment {}: expanded {} nodes, pushed {}",
                i + 1,
                stats.expanded,
                stats.pushed
            );

            let path = match found {
                Some(cells) => {
                    self.output
                        .draw_path(cells.iter().copied(), self.config.highlight);
                    self.graph.lift(&cells)
                }
                None => {
                    log::warn!("segment {}: no path from {from} to {to}", i + 1);
                    Vec::new()
                }
            };
            let distance = path_length(&path, self.config.scale);
            log::info!(
                "segment {}: {} cells, {distance:.2} m",
                i + 1,
                path.len()
            );
            segments.push(Segment {
                from,
                to,
                path,
                distance,
            });
        }

        let distance = segments.iter().map(|s| s.distance).fold(0.0, |acc, d| acc + d);
        Route { segments, distance }
    }

    /// The working raster with every route drawn so far.
    pub fn output(&self) -> &TerrainRaster {
        &self.output
    }

    pub fn graph(&self) -> &TerrainGraph {
        &self.graph
    }
}
