//! The implicit 8-connected terrain graph searched by A*.

use orienteer_core::{
    Cost, ElevationGrid, Error, Point, Point3, Range, Result, Scale, TerrainCostModel,
    TerrainRaster,
};
use orienteer_paths::{AstarPather, OFFSETS, Pather, WeightedPather, chebyshev};

use crate::config::Heuristic;

/// Raster terrain costs and elevations combined into a weighted grid graph.
///
/// Every raster color is resolved against the cost model once, at
/// construction, so lookups during search cannot fail.
#[derive(Debug, Clone)]
pub struct TerrainGraph {
    bounds: Range,
    costs: Vec<Cost>,
    elevation: ElevationGrid,
    scale: Scale,
    heuristic: Heuristic,
    /// Cheapest passable cost present on the raster.
    min_cost: f64,
}

impl TerrainGraph {
    /// Build the graph, failing on a size mismatch or an unmapped color.
    pub fn new(
        raster: &TerrainRaster,
        elevation: ElevationGrid,
        model: &TerrainCostModel,
        scale: Scale,
        heuristic: Heuristic,
    ) -> Result<Self> {
        let bounds = raster.bounds();
        elevation.ensure_matches(bounds)?;

        let costs = bounds
            .iter()
            .zip(raster.pixels())
            .map(|(at, &color)| {
                model
                    .cost_of(color)
                    .map_err(|_| Error::UnknownColor { color, at })
            })
            .collect::<Result<Vec<_>>>()?;
        let min_cost = costs
            .iter()
            .filter_map(|c| c.value())
            .min_by(f64::total_cmp)
            .unwrap_or(0.0);

        Ok(Self {
            bounds,
            costs,
            elevation,
            scale,
            heuristic,
            min_cost,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Terrain cost of entering `p`, or `None` outside the raster.
    #[inline]
    pub fn cost_at(&self, p: Point) -> Option<Cost> {
        self.bounds.index(p).map(|i| self.costs[i])
    }

    /// `p` lifted to 3D by its elevation, or `None` outside the raster.
    #[inline]
    pub fn point3(&self, p: Point) -> Option<Point3> {
        self.elevation.at(p).map(|z| Point3 { x: p.x, y: p.y, z })
    }

    /// All in-bounds 8-connected neighbors of `p`, passable or not, in
    /// [`OFFSETS`] order.
    pub fn neighbors3(&self, p: Point3) -> Vec<Point3> {
        OFFSETS
            .iter()
            .filter_map(|&d| self.point3(p.xy() + d))
            .collect()
    }

    /// Lift a 2D path to 3D.
    pub fn lift(&self, path: &[Point]) -> Vec<Point3> {
        path.iter().filter_map(|&p| self.point3(p)).collect()
    }

    fn passable(&self, p: Point) -> bool {
        self.cost_at(p).is_some_and(Cost::is_passable)
    }
}

impl Pather for TerrainGraph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in OFFSETS {
            let np = p + d;
            if self.passable(np) {
                buf.push(np);
            }
        }
    }
}

impl WeightedPather for TerrainGraph {
    fn cost(&self, _from: Point, to: Point) -> f64 {
        self.cost_at(to)
            .and_then(Cost::value)
            .unwrap_or(f64::INFINITY)
    }
}

impl AstarPather for TerrainGraph {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        match self.heuristic {
            Heuristic::Physical => match (self.point3(from), self.point3(to)) {
                (Some(a), Some(b)) => a.distance(b, self.scale),
                _ => 0.0,
            },
            Heuristic::Normalized => f64::from(chebyshev(from, to)) * self.min_cost,
        }
    }
}
