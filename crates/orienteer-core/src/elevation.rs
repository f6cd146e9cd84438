//! The [`ElevationGrid`] — one height per raster cell, indexed `[y][x]`.

use crate::error::{Error, Result};
use crate::geom::{Point, Range};

/// Dense, immutable grid of elevations in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    heights: Vec<f64>,
    bounds: Range,
}

impl ElevationGrid {
    /// Build a grid from rows of heights (row `y` holds columns `x`).
    ///
    /// Rows must all have the same non-zero length and every value must be
    /// finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(Error::EmptyGrid);
        }
        let mut heights = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::RaggedRow {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            for (x, &z) in row.iter().enumerate() {
                if !z.is_finite() {
                    return Err(Error::NonFiniteCoordinate {
                        x: x as i32,
                        y: y as i32,
                        value: z,
                    });
                }
            }
            heights.extend_from_slice(row);
        }
        Ok(Self {
            heights,
            bounds: Range::sized(expected as i32, rows.len() as i32),
        })
    }

    /// A grid of the given size with every cell at height `z`.
    pub fn flat(width: i32, height: i32, z: f64) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            heights: vec![z; bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Height at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<f64> {
        self.bounds.index(p).map(|i| self.heights[i])
    }

    /// Drop every column at or beyond `width`. Grids already narrower are
    /// returned unchanged.
    pub fn truncate_columns(self, width: i32) -> Self {
        let old_w = self.width();
        if width >= old_w || width <= 0 {
            return self;
        }
        let heights = self
            .heights
            .chunks(old_w as usize)
            .flat_map(|row| row[..width as usize].iter().copied())
            .collect();
        Self {
            heights,
            bounds: Range::sized(width, self.height()),
        }
    }

    /// Fail unless this grid covers exactly `raster`.
    pub fn ensure_matches(&self, raster: Range) -> Result<()> {
        if self.width() != raster.width() || self.height() != raster.height() {
            return Err(Error::DimensionMismatch {
                raster_width: raster.width(),
                raster_height: raster.height(),
                elevation_width: self.width(),
                elevation_height: self.height(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ElevationGrid {
        ElevationGrid::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn indexed_by_row_then_column() {
        let g = grid();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.at(Point::new(2, 0)), Some(3.0));
        assert_eq!(g.at(Point::new(0, 1)), Some(4.0));
        assert_eq!(g.at(Point::new(3, 0)), None);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = ElevationGrid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(ElevationGrid::from_rows(vec![]), Err(Error::EmptyGrid));
    }

    #[test]
    fn non_finite_height_rejected() {
        let err = ElevationGrid::from_rows(vec![vec![1.0, f64::NAN]]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteCoordinate { x: 1, y: 0, .. }));
    }

    #[test]
    fn dimension_check() {
        let g = grid();
        assert!(g.ensure_matches(Range::sized(3, 2)).is_ok());
        assert!(matches!(
            g.ensure_matches(Range::sized(2, 2)),
            Err(Error::DimensionMismatch { elevation_width: 3, .. })
        ));
    }

    #[test]
    fn truncate_drops_trailing_columns() {
        let g = grid().truncate_columns(2);
        assert_eq!(g.width(), 2);
        assert_eq!(g.at(Point::new(1, 1)), Some(5.0));
        assert_eq!(g.at(Point::new(2, 1)), None);
        assert_eq!(grid().truncate_columns(5), grid());
    }
}
