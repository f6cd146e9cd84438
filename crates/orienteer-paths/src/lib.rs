//! Weighted pathfinding on 2D grids.
//!
//! This crate provides the search algorithms used by the route finder:
//!
//! - **A\*** least-cost path search ([`PathRange::astar_path`])
//! - **Dijkstra** multi-source cost maps ([`PathRange::dijkstra_map`])
//!
//! Both operate through [`PathRange`], which owns and reuses internal caches
//! so that repeated queries (one per route segment) incur no allocations after
//! warm-up. Costs are `f64`; ties in the frontier are broken first-in,
//! first-out so that results are reproducible.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod dijkstra;
mod distance;
mod neighbors;
mod pathrange;
mod traits;

pub use distance::{chebyshev, path_length};
pub use neighbors::OFFSETS;
pub use pathrange::{PathNode, PathRange, SearchStats, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
