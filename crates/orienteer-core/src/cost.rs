//! Terrain types and their traversal costs, keyed by raster color.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::raster::Rgb;

/// Traversal cost of entering a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<f64>", into = "Option<f64>")
)]
pub enum Cost {
    /// Strictly positive multiplier.
    Passable(f64),
    Impassable,
}

impl Cost {
    /// The finite multiplier, or `None` when impassable.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Cost::Passable(c) => Some(c),
            Cost::Impassable => None,
        }
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, Cost::Passable(_))
    }
}

impl From<Option<f64>> for Cost {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(c) if c != f64::INFINITY => Cost::Passable(c),
            _ => Cost::Impassable,
        }
    }
}

impl From<Cost> for Option<f64> {
    fn from(c: Cost) -> Self {
        c.value()
    }
}

/// A named terrain type drawn in a specific color.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain {
    pub name: String,
    pub color: Rgb,
    pub cost: Cost,
}

impl Terrain {
    pub fn new(name: impl Into<String>, color: Rgb, cost: Cost) -> Self {
        Self {
            name: name.into(),
            color,
            cost,
        }
    }
}

/// Immutable mapping from raster color to [`Terrain`].
///
/// Every color a raster uses must be listed; an unknown color is a
/// configuration error, never a routing decision.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Terrain>", into = "Vec<Terrain>")
)]
pub struct TerrainCostModel {
    terrains: Vec<Terrain>,
    by_color: HashMap<Rgb, usize>,
}

impl TerrainCostModel {
    /// Build a model, rejecting duplicate colors and passable costs that
    /// are not finite and positive.
    pub fn new(terrains: Vec<Terrain>) -> Result<Self> {
        let mut by_color: HashMap<Rgb, usize> = HashMap::with_capacity(terrains.len());
        for (i, t) in terrains.iter().enumerate() {
            if let Cost::Passable(c) = t.cost {
                if !c.is_finite() || c <= 0.0 {
                    return Err(Error::InvalidCost {
                        name: t.name.clone(),
                        cost: c,
                    });
                }
            }
            if let Some(&prev) = by_color.get(&t.color) {
                return Err(Error::DuplicateColor {
                    color: t.color,
                    first: terrains[prev].name.clone(),
                    second: t.name.clone(),
                });
            }
            by_color.insert(t.color, i);
        }
        Ok(Self { terrains, by_color })
    }

    /// The legend of the standard orienteering map.
    pub fn orienteering() -> Self {
        use Cost::{Impassable, Passable};
        let table = [
            ("Open Land", Rgb::new(248, 148, 18), Passable(1.0)),
            ("Rough Meadow", Rgb::new(255, 192, 0), Passable(1.5)),
            ("Easy Movement Forest", Rgb::new(255, 255, 255), Passable(1.2)),
            ("Slow Run Forest", Rgb::new(2, 208, 60), Passable(1.8)),
            ("Walk Forest", Rgb::new(2, 136, 40), Passable(2.0)),
            ("Impassable Vegetation", Rgb::new(5, 73, 24), Impassable),
            ("Lake/Swamp/Marsh", Rgb::new(0, 0, 255), Passable(15.0)),
            ("Paved Road", Rgb::new(71, 51, 3), Passable(0.8)),
            ("Footpath", Rgb::new(0, 0, 0), Passable(1.0)),
            ("Out of Bounds", Rgb::new(205, 0, 101), Impassable),
        ];
        let terrains = table
            .into_iter()
            .map(|(name, color, cost)| Terrain::new(name, color, cost))
            .collect::<Vec<_>>();
        let by_color = terrains
            .iter()
            .enumerate()
            .map(|(i, t)| (t.color, i))
            .collect();
        Self { terrains, by_color }
    }

    /// The terrain drawn in `color`.
    pub fn lookup(&self, color: Rgb) -> Result<&Terrain> {
        self.by_color
            .get(&color)
            .map(|&i| &self.terrains[i])
            .ok_or(Error::UnmappedColor(color))
    }

    /// The traversal cost of `color`.
    #[inline]
    pub fn cost_of(&self, color: Rgb) -> Result<Cost> {
        self.lookup(color).map(|t| t.cost)
    }

    pub fn terrains(&self) -> &[Terrain] {
        &self.terrains
    }
}

impl Default for TerrainCostModel {
    fn default() -> Self {
        Self::orienteering()
    }
}

impl TryFrom<Vec<Terrain>> for TerrainCostModel {
    type Error = Error;

    fn try_from(terrains: Vec<Terrain>) -> Result<Self> {
        Self::new(terrains)
    }
}

impl From<TerrainCostModel> for Vec<Terrain> {
    fn from(model: TerrainCostModel) -> Self {
        model.terrains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orienteering_table_lookups() {
        let m = TerrainCostModel::orienteering();
        assert_eq!(m.terrains().len(), 10);
        assert_eq!(m.cost_of(Rgb::new(248, 148, 18)), Ok(Cost::Passable(1.0)));
        assert_eq!(m.cost_of(Rgb::new(0, 0, 255)), Ok(Cost::Passable(15.0)));
        assert_eq!(m.cost_of(Rgb::new(5, 73, 24)), Ok(Cost::Impassable));
        assert_eq!(m.cost_of(Rgb::new(205, 0, 101)), Ok(Cost::Impassable));
        assert_eq!(m.lookup(Rgb::new(71, 51, 3)).unwrap().name, "Paved Road");
    }

    #[test]
    fn unknown_color_is_an_error() {
        let m = TerrainCostModel::orienteering();
        let c = Rgb::new(1, 2, 3);
        assert_eq!(m.cost_of(c), Err(Error::UnmappedColor(c)));
    }

    #[test]
    fn duplicate_colors_rejected() {
        let err = TerrainCostModel::new(vec![
            Terrain::new("a", Rgb::BLACK, Cost::Passable(1.0)),
            Terrain::new("b", Rgb::BLACK, Cost::Passable(2.0)),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateColor { .. }));
    }

    #[test]
    fn non_positive_costs_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let terrain = Terrain::new("x", Rgb::BLACK, Cost::Passable(bad));
            let res = TerrainCostModel::new(vec![terrain]);
            assert!(matches!(res, Err(Error::InvalidCost { .. })), "{bad}");
        }
    }

    #[test]
    fn duplicate_color_lookup_names_both_terrains() {
        let err = TerrainCostModel::new(vec![
            Terrain::new("Meadow", Rgb::new(255, 192, 0), Cost::Passable(1.5)),
            Terrain::new("Wall", Rgb::BLACK, Cost::Impassable),
            Terrain::new("Field", Rgb::new(255, 192, 0), Cost::Passable(1.0)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateColor {
                color: Rgb::new(255, 192, 0),
                first: "Meadow".into(),
                second: "Field".into(),
            }
        );
    }

    #[test]
    fn validated_model_resolves_every_entry() {
        let m = TerrainCostModel::new(vec![
            Terrain::new("Wall", Rgb::BLACK, Cost::Impassable),
            Terrain::new("Road", Rgb::new(71, 51, 3), Cost::Passable(0.8)),
        ])
        .unwrap();
        assert_eq!(m.cost_of(Rgb::BLACK), Ok(Cost::Impassable));
        assert_eq!(m.lookup(Rgb::new(71, 51, 3)).unwrap().name, "Road");
    }
}
