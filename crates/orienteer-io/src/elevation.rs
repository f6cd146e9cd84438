use std::path::Path;

use orienteer_core::ElevationGrid;

use crate::{IoError, read_text};

/// Parse an elevation grid: one row per non-empty line, whitespace-separated
/// real numbers.
pub fn parse_elevation(text: &str) -> Result<ElevationGrid, IoError> {
    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(j, field)| {
                field.parse::<f64>().map_err(|_| IoError::Number {
                    line: i + 1,
                    field: j + 1,
                    value: field.to_owned(),
                    expected: "real number",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(ElevationGrid::from_rows(rows)?)
}

/// Read and parse an elevation file.
pub fn load_elevation(path: impl AsRef<Path>) -> Result<ElevationGrid, IoError> {
    let path = path.as_ref();
    let grid = parse_elevation(&read_text(path)?)?;
    log::debug!(
        "loaded {}x{} elevation grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}
