//! Command-line front end.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use orienteer_core::{Scale, TerrainCostModel};

use crate::config::{FinderConfig, Heuristic};
use crate::finder::{PathFinder, Route};

/// Find the least-cost route through a list of waypoints and draw it onto
/// the terrain map.
#[derive(Debug, Clone, Parser)]
#[command(name = "orienteer", version)]
pub struct Cli {
    /// Terrain raster (any common image format)
    pub terrain: PathBuf,
    /// Elevation grid, one whitespace-separated row per raster row
    pub elevation: PathBuf,
    /// Waypoints, one `x y` pair per line
    pub waypoints: PathBuf,
    /// Where to write the annotated raster
    pub output: PathBuf,

    /// Meters per cell along x
    #[arg(long, default_value_t = Scale::ORIENTEERING_MAP.x)]
    pub scale_x: f64,
    /// Meters per cell along y
    #[arg(long, default_value_t = Scale::ORIENTEERING_MAP.y)]
    pub scale_y: f64,
    /// Meters per elevation unit
    #[arg(long, default_value_t = Scale::ORIENTEERING_MAP.z)]
    pub scale_z: f64,

    #[arg(long, value_enum, default_value_t = Heuristic::Physical)]
    pub heuristic: Heuristic,

    /// JSON terrain table replacing the built-in orienteering legend
    #[arg(long)]
    pub costs: Option<PathBuf>,

    /// Drop elevation columns beyond the raster width
    #[arg(long)]
    pub trim_elevation: bool,
}

impl Cli {
    pub fn config(&self) -> FinderConfig {
        FinderConfig {
            scale: Scale::new(self.scale_x, self.scale_y, self.scale_z),
            heuristic: self.heuristic,
            trim_elevation: self.trim_elevation,
            ..FinderConfig::default()
        }
    }

    fn cost_model(&self) -> anyhow::Result<TerrainCostModel> {
        let Some(path) = &self.costs else {
            return Ok(TerrainCostModel::orienteering());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading terrain table {}", path.display()))?;
        let model: TerrainCostModel = serde_json::from_str(&text)
            .with_context(|| format!("parsing terrain table {}", path.display()))?;
        log::info!(
            "loaded {} terrain types from {}",
            model.terrains().len(),
            path.display()
        );
        Ok(model)
    }
}

/// Parse `argv`, or report why it cannot be run.
///
/// Returns `None` when there is nothing to run: help or version was
/// requested, the positional argument count is wrong (usage is written to
/// `out`), or an option is malformed (the clap message is written to `out`).
/// None of these are failures of the program.
pub fn parse_or_usage<I, T>(argv: I, out: &mut impl Write) -> std::io::Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let err = match Cli::try_parse_from(argv) {
        Ok(cli) => return Ok(Some(cli)),
        Err(err) => err,
    };
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write!(out, "{}", err.render())?;
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
            log::debug!("{err}");
            writeln!(out, "{}", Cli::command().render_usage())?;
        }
        _ => {
            log::warn!("invalid arguments: {err}");
            write!(out, "{}", err.render())?;
        }
    }
    Ok(None)
}

/// Load the inputs, solve, and write the annotated raster.
pub fn run(cli: &Cli) -> anyhow::Result<Route> {
    let model = cli.cost_model()?;
    let raster = orienteer_io::load_raster(&cli.terrain)
        .with_context(|| format!("loading terrain {}", cli.terrain.display()))?;
    let elevation = orienteer_io::load_elevation(&cli.elevation)
        .with_context(|| format!("loading elevation {}", cli.elevation.display()))?;
    let waypoints = orienteer_io::load_waypoints(&cli.waypoints)
        .with_context(|| format!("loading waypoints {}", cli.waypoints.display()))?;

    let mut finder = PathFinder::new(raster, elevation, waypoints, &model, cli.config())?;
    let route = finder.solve();
    if route.unreachable() > 0 {
        log::warn!(
            "{} of {} segments have no path",
            route.unreachable(),
            route.segments.len()
        );
    }

    orienteer_io::save_raster(finder.output(), &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    log::info!("wrote {}", cli.output.display());
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use orienteer_core::{Point, Rgb, TerrainRaster};

    const OPEN: Rgb = Rgb::new(248, 148, 18);

    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let pid = std::process::id();
            let dir = std::env::temp_dir().join(format!("orienteer-cli-{pid}-{name}"));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn file(&self, name: &str, contents: &str) -> PathBuf {
            let p = self.0.join(name);
            std::fs::write(&p, contents).unwrap();
            p
        }

        fn path(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn args(dir: &Scratch, extra: &[&str]) -> Cli {
        let mut argv: Vec<String> = vec!["orienteer".into()];
        for name in ["terrain.png", "elevation.txt", "waypoints.txt", "out.png"] {
            argv.push(dir.path(name).display().to_string());
        }
        argv.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(argv).unwrap()
    }

    fn write_terrain(dir: &Scratch, raster: &TerrainRaster) {
        orienteer_io::save_raster(raster, dir.path("terrain.png")).unwrap();
    }

    #[test]
    fn wrong_argument_count_is_a_parse_error() {
        assert!(Cli::try_parse_from(["orienteer", "a", "b", "c"]).is_err());
        assert!(Cli::try_parse_from(["orienteer", "a", "b", "c", "d", "e"]).is_err());
        assert!(Cli::try_parse_from(["orienteer", "a", "b", "c", "d"]).is_ok());
    }

    fn parse_quietly(argv: &[&str]) -> (Option<Cli>, String) {
        let mut out = Vec::new();
        let cli = parse_or_usage(argv.iter().copied(), &mut out).unwrap();
        (cli, String::from_utf8(out).unwrap())
    }

    #[test]
    fn wrong_argument_count_prints_usage_and_stops() {
        for argv in [
            &["orienteer"][..],
            &["orienteer", "a", "b", "c"],
            &["orienteer", "a", "b", "c", "d", "e"],
        ] {
            let (cli, out) = parse_quietly(argv);
            assert!(cli.is_none(), "{argv:?}");
            assert!(out.starts_with("Usage: orienteer"), "{argv:?}: {out}");
        }
    }

    #[test]
    fn malformed_option_reports_the_problem() {
        let (cli, out) = parse_quietly(&["orienteer", "a", "b", "c", "d", "--scale-x", "abc"]);
        assert!(cli.is_none());
        assert!(out.contains("abc"), "{out}");
        assert!(out.contains("--scale-x"), "{out}");

        let (cli, out) = parse_quietly(&["orienteer", "a", "b", "c", "d", "--heuristic", "fast"]);
        assert!(cli.is_none());
        assert!(out.contains("fast"), "{out}");
    }

    #[test]
    fn valid_arguments_parse_silently() {
        let (cli, out) = parse_quietly(&["orienteer", "t.png", "e.txt", "w.txt", "o.png"]);
        let cli = cli.unwrap();
        assert_eq!(cli.output, PathBuf::from("o.png"));
        assert!(out.is_empty());
    }

    #[test]
    fn defaults_match_orienteering_map() {
        let cli = Cli::try_parse_from(["orienteer", "a", "b", "c", "d"]).unwrap();
        assert_eq!(cli.config(), FinderConfig::default());
    }

    #[test]
    fn end_to_end_on_small_map() {
        let dir = Scratch::new("e2e");
        write_terrain(&dir, &TerrainRaster::new(3, 3, OPEN));
        dir.file("elevation.txt", "0 0 0\n0 0 0\n0 0 0\n");
        dir.file("waypoints.txt", "0 0\n2 2\n");
        let cli = args(&dir, &["--scale-x", "1", "--scale-y", "1"]);

        let route = run(&cli).unwrap();
        assert_relative_eq!(route.distance, 2.0 * 2f64.sqrt());

        let out = orienteer_io::load_raster(dir.path("out.png")).unwrap();
        assert_eq!(out.at(Point::new(1, 1)), Some(crate::HIGHLIGHT));
        assert_eq!(out.at(Point::new(0, 2)), Some(OPEN));
        assert!(dir.path("terrain.png").exists());
    }

    #[test]
    fn custom_cost_table() {
        let dir = Scratch::new("costs");
        let mut raster = TerrainRaster::new(3, 1, OPEN);
        raster.set(Point::new(1, 0), Rgb::new(9, 9, 9));
        write_terrain(&dir, &raster);
        dir.file("elevation.txt", "0 0 0\n");
        dir.file("waypoints.txt", "0 0\n2 0\n");
        let costs = dir.file(
            "costs.json",
            r#"[{"name": "Open Land", "color": [248, 148, 18], "cost": 1.0},
                {"name": "Scree", "color": [9, 9, 9], "cost": 3.0}]"#,
        );

        let without = args(&dir, &[]);
        let err = run(&without).unwrap_err();
        assert!(format!("{err:#}").contains("#090909"));

        let with = args(&dir, &["--costs", costs.to_str().unwrap(), "--scale-x", "1"]);
        let route = run(&with).unwrap();
        assert_relative_eq!(route.distance, 2.0);
    }

    #[test]
    fn malformed_elevation_is_fatal() {
        let dir = Scratch::new("bad-elevation");
        write_terrain(&dir, &TerrainRaster::new(2, 1, OPEN));
        dir.file("elevation.txt", "0 oops\n");
        dir.file("waypoints.txt", "0 0\n1 0\n");
        let err = run(&args(&dir, &[])).unwrap_err();
        assert!(format!("{err:#}").contains("oops"));
        assert!(!dir.path("out.png").exists());
    }
}
