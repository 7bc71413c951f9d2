use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hybrid::api::{build_nav, parse_cells, HyperRectangle, NavParams, FLAT_TOL};
use hybrid::nav::DEFAULT_PREFIX;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod model;
mod provenance;
mod settings;

use settings::EngineSettings;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Hybrid automaton model generator and box geometry tool")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate the navigation benchmark and emit its model document
    Nav(NavArgs),
    /// Print center, star points and unique corners of a box
    #[command(name = "box")]
    BoxPoints {
        /// Interval `lo,hi`; repeat once per dimension
        #[arg(long = "dim", required = true, value_parser = parse_interval, allow_hyphen_values = true)]
        dims: Vec<(f64, f64)>,
        /// Widths at or below this count as flat
        #[arg(long, default_value_t = FLAT_TOL, allow_negative_numbers = true)]
        tol: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Serialize)]
struct NavArgs {
    /// Four values of matrix A, row-major: a11 a12 a21 a22
    #[arg(long, num_args = 4, required = true, allow_negative_numbers = true)]
    matrix: Vec<f64>,
    /// Target heading per cell: 0-8, A (target) or B (forbidden)
    #[arg(long = "i-list", num_args = 1.., required = true)]
    i_list: Vec<String>,
    /// Grid width (number of modes per row)
    #[arg(long)]
    width: usize,
    #[arg(long, allow_negative_numbers = true)]
    startx: f64,
    #[arg(long, allow_negative_numbers = true)]
    starty: f64,
    /// Input noise [-val, val] on the velocity derivatives
    #[arg(long, default_value_t = 0.0)]
    noise: f64,
    /// Mode name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,
    /// Engine settings JSON (any subset of keys)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the document here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    #[serde(skip)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Nav(args) => nav(args),
        Action::BoxPoints { dims, tol } => box_points(dims, tol),
        Action::Report => report(),
    }
}

fn parse_interval(s: &str) -> Result<(f64, f64), String> {
    let (lo, hi) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `lo,hi`, got `{s}`"))?;
    let lo: f64 = lo.trim().parse().map_err(|e| format!("low bound: {e}"))?;
    let hi: f64 = hi.trim().parse().map_err(|e| format!("high bound: {e}"))?;
    Ok((lo, hi))
}

fn nav(args: NavArgs) -> Result<()> {
    let settings = match &args.config {
        Some(path) => EngineSettings::load(path)?,
        None => EngineSettings::default(),
    };
    let cells = parse_cells(&args.i_list)?;
    let mut params = NavParams::new(
        args.matrix.clone(),
        cells,
        args.width,
        (args.startx, args.starty),
    );
    params.noise = args.noise;
    params.prefix = args.prefix.clone();
    let bench = build_nav(&params).context("building navigation benchmark")?;
    tracing::info!(
        modes = bench.automaton.num_modes(),
        transitions = bench.automaton.transitions().len(),
        forbidden = bench.forbidden.len(),
        "nav"
    );

    let doc = model::nav_document(&bench, &settings);
    let body = serde_json::to_vec_pretty(&doc)?;
    match &args.out {
        Some(out) => {
            create_parent(out)?;
            std::fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
            let prov = provenance::write_sidecar(out, "nav", &args, &doc)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote model");
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn box_points(dims: Vec<(f64, f64)>, tol: f64) -> Result<()> {
    let rect = HyperRectangle::new(dims)?;
    let Some(corners) = rect.num_unique_corners(tol) else {
        bail!("too many non-flat dimensions to enumerate corners");
    };
    tracing::info!(
        ndim = rect.ndim(),
        corners,
        tol,
        "box"
    );
    let doc = model::box_document(&rect, tol);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let info = provenance::BuildInfo::current();
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_nav_with_negative_matrix() {
        let cmd = Cmd::try_parse_from([
            "cli", "nav", "--matrix", "-1.2", "0.1", "0.1", "-1.2", "--i-list", "2", "2", "A",
            "4", "3", "4", "B", "2", "4", "--width", "3", "--startx", "0.5", "--starty", "1.5",
        ])
        .unwrap();
        match cmd.action {
            Action::Nav(args) => {
                assert_eq!(args.matrix, vec![-1.2, 0.1, 0.1, -1.2]);
                assert_eq!(args.i_list.len(), 9);
                assert_eq!(args.prefix, "mode_");
                assert_eq!(args.noise, 0.0);
            }
            _ => panic!("expected nav"),
        }
    }

    #[test]
    fn parses_box_dims() {
        let cmd = Cmd::try_parse_from(["cli", "box", "--dim", "-1,1", "--dim", "5,5"]).unwrap();
        match cmd.action {
            Action::BoxPoints { dims, tol } => {
                assert_eq!(dims, vec![(-1.0, 1.0), (5.0, 5.0)]);
                assert_eq!(tol, FLAT_TOL);
            }
            _ => panic!("expected box"),
        }
        assert!(parse_interval("1;2").is_err());
        assert!(parse_interval("a,2").is_err());
    }

    #[test]
    fn nav_writes_model_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("models").join("nav.json");
        let args = NavArgs {
            matrix: vec![-1.2, 0.1, 0.1, -1.2],
            i_list: ["2", "2", "A", "4", "3", "4", "B", "2", "4"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            width: 3,
            startx: 0.5,
            starty: 1.5,
            noise: 0.1,
            prefix: DEFAULT_PREFIX.to_string(),
            config: None,
            out: Some(out.clone()),
        };
        nav(args).unwrap();
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["modes"].as_array().unwrap().len(), 9);
        assert_eq!(doc["init"]["mode"], "mode_0_1");
        let prov: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("models").join("nav.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["command"], "nav");
        assert_eq!(prov["request"]["width"], 3);
        assert_eq!(prov["request"]["noise"], 0.1);
        assert!(prov["request"].get("out").is_none());
        assert_eq!(prov["model"]["modes"], 9);
    }

    #[test]
    fn box_rejects_uncountable_corners() {
        let dims = vec![(0.0, 1.0); 64];
        let err = box_points(dims, FLAT_TOL).unwrap_err();
        assert!(err.to_string().contains("too many non-flat dimensions"));
    }

    #[test]
    fn nav_rejects_ragged_grid() {
        let args = NavArgs {
            matrix: vec![-1.2, 0.1, 0.1, -1.2],
            i_list: vec!["1".into(), "2".into(), "3".into()],
            width: 2,
            startx: 0.0,
            starty: 0.0,
            noise: 0.0,
            prefix: DEFAULT_PREFIX.to_string(),
            config: None,
            out: None,
        };
        assert!(nav(args).is_err());
    }
}
