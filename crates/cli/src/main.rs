use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use uvcov::footprint::{BeamAngles, SingleSideCoverage};
use uvcov::network::{
    connectivity_stats, coverage_result, estimate_area_coverage_fraction,
    estimate_area_coverage_fraction_mc, four_node_cell, grid_network, minimum_node_grid,
    SquareNetwork,
};
use uvcov::sweep::{sweep_distance, sweep_elevation, sweep_minimum_nodes};
use uvcov::{CoverageCfg, Vec2};

mod config;
mod provenance;

use config::SweepCfg;
use provenance::{write_sidecar, DeployRun, Payload};

/// Series labels in the `sweep` output frame.
const SERIES: [&str; 3] = [
    "footprint_vs_distance",
    "single_side_vs_theta1",
    "minimum_nodes_vs_distance",
];

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Coverage calculations and deployment runner for UV networks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    /// One standard 3l × 3l cell anchored at the origin
    Cell,
    /// Covering lattice over width × height
    Grid,
    /// Minimum-node near-square grid over width × height
    Minimum,
}

#[derive(Subcommand)]
enum Action {
    /// Print effective-coverage solver outputs as JSON
    Coverage {
        #[arg(long)]
        distance: f64,
        #[arg(long, default_value_t = 1e6)]
        area: f64,
    },
    /// Print the single-face footprint breakdown as JSON
    SingleSide {
        #[arg(long)]
        theta1: f64,
        #[arg(long)]
        theta2: f64,
        #[arg(long, default_value_t = 15.0)]
        phi1: f64,
        #[arg(long)]
        distance: f64,
    },
    /// Generate node positions and write them as CSV or Parquet
    Deploy {
        #[arg(long)]
        distance: f64,
        #[arg(long, default_value_t = 1000.0)]
        width: f64,
        #[arg(long, default_value_t = 1000.0)]
        height: f64,
        #[arg(long, value_enum, default_value_t = Layout::Grid)]
        layout: Layout,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run distance, elevation and node-count sweeps from a JSON config
    Sweep {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Coverage { distance, area } => coverage(distance, area),
        Action::SingleSide {
            theta1,
            theta2,
            phi1,
            distance,
        } => single_side(theta1, theta2, phi1, distance),
        Action::Deploy {
            distance,
            width,
            height,
            layout,
            out,
        } => deploy(distance, width, height, layout, &out),
        Action::Sweep { config, out } => sweep(config.as_deref(), &out),
        Action::Report => report(),
    }
}

fn coverage(distance: f64, area: f64) -> Result<()> {
    tracing::info!(distance, area, "coverage");
    let r = coverage_result(distance, area).context("coverage solver")?;
    let obj = serde_json::json!({
        "l": r.l,
        "disk_area": r.disk_area,
        "s1_corner": r.overlap.s1,
        "s2_edge": r.overlap.s2,
        "cell_side": r.cell_side,
        "four_node_effective": r.four_node_effective,
        "single_node_effective": r.single_node_effective,
        "efficiency": r.efficiency,
        "s_roi": r.s_roi,
        "minimum_nodes": r.minimum_nodes,
        "effective_total": r.effective_total,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn single_side(theta1: f64, theta2: f64, phi1: f64, distance: f64) -> Result<()> {
    tracing::info!(theta1, theta2, phi1, distance, "single_side");
    let cfg = CoverageCfg::default();
    let angles =
        BeamAngles::new_with_eps(theta1, theta2, phi1, cfg.eps_sin).context("beam angles")?;
    let cov = SingleSideCoverage::compute(angles, distance).context("single-side coverage")?;
    if let Some(w) = cov.warning {
        tracing::warn!(%w, "formula outside its validity range");
    }
    let g = cov.geometry();
    let obj = serde_json::json!({
        "angles": { "theta1": theta1, "theta2": theta2, "phi1": phi1 },
        "l": cov.l,
        "r1": cov.r1,
        "geometry": {
            "to_prime": g.to_prime,
            "ta_prime": g.ta_prime,
            "od_prime": g.od_prime,
            "oa_prime": g.oa_prime,
            "bd_prime": g.bd_prime,
        },
        "triangle_area": cov.triangle_area,
        "half_ellipse_area": cov.half_ellipse_area,
        "total_area": cov.total_area,
        "warning": cov.warning.map(|w| w.to_string()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn deploy(distance: f64, width: f64, height: f64, layout: Layout, out: &Path) -> Result<()> {
    tracing::info!(distance, width, height, ?layout, out = %out.display(), "deploy");
    let net = match layout {
        Layout::Cell => four_node_cell(distance, Vec2::new(0.0, 0.0)),
        Layout::Grid => grid_network(width, height, distance),
        Layout::Minimum => minimum_node_grid(width * height, distance),
    }
    .context("generating network")?;

    let cfg = CoverageCfg::default();
    let fraction = estimate_area_coverage_fraction(&net.nodes, &net.bounds, cfg.sample_density)
        .context("sampling coverage")?;
    let fraction_mc =
        estimate_area_coverage_fraction_mc(&net.nodes, &net.bounds, cfg.mc_samples, cfg.seed)
            .context("sampling coverage (monte carlo)")?;
    let stats = connectivity_stats(&net.nodes, distance).context("adjacency statistics")?;
    tracing::info!(
        nodes = net.len(),
        fraction,
        fraction_mc,
        mean_neighbors = stats.mean,
        isolated = stats.isolated.len(),
        "network generated"
    );

    println!("{}", net.summary());

    let mut df = network_frame(&net)?;
    write_frame(&mut df, out)?;
    let layout_name = format!("{layout:?}").to_lowercase();
    write_sidecar(
        out,
        Payload::deploy(&DeployRun {
            layout: &layout_name,
            width,
            height,
            network: &net,
            stats: &stats,
            fraction,
            fraction_mc,
            cfg: &cfg,
        }),
    )?;
    Ok(())
}

fn sweep(config: Option<&Path>, out: &Path) -> Result<()> {
    let cfg = match config {
        Some(path) => SweepCfg::load(path)?,
        None => SweepCfg::default(),
    };
    tracing::info!(?cfg, out = %out.display(), "sweep");

    let mut series: Vec<&str> = Vec::new();
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    let mut flagged: Vec<bool> = Vec::new();

    for (l, area) in sweep_distance(&cfg.distances, cfg.model()?).context("distance sweep")? {
        series.push(SERIES[0]);
        xs.push(l);
        ys.push(area);
        flagged.push(false);
    }
    let elevation = sweep_elevation(&cfg.theta1_values, cfg.theta2, cfg.phi1, cfg.distance)
        .context("elevation sweep")?;
    for p in elevation {
        series.push(SERIES[1]);
        xs.push(p.theta1);
        ys.push(p.area);
        flagged.push(p.warning.is_some());
    }
    for (l, n) in sweep_minimum_nodes(cfg.s_roi, &cfg.distances).context("node-count sweep")? {
        series.push(SERIES[2]);
        xs.push(l);
        ys.push(n as f64);
        flagged.push(false);
    }

    let rows = SERIES.map(|name| (name, series.iter().filter(|s| **s == name).count()));
    let mut df = df!(
        "series" => series,
        "x" => xs,
        "y" => ys,
        "flagged" => flagged,
    )?;
    write_frame(&mut df, out)?;
    write_sidecar(out, Payload::sweep(&cfg, &rows)?)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "uvcov_version": uvcov::VERSION,
        "published_efficiency": uvcov::network::PUBLISHED_EFFICIENCY,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn network_frame(net: &SquareNetwork) -> Result<DataFrame> {
    let ids: Vec<u64> = net.nodes.iter().map(|n| n.id() as u64).collect();
    let positions = net.positions();
    let xs: Vec<f64> = positions.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = positions.iter().map(|p| p.y).collect();
    let ls: Vec<f64> = net.nodes.iter().map(|n| n.l()).collect();
    Ok(df!("id" => ids, "x" => xs, "y" => ys, "l" => ls)?)
}

/// Parquet for `.parquet` paths, CSV otherwise.
fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => {
            let mut file = file;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
    }
    tracing::info!(rows = df.height(), cols = df.width(), out = %out.display(), "frame written");
    Ok(())
}
