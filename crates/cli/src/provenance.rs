use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use uvcov::network::{ConnectivityStats, SquareNetwork};
use uvcov::CoverageCfg;

use crate::config::SweepCfg;

/// Metadata recorded next to every artifact the CLI writes.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

/// Everything a `deploy` run decided or measured.
pub struct DeployRun<'a> {
    pub layout: &'a str,
    pub width: f64,
    pub height: f64,
    pub network: &'a SquareNetwork,
    pub stats: &'a ConnectivityStats,
    pub fraction: f64,
    pub fraction_mc: f64,
    pub cfg: &'a CoverageCfg,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }

    /// Layout inputs, lattice shape, sampled coverage and adjacency summary.
    pub fn deploy(run: &DeployRun<'_>) -> Self {
        let net = run.network;
        Self::new(
            "deploy",
            json!({
                "layout": run.layout,
                "kind": net.kind.to_string(),
                "l": net.l,
                "width": run.width,
                "height": run.height,
                "nodes": net.len(),
                "dims": [net.dims.0, net.dims.1],
                "spacing": [net.spacing.0, net.spacing.1],
                "coverage": {
                    "grid_fraction": run.fraction,
                    "sample_density": run.cfg.sample_density,
                    "mc_fraction": run.fraction_mc,
                    "mc_samples": run.cfg.mc_samples,
                    "seed": run.cfg.seed,
                },
                "adjacency": {
                    "range": run.stats.range,
                    "min": run.stats.min,
                    "max": run.stats.max,
                    "mean": run.stats.mean,
                    "isolated": run.stats.isolated.len(),
                },
            }),
        )
    }

    /// The resolved sweep config plus the number of rows per series.
    pub fn sweep(cfg: &SweepCfg, rows: &[(&str, usize)]) -> Result<Self> {
        let series: serde_json::Map<String, Value> = rows
            .iter()
            .map(|(name, n)| (name.to_string(), json!(n)))
            .collect();
        Ok(Self::new(
            "sweep",
            json!({
                "config": serde_json::to_value(cfg)?,
                "rows": series,
            }),
        ))
    }
}

/// Write `<artifact>.provenance.json` next to a CSV/Parquet artifact.
///
/// The sidecar records the code revision, `uvcov` version, callsite, command
/// name, its parameters and the artifact path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "uvcov_version": uvcov::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
