use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uvcov::footprint::{BeamAngles, FootprintModel};

/// Sweep run configuration (JSON). Missing fields fall back to the
/// 30°/50°/15° reference setup.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SweepCfg {
    /// Transmitter elevations (degrees) for the elevation sweep.
    pub theta1_values: Vec<f64>,
    /// Fixed transmitter elevation for the distance sweep (faceted model).
    pub theta1: f64,
    pub theta2: f64,
    pub phi1: f64,
    /// Fixed distance for the elevation sweep (m).
    pub distance: f64,
    /// Distances (m) for the footprint and node-count sweeps.
    pub distances: Vec<f64>,
    /// Region-of-interest area (m²) for the node-count sweep.
    pub s_roi: f64,
    /// `None` selects the disk model; `Some(k)` sums `k` identical faces.
    pub faces: Option<usize>,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            theta1_values: (1..=8).map(|k| 10.0 * k as f64).collect(),
            theta1: 30.0,
            theta2: 50.0,
            phi1: 15.0,
            distance: 100.0,
            distances: vec![50.0, 75.0, 75.1, 95.0, 100.0, 150.0],
            s_roi: 1e6,
            faces: None,
        }
    }
}

impl SweepCfg {
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn model(&self) -> Result<FootprintModel> {
        Ok(match self.faces {
            None => FootprintModel::Disk,
            Some(faces) => FootprintModel::Faceted {
                angles: BeamAngles::new(self.theta1, self.theta2, self.phi1)
                    .context("faceted model angles")?,
                faces,
            },
        })
    }
}
