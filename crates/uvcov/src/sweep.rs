//! Parameter sweeps producing `(x, y)` series for plotting consumers.
//!
//! Sweeps never stop on a `ValidityWarning`; each point carries its own flag.
//! A `DomainError` on any point aborts the sweep.

use crate::error::{DomainError, ValidityWarning};
use crate::footprint::{BeamAngles, FootprintModel, SingleSideCoverage};
use crate::network::minimum_nodes;

/// `(l, footprint area)` for each distance.
pub fn sweep_distance(
    l_values: &[f64],
    model: FootprintModel,
) -> Result<Vec<(f64, f64)>, DomainError> {
    l_values
        .iter()
        .map(|&l| Ok((l, model.footprint(l)?.area())))
        .collect()
}

/// One point of an elevation sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationPoint {
    pub theta1: f64,
    pub area: f64,
    pub warning: Option<ValidityWarning>,
}

/// Single-side total area as `θ1` varies with `θ2`, `φ1`, `l` held fixed.
pub fn sweep_elevation(
    theta1_values: &[f64],
    theta2: f64,
    phi1: f64,
    l: f64,
) -> Result<Vec<ElevationPoint>, DomainError> {
    let points = theta1_values
        .iter()
        .map(|&theta1| {
            let angles = BeamAngles::new(theta1, theta2, phi1)?;
            let cov = SingleSideCoverage::compute(angles, l)?;
            Ok(ElevationPoint {
                theta1,
                area: cov.total_area,
                warning: cov.warning,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;
    let flagged = points.iter().filter(|p| p.warning.is_some()).count();
    if flagged > 0 {
        tracing::info!(flagged, total = points.len(), "elevation sweep has flagged points");
    }
    Ok(points)
}

/// `(l, n_min)` for a fixed region area.
pub fn sweep_minimum_nodes(
    s_roi: f64,
    l_values: &[f64],
) -> Result<Vec<(f64, usize)>, DomainError> {
    l_values
        .iter()
        .map(|&l| Ok((l, minimum_nodes(s_roi, l)?)))
        .collect()
}
