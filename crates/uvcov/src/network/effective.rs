//! Effective coverage of the standard square lattice and the minimum-node
//! solver built on it.
//!
//! - `four_node_effective_coverage(l) = 9l² − 4·S1 − 4·S2`
//! - `single_node_effective_coverage(l) = ½·π·l² + (S1 − S2)`
//! - `coverage_efficiency(l) = single_node_effective_coverage(l) / (π·l²)`;
//!   every term is a multiple of `l²`, so the ratio is a pure number
//!   (`1/2 + (√3/4 − π/12)/π ≈ 0.5545`).
//! - `minimum_nodes(S_ROI, l) = ⌈S_ROI / (η·π·l²)⌉`

use std::f64::consts::PI;

use super::overlap::OverlapRegion;
use crate::cfg::{MAX_NODE_COUNT, STANDARD_SPACING_FACTOR};
use crate::error::{check_area, check_count, check_length, DomainError};

/// Published four-digit value of the coverage efficiency.
pub const PUBLISHED_EFFICIENCY: f64 = 0.5545;

/// Covered area of one `3l × 3l` cell with four half-shared corner nodes.
pub fn four_node_effective_coverage(l: f64) -> Result<f64, DomainError> {
    let ov = OverlapRegion::standard(l)?;
    let side = STANDARD_SPACING_FACTOR * l;
    Ok(side * side - 4.0 * ov.s1 - 4.0 * ov.s2)
}

/// Marginal area one node adds to the lattice, net of gaps and overlaps.
pub fn single_node_effective_coverage(l: f64) -> Result<f64, DomainError> {
    let ov = OverlapRegion::standard(l)?;
    Ok(0.5 * PI * l * l + (ov.s1 - ov.s2))
}

/// `η_eff(l)`; independent of `l` up to rounding.
pub fn coverage_efficiency(l: f64) -> Result<f64, DomainError> {
    let s_eff = single_node_effective_coverage(l)?;
    Ok(s_eff / (PI * l * l))
}

/// Minimum node count for a region of area `s_roi` with coverage radius `l`.
pub fn minimum_nodes(s_roi: f64, l: f64) -> Result<usize, DomainError> {
    let eta = coverage_efficiency(l)?;
    minimum_nodes_with_efficiency(s_roi, l, eta)
}

/// `⌈S_ROI / (η·π·l²)⌉` for a caller-chosen efficiency `0 < η ≤ 1`.
///
/// Counts above `MAX_NODE_COUNT` are rejected as `InvalidParams`.
pub fn minimum_nodes_with_efficiency(s_roi: f64, l: f64, eta: f64) -> Result<usize, DomainError> {
    check_area("s_roi", s_roi)?;
    check_length("l", l)?;
    if !(eta.is_finite() && eta > 0.0 && eta <= 1.0) {
        return Err(DomainError::invalid(format!(
            "coverage efficiency must lie in (0, 1] (got {eta})"
        )));
    }
    let per_node = eta * PI * l * l;
    check_count("minimum_nodes", (s_roi / per_node).ceil(), MAX_NODE_COUNT)
}

/// Every solver output for one radius and region area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverageResult {
    pub l: f64,
    /// Raw disk area `π·l²`.
    pub disk_area: f64,
    pub overlap: OverlapRegion,
    /// Side of the standard cell, `3l`.
    pub cell_side: f64,
    pub four_node_effective: f64,
    pub single_node_effective: f64,
    pub efficiency: f64,
    pub s_roi: f64,
    pub minimum_nodes: usize,
    /// `minimum_nodes · single_node_effective`; at least `s_roi`.
    pub effective_total: f64,
}

pub fn coverage_result(l: f64, s_roi: f64) -> Result<CoverageResult, DomainError> {
    let overlap = OverlapRegion::standard(l)?;
    let single_node_effective = single_node_effective_coverage(l)?;
    let disk_area = PI * l * l;
    let efficiency = single_node_effective / disk_area;
    let minimum_nodes = minimum_nodes_with_efficiency(s_roi, l, efficiency)?;
    Ok(CoverageResult {
        l,
        disk_area,
        overlap,
        cell_side: STANDARD_SPACING_FACTOR * l,
        four_node_effective: four_node_effective_coverage(l)?,
        single_node_effective,
        efficiency,
        s_roi,
        minimum_nodes,
        effective_total: minimum_nodes as f64 * single_node_effective,
    })
}
