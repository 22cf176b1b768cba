//! Square-lattice deployments and descriptive adjacency statistics.
//!
//! Anchor conventions
//! - `four_node_cell`: `origin` is the bottom-left corner of the `3l` square;
//!   nodes are ordered bottom-left, bottom-right, top-left, top-right.
//! - `grid_network`: the rectangle is `[0, width] × [0, height]`; the outermost
//!   lattice lines lie on its edges. Node order is column-major (x outer).
//! - `minimum_node_grid`: the region is a `√S_ROI` square at the origin and
//!   nodes sit at cell centres, column-major, truncated to `n`.
//!
//! Rounding policy: lattice counts always round up.

use nalgebra::Vector2;

use super::effective::{minimum_nodes, single_node_effective_coverage};
use super::types::{NetworkKind, Node, Region, SquareNetwork};
use crate::cfg::{MAX_GENERATED_NODES, STANDARD_SPACING_FACTOR};
use crate::error::{check_area, check_count, check_length, DomainError};

/// One standard `3l × 3l` cell.
pub fn four_node_cell(l: f64, origin: Vector2<f64>) -> Result<SquareNetwork, DomainError> {
    check_length("l", l)?;
    let side = STANDARD_SPACING_FACTOR * l;
    let corners = [
        Vector2::new(0.0, 0.0),
        Vector2::new(side, 0.0),
        Vector2::new(0.0, side),
        Vector2::new(side, side),
    ];
    let nodes = corners
        .iter()
        .enumerate()
        .map(|(k, c)| Node::new(k, origin + c, l))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SquareNetwork {
        kind: NetworkKind::FourNodeCell,
        nodes,
        l,
        spacing: (side, side),
        dims: (2, 2),
        bounds: Region::new(origin.x, origin.x + side, origin.y, origin.y + side)?,
    })
}

/// Target lattice spacing for full coverage: `sqrt(single_node_effective_coverage(l))`.
///
/// This is ≈ 1.32·l, below the √2·l bound at which a square lattice of
/// radius-`l` disks stops covering the plane.
pub fn covering_spacing(l: f64) -> Result<f64, DomainError> {
    Ok(single_node_effective_coverage(l)?.sqrt())
}

/// Lattice covering `[0, width] × [0, height]`.
///
/// Fails with `InvalidParams` above `MAX_GENERATED_NODES` nodes.
pub fn grid_network(width: f64, height: f64, l: f64) -> Result<SquareNetwork, DomainError> {
    let bounds = Region::from_size(width, height)?;
    let target = covering_spacing(l)?;
    let limit = MAX_GENERATED_NODES as u64;
    let nx = check_count("grid columns", (width / target).ceil() + 1.0, limit)?;
    let ny = check_count("grid rows", (height / target).ceil() + 1.0, limit)?;
    let total = nx
        .checked_mul(ny)
        .filter(|&n| n <= MAX_GENERATED_NODES)
        .ok_or_else(|| {
            DomainError::invalid(format!(
                "{nx} × {ny} grid exceeds {MAX_GENERATED_NODES} nodes"
            ))
        })?;
    let sx = width / (nx - 1) as f64;
    let sy = height / (ny - 1) as f64;
    let mut nodes = Vec::with_capacity(total);
    for i in 0..nx {
        for j in 0..ny {
            let p = Vector2::new(i as f64 * sx, j as f64 * sy);
            nodes.push(Node::new(nodes.len(), p, l)?);
        }
    }
    tracing::debug!(nx, ny, sx, sy, nodes = nodes.len(), "grid network");
    Ok(SquareNetwork {
        kind: NetworkKind::Grid,
        nodes,
        l,
        spacing: (sx, sy),
        dims: (nx, ny),
        bounds,
    })
}

/// Grid over a square of the given area.
pub fn square_area_network(area: f64, l: f64) -> Result<SquareNetwork, DomainError> {
    let side = check_area("area", area)?.sqrt();
    grid_network(side, side, l)
}

/// `(cols, rows)` with `cols·rows >= n` and `cols − rows ∈ {0, 1}`.
pub fn near_square_dims(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let mut cols = (n as f64).sqrt() as usize;
    // cols² overflowing usize already exceeds n
    while cols.checked_mul(cols).is_some_and(|sq| sq < n) {
        cols += 1;
    }
    let rows = n.div_ceil(cols);
    (cols, rows)
}

/// `minimum_nodes(S_ROI, l)` nodes on a near-square grid.
pub fn minimum_node_grid(s_roi: f64, l: f64) -> Result<SquareNetwork, DomainError> {
    let n = minimum_nodes(s_roi, l)?;
    if n > MAX_GENERATED_NODES {
        return Err(DomainError::invalid(format!(
            "{n} nodes exceeds the generator limit of {MAX_GENERATED_NODES}"
        )));
    }
    let side = s_roi.sqrt();
    let (cols, rows) = near_square_dims(n);
    let sx = side / cols as f64;
    let sy = side / rows as f64;
    let mut nodes = Vec::with_capacity(n);
    'fill: for i in 0..cols {
        for j in 0..rows {
            if nodes.len() == n {
                break 'fill;
            }
            let p = Vector2::new((i as f64 + 0.5) * sx, (j as f64 + 0.5) * sy);
            nodes.push(Node::new(nodes.len(), p, l)?);
        }
    }
    tracing::debug!(n, cols, rows, "minimum-node grid");
    Ok(SquareNetwork {
        kind: NetworkKind::MinimumNodes,
        nodes,
        l,
        spacing: (sx, sy),
        dims: (cols, rows),
        bounds: Region::from_size(side, side)?,
    })
}

/// Indices of nodes within `range` (inclusive) of `nodes[index]`.
pub fn neighbors(nodes: &[Node], index: usize, range: f64) -> Result<Vec<usize>, DomainError> {
    check_length("range", range)?;
    let center = nodes
        .get(index)
        .ok_or_else(|| {
            DomainError::invalid(format!("node index {index} out of bounds ({})", nodes.len()))
        })?
        .position();
    Ok(nodes
        .iter()
        .enumerate()
        .filter(|(k, n)| *k != index && (n.position() - center).norm() <= range)
        .map(|(k, _)| k)
        .collect())
}

/// Neighbour-count statistics; descriptive only.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectivityStats {
    pub range: f64,
    pub neighbor_counts: Vec<usize>,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// Ids of nodes without any neighbour.
    pub isolated: Vec<usize>,
}

pub fn connectivity_stats(nodes: &[Node], range: f64) -> Result<ConnectivityStats, DomainError> {
    check_length("range", range)?;
    let neighbor_counts = (0..nodes.len())
        .map(|k| neighbors(nodes, k, range).map(|v| v.len()))
        .collect::<Result<Vec<_>, _>>()?;
    let min = neighbor_counts.iter().copied().min().unwrap_or(0);
    let max = neighbor_counts.iter().copied().max().unwrap_or(0);
    let mean = if neighbor_counts.is_empty() {
        0.0
    } else {
        neighbor_counts.iter().sum::<usize>() as f64 / neighbor_counts.len() as f64
    };
    let isolated = nodes
        .iter()
        .zip(&neighbor_counts)
        .filter(|(_, c)| **c == 0)
        .map(|(n, _)| n.id())
        .collect();
    Ok(ConnectivityStats {
        range,
        neighbor_counts,
        min,
        max,
        mean,
        isolated,
    })
}
