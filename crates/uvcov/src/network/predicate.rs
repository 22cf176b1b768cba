//! Boolean (0/1) coverage: a point is covered iff it is strictly within `l`
//! of some node.
//!
//! The sampling estimators are the empirical cross-check for the closed-form
//! efficiency in `effective`. Each sample is independent.

use nalgebra::{DMatrix, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Node, Region};
use crate::error::DomainError;

/// `|point − node| < l` (the boundary circle itself is uncovered).
#[inline]
pub fn is_point_covered(point: Vector2<f64>, node: &Node) -> bool {
    (point - node.position()).norm() < node.l()
}

pub fn is_point_covered_by_network(point: Vector2<f64>, nodes: &[Node]) -> bool {
    nodes.iter().any(|n| is_point_covered(point, n))
}

/// Redundancy count at `point`.
pub fn count_covering_nodes(point: Vector2<f64>, nodes: &[Node]) -> usize {
    nodes.iter().filter(|n| is_point_covered(point, n)).count()
}

/// Fraction of `region` covered, from `sample_density²` cell-midpoint samples.
pub fn estimate_area_coverage_fraction(
    nodes: &[Node],
    region: &Region,
    sample_density: usize,
) -> Result<f64, DomainError> {
    if sample_density == 0 {
        return Err(DomainError::invalid("sample_density must be >= 1"));
    }
    let n = sample_density as f64;
    let dx = region.width() / n;
    let dy = region.height() / n;
    let mut covered = 0usize;
    for i in 0..sample_density {
        let x = region.x_min + (i as f64 + 0.5) * dx;
        for j in 0..sample_density {
            let y = region.y_min + (j as f64 + 0.5) * dy;
            if is_point_covered_by_network(Vector2::new(x, y), nodes) {
                covered += 1;
            }
        }
    }
    Ok(covered as f64 / (n * n))
}

/// Seeded Monte-Carlo variant of `estimate_area_coverage_fraction`.
pub fn estimate_area_coverage_fraction_mc(
    nodes: &[Node],
    region: &Region,
    samples: usize,
    seed: u64,
) -> Result<f64, DomainError> {
    if samples == 0 {
        return Err(DomainError::invalid("samples must be >= 1"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut covered = 0usize;
    for _ in 0..samples {
        let p = Vector2::new(
            rng.gen_range(region.x_min..region.x_max),
            rng.gen_range(region.y_min..region.y_max),
        );
        if is_point_covered_by_network(p, nodes) {
            covered += 1;
        }
    }
    Ok(covered as f64 / samples as f64)
}

/// Evenly spaced axis samples, endpoints included (midpoint when `n == 1`).
fn axis_samples(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.5 * (lo + hi)];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|k| lo + k as f64 * step).collect()
}

fn sample_map<T, F>(region: &Region, resolution: usize, f: F) -> Result<DMatrix<T>, DomainError>
where
    T: nalgebra::Scalar,
    F: Fn(Vector2<f64>) -> T,
{
    if resolution == 0 {
        return Err(DomainError::invalid("resolution must be >= 1"));
    }
    let xs = axis_samples(region.x_min, region.x_max, resolution);
    let ys = axis_samples(region.y_min, region.y_max, resolution);
    Ok(DMatrix::from_fn(resolution, resolution, |i, j| {
        f(Vector2::new(xs[j], ys[i]))
    }))
}

/// 0/1 coverage matrix; row index follows y, column index follows x.
pub fn coverage_map(
    nodes: &[Node],
    region: &Region,
    resolution: usize,
) -> Result<DMatrix<u8>, DomainError> {
    sample_map(region, resolution, |p| {
        u8::from(is_point_covered_by_network(p, nodes))
    })
}

/// Covering-node counts on the same lattice as `coverage_map`.
pub fn redundancy_map(
    nodes: &[Node],
    region: &Region,
    resolution: usize,
) -> Result<DMatrix<usize>, DomainError> {
    sample_map(region, resolution, |p| count_covering_nodes(p, nodes))
}
