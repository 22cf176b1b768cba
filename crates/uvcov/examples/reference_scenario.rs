//! Reference scenario: 30°/50° elevations, 15° divergence, l = 75.1 m.
//!
//! Prints the single-face breakdown, the standard-cell solver outputs and a
//! sampled cross-check of the four-node cell against the closed form.

use uvcov::footprint::{BeamAngles, SingleSideCoverage};
use uvcov::network::{
    coverage_result, estimate_area_coverage_fraction, four_node_cell, grid_network,
    minimum_node_grid,
};
use uvcov::Vec2;

fn main() {
    let l = 75.1;
    let angles = BeamAngles::new(30.0, 50.0, 15.0).expect("valid angles");
    let side = SingleSideCoverage::compute(angles, l).expect("single side");
    let g = side.geometry();
    println!(
        "single_side R1={:.2} triangle={:.2} half_ellipse={:.2} total={:.2}",
        side.r1, side.triangle_area, side.half_ellipse_area, side.total_area
    );
    println!(
        "beam TO'={:.2} TA'={:.2} O'D'={:.2} O'A'={:.2} B'D'={:.2}",
        g.to_prime, g.ta_prime, g.od_prime, g.oa_prime, g.bd_prime
    );

    let r = coverage_result(l, 1e6).expect("solver");
    println!(
        "S1={:.2} S2={:.2} S4_eff={:.0} S_eff={:.0} eta={:.4} n_min={}",
        r.overlap.s1,
        r.overlap.s2,
        r.four_node_effective,
        r.single_node_effective,
        r.efficiency,
        r.minimum_nodes
    );

    let cell = four_node_cell(l, Vec2::new(0.0, 0.0)).expect("cell");
    let frac = estimate_area_coverage_fraction(&cell.nodes, &cell.bounds, 400).expect("sample");
    println!(
        "four_node_cell sampled_disk_share={:.4} (quarter disks only: {:.4})",
        frac,
        std::f64::consts::PI / 9.0
    );

    let grid = grid_network(1000.0, 1000.0, 95.0).expect("grid");
    let min = minimum_node_grid(1e6, 95.0).expect("min grid");
    println!("grid_1km_l95 nodes={} min_nodes={}", grid.len(), min.len());
}
