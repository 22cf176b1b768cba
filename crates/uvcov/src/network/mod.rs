//! Network-level coverage on the standard square lattice.
//!
//! Purpose
//! - `predicate`: Boolean point coverage, redundancy counts, sampling estimators.
//! - `overlap`: corner-gap `S1` and edge-overlap `S2` areas.
//! - `effective`: four-node and per-node effective coverage, efficiency,
//!   minimum-node solver.
//! - `deploy`: lattice generators and adjacency statistics.
//!
//! Every function is pure; radii and areas are validated on entry.

mod deploy;
mod effective;
mod overlap;
mod predicate;
mod types;

pub use deploy::{
    connectivity_stats, covering_spacing, four_node_cell, grid_network, minimum_node_grid,
    near_square_dims, neighbors, square_area_network, ConnectivityStats,
};
pub use effective::{
    coverage_efficiency, coverage_result, four_node_effective_coverage, minimum_nodes,
    minimum_nodes_with_efficiency, single_node_effective_coverage, CoverageResult,
    PUBLISHED_EFFICIENCY,
};
pub use overlap::{circle_overlap_area, corner_gap_area, edge_overlap_area, OverlapRegion};
pub use predicate::{
    count_covering_nodes, coverage_map, estimate_area_coverage_fraction,
    estimate_area_coverage_fraction_mc, is_point_covered, is_point_covered_by_network,
    redundancy_map,
};
pub use types::{NetworkKind, Node, Region, SquareNetwork};
