//! Curated flat API for callers that want one import path.
//!
//! The channel model supplies `l`; the connectivity layer consumes node
//! positions and `minimum_nodes`; plotting consumes the `sweep` series.

// Footprints
pub use crate::footprint::{
    effective_range, reach_radius, single_side_total_area, BeamAngles, BeamGeometry,
    CoverageFootprint, DirectionalCoverage, Face, FootprintModel, SingleSideCoverage, Terminal,
};
// Point coverage and sampling
pub use crate::network::{
    count_covering_nodes, coverage_map, estimate_area_coverage_fraction,
    estimate_area_coverage_fraction_mc, is_point_covered, is_point_covered_by_network,
    redundancy_map, Node, Region,
};
// Overlap geometry and solver
pub use crate::network::{
    circle_overlap_area, corner_gap_area, coverage_efficiency, coverage_result, edge_overlap_area,
    four_node_effective_coverage, minimum_nodes, minimum_nodes_with_efficiency,
    single_node_effective_coverage, CoverageResult, OverlapRegion, PUBLISHED_EFFICIENCY,
};
// Deployments
pub use crate::network::{
    connectivity_stats, covering_spacing, four_node_cell, grid_network, minimum_node_grid,
    near_square_dims, neighbors, square_area_network, ConnectivityStats, NetworkKind,
    SquareNetwork,
};
// Sweeps
pub use crate::sweep::{sweep_distance, sweep_elevation, sweep_minimum_nodes, ElevationPoint};
