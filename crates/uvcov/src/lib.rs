//! Coverage geometry for square-lattice UV optical networks.
//!
//! A node's reach is a single scalar, the coverage radius `l`, supplied by an
//! external channel model. From it this crate derives single-face ground
//! footprints, whole-node footprints, overlap/gap areas of the standard
//! `3l` lattice, the coverage efficiency `η_eff ≈ 0.5545`, minimum node counts
//! and lattice placements.
//!
//! API Policy
//! - Everything is a pure function of its inputs; nothing is cached.
//! - Inputs are validated on entry and rejected with `DomainError`, never
//!   clamped. Out-of-range closed-form terms surface as `ValidityWarning`.

pub mod api;
pub mod cfg;
pub mod error;
pub mod footprint;
pub mod network;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::CoverageCfg;
pub use error::{DomainError, ValidityWarning};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{DomainError, ValidityWarning};
    pub use crate::footprint::{BeamAngles, CoverageFootprint, FootprintModel, SingleSideCoverage};
    pub use crate::network::{
        coverage_efficiency, coverage_result, four_node_cell, grid_network, is_point_covered,
        is_point_covered_by_network, minimum_node_grid, minimum_nodes, CoverageResult, Node,
        Region, SquareNetwork,
    };
    pub use nalgebra::Vector2 as Vec2;
}
