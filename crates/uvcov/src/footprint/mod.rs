//! Node footprints: single transmitter face and whole-terminal aggregation.
//!
//! Purpose
//! - `single_side`: ground footprint of one face from beam angles and `l`.
//! - `terminal`: disk or faceted total footprint of one node, plus the named
//!   faces of a hexahedral terminal.
//!
//! Code cross-refs: `network::effective` consumes the disk area `π·l²`.

mod single_side;
mod terminal;

pub use single_side::{
    reach_radius, single_side_total_area, BeamAngles, BeamGeometry, SingleSideCoverage,
};
pub use terminal::{
    effective_range, CoverageFootprint, DirectionalCoverage, Face, FootprintModel, Terminal,
};

#[cfg(test)]
mod tests;
