//! Tolerances and defaults for the coverage engine.
//!
//! Policy
//! - Defaults are fixed constants; `CoverageCfg` bundles the knobs a runner
//!   picks per invocation (angle guard, sample density, Monte-Carlo budget).

/// `|sin(θ1+θ2)|` below this is treated as a degenerate reach radius.
pub(crate) const SIN_EPS: f64 = 1e-12;
/// Spacing multiple of the coverage radius for the standard square lattice.
pub const STANDARD_SPACING_FACTOR: f64 = 3.0;
/// Largest node count the solver reports; `f64` counts above `2^53` are no
/// longer exact integers.
pub const MAX_NODE_COUNT: u64 = 1 << 53;
/// Largest network the deployment generators will materialize.
pub const MAX_GENERATED_NODES: usize = 1 << 24;
/// Maximum number of faces on a faceted (hexahedral) terminal.
pub const MAX_FACES: usize = 6;

/// Sampling and tolerance configuration.
#[derive(Clone, Copy, Debug)]
pub struct CoverageCfg {
    /// Denominator guard for `sin(θ1+θ2)`.
    pub eps_sin: f64,
    /// Grid samples per axis used by `estimate_area_coverage_fraction` callers.
    pub sample_density: usize,
    /// Monte-Carlo sample count for the randomized estimator.
    pub mc_samples: usize,
    /// Seed for the randomized estimator.
    pub seed: u64,
}

impl Default for CoverageCfg {
    fn default() -> Self {
        Self {
            eps_sin: SIN_EPS,
            sample_density: 200,
            mc_samples: 20_000,
            seed: 0x5545,
        }
    }
}
