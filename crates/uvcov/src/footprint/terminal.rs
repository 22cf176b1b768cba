//! Node footprint aggregation: isotropic disk or faceted (up to six faces).
//!
//! The two models are alternatives for the same node; a computation picks one
//! via `FootprintModel` and never mixes them.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use super::single_side::{BeamAngles, SingleSideCoverage};
use crate::cfg::MAX_FACES;
use crate::error::{check_area, check_length, DomainError, ValidityWarning};

/// One face of a hexahedral terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Bottom,
    North,
    South,
    East,
    West,
}

impl Face {
    pub const ALL: [Face; MAX_FACES] = [
        Face::Top,
        Face::Bottom,
        Face::North,
        Face::South,
        Face::East,
        Face::West,
    ];

    /// Azimuth of the face normal in degrees (north = 0, clockwise).
    pub fn azimuth_deg(self) -> f64 {
        match self {
            Face::Top | Face::North => 0.0,
            Face::Bottom | Face::South => 180.0,
            Face::East => 90.0,
            Face::West => 270.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::North => "north",
            Face::South => "south",
            Face::East => "east",
            Face::West => "west",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Total ground footprint of one node.
#[derive(Clone, Debug, PartialEq)]
pub enum CoverageFootprint {
    /// Isotropic disk of radius `l`.
    Disk { l: f64, area: f64 },
    /// Sum of independent single-face footprints (1..=6 faces).
    Faceted {
        sides: Vec<SingleSideCoverage>,
        area: f64,
    },
}

impl CoverageFootprint {
    pub fn disk(l: f64) -> Result<Self, DomainError> {
        check_length("l", l)?;
        Ok(Self::Disk {
            l,
            area: PI * l * l,
        })
    }

    pub fn faceted(sides: Vec<SingleSideCoverage>) -> Result<Self, DomainError> {
        if sides.is_empty() || sides.len() > MAX_FACES {
            return Err(DomainError::invalid(format!(
                "faceted footprint needs 1..={MAX_FACES} faces, got {}",
                sides.len()
            )));
        }
        let area = sides.iter().map(|s| s.total_area).sum();
        Ok(Self::Faceted { sides, area })
    }

    #[inline]
    pub fn area(&self) -> f64 {
        match self {
            Self::Disk { area, .. } | Self::Faceted { area, .. } => *area,
        }
    }

    /// Validity warnings carried by the faces (always empty for the disk).
    pub fn warnings(&self) -> Vec<ValidityWarning> {
        match self {
            Self::Disk { .. } => Vec::new(),
            Self::Faceted { sides, .. } => sides.iter().filter_map(|s| s.warning).collect(),
        }
    }
}

/// Footprint model selector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FootprintModel {
    Disk,
    Faceted { angles: BeamAngles, faces: usize },
}

impl FootprintModel {
    pub fn footprint(&self, l: f64) -> Result<CoverageFootprint, DomainError> {
        match *self {
            FootprintModel::Disk => CoverageFootprint::disk(l),
            FootprintModel::Faceted { angles, faces } => {
                if faces == 0 || faces > MAX_FACES {
                    return Err(DomainError::invalid(format!(
                        "faceted footprint needs 1..={MAX_FACES} faces, got {faces}"
                    )));
                }
                let side = SingleSideCoverage::compute(angles, l)?;
                CoverageFootprint::faceted(vec![side; faces])
            }
        }
    }
}

/// Coverage of one face pointed in a named direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalCoverage {
    pub face: Face,
    pub azimuth_deg: f64,
    pub area: f64,
    pub l: f64,
    /// Ground point at reach `R1` along the face azimuth (x east, y north).
    pub reach_point: Vector2<f64>,
}

/// Six-faced terminal: identical beam settings on every face.
#[derive(Clone, Copy, Debug)]
pub struct Terminal {
    pub angles: BeamAngles,
    pub position: Vector2<f64>,
}

impl Terminal {
    pub fn new(angles: BeamAngles, position: Vector2<f64>) -> Self {
        Self { angles, position }
    }

    #[inline]
    pub fn side_coverage(&self, l: f64) -> Result<SingleSideCoverage, DomainError> {
        SingleSideCoverage::compute(self.angles, l)
    }

    pub fn directional_coverage(
        &self,
        l: f64,
        face: Face,
    ) -> Result<DirectionalCoverage, DomainError> {
        let side = self.side_coverage(l)?;
        let az = face.azimuth_deg().to_radians();
        Ok(DirectionalCoverage {
            face,
            azimuth_deg: face.azimuth_deg(),
            area: side.total_area,
            l,
            reach_point: self.position + side.r1 * Vector2::new(az.sin(), az.cos()),
        })
    }

    pub fn all_faces(&self, l: f64) -> Result<Vec<DirectionalCoverage>, DomainError> {
        Face::ALL
            .iter()
            .map(|&face| self.directional_coverage(l, face))
            .collect()
    }

    /// Disk approximation used for network planning.
    #[inline]
    pub fn omnidirectional(&self, l: f64) -> Result<CoverageFootprint, DomainError> {
        CoverageFootprint::disk(l)
    }

    /// Sum over all six faces.
    pub fn faceted(&self, l: f64) -> Result<CoverageFootprint, DomainError> {
        FootprintModel::Faceted {
            angles: self.angles,
            faces: MAX_FACES,
        }
        .footprint(l)
    }
}

/// Radius whose disk footprint equals `target_area`: `sqrt(A/π)`.
pub fn effective_range(target_area: f64) -> Result<f64, DomainError> {
    check_area("target_area", target_area)?;
    Ok((target_area / PI).sqrt())
}
