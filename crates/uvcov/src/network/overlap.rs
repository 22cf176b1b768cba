//! Corner-gap and edge-overlap areas of the standard square lattice.
//!
//! Geometry (radius `l`, lattice spacing `3l`)
//! - Adjacent disks are `3l > 2l` apart and never intersect; the derived areas
//!   are pieces of the `l × l` squares of the cell decomposition, not disk
//!   intersections.
//! - `S1`: a corner `l × l` square minus the quarter disk of the node sitting
//!   at that corner, `(1 − π/4)·l²`.
//! - `S2`: an `l × l` square minus the union of the two quarter disks centred
//!   on two adjacent corners of it. The quarter disks meet at the apex
//!   `(l/2, √3·l/2)`; their intersection is half the symmetric lens of two
//!   radius-`l` disks at distance `l`, giving `(1 − π/6 − √3/4)·l²`.

use std::f64::consts::PI;

use crate::error::{check_length, DomainError};

/// Area of the intersection (lens) of two disks with radii `r1`, `r2` whose
/// centres are `d` apart.
pub fn circle_overlap_area(r1: f64, r2: f64, d: f64) -> Result<f64, DomainError> {
    check_length("r1", r1)?;
    check_length("r2", r2)?;
    if !(d.is_finite() && d >= 0.0) {
        return Err(DomainError::invalid(format!(
            "centre distance must be finite and >= 0 (got {d})"
        )));
    }
    if d >= r1 + r2 {
        return Ok(0.0);
    }
    if d <= (r1 - r2).abs() {
        let r = r1.min(r2);
        return Ok(PI * r * r);
    }
    let a1 = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).clamp(-1.0, 1.0);
    let a2 = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).clamp(-1.0, 1.0);
    let kite = ((r1 + r2 - d) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2))
        .max(0.0)
        .sqrt();
    Ok(r1 * r1 * a1.acos() + r2 * r2 * a2.acos() - 0.5 * kite)
}

#[inline]
fn quarter_disk(l: f64) -> f64 {
    0.25 * PI * l * l
}

/// `S1(l)`: uncovered corner area of one `l × l` corner square.
pub fn corner_gap_area(l: f64) -> Result<f64, DomainError> {
    check_length("l", l)?;
    Ok(l * l - quarter_disk(l))
}

/// `S2(l)`: area of an `l × l` square outside two quarter disks anchored at
/// adjacent corners.
pub fn edge_overlap_area(l: f64) -> Result<f64, DomainError> {
    check_length("l", l)?;
    let half_lens = 0.5 * circle_overlap_area(l, l, l)?;
    let union = 2.0 * quarter_disk(l) - half_lens;
    Ok(l * l - union)
}

/// The two overlap quantities of one standard cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlapRegion {
    pub l: f64,
    /// Corner gap `S1`.
    pub s1: f64,
    /// Edge overlap `S2`.
    pub s2: f64,
}

impl OverlapRegion {
    pub fn standard(l: f64) -> Result<Self, DomainError> {
        Ok(Self {
            l,
            s1: corner_gap_area(l)?,
            s2: edge_overlap_area(l)?,
        })
    }
}
