//! Ground footprint of one transmitter face (triangle + half-ellipse).
//!
//! Model
//! - The beam leaves the face at elevation `θ1` with full divergence `φ1`; the
//!   receiver looks up at elevation `θ2`. With communication distance `l` the
//!   ground reach is `R1 = l·sin θ2 / sin(θ1+θ2)`.
//! - The footprint is the triangle `B′TD′` (apex at the transmitter foot) plus
//!   half of the ellipse `B′C′D′A′` capping it.
//!
//! Code cross-refs: `terminal::CoverageFootprint`, `error::ValidityWarning`.

use std::f64::consts::FRAC_PI_2;

use crate::cfg::SIN_EPS;
use crate::error::{check_angle, check_length, DomainError, ValidityWarning};

/// Validated beam angles in degrees.
///
/// Invariants:
/// - `0 < θ1, θ2 < 90`, `0 < φ1 < 180`.
/// - `sin(θ1+θ2)` is above the degeneracy threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamAngles {
    theta1: f64,
    theta2: f64,
    phi1: f64,
}

impl BeamAngles {
    pub fn new(theta1: f64, theta2: f64, phi1: f64) -> Result<Self, DomainError> {
        Self::new_with_eps(theta1, theta2, phi1, SIN_EPS)
    }

    /// Same as `new` with an explicit guard for `sin(θ1+θ2)`.
    pub fn new_with_eps(
        theta1: f64,
        theta2: f64,
        phi1: f64,
        eps_sin: f64,
    ) -> Result<Self, DomainError> {
        check_angle("theta1", theta1, 0.0, 90.0)?;
        check_angle("theta2", theta2, 0.0, 90.0)?;
        check_angle("phi1", phi1, 0.0, 180.0)?;
        let s = (theta1 + theta2).to_radians().sin();
        if s.abs() <= eps_sin {
            return Err(DomainError::degenerate(format!(
                "sin(theta1 + theta2) = {s:.3e} is numerically zero"
            )));
        }
        Ok(Self {
            theta1,
            theta2,
            phi1,
        })
    }

    #[inline]
    pub fn theta1(&self) -> f64 {
        self.theta1
    }
    #[inline]
    pub fn theta2(&self) -> f64 {
        self.theta2
    }
    #[inline]
    pub fn phi1(&self) -> f64 {
        self.phi1
    }

    /// `R1 / l = sin θ2 / sin(θ1+θ2)`; positive and finite by construction.
    #[inline]
    pub fn reach_factor(&self) -> f64 {
        self.theta2.to_radians().sin() / (self.theta1 + self.theta2).to_radians().sin()
    }

    #[inline]
    fn half_divergence(&self) -> f64 {
        (self.phi1 / 2.0).to_radians()
    }
}

/// Ground-projection lengths of the beam cone (meters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamGeometry {
    pub r1: f64,
    /// TO′: transmitter foot to ellipse centre.
    pub to_prime: f64,
    /// TA′: transmitter foot to the near vertex of the ellipse.
    pub ta_prime: f64,
    /// O′D′: beam radius at the centre (semi-axis across the beam).
    pub od_prime: f64,
    /// O′A′: semi-axis along the beam.
    pub oa_prime: f64,
    /// B′D′: chord across the beam through the centre.
    pub bd_prime: f64,
}

/// Single-face footprint. All fields are pure functions of `angles` and `l`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleSideCoverage {
    pub angles: BeamAngles,
    pub l: f64,
    pub r1: f64,
    pub triangle_area: f64,
    pub half_ellipse_area: f64,
    pub total_area: f64,
    /// Set when the half-ellipse term left its validity range (area is then 0).
    pub warning: Option<ValidityWarning>,
}

impl SingleSideCoverage {
    pub fn compute(angles: BeamAngles, l: f64) -> Result<Self, DomainError> {
        check_length("l", l)?;
        let r1 = reach_radius(&angles, l)?;
        let th1 = angles.theta1.to_radians();
        let half_phi = angles.half_divergence();
        let triangle_area = r1 * r1 * th1.cos() * half_phi.tan();
        let (half_ellipse_area, warning) = half_ellipse_area(r1, th1, half_phi);
        if let Some(w) = warning {
            tracing::debug!(
                theta1 = angles.theta1,
                theta2 = angles.theta2,
                phi1 = angles.phi1,
                l,
                %w,
                "single-side validity warning"
            );
        }
        Ok(Self {
            angles,
            l,
            r1,
            triangle_area,
            half_ellipse_area,
            total_area: triangle_area + half_ellipse_area,
            warning,
        })
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.warning.is_none()
    }

    /// Full ellipse area `π·O′D′·O′A′` (twice the half-ellipse; 0 when flagged).
    #[inline]
    pub fn full_ellipse_area(&self) -> f64 {
        2.0 * self.half_ellipse_area
    }

    pub fn geometry(&self) -> BeamGeometry {
        let th1 = self.angles.theta1.to_radians();
        let half_phi = self.angles.half_divergence();
        let r1 = self.r1;
        BeamGeometry {
            r1,
            to_prime: r1 * th1.cos(),
            ta_prime: r1 * (th1 + half_phi).cos(),
            od_prime: r1 * half_phi.tan(),
            oa_prime: r1 * (th1.cos() - (th1 + half_phi).cos()),
            bd_prime: 2.0 * r1 * half_phi.tan(),
        }
    }
}

/// Ground reach `R1 = l·sin θ2 / sin(θ1+θ2)`.
pub fn reach_radius(angles: &BeamAngles, l: f64) -> Result<f64, DomainError> {
    check_length("l", l)?;
    let r1 = l * angles.reach_factor();
    if !(r1.is_finite() && r1 > 0.0) {
        return Err(DomainError::degenerate(format!(
            "reach radius R1 = {r1} is not positive and finite"
        )));
    }
    Ok(r1)
}

/// Half-ellipse area `(π/2)·R1²·tan(φ1/2)·[cos θ1 − cos(θ1+φ1/2)]` (radians in).
///
/// A negative bracket yields `(0, Some(warning))`.
pub(crate) fn half_ellipse_area(
    r1: f64,
    theta1: f64,
    half_phi: f64,
) -> (f64, Option<ValidityWarning>) {
    let bracket = theta1.cos() - (theta1 + half_phi).cos();
    if bracket < 0.0 {
        return (0.0, Some(ValidityWarning::NegativeEllipseTerm { bracket }));
    }
    (FRAC_PI_2 * r1 * r1 * half_phi.tan() * bracket, None)
}

/// Convenience: validate the angles and return the total single-face area.
pub fn single_side_total_area(
    theta1: f64,
    theta2: f64,
    phi1: f64,
    l: f64,
) -> Result<f64, DomainError> {
    let angles = BeamAngles::new(theta1, theta2, phi1)?;
    Ok(SingleSideCoverage::compute(angles, l)?.total_area)
}
