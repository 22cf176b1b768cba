//! Error and warning types shared by the footprint and network modules.
//!
//! - `DomainError`: input outside the mathematically valid range. Always fatal
//!   for the call that raised it; never clamped.
//! - `ValidityWarning`: the input is valid but falls outside the sub-range in
//!   which a closed-form term is meaningful. Attached to results, not raised.

use std::fmt;

/// Input outside the valid domain of a coverage computation.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainError {
    /// A length (radius, spacing, extent) is `<= 0` or not finite.
    NonPositiveLength { name: &'static str, value: f64 },
    /// An area (region of interest, target footprint) is `<= 0` or not finite.
    NonPositiveArea { name: &'static str, value: f64 },
    /// An angle (degrees) lies outside its open interval `(lo, hi)`.
    AngleOutOfRange {
        name: &'static str,
        value: f64,
        lo: f64,
        hi: f64,
    },
    /// Numerically degenerate geometry (e.g. `sin(θ1+θ2) ≈ 0`).
    Degenerate { reason: String },
    /// Any other invalid parameter (sample counts, face counts, regions).
    InvalidParams { reason: String },
}

impl DomainError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLength { name, value } => {
                write!(f, "length `{name}` must be finite and > 0 (got {value})")
            }
            Self::NonPositiveArea { name, value } => {
                write!(f, "area `{name}` must be finite and > 0 (got {value})")
            }
            Self::AngleOutOfRange {
                name,
                value,
                lo,
                hi,
            } => write!(
                f,
                "angle `{name}` = {value}° outside the open interval ({lo}°, {hi}°)"
            ),
            Self::Degenerate { reason } => write!(f, "degenerate geometry: {reason}"),
            Self::InvalidParams { reason } => write!(f, "invalid parameters: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Non-fatal annotation: a closed-form sub-area left its validity range and
/// was replaced by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidityWarning {
    /// `cos θ1 − cos(θ1 + φ1/2)` evaluated negative; the half-ellipse area is 0.
    NegativeEllipseTerm { bracket: f64 },
}

impl fmt::Display for ValidityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeEllipseTerm { bracket } => write!(
                f,
                "ellipse term cos θ1 − cos(θ1+φ1/2) = {bracket:.3e} < 0; half-ellipse area set to 0"
            ),
        }
    }
}

/// Reject non-finite or non-positive lengths.
#[inline]
pub(crate) fn check_length(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositiveLength { name, value })
    }
}

/// Reject non-finite or non-positive areas.
#[inline]
pub(crate) fn check_area(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositiveArea { name, value })
    }
}

/// Reject angles (degrees) outside the open interval `(lo, hi)`.
#[inline]
pub(crate) fn check_angle(
    name: &'static str,
    value: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, DomainError> {
    if value.is_finite() && value > lo && value < hi {
        Ok(value)
    } else {
        Err(DomainError::AngleOutOfRange {
            name,
            value,
            lo,
            hi,
        })
    }
}

/// Convert a rounded-up count to `usize`, rejecting values above `limit`.
pub(crate) fn check_count(
    name: &'static str,
    value: f64,
    limit: u64,
) -> Result<usize, DomainError> {
    let cap = (limit as f64).min(usize::MAX as f64);
    if value.is_finite() && value >= 0.0 && value <= cap {
        Ok(value as usize)
    } else {
        Err(DomainError::invalid(format!(
            "`{name}` = {value:e} exceeds the supported limit of {limit}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_area_checks_reject_nan_zero_negative() {
        assert!(check_length("l", 1.0).is_ok());
        assert!(check_length("l", 0.0).is_err());
        assert!(check_length("l", -3.0).is_err());
        assert!(check_length("l", f64::NAN).is_err());
        assert!(check_length("l", f64::INFINITY).is_err());
        assert!(check_area("s_roi", 1e6).is_ok());
        assert!(matches!(
            check_area("s_roi", 0.0),
            Err(DomainError::NonPositiveArea { name: "s_roi", .. })
        ));
    }

    #[test]
    fn angle_check_is_open_interval() {
        assert!(check_angle("theta1", 0.0, 0.0, 90.0).is_err());
        assert!(check_angle("theta1", 90.0, 0.0, 90.0).is_err());
        assert!(check_angle("theta1", 45.0, 0.0, 90.0).is_ok());
        let msg = check_angle("phi1", 200.0, 0.0, 180.0)
            .unwrap_err()
            .to_string();
        assert!(msg.contains("phi1"));
    }

    #[test]
    fn count_check_rejects_values_beyond_limit() {
        assert_eq!(check_count("n", 64.0, 100).unwrap(), 64);
        assert_eq!(check_count("n", 100.0, 100).unwrap(), 100);
        assert!(check_count("n", 101.0, 100).is_err());
        assert!(check_count("n", 1e300, u64::MAX).is_err());
        assert!(check_count("n", f64::NAN, 100).is_err());
        assert!(check_count("n", -1.0, 100).is_err());
    }
}
