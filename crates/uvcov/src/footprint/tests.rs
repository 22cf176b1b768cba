use super::single_side::half_ellipse_area;
use super::*;
use crate::error::{DomainError, ValidityWarning};
use nalgebra::vector;
use proptest::prelude::*;
use std::f64::consts::PI;

fn total(theta1: f64, theta2: f64, phi1: f64, l: f64) -> f64 {
    single_side_total_area(theta1, theta2, phi1, l).unwrap()
}

#[test]
fn reference_case_l100_30_50_15() {
    let angles = BeamAngles::new(30.0, 50.0, 15.0).unwrap();
    let cov = SingleSideCoverage::compute(angles, 100.0).unwrap();
    // R1 = 100 sin50 / sin80
    assert!((cov.r1 - 77.786_19).abs() < 1e-4);
    assert!((cov.triangle_area - 689.866).abs() < 1e-2);
    assert!((cov.half_ellipse_area - 90.933).abs() < 1e-2);
    assert!((cov.total_area - 780.799).abs() / 780.799 < 1e-4);
    assert!(cov.is_valid());
    assert!((cov.full_ellipse_area() - 2.0 * cov.half_ellipse_area).abs() < 1e-12);
}

#[test]
fn experimental_distance_scales_as_l_squared() {
    let a = total(30.0, 50.0, 15.0, 100.0);
    let b = total(30.0, 50.0, 15.0, 75.1);
    let ratio = (75.1f64 / 100.0).powi(2);
    assert!((b - a * ratio).abs() < 1e-9 * a);
    assert!((b - 440.371).abs() < 1e-2);
}

#[test]
fn geometry_lengths_match_decomposition() {
    let cov = SingleSideCoverage::compute(BeamAngles::new(30.0, 50.0, 15.0).unwrap(), 100.0)
        .unwrap();
    let g = cov.geometry();
    // triangle = ½·B′D′·TO′
    assert!((0.5 * g.bd_prime * g.to_prime - cov.triangle_area).abs() < 1e-9);
    // full ellipse = π·O′D′·O′A′
    assert!((PI * g.od_prime * g.oa_prime - cov.full_ellipse_area()).abs() < 1e-9);
    assert!(g.ta_prime < g.to_prime);
    assert!((g.to_prime - g.ta_prime - g.oa_prime).abs() < 1e-9);
}

#[test]
fn decreasing_in_theta1_on_reference_grid() {
    for &theta2 in &[30.0, 50.0] {
        let lo = total(30.0, theta2, 15.0, 100.0);
        let hi = total(50.0, theta2, 15.0, 100.0);
        assert!(hi < lo, "theta2={theta2}: {hi} !< {lo}");
    }
}

#[test]
fn increasing_in_theta2_for_fixed_distance() {
    // R1 = l sinθ2 / sin(θ1+θ2) grows with θ2 at fixed l.
    for &theta1 in &[30.0, 50.0] {
        let lo = total(theta1, 30.0, 15.0, 100.0);
        let hi = total(theta1, 50.0, 15.0, 100.0);
        assert!(hi > lo);
    }
}

#[test]
fn angle_domain_is_enforced() {
    assert!(matches!(
        BeamAngles::new(0.0, 50.0, 15.0),
        Err(DomainError::AngleOutOfRange { name: "theta1", .. })
    ));
    assert!(BeamAngles::new(30.0, 90.0, 15.0).is_err());
    assert!(BeamAngles::new(30.0, 50.0, 180.0).is_err());
    assert!(BeamAngles::new(30.0, 50.0, f64::NAN).is_err());
    // an absurd guard turns every input into degenerate geometry
    assert!(matches!(
        BeamAngles::new_with_eps(30.0, 50.0, 15.0, 2.0),
        Err(DomainError::Degenerate { .. })
    ));
    let angles = BeamAngles::new(30.0, 50.0, 15.0).unwrap();
    assert!(SingleSideCoverage::compute(angles, 0.0).is_err());
    assert!(reach_radius(&angles, -1.0).is_err());
}

#[test]
fn negative_ellipse_bracket_is_flagged_not_fatal() {
    // θ1 + φ1/2 beyond the cosine's decreasing branch mirrored below θ1.
    let (area, warn) = half_ellipse_area(10.0, 0.2, -0.1);
    assert_eq!(area, 0.0);
    match warn {
        Some(ValidityWarning::NegativeEllipseTerm { bracket }) => assert!(bracket < 0.0),
        None => panic!("expected a validity warning"),
    }
    let (area_ok, none) = half_ellipse_area(10.0, 0.5, 0.1);
    assert!(area_ok > 0.0 && none.is_none());
}

#[test]
fn disk_and_faceted_models_are_alternatives() {
    let l = 75.1;
    let disk = CoverageFootprint::disk(l).unwrap();
    assert!((disk.area() - PI * l * l).abs() < 1e-9);
    assert!(disk.warnings().is_empty());

    let angles = BeamAngles::new(30.0, 50.0, 15.0).unwrap();
    let side = SingleSideCoverage::compute(angles, l).unwrap();
    let model = FootprintModel::Faceted { angles, faces: 6 };
    let faceted = model.footprint(l).unwrap();
    assert!((faceted.area() - 6.0 * side.total_area).abs() < 1e-9);

    assert!(CoverageFootprint::faceted(Vec::new()).is_err());
    assert!(CoverageFootprint::faceted(vec![side; 7]).is_err());
    assert!(FootprintModel::Faceted { angles, faces: 0 }
        .footprint(l)
        .is_err());
    assert!(FootprintModel::Disk.footprint(-1.0).is_err());
}

#[test]
fn terminal_faces_and_effective_range() {
    let t = Terminal::new(
        BeamAngles::new(30.0, 50.0, 15.0).unwrap(),
        vector![10.0, 20.0],
    );
    let faces = t.all_faces(75.0).unwrap();
    assert_eq!(faces.len(), 6);
    let east = faces.iter().find(|d| d.face == Face::East).unwrap();
    assert_eq!(east.azimuth_deg, 90.0);
    let r1 = t.side_coverage(75.0).unwrap().r1;
    assert!((east.reach_point - vector![10.0 + r1, 20.0]).norm() < 1e-9);
    let south = faces.iter().find(|d| d.face == Face::South).unwrap();
    assert!((south.reach_point - vector![10.0, 20.0 - r1]).norm() < 1e-9);
    assert_eq!(Face::West.to_string(), "west");
    let sum: f64 = faces.iter().map(|d| d.area).sum();
    assert!((t.faceted(75.0).unwrap().area() - sum).abs() < 1e-9);

    let omni = t.omnidirectional(95.0).unwrap().area();
    let r = effective_range(omni).unwrap();
    assert!((r - 95.0).abs() < 1e-9);
    assert!(effective_range(0.0).is_err());
}

proptest! {
    #[test]
    fn total_area_nonnegative_over_domain(
        theta1 in 0.01f64..89.99,
        theta2 in 0.01f64..89.99,
        phi1 in 0.01f64..179.99,
        l in 0.1f64..5_000.0,
    ) {
        let a = single_side_total_area(theta1, theta2, phi1, l).unwrap();
        prop_assert!(a >= 0.0);
        prop_assert!(a.is_finite());
    }

    #[test]
    fn total_area_scales_with_l_squared(
        theta1 in 1.0f64..89.0,
        theta2 in 1.0f64..89.0,
        phi1 in 1.0f64..179.0,
        l in 1.0f64..1_000.0,
    ) {
        let a = single_side_total_area(theta1, theta2, phi1, l).unwrap();
        let b = single_side_total_area(theta1, theta2, phi1, 2.0 * l).unwrap();
        prop_assert!((b - 4.0 * a).abs() <= 1e-9 * b.max(1.0));
    }
}
