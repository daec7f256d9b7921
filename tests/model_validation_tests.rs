// Cross-model validation tests
// Checks the physical contracts both cooling models must satisfy

use approx::assert_abs_diff_eq;
use litho_cooling_rust::assert_deviation;
use litho_cooling_rust::half_space::half_space;
use litho_cooling_rust::model::evaluate_both;
use litho_cooling_rust::params::PhysicalParameters;
use litho_cooling_rust::plate::plate;
use more_asserts::assert_lt;

fn reference_params() -> PhysicalParameters {
    // The documented reference scenario: T0=0, T1=1400, h=120, kappa=1
    PhysicalParameters::default()
}

#[test]
fn test_boundary_consistency_both_models() {
    println!("Testing surface boundary: field[any age][depth=0] == surface temperature");

    let params = reference_params();
    let (hs, pl) = evaluate_both(&params).unwrap();

    for age_index in 0..hs.num_ages() {
        assert_abs_diff_eq!(hs.temp_at(age_index, 0), params.surface_temp_c, epsilon = 1e-9);
        assert_abs_diff_eq!(pl.temp_at(age_index, 0), params.surface_temp_c, epsilon = 1e-9);
    }
    println!("   Surface row pinned to {} degC in both models", params.surface_temp_c);
}

#[test]
fn test_basal_consistency_plate_model() {
    println!("Testing basal boundary: plate field[any age][depth=thickness] == basal temperature");

    let params = reference_params();
    let field = plate(&params).unwrap();
    let base = field.num_depths() - 1;

    for age_index in 0..field.num_ages() {
        assert_abs_diff_eq!(field.temp_at(age_index, base), params.basal_temp_c, epsilon = 1e-6);
    }
    println!("   Basal row pinned to {} degC at all 300 ages", params.basal_temp_c);
}

#[test]
fn test_shape_invariant() {
    println!("Testing grid shape: 300 ages x (thickness+1) depths");

    for thickness_km in [10.0, 57.0, 120.0, 200.0] {
        let params = PhysicalParameters {
            thickness_km,
            ..reference_params()
        };
        let (hs, pl) = evaluate_both(&params).unwrap();
        let expected_depths = thickness_km as usize + 1;

        assert_eq!(hs.num_ages(), 300);
        assert_eq!(hs.num_depths(), expected_depths);
        assert_eq!(hs.temps_c.len(), 300);
        assert!(hs.temps_c.iter().all(|row| row.len() == expected_depths));

        assert_eq!(pl.num_ages(), 300);
        assert_eq!(pl.num_depths(), expected_depths);

        println!("   thickness {} km -> 300 x {}", thickness_km, expected_depths);
    }
}

#[test]
fn test_reference_scenario() {
    println!("Testing the reference scenario: T0=0, T1=1400, h=120, kappa=1");

    let params = reference_params();
    let (hs, pl) = evaluate_both(&params).unwrap();

    // Half-space at the youngest age and the surface: effectively unheated
    let young_surface = hs.temp_at(0, 0);
    println!("   Half-space at (1 My, 0 km): {:.3} degC", young_surface);
    assert_abs_diff_eq!(young_surface, 0.0, epsilon = 1e-9);

    // Half-space at (300 My, 120 km): strictly below the mantle temperature,
    // since the thermal front never fully equilibrates at finite diffusivity.
    // erf(120000 / (2 sqrt(kappa * 300 My))) = erf(0.6169) gives ~864 degC.
    let old_base = hs.temp_at(299, 120);
    println!("   Half-space at (300 My, 120 km): {:.1} degC", old_base);
    assert_lt!(old_base, 1400.0);
    assert_deviation!(
        old_base,
        864.0,
        0.5,
        "Old plate base should sit at ~62% of the mantle temperature"
    );

    // Plate model at the same point: exactly the fixed boundary
    let plate_base = pl.temp_at(299, 120);
    println!("   Plate at (300 My, 120 km): {:.6} degC", plate_base);
    assert_abs_diff_eq!(plate_base, 1400.0, epsilon = 1e-6);
}

#[test]
fn test_determinism_across_repeated_calls() {
    println!("Testing determinism: identical inputs -> bit-identical outputs");

    let params = reference_params();
    let first_hs = half_space(&params).unwrap();
    let first_pl = plate(&params).unwrap();

    for _ in 0..3 {
        assert_eq!(half_space(&params).unwrap(), first_hs);
        assert_eq!(plate(&params).unwrap(), first_pl);
    }
    println!("   3 repeated evaluations of each model matched exactly");
}

#[test]
fn test_invalid_parameters_rejected_synchronously() {
    println!("Testing that invalid parameters fail before any field is built");

    let bad_thickness = PhysicalParameters {
        thickness_km: -10.0,
        ..reference_params()
    };
    assert!(half_space(&bad_thickness).is_err());
    assert!(plate(&bad_thickness).is_err());

    let bad_kappa = PhysicalParameters {
        diffusivity_mm2_s: 0.0,
        ..reference_params()
    };
    assert!(half_space(&bad_kappa).is_err());
    assert!(plate(&bad_kappa).is_err());

    let inverted = PhysicalParameters {
        surface_temp_c: 1500.0,
        ..reference_params()
    };
    assert!(half_space(&inverted).is_err());
    assert!(plate(&inverted).is_err());
    println!("   All three invalid combinations rejected by both models");
}

#[test]
fn test_profiles_slice_the_field_consistently() {
    let params = reference_params();
    let field = plate(&params).unwrap();

    // Vertical geotherm at 50 My (the consumer's default profile age)
    let age_index = 49;
    let geotherm = field.geotherm_at_age(age_index).unwrap();
    assert_eq!(geotherm.len(), field.num_depths());
    for (depth_index, &(depth_km, temp_c)) in geotherm.iter().enumerate() {
        assert_eq!(depth_km, field.depth_km[depth_index]);
        assert_eq!(temp_c, field.temp_at(age_index, depth_index));
    }

    // Horizontal profile at 60 km depth
    let depth_index = 60;
    let profile = field.profile_at_depth(depth_index).unwrap();
    assert_eq!(profile.len(), field.num_ages());
    for (age_index, &(age_my, temp_c)) in profile.iter().enumerate() {
        assert_eq!(age_my, field.age_my[age_index]);
        assert_eq!(temp_c, field.temp_at(age_index, depth_index));
    }
}
