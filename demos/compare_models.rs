/// Side-by-side console comparison of the two cooling models
///
/// Evaluates the half-space and plate fields for the default oceanic
/// scenario and prints a coarse sample of each, plus the geotherms at
/// 50 My — the same comparison the interactive consumer renders as
/// overlaid contours.

use colored::Colorize;
use litho_cooling_rust::model::evaluate_both;
use litho_cooling_rust::params::PhysicalParameters;
use litho_cooling_rust::presets;

fn main() {
    println!("{}", "Lithosphere Cooling Models".bold());
    println!(
        "Available presets: {}",
        presets::preset_names().join(", ").cyan()
    );

    let params = PhysicalParameters::default();
    println!(
        "Scenario: T0={} degC, T1={} degC, kappa={} mm2/s, h={} km, N={}\n",
        params.surface_temp_c,
        params.basal_temp_c,
        params.diffusivity_mm2_s,
        params.thickness_km,
        params.iterations
    );

    let (half_space, plate) = match evaluate_both(&params) {
        Ok(fields) => fields,
        Err(error) => {
            eprintln!("{} {}", "parameter error:".red().bold(), error);
            std::process::exit(1);
        }
    };

    // Coarse sample: every 60 My, every 30 km
    println!("{}", "Temperature (degC) at sampled grid points".bold());
    println!("{:>8} {:>8} {:>12} {:>12} {:>10}", "age My", "depth km", "half-space", "plate", "delta");
    for age_index in (59..300).step_by(60) {
        for depth_index in (0..=120).step_by(30) {
            let hs = half_space.temp_at(age_index, depth_index);
            let pl = plate.temp_at(age_index, depth_index);
            let delta = pl - hs;
            let delta_str = if delta.abs() > 50.0 {
                format!("{:+10.1}", delta).yellow()
            } else {
                format!("{:+10.1}", delta).green()
            };
            println!(
                "{:>8.0} {:>8.0} {:>12.1} {:>12.1} {}",
                half_space.age_my[age_index],
                half_space.depth_km[depth_index],
                hs,
                pl,
                delta_str
            );
        }
        println!();
    }

    // Vertical geotherms at the consumer's default profile age
    let age_index = 49;
    println!(
        "{}",
        format!("Geotherm at {} My (every 20 km)", half_space.age_my[age_index] as i64).bold()
    );
    let hs_geotherm = half_space.geotherm_at_age(age_index).unwrap();
    let plate_geotherm = plate.geotherm_at_age(age_index).unwrap();
    for (&(depth_km, hs_temp), &(_, plate_temp)) in
        hs_geotherm.iter().zip(plate_geotherm.iter()).step_by(20)
    {
        println!(
            "{:>6.0} km  HSCM {:>7.1}  PM {:>7.1}",
            depth_km, hs_temp, plate_temp
        );
    }
}
