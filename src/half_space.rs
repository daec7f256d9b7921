//! Half-space cooling model.
//!
//! Closed-form solution of 1-D transient heat conduction in a semi-infinite
//! medium whose surface is held at a fixed temperature:
//!
//! ```text
//! T(t, z) = T_surface + (T_basal - T_surface) * erf( z / (2 * sqrt(kappa * t)) )
//! ```
//!
//! with age `t` in seconds, depth `z` in meters, and diffusivity `kappa` in
//! m²/s. The mantle temperature is the asymptote at depth; thickness only
//! sizes the sampled depth axis.

use crate::field::TemperatureField;
use crate::grid::Grid;
use crate::math_utils::erf;
use crate::params::{ParameterError, PhysicalParameters};

/// Evaluate the half-space cooling field over the standard grid.
///
/// Purely elementwise and deterministic: identical parameters produce
/// identical fields. `iterations` is ignored by this model.
pub fn half_space(params: &PhysicalParameters) -> Result<TemperatureField, ParameterError> {
    params.validate()?;

    let grid = Grid::new(params.thickness_km);
    let kappa = params.diffusivity_m2_s();
    let surface = params.surface_temp_c;
    let contrast = params.temp_contrast_c();

    let temps_c = grid
        .age_s
        .iter()
        .map(|&age_s| {
            let front = 2.0 * (kappa * age_s).sqrt();
            grid.depth_m
                .iter()
                .map(|&depth_m| surface + contrast * erf(erf_argument(depth_m, front)))
                .collect()
        })
        .collect();

    Ok(TemperatureField {
        age_my: grid.age_my,
        depth_km: grid.depth_km,
        temps_c,
    })
}

/// Argument of the error function, guarding the `age == 0` limit.
///
/// The grid never samples age 0 (its minimum is 1 My), but a reused
/// evaluator must not divide by zero: as age → 0 the thermal front has not
/// penetrated, so the limit is 0 at the surface and +∞ below it.
fn erf_argument(depth_m: f64, front_m: f64) -> f64 {
    if front_m == 0.0 {
        if depth_m == 0.0 { 0.0 } else { f64::INFINITY }
    } else {
        depth_m / front_m
    }
}
