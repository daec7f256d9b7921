//! Plate cooling model.
//!
//! Fourier sine-series solution of 1-D transient heat conduction in a layer
//! of thickness `L` with both boundaries held at fixed temperatures:
//!
//! ```text
//! T(t, z) = T_surface + (T_basal - T_surface) *
//!     ( z/L + (2/π) Σ_{i=1..N} (1/i) exp(-i²π²κt/L²) sin(iπz/L) )
//! ```
//!
//! `N` is the caller-supplied truncation order. The exponential factor
//! decays geometrically in both `i²` and age, so truncation error shrinks
//! monotonically with `N`; there is no convergence check or adaptive
//! truncation. Cost is linear in `N × grid size`.

use std::f64::consts::{FRAC_2_PI, PI};

use crate::field::TemperatureField;
use crate::grid::Grid;
use crate::params::{ParameterError, PhysicalParameters};

/// Evaluate the plate cooling field over the standard grid.
///
/// The series is accumulated term by term from `i = 1` to
/// `i = params.iterations` inclusive, each term elementwise over the full
/// grid. Deterministic for identical inputs.
pub fn plate(params: &PhysicalParameters) -> Result<TemperatureField, ParameterError> {
    params.validate()?;

    let grid = Grid::new(params.thickness_km);
    let kappa = params.diffusivity_m2_s();
    let thickness = params.thickness_m();
    let surface = params.surface_temp_c;
    let contrast = params.temp_contrast_c();

    let num_ages = grid.num_ages();
    let num_depths = grid.num_depths();

    // Running series sum per grid cell
    let mut series = vec![vec![0.0f64; num_depths]; num_ages];

    for i in 1..=params.iterations {
        let mode = i as f64;
        let decay_per_s = kappa * mode * mode * PI * PI / (thickness * thickness);

        for (age_index, &age_s) in grid.age_s.iter().enumerate() {
            let amplitude = (-decay_per_s * age_s).exp() / mode;
            if amplitude == 0.0 {
                // Ages are increasing, so once the exponential underflows
                // it stays zero for every remaining age of this mode
                break;
            }
            let row = &mut series[age_index];
            for (depth_index, &depth_m) in grid.depth_m.iter().enumerate() {
                row[depth_index] += amplitude * (mode * PI * depth_m / thickness).sin();
            }
        }
    }

    let temps_c = series
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(grid.depth_m.iter())
                .map(|(sum, &depth_m)| {
                    let steady = depth_m / thickness;
                    surface + contrast * (steady + FRAC_2_PI * sum)
                })
                .collect()
        })
        .collect();

    Ok(TemperatureField {
        age_my: grid.age_my,
        depth_km: grid.depth_km,
        temps_c,
    })
}
