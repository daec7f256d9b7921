//! Sampling grid over (seafloor age, depth), shared by both cooling models.
//!
//! The age axis is fixed: 300 samples from 1 My to 300 My. The depth axis
//! runs from the surface to the lithosphere thickness at one sample per km
//! (for integral thickness). Both axes are kept twice: in display units
//! (My, km) for the plotting consumer and in SI units (s, m) for the
//! physics evaluators.

use crate::constants::{AGE_MAX_MY, AGE_MIN_MY, AGE_SAMPLE_COUNT, KM_TO_M, SECONDS_PER_MY};
use crate::math_utils::linspace;

/// Rectangular sampling grid for one field evaluation.
///
/// Built fresh per call and returned by value; there is no cross-call cache.
/// Inputs are assumed pre-validated — a non-positive thickness degenerates
/// to a single depth sample at the surface rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Seafloor ages in My (display axis)
    pub age_my: Vec<f64>,
    /// Depths in km (display axis)
    pub depth_km: Vec<f64>,
    /// Seafloor ages in seconds (computation axis, fixed 365-day My)
    pub age_s: Vec<f64>,
    /// Depths in meters (computation axis)
    pub depth_m: Vec<f64>,
}

impl Grid {
    /// Build the grid for a lithosphere of `thickness_km`.
    ///
    /// The depth axis gets `round(thickness_km) + 1` samples so that an
    /// integral thickness lands exactly one sample per km, endpoints
    /// included.
    pub fn new(thickness_km: f64) -> Self {
        let age_my = linspace(AGE_MIN_MY, AGE_MAX_MY, AGE_SAMPLE_COUNT);

        let depth_count = thickness_km.round().max(0.0) as usize + 1;
        let depth_km = linspace(0.0, thickness_km.max(0.0), depth_count);

        let age_s = age_my.iter().map(|age| age * SECONDS_PER_MY).collect();
        let depth_m = depth_km.iter().map(|depth| depth * KM_TO_M).collect();

        Self {
            age_my,
            depth_km,
            age_s,
            depth_m,
        }
    }

    pub fn num_ages(&self) -> usize {
        self.age_my.len()
    }

    pub fn num_depths(&self) -> usize {
        self.depth_km.len()
    }
}
