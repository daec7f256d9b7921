//! Physical parameters for the lithosphere cooling models, with validation
//! and the unit conversions the evaluators need.
//!
//! Boundary units: temperatures in °C, thickness in km, diffusivity in
//! mm²/s. SI conversion happens here and in [`crate::grid`]; nothing
//! downstream re-converts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_BASAL_TEMP_C, DEFAULT_DIFFUSIVITY_MM2_S, DEFAULT_ITERATIONS, DEFAULT_SURFACE_TEMP_C,
    DEFAULT_THICKNESS_KM, KM_TO_M, MM2_S_TO_M2_S,
};

/// A physically nonsensical parameter combination.
///
/// The evaluators reject these up front instead of letting NaN propagate
/// through the field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("lithosphere thickness must be positive, got {0} km")]
    Thickness(f64),
    #[error("thermal diffusivity must be positive, got {0} mm²/s")]
    Diffusivity(f64),
    #[error("plate model series needs at least one term")]
    Iterations,
    #[error("basal temperature ({basal_c} °C) must exceed surface temperature ({surface_c} °C)")]
    InvertedBoundary { surface_c: f64, basal_c: f64 },
}

/// Input parameters for one field evaluation. Immutable per call.
///
/// `iterations` is only read by the plate model; it is the Fourier series
/// truncation order. Larger values improve accuracy near the lower boundary
/// and at young ages, at linear cost. There is no upper bound — a huge value
/// is a performance knob, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Upper boundary condition in °C (T at depth 0)
    pub surface_temp_c: f64,
    /// Lower boundary condition in °C (T at the plate base; asymptotic
    /// mantle temperature for the half-space model)
    pub basal_temp_c: f64,
    /// Thermal diffusivity in mm²/s
    pub diffusivity_mm2_s: f64,
    /// Lithosphere thickness in km; also the maximum sampled depth
    pub thickness_km: f64,
    /// Fourier series truncation order (plate model only)
    pub iterations: usize,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            surface_temp_c: DEFAULT_SURFACE_TEMP_C,
            basal_temp_c: DEFAULT_BASAL_TEMP_C,
            diffusivity_mm2_s: DEFAULT_DIFFUSIVITY_MM2_S,
            thickness_km: DEFAULT_THICKNESS_KM,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl PhysicalParameters {
    /// Check the physical invariants; both evaluators call this first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.thickness_km.is_nan() || self.thickness_km <= 0.0 {
            return Err(ParameterError::Thickness(self.thickness_km));
        }
        if self.diffusivity_mm2_s.is_nan() || self.diffusivity_mm2_s <= 0.0 {
            return Err(ParameterError::Diffusivity(self.diffusivity_mm2_s));
        }
        if self.iterations == 0 {
            return Err(ParameterError::Iterations);
        }
        if self.basal_temp_c <= self.surface_temp_c {
            return Err(ParameterError::InvertedBoundary {
                surface_c: self.surface_temp_c,
                basal_c: self.basal_temp_c,
            });
        }
        Ok(())
    }

    /// Diffusivity in m²/s
    pub fn diffusivity_m2_s(&self) -> f64 {
        self.diffusivity_mm2_s * MM2_S_TO_M2_S
    }

    /// Thickness in meters
    pub fn thickness_m(&self) -> f64 {
        self.thickness_km * KM_TO_M
    }

    /// Temperature contrast between the boundaries in °C
    pub fn temp_contrast_c(&self) -> f64 {
        self.basal_temp_c - self.surface_temp_c
    }
}
