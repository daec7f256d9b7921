//! Tagged model selection for consumers with a single call site.
//!
//! The interactive consumer offers a dropdown of half-space / plate / both;
//! this module is the value-typed strategy behind it. Both variants are
//! stateless — evaluation is a pure function of the parameters.

use serde::{Deserialize, Serialize};

use crate::field::TemperatureField;
use crate::half_space::half_space;
use crate::params::{ParameterError, PhysicalParameters};
use crate::plate::plate;

/// Which cooling model to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoolingModel {
    HalfSpace,
    Plate,
}

impl CoolingModel {
    /// Evaluate this model for the given parameters.
    pub fn evaluate(
        &self,
        params: &PhysicalParameters,
    ) -> Result<TemperatureField, ParameterError> {
        match self {
            CoolingModel::HalfSpace => half_space(params),
            CoolingModel::Plate => plate(params),
        }
    }
}

/// Evaluate both models for the same parameters (the comparison view).
///
/// The two evaluations are fully independent — no shared state — so a
/// consumer may also run them concurrently and discard whichever it no
/// longer needs.
pub fn evaluate_both(
    params: &PhysicalParameters,
) -> Result<(TemperatureField, TemperatureField), ParameterError> {
    let half_space_field = half_space(params)?;
    let plate_field = plate(params)?;
    Ok((half_space_field, plate_field))
}
