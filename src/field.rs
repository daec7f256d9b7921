//! Temperature field produced by a cooling-model evaluation.

use serde::Serialize;

/// A 2-D temperature field over (age, depth), indexed `[age][depth]`.
///
/// Values are in °C, the age axis in My, the depth axis in km. Produced
/// fresh per evaluation and returned by value; the generating model keeps
/// no reference. Serializable so the visualization layer can ship it
/// straight to its plotting front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureField {
    /// Seafloor ages in My
    pub age_my: Vec<f64>,
    /// Depths in km
    pub depth_km: Vec<f64>,
    /// Temperatures in °C, one row per age, one column per depth
    pub temps_c: Vec<Vec<f64>>,
}

impl TemperatureField {
    pub fn num_ages(&self) -> usize {
        self.age_my.len()
    }

    pub fn num_depths(&self) -> usize {
        self.depth_km.len()
    }

    /// Temperature in °C at the given age and depth indices.
    pub fn temp_at(&self, age_index: usize, depth_index: usize) -> f64 {
        self.temps_c[age_index][depth_index]
    }

    /// Vertical geotherm at one age: (depth in km, temperature in °C) pairs.
    ///
    /// Returns `None` if the age index is out of range. This is the
    /// "temperature vs depth" projection the consumer plots next to the
    /// contour view.
    pub fn geotherm_at_age(&self, age_index: usize) -> Option<Vec<(f64, f64)>> {
        let row = self.temps_c.get(age_index)?;
        Some(self.depth_km.iter().copied().zip(row.iter().copied()).collect())
    }

    /// Horizontal profile at one depth: (age in My, temperature in °C) pairs.
    ///
    /// Returns `None` if the depth index is out of range.
    pub fn profile_at_depth(&self, depth_index: usize) -> Option<Vec<(f64, f64)>> {
        if depth_index >= self.num_depths() {
            return None;
        }
        Some(
            self.age_my
                .iter()
                .copied()
                .zip(self.temps_c.iter().map(|row| row[depth_index]))
                .collect(),
        )
    }
}
