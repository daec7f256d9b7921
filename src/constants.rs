// Physical constants and sampling conventions shared by both cooling models.

/// Seconds per million years, using a fixed 365-day year.
///
/// The 365-day convention is deliberate: a leap-accurate or sidereal year
/// would shift every published field by a fraction of a percent on
/// geological timescales. Keep as-is.
pub const SECONDS_PER_MY: f64 = 1.0e6 * 365.0 * 24.0 * 3600.0;

pub const KM_TO_M: f64 = 1000.0;
pub const MM2_S_TO_M2_S: f64 = 1.0e-6;

// Age axis: seafloor age sampled from 1 My to 300 My at 300 points.
pub const AGE_SAMPLE_COUNT: usize = 300;
pub const AGE_MIN_MY: f64 = 1.0;
pub const AGE_MAX_MY: f64 = 300.0;

// Default parameter values, matching the interactive consumer's sliders.
pub const DEFAULT_SURFACE_TEMP_C: f64 = 0.0;
pub const DEFAULT_BASAL_TEMP_C: f64 = 1400.0;
pub const DEFAULT_DIFFUSIVITY_MM2_S: f64 = 1.0;
pub const DEFAULT_THICKNESS_KM: f64 = 120.0;
pub const DEFAULT_ITERATIONS: usize = 50;
