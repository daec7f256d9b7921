pub mod constants;
pub mod math_utils;
pub mod params;
pub mod grid;
pub mod field;
pub mod half_space;
pub mod plate;
pub mod model;
pub mod presets;
