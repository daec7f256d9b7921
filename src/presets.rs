//! Named parameter presets for the visualization layer.
//!
//! Presets are embedded as JSON and parsed once into a cached map, so the
//! consumer can populate its controls without re-parsing on every lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::params::PhysicalParameters;

/// Embedded preset scenarios. "oceanic-default" mirrors the consumer's
/// slider defaults.
static PRESETS_JSON: &str = r#"{
    "oceanic-default": {
        "surface_temp_c": 0.0,
        "basal_temp_c": 1400.0,
        "diffusivity_mm2_s": 1.0,
        "thickness_km": 120.0,
        "iterations": 50
    },
    "thin-fast-spreading": {
        "surface_temp_c": 0.0,
        "basal_temp_c": 1350.0,
        "diffusivity_mm2_s": 1.2,
        "thickness_km": 90.0,
        "iterations": 50
    },
    "thick-old-basin": {
        "surface_temp_c": 2.0,
        "basal_temp_c": 1450.0,
        "diffusivity_mm2_s": 0.8,
        "thickness_km": 150.0,
        "iterations": 100
    }
}"#;

/// Cache of parsed presets, built on first access.
static PRESETS: Lazy<HashMap<String, PhysicalParameters>> = Lazy::new(|| {
    serde_json::from_str(PRESETS_JSON).expect("embedded presets must be valid JSON")
});

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<PhysicalParameters> {
    PRESETS.get(name).cloned()
}

/// All preset names, sorted for stable UI ordering.
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PRESETS.keys().map(|name| name.as_str()).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_matches_default_params() {
        let preset = preset("oceanic-default").unwrap();
        assert_eq!(preset, PhysicalParameters::default());
    }

    #[test]
    fn test_all_presets_validate() {
        for name in preset_names() {
            let params = preset(name).unwrap();
            assert!(params.validate().is_ok(), "preset {} should validate", name);
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset("continental-craton").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let names = preset_names();
        assert_eq!(
            names,
            vec!["oceanic-default", "thick-old-basin", "thin-fast-spreading"]
        );
    }
}
