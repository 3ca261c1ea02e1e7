//! Shared tunable constants for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` and the star pin policy,
//! - trail lifespan curve and marker cap,
//! - velocity-indicator scaling and clamps,
//! - container proximity scaling and rescale hysteresis
//!
//! Deserializes straight from the scenario YAML; missing keys fall back to
//! the defaults below, so a minimal file can override just the constants it
//! cares about.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Parameters {
    pub G: f64, // gravitational constant, shared by every pair
    pub pin_star: bool, // exempt stars from gravitational displacement

    pub trail_distance_exponent: f64, // lifespan ~ distance ^ exponent
    pub trail_multiplier: f64, // lifespan curve gain
    pub trail_min_lifespan_ms: f64,
    pub trail_max_lifespan_ms: f64,
    pub trail_fade_fraction: f64, // fade starts at fraction * lifespan
    pub trail_marker_cap: usize, // oldest markers dropped past this

    pub indicator_velocity_factor: f64, // arrow length per velocity unit
    pub indicator_min_length: f64,
    pub indicator_max_length: f64,

    pub container_rescale_gap: f64, // viewer must move this far to rescale
    pub container_distance_scale_factor: f64,
    pub container_min_scale: f64,
    pub container_max_scale: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 5.0e-9,
            pin_star: false,

            trail_distance_exponent: 2.0,
            trail_multiplier: 425.0,
            trail_min_lifespan_ms: 1000.0,
            trail_max_lifespan_ms: 20000.0,
            trail_fade_fraction: 0.7,
            trail_marker_cap: 50_000,

            indicator_velocity_factor: 50.0,
            indicator_min_length: 0.5,
            indicator_max_length: 50.0,

            container_rescale_gap: 100.0,
            container_distance_scale_factor: 0.027,
            container_min_scale: 1.2,
            container_max_scale: 100.0,
        }
    }
}
