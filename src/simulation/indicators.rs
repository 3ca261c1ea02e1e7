//! Visual-feedback derivations
//!
//! Pure recomputations from current body state: velocity-indicator geometry
//! and the proximity-scaled wireframe containers. The only hidden memory is
//! each body's `last_rescale_distance`, which implements the container
//! rescale hysteresis.

use super::params::Parameters;
use super::states::{Body, NVec3, World};

/// Direction and length of a body's velocity arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityIndicator {
    pub direction: NVec3, // unit vector, or zero for a stationary body
    pub length: f64,
}

/// Indicator geometry for the given velocity. Idempotent; recomputed on
/// every read rather than cached.
pub fn velocity_indicator(velocity: &NVec3, params: &Parameters) -> VelocityIndicator {
    let magnitude = velocity.norm();
    let direction = if magnitude > 0.0 {
        velocity / magnitude
    } else {
        NVec3::zeros()
    };
    let length = (magnitude * params.indicator_velocity_factor)
        .clamp(params.indicator_min_length, params.indicator_max_length);

    VelocityIndicator { direction, length }
}

/// Rescale one body's container against the viewer position.
///
/// Skipped unless the viewer has moved at least `container_rescale_gap`
/// since this body's last rescale; `last_rescale_distance` starts at
/// infinity so the first pass always rescales.
pub fn rescale_container(body: &mut Body, viewer: &NVec3, params: &Parameters) {
    let distance_to_viewer = (viewer - body.position).norm();

    let difference = distance_to_viewer - body.last_rescale_distance;
    if difference.abs() < params.container_rescale_gap {
        return;
    }

    body.last_rescale_distance = distance_to_viewer;
    body.container_scale = (distance_to_viewer * params.container_distance_scale_factor
        / body.scale)
        .clamp(params.container_min_scale, params.container_max_scale);
}

/// Container pass over the whole registry. Runs every frame, paused or not.
pub fn update_container_scales(world: &mut World, viewer: &NVec3, params: &Parameters) {
    for body in &mut world.bodies {
        rescale_container(body, viewer, params);
    }
}
