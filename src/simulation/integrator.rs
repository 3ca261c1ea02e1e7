//! Per-tick advancement of the celestial world
//!
//! One explicit impulse step per tick, driven by `KickSet` and `Parameters`:
//! velocity impulses are accumulated from a frozen pre-tick position
//! snapshot for every body, then velocities and positions are applied in
//! registry order. Velocity doubles as the per-tick displacement — the
//! timestep `dt` drives only mesh spin, not the gravity/position update.

use super::forces::KickSet;
use super::params::Parameters;
use super::states::{Category, NVec3, World};

/// Advance the world by one tick.
///
/// - `dv[i]` is computed for all bodies before any body moves, so force
///   accumulation never sees a partially-updated tick
/// - `velocity += dv`, then `position += velocity` (unscaled by `dt`);
///   bodies exempt under the pin policy skip both, though they still exert
///   force on everyone else
/// - `rotation += spin * dt` per body, visual only
pub fn advance_world(world: &mut World, kicks: &KickSet, params: &Parameters, dt: f64) {
    let n = world.bodies.len();
    if n == 0 {
        return;
    }

    // Impulses from the frozen snapshot
    let mut dv = vec![NVec3::zeros(); n];
    kicks.accumulate_kicks(&*world, params, &mut dv);

    // Apply: kick the velocity, then displace by the full velocity
    for (b, impulse) in world.bodies.iter_mut().zip(dv.iter()) {
        if !(params.pin_star && b.category == Category::Star) {
            b.velocity += *impulse;
            b.position += b.velocity;
        }

        // Mesh spin is the only consumer of dt
        b.rotation += b.spin * dt;
    }

    world.t += dt;
}
