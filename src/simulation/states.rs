//! Core state types for the celestial simulation.
//!
//! Defines the body registry:
//! - `Body` — one simulated celestial body, using `NVec3`
//! - `BodyDefaults` — immutable reset target captured at creation
//! - `World` — the authoritative list of bodies plus simulation time
//!
//! The `World` is owned by the `Scenario` controller and passed by reference
//! to the integrator, trail system, and viewer.

use nalgebra::Vector3;
use serde::Deserialize;

pub type NVec3 = Vector3<f64>;

/// Body classification. Stars get distinct trail styling and may be exempted
/// from gravitational displacement via `Parameters::pin_star`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "star")]
    Star,

    #[serde(rename = "planet")]
    Planet,
}

/// Snapshot of a body's physical state at creation time.
/// Never written after construction; `stop()` restores bodies from it.
#[derive(Debug, Clone)]
pub struct BodyDefaults {
    pub position: NVec3,
    pub velocity: NVec3,
    pub mass: f64,
    pub scale: f64,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub index: usize, // stable identity, assigned at creation, never reused
    pub category: Category,
    pub position: NVec3,
    pub velocity: NVec3,
    pub mass: f64,
    pub scale: f64, // visual radius multiplier
    pub spin: NVec3, // mesh rotation rate (rad/s per axis), no physics effect
    pub rotation: NVec3, // accumulated mesh orientation
    pub trail_lifespan_ms: f64, // derived each tick, zeroed on reset
    pub container_scale: f64,
    pub last_rescale_distance: f64, // hysteresis memory for container rescaling
    pub defaults: BodyDefaults,
}

impl Body {
    /// Construct a body at its default state.
    pub fn new(
        index: usize,
        category: Category,
        position: NVec3,
        velocity: NVec3,
        mass: f64,
        scale: f64,
        spin: NVec3,
    ) -> Self {
        Self {
            index,
            category,
            position,
            velocity,
            mass,
            scale,
            spin,
            rotation: NVec3::zeros(),
            trail_lifespan_ms: 0.0,
            container_scale: 1.0,
            // Infinity forces a rescale on the first container pass
            last_rescale_distance: f64::INFINITY,
            defaults: BodyDefaults {
                position,
                velocity,
                mass,
                scale,
            },
        }
    }

    /// Restore position/velocity/mass to the defaults snapshot and zero the
    /// derived bookkeeping (trail lifespan, accumulated rotation).
    pub fn restore_defaults(&mut self) {
        self.position = self.defaults.position;
        self.velocity = self.defaults.velocity;
        self.mass = self.defaults.mass;
        self.scale = self.defaults.scale;
        self.rotation = NVec3::zeros();
        self.trail_lifespan_ms = 0.0;
    }

    /// Distance from the world origin, the input to the trail lifespan curve.
    pub fn distance_to_origin(&self) -> f64 {
        self.position.norm()
    }
}

#[derive(Debug, Clone)]
pub struct World {
    pub bodies: Vec<Body>, // registry order is iteration order
    pub t: f64, // time in seconds, advanced once per tick
}

impl World {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Indexed lookup. Out-of-range indices yield `None` so command handlers
    /// degrade to no-ops instead of panicking.
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }
}
