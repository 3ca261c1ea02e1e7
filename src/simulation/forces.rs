//! Gravity contributors for the celestial engine
//!
//! Defines the velocity-impulse trait and the direct pairwise
//! Newtonian gravity term used every tick

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, World};

/// Collection of per-tick impulse terms (gravity today, possibly drag later)
/// Each term implements [`VelocityKick`] and their contributions are summed
/// into a single velocity impulse per body
pub struct KickSet {
    terms: Vec<Box<dyn VelocityKick + Send + Sync>>,
}

impl std::fmt::Debug for KickSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KickSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl KickSet {
    /// Create an empty kick set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an impulse term
    pub fn with(mut self, term: impl VelocityKick + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total velocity impulses for all bodies in `world`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - every term reads the same frozen position snapshot in `world`
    pub fn accumulate_kicks(&self, world: &World, params: &Parameters, out: &mut [NVec3]) {
        // Zero buffer
        for dv in out.iter_mut() {
            *dv = NVec3::zeros();
        }
        for term in &self.terms {
            term.kick(world, params, out);
        }
    }
}

impl Default for KickSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for per-tick velocity impulse sources operating on [`World`]
/// Implementations add their contribution into `out[i]` for each body
pub trait VelocityKick {
    fn kick(&self, world: &World, params: &Parameters, out: &mut [NVec3]);
}

/// Direct pairwise Newtonian gravity, applied as a velocity impulse.
///
/// The force magnitude `G * m_i * m_j / d^2` is added straight to velocity
/// (an implicit unit-timestep impulse, not acceleration * dt). Coincident
/// bodies contribute nothing — the zero-distance pair is skipped rather than
/// producing a NaN direction.
pub struct NewtonianGravity;

impl VelocityKick for NewtonianGravity {
    fn kick(&self, world: &World, params: &Parameters, out: &mut [NVec3]) {
        let n = world.bodies.len();
        if n == 0 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j; the impulse
        // magnitude G * m_i * m_j / d^2 is the same on both sides, only the
        // direction flips
        for i in 0..n {
            let bi = &world.bodies[i];

            for j in (i + 1)..n {
                let bj = &world.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.position - bi.position;
                let d2 = r.dot(&r);

                // Coincident pair: direction is undefined, treat as zero force
                if d2 == 0.0 {
                    continue;
                }

                let dir = r / d2.sqrt();
                let force = params.G * bi.mass * bj.mass / d2;
                let impulse = dir * force;

                out[i] += impulse;
                out[j] -= impulse;
            }
        }
    }
}
