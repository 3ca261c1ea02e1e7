use std::time::Instant;

use crate::simulation::forces::{KickSet, NewtonianGravity, VelocityKick};
use crate::simulation::integrator::advance_world;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Category, NVec3, World};

/// Helper to build a manual World of size `n`
fn make_world(n: usize) -> World {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 150.0,
            (i_f * 0.13).cos() * 150.0,
            (i_f * 0.07).sin() * 150.0,
        );

        bodies.push(Body::new(
            i,
            Category::Planet,
            x,
            NVec3::zeros(),
            1.0e6,
            1.0,
            NVec3::zeros(),
        ));
    }

    World::new(bodies)
}

/// Time a single gravity kick accumulation for a range of N
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    let params = Parameters::default();
    let gravity = NewtonianGravity;

    for n in ns {
        let world = make_world(n);
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.kick(&world, &params, &mut out);

        let t0 = Instant::now();
        gravity.kick(&world, &params, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct kick = {dt:8.6} s");
    }
}

/// Time full ticks (kick + apply + spin) for a range of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick() {
    println!("N,tick_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few ticks to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let params = Parameters::default();
        let kicks = KickSet::new().with(NewtonianGravity);
        let mut world = make_world(n);

        // Warm-up one tick
        advance_world(&mut world, &kicks, &params, 1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..steps {
            advance_world(&mut world, &kicks, &params, 1.0 / 60.0);
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", n, elapsed_ms / steps as f64);
    }
}
