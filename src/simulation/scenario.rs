//! Build and drive a fully-initialized simulation scenario
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - numerical parameters (`Parameters`)
//! - world state (`World` with bodies at t = 0)
//! - active impulse set (`KickSet`)
//! - trail storage, simulation clock, playback state, frame scheduler
//!
//! `Scenario` is the simulation controller: it owns all mutable physics
//! state, sequences each tick (integrate, derive, emit, sweep), and exposes
//! the command API that UI collaborators go through instead of reaching into
//! body fields. It is inserted into Bevy as a `Resource` and consumed by the
//! viewer systems.

use anyhow::{ensure, Context, Result};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::clock::SimClock;
use crate::simulation::forces::{KickSet, NewtonianGravity};
use crate::simulation::indicators::update_container_scales;
use crate::simulation::integrator::advance_world;
use crate::simulation::params::Parameters;
use crate::simulation::playback::Playback;
use crate::simulation::scheduler::FrameScheduler;
use crate::simulation::states::{Body, NVec3, World};
use crate::simulation::trail::{trail_lifespan_ms, TrailGroup};

/// Component axis selector for the per-component command API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn dim(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Bevy resource representing a fully-initialized simulation scenario.
#[derive(Debug, Resource)]
pub struct Scenario {
    pub params: Parameters,
    pub world: World,
    pub kicks: KickSet,
    pub trails: TrailGroup,
    pub clock: SimClock,
    pub playback: Playback,
    pub scheduler: FrameScheduler,
    pub focus: Option<usize>, // camera-only association, no physics effect
}

impl Scenario {
    /// Map the YAML-facing config into the runtime bundle.
    ///
    /// Malformed body data is fatal here: world initialization aborts with a
    /// diagnostic naming the offending body.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        ensure!(!cfg.bodies.is_empty(), "scenario defines no bodies");

        let params = cfg.parameters;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors.
        // A body's index is its position in the config list.
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            bodies.push(build_body(i, bc).with_context(|| format!("body {i}"))?);
        }

        // Impulses: construct a KickSet and register Newtonian gravity
        let kicks = KickSet::new().with(NewtonianGravity);

        Ok(Self {
            params,
            world: World::new(bodies),
            kicks,
            trails: TrailGroup::new(),
            clock: SimClock::new(),
            playback: Playback::Paused,
            scheduler: FrameScheduler::new(),
            focus: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    // =====================================================================
    // Per-frame driving
    // =====================================================================

    /// One display frame. While running this is a full tick; while paused
    /// only the viewer-proximity container pass runs.
    pub fn frame(&mut self, dt: f64, viewer: &NVec3) {
        if self.playback.is_running() {
            self.tick(dt, viewer);
        } else {
            update_container_scales(&mut self.world, viewer, &self.params);
        }
    }

    /// One physics tick: integrate, recompute derived state, emit markers,
    /// sweep expired markers. Callers render from the resulting state.
    fn tick(&mut self, dt: f64, viewer: &NVec3) {
        let Self {
            params,
            world,
            kicks,
            trails,
            clock,
            scheduler,
            ..
        } = self;

        // (1) physics integration for all bodies
        advance_world(world, kicks, params, dt);
        clock.advance(dt);

        // (2) derived visual recomputation
        for body in &mut world.bodies {
            body.trail_lifespan_ms = trail_lifespan_ms(body, params);
        }
        update_container_scales(world, viewer, params);

        // (3) trail emission and decay sweep
        for body in &world.bodies {
            trails.emit(body, clock, params);
        }
        trails.sweep(clock);

        // the world keeps moving, so the next frame is already wanted
        scheduler.request();
    }

    // =====================================================================
    // Playback commands
    // =====================================================================

    /// Resume ticking from the current (not default) state.
    pub fn play(&mut self) {
        self.playback = Playback::Running;
        self.scheduler.request();
    }

    /// Stop ticking; body state and live trails are retained as-is.
    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    /// Hard reset: land in `Paused`, detach focus, restore every body to its
    /// defaults snapshot, clear all markers immediately, and rewind time.
    pub fn stop(&mut self) {
        self.playback = Playback::Paused;
        self.focus = None;

        for body in &mut self.world.bodies {
            body.restore_defaults();
        }
        self.trails.clear();
        self.clock.reset();
        self.world.t = 0.0;

        self.scheduler.request();
    }

    // =====================================================================
    // Body mutation commands (unknown indices are no-ops)
    // =====================================================================

    pub fn set_velocity_component(&mut self, index: usize, axis: Axis, value: f64) {
        if let Some(body) = self.world.body_mut(index) {
            body.velocity[axis.dim()] = value;
            self.scheduler.request();
        }
    }

    /// Reposition one component of a body directly. Unlike the tick loop,
    /// this also emits a trail marker right away so manual moves leave a
    /// trace.
    pub fn set_position_component(&mut self, index: usize, axis: Axis, value: f64) {
        let Self {
            params,
            world,
            trails,
            clock,
            scheduler,
            ..
        } = self;

        if let Some(body) = world.body_mut(index) {
            body.position[axis.dim()] = value;
            body.trail_lifespan_ms = trail_lifespan_ms(body, params);
            trails.emit(body, clock, params);
            scheduler.request();
        }
    }

    pub fn set_mass(&mut self, index: usize, value: f64) {
        if let Some(body) = self.world.body_mut(index) {
            body.mass = value;
            self.scheduler.request();
        }
    }

    // =====================================================================
    // Camera focus (viewer-only, never touches physics)
    // =====================================================================

    pub fn attach_focus(&mut self, index: usize) {
        if self.world.body(index).is_some() {
            self.focus = Some(index);
            self.scheduler.request();
        }
    }

    pub fn detach_focus(&mut self) {
        self.focus = None;
        self.scheduler.request();
    }
}

/// Validate and convert one configured body.
fn build_body(index: usize, bc: &BodyConfig) -> Result<Body> {
    let position = vec3(&bc.x).context("position")?;
    let velocity = vec3(&bc.v).context("velocity")?;
    let spin = if bc.spin.is_empty() {
        NVec3::zeros()
    } else {
        vec3(&bc.spin).context("spin")?
    };

    ensure!(
        bc.m.is_finite() && bc.m > 0.0,
        "mass must be finite and positive, got {}",
        bc.m
    );
    ensure!(
        bc.scale.is_finite() && bc.scale > 0.0,
        "scale must be finite and positive, got {}",
        bc.scale
    );

    Ok(Body::new(
        index,
        bc.category,
        position,
        velocity,
        bc.m,
        bc.scale,
        spin,
    ))
}

/// A configured vector must carry exactly three finite components.
fn vec3(components: &[f64]) -> Result<NVec3> {
    ensure!(
        components.len() == 3,
        "expected 3 components, got {}",
        components.len()
    );
    ensure!(
        components.iter().all(|c| c.is_finite()),
        "components must be finite, got {components:?}"
    );
    Ok(NVec3::new(components[0], components[1], components[2]))
}
