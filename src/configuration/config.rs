//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`crate::simulation::params::Parameters`] – tunable constants (optional,
//!   every key falls back to its default)
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 5.0e-9               # gravitational constant
//!   pin_star: false         # exempt stars from displacement
//!   trail_multiplier: 425.0
//!
//! bodies:
//!   - category: star
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 1.0e10
//!     scale: 5.0
//!     spin: [ 0.0, 0.05, 0.0 ]
//!   - category: planet
//!     x: [ 60.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, -0.9 ]
//!     m: 100.0
//!     scale: 1.0
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation (`Scenario`), validating every body along the way.

use serde::Deserialize;

use crate::simulation::params::Parameters;
use crate::simulation::states::Category;

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub category: Category, // star or planet, drives pin policy and trail styling
    pub x: Vec<f64>,        // initial position in simulation units
    pub v: Vec<f64>,        // initial velocity in simulation units per tick
    pub m: f64,             // mass of the body
    pub scale: f64,         // visual radius multiplier
    #[serde(default)]
    pub spin: Vec<f64>,     // mesh rotation rate (rad/s per axis), optional
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: Parameters, // tunable constants, all optional
    pub bodies: Vec<BodyConfig>, // list of bodies defining the initial state
}
