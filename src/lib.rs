pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyDefaults, Category, NVec3, World};
pub use simulation::params::Parameters;
pub use simulation::forces::{KickSet, NewtonianGravity, VelocityKick};
pub use simulation::integrator::advance_world;
pub use simulation::clock::SimClock;
pub use simulation::trail::{trail_lifespan_ms, TrailGroup, TrailMarker};
pub use simulation::indicators::{
    rescale_container, update_container_scales, velocity_indicator, VelocityIndicator,
};
pub use simulation::playback::Playback;
pub use simulation::scheduler::FrameScheduler;
pub use simulation::scenario::{Axis, Scenario};

pub use configuration::config::{BodyConfig, ScenarioConfig};

pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_gravity, bench_tick};
