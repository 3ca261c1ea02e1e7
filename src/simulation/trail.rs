//! Trail markers and their decay
//!
//! Bodies leave an ephemeral marker at their position every tick (and on
//! direct user repositioning). Each marker snapshots its source body's
//! current trail lifespan at emission; a per-frame sweep fades markers out
//! over the last 30% of that lifespan and retires them afterwards.

use super::clock::SimClock;
use super::params::Parameters;
use super::states::{Body, Category, NVec3};

/// One ephemeral point recording a body's past position.
#[derive(Debug, Clone)]
pub struct TrailMarker {
    pub position: NVec3,
    pub category: Category, // emitting body's category, for render styling
    pub born_ms: f64,
    pub lifespan_ms: f64, // snapshot at emission, not live-recomputed
    pub fade_start_ms: f64,
}

impl TrailMarker {
    /// Age in ms at `now_ms`.
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.born_ms
    }

    /// Opacity at `now_ms`: fully opaque before the fade window, linear
    /// 1.0 -> 0.0 across it, 0.0 once expired.
    pub fn opacity(&self, now_ms: f64) -> f64 {
        let age = self.age_ms(now_ms);
        if age < self.fade_start_ms {
            return 1.0;
        }
        if age > self.lifespan_ms {
            return 0.0;
        }
        let fade_progress = (age - self.fade_start_ms) / (self.lifespan_ms - self.fade_start_ms);
        (1.0 - fade_progress).max(0.0)
    }

    pub fn expired(&self, now_ms: f64) -> bool {
        self.age_ms(now_ms) > self.lifespan_ms
    }
}

/// Exclusive owner of all live trail markers.
#[derive(Debug, Clone, Default)]
pub struct TrailGroup {
    markers: Vec<TrailMarker>,
}

impl TrailGroup {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Emit a marker at `body`'s current position, snapshotting its lifespan.
    /// When the defensive cap is exceeded the oldest markers are dropped.
    pub fn emit(&mut self, body: &Body, clock: &SimClock, params: &Parameters) {
        let lifespan_ms = body.trail_lifespan_ms;
        self.markers.push(TrailMarker {
            position: body.position,
            category: body.category,
            born_ms: clock.now_ms(),
            lifespan_ms,
            fade_start_ms: lifespan_ms * params.trail_fade_fraction,
        });

        if self.markers.len() > params.trail_marker_cap {
            let excess = self.markers.len() - params.trail_marker_cap;
            self.markers.drain(..excess);
        }
    }

    /// Retire every marker whose age exceeds its lifespan. Retirement is
    /// independent per marker.
    pub fn sweep(&mut self, clock: &SimClock) {
        let now = clock.now_ms();
        self.markers.retain(|m| !m.expired(now));
    }

    /// Remove all markers immediately, without fading (hard reset).
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn markers(&self) -> &[TrailMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Trail lifespan for a body: `clamp(distance_to_origin ^ exponent *
/// multiplier, min, max)`. Recomputed every tick for every body, whether or
/// not a marker is emitted this tick.
pub fn trail_lifespan_ms(body: &Body, params: &Parameters) -> f64 {
    let distance = body.distance_to_origin();
    let raw = distance.powf(params.trail_distance_exponent) * params.trail_multiplier;
    raw.clamp(params.trail_min_lifespan_ms, params.trail_max_lifespan_ms)
}
