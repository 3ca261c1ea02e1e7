//! Playback state machine
//!
//! Two states, `Running` and `Paused`, plus the instantaneous `stop`
//! transition handled by the `Scenario` controller: stop lands in `Paused`
//! after a hard reset of bodies, trails, clock, and focus.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    Running,
    #[default]
    Paused,
}

impl Playback {
    pub fn is_running(&self) -> bool {
        matches!(self, Playback::Running)
    }
}
