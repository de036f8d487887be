//! Time model for the movement scheduler.
//!
//! # Design
//!
//! The scheduler does not own a clock: the host calls `tick(dt)` once per
//! frame/update and supplies the elapsed seconds itself.  Generators
//! sample **absolute elapsed time** against their total duration, so the
//! distribution of `dt` values never changes where a motion ends up —
//! only how many intermediate positions get rendered.
//!
//! [`TickSource`] records which host clock feeds `dt` (a fixed physics
//! step vs. the variable frame delta).  It is configuration for the host
//! integration layer; the scheduling algorithms are agnostic.

use std::fmt;

/// Elapsed simulated seconds, as supplied by the host each tick.
pub type Secs = f32;

// ── TickSource ────────────────────────────────────────────────────────────────

/// Which host clock supplies `dt` to the scheduler's `tick`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickSource {
    /// `dt` is the fixed physics step — identical every tick.
    Fixed,
    /// `dt` is the frame delta — varies tick to tick.
    #[default]
    Variable,
}

impl TickSource {
    #[inline]
    pub fn is_fixed(self) -> bool {
        matches!(self, TickSource::Fixed)
    }

    /// Map the host-facing `fixed_step` flag onto a source.
    #[inline]
    pub fn from_fixed_step(fixed_step: bool) -> Self {
        if fixed_step { TickSource::Fixed } else { TickSource::Variable }
    }
}

impl fmt::Display for TickSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickSource::Fixed    => write!(f, "fixed"),
            TickSource::Variable => write!(f, "variable"),
        }
    }
}

// ── SchedConfig ───────────────────────────────────────────────────────────────

/// Scheduler configuration, passed to `MovementScheduler::new`.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedConfig {
    /// Which host clock feeds `dt`.  Default: [`TickSource::Variable`].
    pub tick_source: TickSource,
}

impl SchedConfig {
    /// Config for a host driving the scheduler from its fixed physics step.
    pub fn fixed_step() -> Self {
        Self { tick_source: TickSource::Fixed }
    }
}
