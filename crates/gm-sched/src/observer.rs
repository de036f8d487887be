//! Scheduler observer trait for progress reporting and instrumentation.

use gm_core::{TargetId, Vec3};

/// Callbacks invoked by [`MovementScheduler::tick`][crate::MovementScheduler::tick]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — finish logger
///
/// ```rust,ignore
/// struct FinishLogger;
///
/// impl SchedObserver for FinishLogger {
///     fn on_motion_finished(&mut self, target: TargetId) {
///         println!("{target}: movement ran to completion");
///     }
/// }
/// ```
pub trait SchedObserver {
    /// Called at the very start of each tick, before any group is advanced.
    fn on_tick_start(&mut self, _tick: u64) {}

    /// Called after a target received its summed displacement for this
    /// tick.  Fires for every unpaused group the tick processed, even
    /// when the sum came out to zero.
    fn on_target_displaced(&mut self, _target: TargetId, _delta: Vec3) {}

    /// Called for each movement that ran to natural completion this tick,
    /// after its finish hook.  Premature terminations (explicit removal,
    /// context reset) do not report here.
    fn on_motion_finished(&mut self, _target: TargetId) {}

    /// Called when a target's last queued movement finished and its group
    /// was discarded.  The target itself stays registered.
    fn on_group_drained(&mut self, _target: TargetId) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of targets that received a displacement this
    /// tick.
    fn on_tick_end(&mut self, _tick: u64, _moved: usize) {}
}

/// A [`SchedObserver`] that does nothing.  Use when you need to call `tick`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SchedObserver for NoopObserver {}
