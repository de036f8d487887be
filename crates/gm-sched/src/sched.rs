//! The `MovementScheduler` struct and its tick loop.

use std::collections::BTreeMap;
#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap;

use gm_core::{SchedConfig, Secs, TargetId, TickSource, Vec3};
use gm_motion::{Motion, MotionGenerator};

use crate::{MotionTarget, SchedError, SchedObserver, SchedResult, TargetMotionGroup};

#[cfg(feature = "fx-hash")]
type TargetMap<T> = FxHashMap<TargetId, T>;
#[cfg(not(feature = "fx-hash"))]
type TargetMap<T> = HashMap<TargetId, T>;

// ── MovementScheduler ─────────────────────────────────────────────────────────

/// The central movement driver.
///
/// `MovementScheduler<T>` owns the registered targets and one
/// [`TargetMotionGroup`] per target that currently has movements queued.
/// The host calls [`tick`](Self::tick) once per frame (or per fixed
/// step), and each tick:
///
/// 1. **Advance**: every active movement of every unpaused group advances
///    by `dt`; per group the displacements sum into one aggregate.
/// 2. **Apply**: the aggregate is handed to the target in a single
///    [`apply_displacement`](MotionTarget::apply_displacement) call.
/// 3. **Finish**: movements that ran out this tick get their finish hook,
///    in submission order; if the group's exclusive movement was among
///    them, the next wave is promoted from the backlog.
/// 4. **Discard**: groups left with nothing queued are dropped.  Their
///    targets stay registered and can be resubmitted to at any time.
///
/// Groups are processed in ascending [`TargetId`] order, so a run with
/// the same submissions and the same tick deltas is deterministic.
///
/// # Design
///
/// All entry points take `&mut self`; the scheduler has no interior
/// mutability and no background work.  Hosts that tick from multiple
/// threads wrap it in their own lock, and everything that happened
/// between two `tick` calls is observed atomically by the next tick.
pub struct MovementScheduler<T> {
    /// Tick-source configuration the host reads to decide when to call
    /// [`tick`](Self::tick).  The scheduler itself only consumes the
    /// `dt` values the host passes in.
    pub config: SchedConfig,

    /// Gate over the whole tick loop.  While `false`, [`tick`](Self::tick)
    /// does nothing: no time passes, no hooks fire.
    enabled: bool,

    /// Next id to issue.  Monotonic over the scheduler's whole lifetime,
    /// surviving [`reset`](Self::reset), so a stale id can never alias a
    /// later target.
    next_id: u64,

    /// Registered targets by id.
    targets: TargetMap<T>,

    /// Movement state for targets with at least one queued movement.
    /// Ordered map so tick processing is deterministic.
    groups: BTreeMap<TargetId, TargetMotionGroup>,

    /// Completed tick count.
    ticks: u64,
}

impl<T: MotionTarget> MovementScheduler<T> {
    pub fn new(config: SchedConfig) -> Self {
        Self {
            config,
            enabled: true,
            next_id: 0,
            targets: TargetMap::default(),
            groups: BTreeMap::new(),
            ticks: 0,
        }
    }

    // ── Registry ──────────────────────────────────────────────────────────

    /// Register a target and issue its id.
    pub fn register(&mut self, target: T) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.targets.insert(id, target);
        id
    }

    /// Remove a target from the scheduler, returning it to the caller.
    ///
    /// Any queued movements are dropped without finish hooks, the same
    /// way a context reset drops them.  Use [`remove`](Self::remove)
    /// first if premature-finish notification matters.
    pub fn unregister(&mut self, id: TargetId) -> Option<T> {
        self.groups.remove(&id);
        self.targets.remove(&id)
    }

    /// Current position of a registered target.
    pub fn position(&self, id: TargetId) -> Option<Vec3> {
        self.targets.get(&id).map(|t| t.position())
    }

    pub fn target(&self, id: TargetId) -> Option<&T> {
        self.targets.get(&id)
    }

    pub fn target_mut(&mut self, id: TargetId) -> Option<&mut T> {
        self.targets.get_mut(&id)
    }

    /// Movement state for a target, if it has any movements queued.
    pub fn group(&self, id: TargetId) -> Option<&TargetMotionGroup> {
        self.groups.get(&id)
    }

    /// Number of targets that currently have movements queued.
    pub fn busy_targets(&self) -> usize {
        self.groups.len()
    }

    // ── Submission ────────────────────────────────────────────────────────

    /// Queue a movement for a target.
    ///
    /// `stack_with_current` asks for a stacked movement to run alongside
    /// the current exclusive movement instead of queueing behind it; it
    /// has no effect on exclusive submissions, or when nothing exclusive
    /// is running.  `attempt_merge` first offers the movement to
    /// compatible queued ones (see [`TargetMotionGroup::submit`]); an
    /// absorbed movement never starts and never gets a finish hook.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownTarget`] if `id` was never issued or its
    /// target has been unregistered.
    pub fn submit(
        &mut self,
        id:                 TargetId,
        motion:             Motion,
        stack_with_current: bool,
        attempt_merge:      bool,
    ) -> SchedResult<()> {
        if !self.targets.contains_key(&id) {
            return Err(SchedError::UnknownTarget(id));
        }
        self.groups
            .entry(id)
            .or_insert_with(TargetMotionGroup::new)
            .submit(motion, stack_with_current, attempt_merge);
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance all movements by `dt` seconds and apply the results.
    ///
    /// Returns the number of targets that received a displacement this
    /// tick.  Does nothing while the scheduler is disabled.
    ///
    /// Calls observer hooks at every stage boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn tick<O: SchedObserver>(&mut self, dt: Secs, observer: &mut O) -> usize {
        if !self.enabled {
            return 0;
        }
        debug_assert!(dt >= 0.0, "negative dt");

        let tick = self.ticks;
        observer.on_tick_start(tick);

        let mut moved = 0;
        let mut drained = Vec::new();
        for (&id, group) in self.groups.iter_mut() {
            if group.paused {
                continue;
            }

            let (aggregate, done) = group.advance_active(dt);

            if let Some(target) = self.targets.get_mut(&id) {
                target.apply_displacement(aggregate);
                observer.on_target_displaced(id, aggregate);
                moved += 1;
            }

            if !done.is_empty() {
                let mut exclusive_finished = false;
                for &i in &done {
                    if !group.active[i].is_stacked() {
                        exclusive_finished = true;
                    }
                    group.active[i].on_finish(false);
                    observer.on_motion_finished(id);
                }
                for &i in done.iter().rev() {
                    group.active.remove(i);
                }
                if exclusive_finished {
                    group.promote();
                }
                if group.is_drained() {
                    drained.push(id);
                }
            }
        }

        for id in drained {
            self.groups.remove(&id);
            observer.on_group_drained(id);
        }

        observer.on_tick_end(tick, moved);
        self.ticks += 1;
        moved
    }

    // ── Manipulation ──────────────────────────────────────────────────────

    /// Pause or resume a target's movements.  A paused target's group is
    /// skipped entirely: no time passes for any of its movements.
    ///
    /// Returns `false` if the target has no movements queued.
    pub fn pause(&mut self, id: TargetId, paused: bool) -> bool {
        match self.groups.get_mut(&id) {
            Some(group) => {
                group.paused = paused;
                true
            }
            None => false,
        }
    }

    /// End every queued movement of a target prematurely and discard its
    /// group.  Backlogged movements are notified first, then active ones,
    /// each with `premature = true`.  The target stays registered.
    ///
    /// Returns `false` if the target had no movements queued.
    pub fn remove(&mut self, id: TargetId) -> bool {
        let Some(mut group) = self.groups.remove(&id) else {
            return false;
        };
        for m in group.backlog.iter_mut() {
            m.on_finish(true);
        }
        for m in group.active.iter_mut() {
            m.on_finish(true);
        }
        true
    }

    /// End the current exclusive movement prematurely and promote the
    /// next wave.  With `clear_stacked`, the stacked movements running
    /// alongside it are ended too instead of carrying over.
    ///
    /// Returns `true` if any movement was ended.  A target whose queued
    /// movements are all stacked has no current movement; the call then
    /// only does something if `clear_stacked` is set.
    pub fn remove_current(&mut self, id: TargetId, clear_stacked: bool) -> bool {
        let Some(group) = self.groups.get_mut(&id) else {
            return false;
        };

        let mut changed = false;
        if let Some(i) = group.current_exclusive() {
            group.active[i].on_finish(true);
            group.active.remove(i);
            changed = true;
        }
        if clear_stacked && !group.active.is_empty() {
            for m in group.active.iter_mut() {
                m.on_finish(true);
            }
            group.active.clear();
            changed = true;
        }

        group.promote();
        if group.is_drained() {
            self.groups.remove(&id);
        }
        changed
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Record which host clock drives the tick loop.  Purely advisory —
    /// the scheduler consumes whatever `dt` the host passes to
    /// [`tick`](Self::tick).
    pub fn set_tick_source(&mut self, source: TickSource) {
        self.config.tick_source = source;
    }

    /// Enable or disable the tick loop.  While disabled, ticks are
    /// no-ops: movements hold their remaining time and nothing fires.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drop all targets and all queued movements without firing any
    /// finish hooks, the way a host does on a scene or level change.
    /// Issued ids stay retired; the tick counter keeps its value.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.targets.clear();
    }
}
