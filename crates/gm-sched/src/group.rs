//! Per-target movement bookkeeping: the active set and the backlog.
//!
//! # Model
//!
//! Each target owns one [`TargetMotionGroup`].  Movements in `active` all
//! advance every tick and their displacements sum; movements in `backlog`
//! wait their turn.  At most one *exclusive* (non-stacked) movement is
//! ever active — it is the group's current movement, and everything
//! submitted behind it queues up until it finishes.  Stacked movements
//! either join the active set immediately or queue as part of a later
//! wave, chosen per submission.
//!
//! # Invariants
//!
//! - `active` holds at most one exclusive movement.
//! - `backlog` is non-empty only while an exclusive movement is active.
//!
//! Both hold by construction: the backlog only gains entries while an
//! exclusive is active, and promotion after an exclusive finishes drains
//! the backlog up to and including the next exclusive.

use std::collections::VecDeque;

use gm_core::{Secs, Vec3};
use gm_motion::{Motion, MotionGenerator, Step};

/// All queued movement state for one target.
#[derive(Debug, Default)]
pub struct TargetMotionGroup {
    /// Movements advancing this tick.  Displacements sum.
    pub active: Vec<Motion>,
    /// Movements waiting for the current exclusive movement to finish,
    /// in submission order.
    pub backlog: VecDeque<Motion>,
    /// Paused groups are skipped by the tick loop entirely; no time
    /// passes for their movements.
    pub paused: bool,
}

impl TargetMotionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active exclusive movement, if one is running.
    #[inline]
    pub fn current_exclusive(&self) -> Option<usize> {
        self.active.iter().position(|m| !m.is_stacked())
    }

    /// Number of exclusive movements in the active set.  `0` or `1`.
    #[inline]
    pub fn exclusive_count(&self) -> usize {
        self.active.iter().filter(|m| !m.is_stacked()).count()
    }

    #[inline]
    pub fn has_exclusive(&self) -> bool {
        self.current_exclusive().is_some()
    }

    /// Total queued movements, active and backlogged.
    #[inline]
    pub fn motion_count(&self) -> usize {
        self.active.len() + self.backlog.len()
    }

    /// `true` once every movement has run out or been removed.
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.active.is_empty() && self.backlog.is_empty()
    }

    /// Queue a movement according to the stacking rules.
    ///
    /// With an exclusive movement active, a stacked submission either
    /// joins it (`stack_with_current`) or queues behind it, and an
    /// exclusive submission always queues.  With no exclusive active,
    /// everything submitted so far stacks, so the incoming movement
    /// starts immediately (and an incoming exclusive becomes current).
    ///
    /// `attempt_merge` first offers the movement to compatible queued
    /// ones; an absorbed movement is dropped without ever starting.
    /// Merge offers respect the stacking boundary: a stacked movement is
    /// only offered to stacked ones, an exclusive only to the most
    /// recently backlogged exclusive.
    pub fn submit(&mut self, motion: Motion, stack_with_current: bool, attempt_merge: bool) {
        if self.has_exclusive() {
            if motion.is_stacked() {
                if stack_with_current {
                    if attempt_merge && self.merge_into_active(&motion, true) {
                        return;
                    }
                    self.active.push(motion);
                } else {
                    if attempt_merge && self.merge_into_backlog_tail(&motion) {
                        return;
                    }
                    self.backlog.push_back(motion);
                }
            } else {
                if attempt_merge && self.merge_into_backlog_exclusive(&motion) {
                    return;
                }
                self.backlog.push_back(motion);
            }
        } else {
            if motion.is_stacked() && attempt_merge && self.merge_into_active(&motion, false) {
                return;
            }
            self.active.push(motion);
        }
    }

    /// Advance every active movement by `dt`.
    ///
    /// Returns the summed displacement and the (ascending) indices of
    /// movements that finished this tick.  A movement that lands exactly
    /// on its endpoint still contributes its final chunk and is reported
    /// finished in the same tick.
    pub fn advance_active(&mut self, dt: Secs) -> (Vec3, Vec<usize>) {
        let mut aggregate = Vec3::ZERO;
        let mut done = Vec::new();
        for (i, m) in self.active.iter_mut().enumerate() {
            match m.advance(dt) {
                Step::Done => done.push(i),
                Step::Displace(delta) => {
                    aggregate += delta;
                    if m.time_left() <= 0.0 {
                        done.push(i);
                    }
                }
            }
        }
        (aggregate, done)
    }

    /// Move backlog entries into the active set until one exclusive has
    /// been promoted.  Leading stacked entries ride along with it.
    pub fn promote(&mut self) {
        while let Some(m) = self.backlog.pop_front() {
            let exclusive = !m.is_stacked();
            self.active.push(m);
            if exclusive {
                break;
            }
        }
    }

    // ── Merge scans ───────────────────────────────────────────────────────────

    /// Offer `incoming` to each active movement in turn.  `stacked_only`
    /// skips the exclusive movement, keeping the stacking boundary.
    fn merge_into_active(&mut self, incoming: &Motion, stacked_only: bool) -> bool {
        for m in &mut self.active {
            if stacked_only && !m.is_stacked() {
                continue;
            }
            if m.attempt_merge(incoming) {
                return true;
            }
        }
        false
    }

    /// Offer `incoming` to the backlog's trailing stacked run, newest
    /// first.  An exclusive entry is a barrier: movements behind it
    /// belong to an earlier wave and must not absorb later submissions.
    fn merge_into_backlog_tail(&mut self, incoming: &Motion) -> bool {
        for m in self.backlog.iter_mut().rev() {
            if !m.is_stacked() {
                return false;
            }
            if m.attempt_merge(incoming) {
                return true;
            }
        }
        false
    }

    /// Offer `incoming` to the most recently backlogged exclusive
    /// movement, skipping stacked entries on the way.  Earlier exclusives
    /// never see the offer; their waves are already fixed.
    fn merge_into_backlog_exclusive(&mut self, incoming: &Motion) -> bool {
        for m in self.backlog.iter_mut().rev() {
            if m.is_stacked() {
                continue;
            }
            return m.attempt_merge(incoming);
        }
        false
    }
}
