//! orbit — smallest example for the rust_gm movement framework.
//!
//! Drives three headless point targets through a mixed queue: an
//! exclusive glide with a stacked rider and a queued return arc, a
//! closed orbit, and a pair of merged drifts.  Swap `PointTarget` for
//! your own `MotionTarget` impl to move real entities the same way.

use std::time::Instant;

use anyhow::Result;

use gm_core::{SchedConfig, TargetId, Vec3};
use gm_motion::{CircularArcMovement, FullCircleMovement, LinearMovement};
use gm_sched::{MovementScheduler, PointTarget, SchedObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEP_SECS:  f32   = 0.05; // 20 ticks per simulated second
const PRINT_EVERY: u64  = 10;   // position table twice per second
const MAX_TICKS:  u64   = 400;  // safety cap, well past the longest queue

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints movement lifecycle events and counts apply calls.
#[derive(Default)]
struct FinishLogger {
    applies: usize,
}

impl SchedObserver for FinishLogger {
    fn on_target_displaced(&mut self, _target: TargetId, _delta: Vec3) {
        self.applies += 1;
    }

    fn on_motion_finished(&mut self, target: TargetId) {
        println!("  [finish] {target} completed a movement");
    }

    fn on_group_drained(&mut self, target: TargetId) {
        println!("  [drain]  {target} has nothing queued");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== orbit — rust_gm movement scheduler ===");
    println!("Step: {STEP_SECS} s  |  Targets: 3");
    println!();

    let mut sched = MovementScheduler::new(SchedConfig::fixed_step());

    // 1. Register the targets.
    let shuttle_home = Vec3::ZERO;
    let beacon_home  = Vec3::new(0.0, 0.0, 6.0);
    let drifter_home = Vec3::new(0.0, 0.0, 3.0);
    let shuttle = sched.register(PointTarget::at(shuttle_home));
    let beacon  = sched.register(PointTarget::at(beacon_home));
    let drifter = sched.register(PointTarget::at(drifter_home));
    let roster = [(shuttle, "shuttle"), (beacon, "beacon"), (drifter, "drifter")];

    // 2. Shuttle: exclusive glide out, stacked rider lifting it, then a
    //    queued arc swinging it back to the lifted start point.
    let glide = LinearMovement::new(Vec3::new(4.0, 0.0, 0.0), 2.0, false)?;
    let rider = LinearMovement::new(Vec3::new(0.0, 0.5, 0.0), 2.0, true)?;
    let swing = CircularArcMovement::new(
        Vec3::new(4.0, 0.5, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(2.0, 0.5, -2.0),
        120.0,
        1.5,
        false,
    )?;
    sched.submit(shuttle, glide.into(), false, false)?;
    sched.submit(shuttle, rider.into(), true, false)?;
    sched.submit(shuttle, swing.into(), false, false)?;

    // 3. Beacon: one closed orbit, back where it started.
    let orbit = FullCircleMovement::new(
        beacon_home,
        beacon_home + Vec3::new(0.0, 0.0, 2.0),
        beacon_home + Vec3::new(1.0, 0.0, 1.0),
        3.0,
        false,
    )?;
    sched.submit(beacon, orbit.into(), false, false)?;

    // 4. Drifter: two fresh drifts over the same window; the second is
    //    offered for merging and absorbed, so one movement does both.
    let east = LinearMovement::new(Vec3::new(0.6, 0.0, 0.0), 1.2, true)?;
    let up   = LinearMovement::new(Vec3::new(0.0, 0.6, 0.0), 1.2, true)?;
    sched.submit(drifter, east.into(), false, false)?;
    sched.submit(drifter, up.into(), false, true)?;
    let drifter_queue = sched.group(drifter).map_or(0, |g| g.motion_count());
    println!("Drifter queue after merge: {drifter_queue} movement(s)");
    println!();

    // 5. Fixed-step loop until every queue drains.
    let mut obs = FinishLogger::default();
    let t0 = Instant::now();
    while sched.busy_targets() > 0 && sched.ticks() < MAX_TICKS {
        sched.tick(STEP_SECS, &mut obs);

        if sched.ticks().is_multiple_of(PRINT_EVERY) {
            let t = sched.ticks() as f32 * STEP_SECS;
            print!("t={t:5.2}s ");
            for &(id, name) in &roster {
                if let Some(p) = sched.position(id) {
                    print!(" {name} {p}");
                }
            }
            println!();
        }
    }
    let elapsed = t0.elapsed();

    // 6. Summary.
    println!();
    println!(
        "Drained in {} ticks ({} apply calls, {:.3} ms wall)",
        sched.ticks(),
        obs.applies,
        elapsed.as_secs_f64() * 1e3,
    );
    println!();
    println!("{:<10} {:<26} {:<10}", "Target", "Final position", "From home");
    println!("{}", "-".repeat(48));
    let homes = [shuttle_home, beacon_home, drifter_home];
    for (&(id, name), home) in roster.iter().zip(homes) {
        if let Some(p) = sched.position(id) {
            println!("{:<10} {:<26} {:<10.3}", name, p.to_string(), p.distance(home));
        }
    }

    Ok(())
}
