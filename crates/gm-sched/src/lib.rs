//! `gm-sched` — per-target movement scheduling for the rust_gm framework.
//!
//! # Tick loop
//!
//! ```text
//! for each unpaused group, ascending TargetId:
//!   ① Advance  — every active movement advances by dt; displacements sum.
//!   ② Apply    — the target gets the summed displacement in one call.
//!   ③ Finish   — movements that ran out fire their finish hook in
//!                submission order; finishing the exclusive movement
//!                promotes the next wave from the backlog.
//!   ④ Discard  — groups left with nothing queued are dropped.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                            |
//! |-----------|---------------------------------------------------|
//! | `fx-hash` | Uses FxHash instead of SipHash for the registry.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gm_core::{SchedConfig, Vec3};
//! use gm_motion::LinearMovement;
//! use gm_sched::{MovementScheduler, NoopObserver, PointTarget};
//!
//! let mut sched = MovementScheduler::new(SchedConfig::default());
//! let id = sched.register(PointTarget::at(Vec3::ZERO));
//! sched.submit(id, LinearMovement::new(Vec3::X, 2.0, false)?.into(), false, false)?;
//! sched.tick(0.5, &mut NoopObserver);
//! ```

pub mod error;
pub mod group;
pub mod observer;
pub mod sched;
pub mod target;


pub use error::{SchedError, SchedResult};
pub use group::TargetMotionGroup;
pub use observer::{NoopObserver, SchedObserver};
pub use sched::MovementScheduler;
pub use target::{MotionTarget, PointTarget};
