//! `gm-motion` — the motion generator contract and the built-in
//! parametric generators for the `rust_gm` framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`generator`] | `MotionGenerator` trait, `Step`                          |
//! | [`kind`]      | `Motion` — tagged enum of generator kinds                |
//! | [`linear`]    | `LinearMovement` (the one built-in that merges)          |
//! | [`arc`]       | `ArcCore` sampling basis, `CircularArcMovement`          |
//! | [`circle`]    | `FullCircleMovement`                                     |
//! | [`ellipse`]   | `EllipticalArcMovement`                                  |
//! | [`error`]     | `MotionError`, `MotionResult<T>`                         |
//!
//! # Sampling model
//!
//! Every generator samples **absolute elapsed time**: a tick's
//! displacement is `position(elapsed + dt) − position(elapsed)`, never an
//! integrated velocity step.  Summed over a generator's lifetime the
//! steps telescope to `position(duration) − position(0)`, so the landing
//! point is independent of how the host slices time.

pub mod arc;
pub mod circle;
pub mod ellipse;
pub mod error;
pub mod generator;
pub mod kind;
pub mod linear;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arc::{ArcCore, CircularArcMovement, MAX_ARC_DEG, MIN_ARC_DEG, SNAP_ARC_DEG};
pub use circle::FullCircleMovement;
pub use ellipse::EllipticalArcMovement;
pub use error::{MotionError, MotionResult};
pub use generator::{MotionGenerator, Step};
pub use kind::Motion;
pub use linear::{LinearMovement, MERGE_WINDOW};
