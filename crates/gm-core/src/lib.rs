//! `gm-core` — foundational types for the `rust_gm` movement framework.
//!
//! This crate is a dependency of every other `gm-*` crate.  It
//! intentionally has no `gm-*` dependencies and no required external ones
//! (only optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                            |
//! |----------|-----------------------------------------------------|
//! | [`vec`]  | `Vec3`, `EPSILON`, collinearity/margin predicates   |
//! | [`ids`]  | `TargetId` — scheduler-issued identity token        |
//! | [`time`] | `Secs`, `TickSource`, `SchedConfig`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod time;
pub mod vec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::TargetId;
pub use time::{SchedConfig, Secs, TickSource};
pub use vec::{EPSILON, Vec3};
