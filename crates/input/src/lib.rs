//! Input routing: raw key presses become discrete [`Control`] edits.
//!
//! # Invariants
//! - Bindings are fixed; only the step sizes are tunable.
//! - The kernel sees controls, never keys.

pub mod router;

pub use asteroids_common::Control;
pub use router::{ControlSteps, InputRouter};

pub fn crate_info() -> &'static str {
    "asteroids-input v0.1.0"
}
