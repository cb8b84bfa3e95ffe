//! Rendering boundary: what a scene backend consumes each frame.
//!
//! # Invariants
//! - Scenes never mutate flight state; they receive a borrowed [`FrameView`].
//! - A scene that is not ready skips the frame without the flight advancing.
//!
//! Meshes, materials, lighting and post-processing live in the backend behind
//! [`SceneAdapter`]. [`DebugTextRenderer`] is the built-in text backend used by
//! the CLI and tests.

mod frame;
mod panel;
mod renderer;

pub use frame::{FrameLoop, FrameOutcome, FrameView, SegmentView};
pub use panel::StatsPanel;
pub use renderer::{DebugTextRenderer, SceneAdapter};

pub fn crate_info() -> &'static str {
    "asteroids-render v0.1.0"
}
