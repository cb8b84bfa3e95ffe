//! Flight kernel: authoritative ship state, boundary wrap and trail segmentation.
//!
//! # Invariants
//! - Angles stay in `[0, 2π)`.
//! - Positions are clamped into the flight volume before anyone reads them.
//! - The trail log always holds at least one segment, and appends go to the active one.
//! - Rate limits are measured in wall-clock milliseconds, never in frames.

pub mod boundary;
pub mod clock;
pub mod config;
pub mod flight;
pub mod rng;
pub mod ship;
pub mod starfield;
pub mod stats;
pub mod trail;

pub use boundary::{Boundary, Clamped};
pub use clock::{Clock, ManualClock, RateGate, SystemClock};
pub use config::{ConfigError, FlightConfig};
pub use flight::{Flight, FlightEvent, TickReport};
pub use rng::SeededRng;
pub use ship::{ShipKinematics, ShipState};
pub use starfield::{Star, Starfield};
pub use stats::StatsSnapshot;
pub use trail::{TrailLog, TrailRecorder, TrailSegment};

pub fn crate_info() -> &'static str {
    "asteroids-kernel v0.1.0"
}
