use crate::ship::ShipState;
use serde::Serialize;
use std::f32::consts::TAU;

/// Observational readout for the stats panel, recomputed every tick.
///
/// The velocity figure scales only the z term by 100. The readout has always
/// been computed this way and panel consumers depend on the numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub angle: i64,
    pub azimuth: i64,
    pub velocity: i64,
}

impl StatsSnapshot {
    pub fn of(ship: &ShipState) -> Self {
        let v = ship.velocity;
        Self {
            angle: round_half_up(ship.angle * TAU),
            azimuth: round_half_up(ship.azimuth * TAU),
            velocity: round_half_up(v.x + v.y + v.z * 100.0),
        }
    }
}

/// Round to nearest with halves going toward +∞, so -2.5 reads as -2.
fn round_half_up(x: f32) -> i64 {
    (x + 0.5).floor() as i64
}
