use asteroids_kernel::StatsSnapshot;
use std::fmt;

/// Text form of the stats panel: heading, azimuth and speed readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsPanel(pub StatsSnapshot);

impl fmt::Display for StatsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        write!(f, "θ {}  φ {}  {} m/s", s.angle, s.azimuth, s.velocity)
    }
}
