use crate::boundary::Boundary;
use crate::clock::RateGate;
use crate::config::FlightConfig;
use crate::rng::SeededRng;
use crate::ship::{ShipKinematics, ShipState};
use crate::starfield::Starfield;
use crate::stats::StatsSnapshot;
use crate::trail::{TrailLog, TrailRecorder};
use asteroids_common::{Axis, Color, Control};
use glam::Vec3;
use serde::Serialize;

/// A record of every state-machine transition the flight goes through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FlightEvent {
    /// The ship crossed one or more faces of the volume.
    Wrapped { tick: u64, axes: Vec<Axis> },
    /// The trail was discarded because of a wrap.
    TrailBroken { tick: u64 },
    /// A user-requested segment was opened.
    SegmentStarted {
        tick: u64,
        index: usize,
        color: Color,
    },
    /// The periodic velocity increment ran.
    Accelerated { tick: u64, velocity: Vec3 },
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    /// Unclamped next position; also the point the ship looks at.
    pub candidate: Vec3,
    pub position: Vec3,
    pub wrapped: bool,
    pub sampled: bool,
    pub stats: StatsSnapshot,
}

/// Ship, boundary and trail wired together into the per-frame update.
///
/// Controls take `&mut self`, so any control applied before [`Flight::tick`]
/// is fully visible to that tick.
#[derive(Debug, Clone)]
pub struct Flight {
    kinematics: ShipKinematics,
    boundary: Boundary,
    trail: TrailRecorder,
    starfield: Starfield,
    accel_gate: RateGate,
    sample_gate: RateGate,
    look_at: Vec3,
    stats: StatsSnapshot,
    fallback_color: Color,
    tick: u64,
    events: Vec<FlightEvent>,
}

impl Flight {
    /// Start a flight at `start_ms` on the caller's clock.
    pub fn new(config: &FlightConfig, start_ms: u64) -> Self {
        let mut rng = SeededRng::new(config.seed);
        let starfield = Starfield::generate(config.star_count, config.half_extent, &mut rng);
        let ship = ShipState::at_rest_with(config.initial_velocity);
        let kinematics = ShipKinematics::new(ship, config.accel);
        let look_at = kinematics.advance();
        tracing::debug!(
            seed = config.seed,
            stars = starfield.len(),
            "flight started"
        );
        Self {
            kinematics,
            boundary: Boundary::new(config.half_extent),
            trail: TrailRecorder::new(config.palette.clone(), rng),
            starfield,
            accel_gate: RateGate::new(config.accel_interval_ms, start_ms),
            sample_gate: RateGate::new(config.sample_interval_ms, start_ms),
            look_at,
            stats: StatsSnapshot::of(&ship),
            fallback_color: config.fallback_color,
            tick: 0,
            events: Vec::new(),
        }
    }

    pub fn ship(&self) -> &ShipState {
        self.kinematics.state()
    }

    pub fn trail(&self) -> &TrailLog {
        self.trail.log()
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// Point the ship's nose faces: the unclamped candidate of the last tick.
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats
    }

    pub fn fallback_color(&self) -> Color {
        self.fallback_color
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn events(&self) -> &[FlightEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<FlightEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one discrete control edit.
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Thrust(delta) => self.kinematics.apply_thrust(delta),
            Control::Yaw(delta) => self.kinematics.apply_yaw(delta),
            Control::Azimuth(delta) => self.kinematics.apply_azimuth(delta),
            Control::NewSegment => {
                let (index, color) = self.trail.new_segment();
                tracing::info!(index, %color, "new trail segment");
                self.events.push(FlightEvent::SegmentStarted {
                    tick: self.tick,
                    index,
                    color,
                });
            }
        }
        self.stats = StatsSnapshot::of(self.kinematics.state());
    }

    /// Run one frame of the update: advance, clamp, maybe break the trail,
    /// maybe accelerate, maybe sample.
    pub fn tick(&mut self, now_ms: u64) -> TickReport {
        self.tick += 1;

        let candidate = self.kinematics.advance();
        self.look_at = candidate;

        let clamped = self.boundary.clamp_position(candidate);
        let wrapped = clamped.wrapped();
        if wrapped {
            self.trail.break_segment();
            tracing::info!(tick = self.tick, axes = ?clamped.crossed, "boundary wrap, trail reset");
            self.events.push(FlightEvent::Wrapped {
                tick: self.tick,
                axes: clamped.crossed,
            });
            self.events.push(FlightEvent::TrailBroken { tick: self.tick });
        }
        self.kinematics.commit(clamped.position);

        if self.accel_gate.ready(now_ms) && self.kinematics.accelerate() {
            let velocity = self.kinematics.state().velocity;
            tracing::debug!(tick = self.tick, ?velocity, "velocity increment");
            self.events.push(FlightEvent::Accelerated {
                tick: self.tick,
                velocity,
            });
        }

        let sampled = self.sample_gate.ready(now_ms);
        if sampled {
            self.trail.sample(clamped.position);
        }

        self.stats = StatsSnapshot::of(self.kinematics.state());

        TickReport {
            tick: self.tick,
            candidate,
            position: clamped.position,
            wrapped,
            sampled,
            stats: self.stats,
        }
    }
}
