use crate::renderer::SceneAdapter;
use asteroids_common::{Color, Control};
use asteroids_kernel::{Clock, Flight, Star, StatsSnapshot, TickReport};
use glam::Vec3;
use serde::Serialize;

/// One trail segment as the scene draws it, with its color resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentView<'a> {
    pub points: &'a [Vec3],
    pub color: Color,
}

/// Everything a scene needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView<'a> {
    pub tick: u64,
    pub ship_position: Vec3,
    pub look_at: Vec3,
    pub segments: Vec<SegmentView<'a>>,
    pub active_segment: usize,
    pub stats: StatsSnapshot,
    pub stars: &'a [Star],
}

impl<'a> FrameView<'a> {
    pub fn capture(flight: &'a Flight) -> Self {
        let fallback = flight.fallback_color();
        let segments = flight
            .trail()
            .segments()
            .iter()
            .map(|s| SegmentView {
                points: s.points(),
                color: s.color().unwrap_or(fallback),
            })
            .collect();
        Self {
            tick: flight.tick_count(),
            ship_position: flight.ship().position,
            look_at: flight.look_at(),
            segments,
            active_segment: flight.trail().active_index(),
            stats: flight.stats(),
            stars: flight.starfield().stars(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The scene was not ready; nothing moved. Retried on the next frame.
    Skipped,
    Drawn(TickReport),
}

/// Drives a [`Flight`] once per rendered frame against a clock.
pub struct FrameLoop<C: Clock> {
    flight: Flight,
    clock: C,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(flight: Flight, clock: C) -> Self {
        Self { flight, clock }
    }

    pub fn flight(&self) -> &Flight {
        &self.flight
    }

    pub fn flight_mut(&mut self) -> &mut Flight {
        &mut self.flight
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Apply a control immediately; the next [`Self::frame`] observes it.
    pub fn apply(&mut self, control: Control) {
        self.flight.apply(control);
    }

    /// Run one frame: readiness check, tick, draw.
    pub fn frame<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) -> FrameOutcome {
        if !scene.is_ready() {
            tracing::trace!("scene not ready, skipping frame");
            return FrameOutcome::Skipped;
        }
        let report = self.flight.tick(self.clock.now_ms());
        scene.draw(&FrameView::capture(&self.flight));
        FrameOutcome::Drawn(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asteroids_kernel::{FlightConfig, ManualClock};

    #[derive(Default)]
    struct RecordingScene {
        ready: bool,
        draws: Vec<(u64, usize, Vec3)>,
    }

    impl SceneAdapter for RecordingScene {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn draw(&mut self, frame: &FrameView<'_>) {
            self.draws
                .push((frame.tick, frame.segments.len(), frame.ship_position));
        }
    }

    fn frame_loop() -> FrameLoop<ManualClock> {
        FrameLoop::new(Flight::new(&FlightConfig::default(), 0), ManualClock::new(0))
    }

    #[test]
    fn unready_scene_skips_without_ticking() {
        let mut fl = frame_loop();
        let mut scene = RecordingScene::default();
        fl.clock().advance(16);
        assert_eq!(fl.frame(&mut scene), FrameOutcome::Skipped);
        assert_eq!(fl.flight().tick_count(), 0);
        assert_eq!(fl.flight().ship().position, Vec3::ZERO);
        assert!(scene.draws.is_empty());

        scene.ready = true;
        assert!(matches!(fl.frame(&mut scene), FrameOutcome::Drawn(_)));
        assert_eq!(scene.draws.len(), 1);
        assert_eq!(fl.flight().tick_count(), 1);
    }

    #[test]
    fn frames_follow_the_clock() {
        let mut fl = frame_loop();
        let mut scene = RecordingScene {
            ready: true,
            ..Default::default()
        };
        for _ in 0..5 {
            fl.clock().advance(16);
            fl.frame(&mut scene);
        }
        assert_eq!(fl.flight().trail().total_points(), 5);
        let (tick, _, pos) = scene.draws[4];
        assert_eq!(tick, 5);
        assert!((pos.x - 0.25).abs() < 1e-5);
    }

    #[test]
    fn controls_land_before_the_frame() {
        let mut fl = frame_loop();
        let mut scene = RecordingScene {
            ready: true,
            ..Default::default()
        };
        fl.apply(Control::NewSegment);
        fl.clock().advance(16);
        fl.frame(&mut scene);
        assert_eq!(scene.draws[0].1, 2);
        assert_eq!(fl.flight().trail().segments()[1].points().len(), 1);
    }

    #[test]
    fn capture_resolves_fallback_color() {
        let mut flight = Flight::new(&FlightConfig::default(), 0);
        flight.apply(Control::NewSegment);
        let view = FrameView::capture(&flight);
        assert_eq!(view.segments[0].color, flight.fallback_color());
        assert_eq!(view.segments[1].color, flight.trail().segments()[1].color().unwrap());
        assert_eq!(view.active_segment, 1);
        assert_eq!(view.stars.len(), 100);
    }

    #[test]
    fn frame_view_serializes() {
        let flight = Flight::new(&FlightConfig::default(), 0);
        let json = serde_json::to_value(FrameView::capture(&flight)).unwrap();
        assert_eq!(json["tick"], 0);
        assert_eq!(json["segments"][0]["color"], "#db3069");
        assert_eq!(json["stats"]["velocity"], 5);
    }
}
