use crate::rng::SeededRng;
use asteroids_common::{Color, Palette};
use glam::Vec3;
use serde::Serialize;

/// A contiguous run of sampled ship positions sharing one display color.
///
/// `color` is fixed at creation. Segments created by a boundary wrap have no
/// palette color and are drawn with the renderer's fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailSegment {
    points: Vec<Vec3>,
    color: Option<Color>,
}

impl TrailSegment {
    fn new(color: Option<Color>) -> Self {
        Self {
            points: Vec::new(),
            color,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered trail segments plus the index appends go to.
///
/// Always holds at least one segment and `active < segments.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailLog {
    segments: Vec<TrailSegment>,
    active: usize,
}

impl TrailLog {
    pub fn new() -> Self {
        Self {
            segments: vec![TrailSegment::new(None)],
            active: 0,
        }
    }

    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_segment(&self) -> &TrailSegment {
        &self.segments[self.active]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when no segment holds a point. The log itself always has a segment.
    pub fn has_no_points(&self) -> bool {
        self.segments.iter().all(TrailSegment::is_empty)
    }

    pub fn total_points(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }
}

impl Default for TrailLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Records ship positions into the trail log.
///
/// Two transitions exist: [`Self::break_segment`] throws the whole log away
/// and [`Self::new_segment`] opens a fresh colored segment after the others.
#[derive(Debug, Clone)]
pub struct TrailRecorder {
    log: TrailLog,
    palette: Palette,
    rng: SeededRng,
}

impl TrailRecorder {
    pub fn new(palette: Palette, rng: SeededRng) -> Self {
        Self {
            log: TrailLog::new(),
            palette,
            rng,
        }
    }

    pub fn log(&self) -> &TrailLog {
        &self.log
    }

    /// Append a position to the active segment.
    pub fn sample(&mut self, position: Vec3) {
        let active = self.log.active;
        self.log.segments[active].points.push(position);
    }

    /// Discard every segment and start over with a single empty one.
    pub fn break_segment(&mut self) {
        self.log = TrailLog::new();
    }

    /// Open a new empty segment with a random palette color and make it active.
    ///
    /// Returns the new segment's index and color.
    pub fn new_segment(&mut self) -> (usize, Color) {
        let color = self.palette.pick(self.rng.below(self.palette.len()));
        self.log.segments.push(TrailSegment::new(Some(color)));
        self.log.active = self.log.segments.len() - 1;
        (self.log.active, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> TrailRecorder {
        TrailRecorder::new(Palette::default(), SeededRng::new(0))
    }

    #[test]
    fn starts_with_one_empty_segment() {
        let r = recorder();
        assert_eq!(r.log().len(), 1);
        assert_eq!(r.log().active_index(), 0);
        assert!(r.log().active_segment().is_empty());
        assert_eq!(r.log().active_segment().color(), None);
    }

    #[test]
    fn samples_go_to_active_segment() {
        let mut r = recorder();
        r.sample(Vec3::X);
        r.sample(Vec3::Y);
        assert_eq!(r.log().segments()[0].points(), &[Vec3::X, Vec3::Y]);
    }

    #[test]
    fn break_resets_to_single_empty_segment() {
        let mut r = recorder();
        r.sample(Vec3::X);
        r.new_segment();
        r.sample(Vec3::Y);
        r.break_segment();
        let log = r.log();
        assert_eq!(log.len(), 1);
        assert!(log.segments()[0].is_empty());
        assert_eq!(log.segments()[0].color(), None);
        assert_eq!(log.active_index(), 0);
        assert!(log.has_no_points());
    }

    #[test]
    fn break_is_idempotent() {
        let mut once = recorder();
        once.sample(Vec3::ONE);
        once.break_segment();

        let mut twice = recorder();
        twice.sample(Vec3::ONE);
        twice.break_segment();
        twice.break_segment();

        assert_eq!(once.log(), twice.log());
    }

    #[test]
    fn new_segment_preserves_previous() {
        let mut r = recorder();
        r.sample(Vec3::X);
        r.sample(Vec3::Z);
        let before = r.log().segments()[0].clone();
        let prev_len = r.log().len();

        let (index, color) = r.new_segment();

        let log = r.log();
        assert_eq!(index, prev_len);
        assert_eq!(log.active_index(), prev_len);
        assert_eq!(log.len(), prev_len + 1);
        assert_eq!(log.segments()[0], before);
        assert!(log.active_segment().is_empty());
        assert_eq!(log.active_segment().color(), Some(color));
        assert!(Palette::default().colors().contains(&color));
    }

    #[test]
    fn samples_after_new_segment_land_in_it() {
        let mut r = recorder();
        r.sample(Vec3::X);
        r.new_segment();
        r.sample(Vec3::Y);
        assert_eq!(r.log().segments()[0].points(), &[Vec3::X]);
        assert_eq!(r.log().segments()[1].points(), &[Vec3::Y]);
        assert_eq!(r.log().total_points(), 2);
    }

    #[test]
    fn single_color_palette_is_deterministic() {
        let red = Color::rgb(255, 0, 0);
        let mut r = TrailRecorder::new(Palette::new(vec![red]).unwrap(), SeededRng::new(9));
        for _ in 0..5 {
            assert_eq!(r.new_segment().1, red);
        }
        assert_eq!(r.log().len(), 6);
    }

    #[test]
    fn same_seed_same_colors() {
        let mut a = TrailRecorder::new(Palette::default(), SeededRng::new(5));
        let mut b = TrailRecorder::new(Palette::default(), SeededRng::new(5));
        for _ in 0..10 {
            assert_eq!(a.new_segment(), b.new_segment());
        }
    }
}
