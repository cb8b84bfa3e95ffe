use crate::frame::FrameView;
use crate::panel::StatsPanel;

/// A rendering backend that consumes one [`FrameView`] per frame.
///
/// Backends that bind to GPU resources lazily report `false` from
/// [`SceneAdapter::is_ready`] until their scene graph exists; the frame loop
/// then skips the frame instead of failing.
pub trait SceneAdapter {
    fn is_ready(&self) -> bool {
        true
    }

    fn draw(&mut self, frame: &FrameView<'_>);
}

/// Text backend. Keeps the rendering of the last drawn frame.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    last: String,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output of the most recent [`SceneAdapter::draw`].
    pub fn last_frame(&self) -> &str {
        &self.last
    }

    pub fn render(frame: &FrameView<'_>) -> String {
        let mut out = String::new();
        let p = frame.ship_position;
        let t = frame.look_at;
        out.push_str(&format!("=== Frame (tick={}) ===\n", frame.tick));
        out.push_str(&format!(
            "Ship: pos=({:.2}, {:.2}, {:.2}) look_at=({:.2}, {:.2}, {:.2})\n",
            p.x, p.y, p.z, t.x, t.y, t.z
        ));
        out.push_str(&format!("Stats: {}\n", StatsPanel(frame.stats)));
        out.push_str(&format!("Stars: {}\n", frame.stars.len()));
        out.push_str(&format!(
            "Trail: {} segment(s), active={}\n",
            frame.segments.len(),
            frame.active_segment
        ));
        for (i, segment) in frame.segments.iter().enumerate() {
            let marker = if i == frame.active_segment { '>' } else { ' ' };
            out.push_str(&format!(
                " {marker}[{i}] {} points={}\n",
                segment.color,
                segment.points.len()
            ));
        }
        out
    }
}

impl SceneAdapter for DebugTextRenderer {
    fn draw(&mut self, frame: &FrameView<'_>) {
        self.last = Self::render(frame);
    }
}
