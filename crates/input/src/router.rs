use asteroids_common::Control;

/// Magnitude of each discrete control edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSteps {
    pub thrust: f32,
    pub yaw: f32,
    pub azimuth: f32,
}

impl Default for ControlSteps {
    fn default() -> Self {
        Self {
            thrust: 0.001,
            yaw: 0.05,
            azimuth: 0.05,
        }
    }
}

/// Maps key presses to controls.
///
/// | key | control |
/// |-----|---------|
/// | `w` | thrust + |
/// | `s` | thrust - |
/// | `a` | yaw + |
/// | `d` | yaw - |
/// | `z` | azimuth + |
/// | `p` | new trail segment |
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRouter {
    steps: ControlSteps,
}

impl InputRouter {
    pub fn new(steps: ControlSteps) -> Self {
        Self { steps }
    }

    /// Control for a key-down event, or `None` for unbound keys.
    pub fn route(&self, key: char) -> Option<Control> {
        let control = match key {
            'w' => Control::Thrust(self.steps.thrust),
            's' => Control::Thrust(-self.steps.thrust),
            'a' => Control::Yaw(self.steps.yaw),
            'd' => Control::Yaw(-self.steps.yaw),
            'z' => Control::Azimuth(self.steps.azimuth),
            'p' => Control::NewSegment,
            _ => return None,
        };
        tracing::trace!(%key, ?control, "routed key");
        Some(control)
    }
}
