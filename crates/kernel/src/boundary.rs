use asteroids_common::Axis;
use glam::Vec3;

/// Symmetric cubic flight volume. Crossing a face teleports to the opposite face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    half_extent: f32,
}

/// Result of clamping a whole position against the volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Clamped {
    pub position: Vec3,
    /// Axes that wrapped this frame, in x, y, z order.
    pub crossed: Vec<Axis>,
}

impl Clamped {
    pub fn wrapped(&self) -> bool {
        !self.crossed.is_empty()
    }
}

impl Boundary {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    /// Clamp one axis value. Reaching or passing a face lands on the opposite one.
    pub fn clamp(&self, value: f32) -> (f32, bool) {
        if value <= -self.half_extent {
            (self.half_extent, true)
        } else if value >= self.half_extent {
            (-self.half_extent, true)
        } else {
            (value, false)
        }
    }

    /// Clamp each axis independently.
    pub fn clamp_position(&self, candidate: Vec3) -> Clamped {
        let mut position = candidate;
        let mut crossed = Vec::new();
        for axis in Axis::ALL {
            let (value, wrapped) = self.clamp(axis.get(candidate));
            if wrapped {
                axis.set(&mut position, value);
                crossed.push(axis);
            }
        }
        Clamped { position, crossed }
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(5.0)
    }
}
