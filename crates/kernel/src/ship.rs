use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Kinematic state of the ship.
///
/// `velocity` carries three components that thrust edits uniformly, but only
/// `velocity.x` feeds the displacement in [`ShipKinematics::advance`]. The
/// y and z components only show up in the stats readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Heading angle in radians, always in `[0, 2π)`.
    pub angle: f32,
    /// Azimuth angle in radians, always in `[0, 2π)`.
    pub azimuth: f32,
}

impl ShipState {
    /// Ship at the origin with every velocity component set to `speed`.
    pub fn at_rest_with(speed: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::splat(speed),
            angle: 0.0,
            azimuth: 0.0,
        }
    }
}

impl Default for ShipState {
    fn default() -> Self {
        Self::at_rest_with(0.05)
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Owns the ship state and applies control edits and per-frame motion.
#[derive(Debug, Clone)]
pub struct ShipKinematics {
    state: ShipState,
    accel: f32,
}

impl ShipKinematics {
    pub fn new(state: ShipState, accel: f32) -> Self {
        Self { state, accel }
    }

    pub fn state(&self) -> &ShipState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Add `delta` to all three velocity components.
    pub fn apply_thrust(&mut self, delta: f32) {
        self.state.velocity += Vec3::splat(delta);
    }

    pub fn apply_yaw(&mut self, delta: f32) {
        self.state.angle = wrap_angle(self.state.angle + delta);
    }

    pub fn apply_azimuth(&mut self, delta: f32) {
        self.state.azimuth = wrap_angle(self.state.azimuth + delta);
    }

    /// Candidate next position. Does not move the ship; see [`Self::commit`].
    ///
    /// Speed is `velocity.x`; direction comes from the two angles.
    pub fn advance(&self) -> Vec3 {
        let ShipState {
            position,
            velocity,
            angle,
            azimuth,
        } = self.state;
        let speed = velocity.x;
        position
            + Vec3::new(
                speed * angle.cos() * azimuth.cos(),
                speed * angle.cos() * azimuth.sin(),
                speed * angle.sin(),
            )
    }

    pub fn commit(&mut self, position: Vec3) {
        self.state.position = position;
    }

    /// Periodic velocity increment. Returns whether the velocity changed,
    /// which is never the case while `accel` is zero.
    pub fn accelerate(&mut self) -> bool {
        if self.accel == 0.0 {
            return false;
        }
        self.state.velocity += Vec3::splat(self.accel);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn ship() -> ShipKinematics {
        ShipKinematics::new(ShipState::default(), 0.0)
    }

    #[test]
    fn start_state_advances_along_x() {
        let k = ship();
        let c = k.advance();
        assert!((c.x - 0.05).abs() < EPS);
        assert!(c.y.abs() < EPS);
        assert!(c.z.abs() < EPS);
        // advance is a preview only
        assert_eq!(k.position(), Vec3::ZERO);
    }

    #[test]
    fn thrust_edits_all_components() {
        let mut k = ship();
        k.apply_thrust(0.001);
        let v = k.state().velocity;
        assert!((v.x - 0.051).abs() < EPS);
        assert!((v.y - 0.051).abs() < EPS);
        assert!((v.z - 0.051).abs() < EPS);
        k.apply_thrust(-0.002);
        assert!((k.state().velocity.z - 0.049).abs() < EPS);
    }

    #[test]
    fn only_x_velocity_moves_the_ship() {
        let mut state = ShipState::default();
        state.velocity = Vec3::new(0.1, 9.0, 9.0);
        let k = ShipKinematics::new(state, 0.0);
        assert!((k.advance().length() - 0.1).abs() < EPS);
    }

    #[test]
    fn angles_steer_displacement() {
        let mut k = ship();
        k.apply_yaw(std::f32::consts::FRAC_PI_2);
        let c = k.advance();
        assert!(c.x.abs() < EPS);
        assert!((c.z - 0.05).abs() < EPS);

        let mut k = ship();
        k.apply_azimuth(std::f32::consts::FRAC_PI_2);
        let c = k.advance();
        assert!((c.y - 0.05).abs() < EPS);
    }

    #[test]
    fn yaw_stays_in_range() {
        let mut k = ship();
        for i in 0..1000 {
            let delta = if i % 3 == 0 { -0.05 } else { 0.05 };
            k.apply_yaw(delta);
            let a = k.state().angle;
            assert!((0.0..TAU).contains(&a), "angle {a} out of range");
        }
        for _ in 0..500 {
            k.apply_yaw(-0.05);
            assert!((0.0..TAU).contains(&k.state().angle));
        }
    }

    #[test]
    fn negative_yaw_wraps_below_zero() {
        let mut k = ship();
        k.apply_yaw(-0.05);
        assert!((k.state().angle - (TAU - 0.05)).abs() < 1e-5);
    }

    #[test]
    fn wrap_angle_handles_tiny_negatives() {
        let a = wrap_angle(-f32::EPSILON * 0.01);
        assert!((0.0..TAU).contains(&a));
        assert_eq!(wrap_angle(TAU), 0.0);
    }

    #[test]
    fn accelerate_is_noop_by_default() {
        let mut k = ship();
        let before = k.state().velocity;
        assert!(!k.accelerate());
        assert_eq!(k.state().velocity, before);

        let mut k = ShipKinematics::new(ShipState::default(), 0.5);
        assert!(k.accelerate());
        assert!((k.state().velocity.y - 0.55).abs() < EPS);
    }

    #[test]
    fn commit_moves_ship() {
        let mut k = ship();
        let c = k.advance();
        k.commit(c);
        assert_eq!(k.position(), c);
    }
}
