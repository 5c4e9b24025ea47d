//! First-person fly camera with mouse-look and keyboard movement.

use glam::{Mat4, Vec3};

use crate::params::{CameraParams, RenderConfig};

/// Movement key state, updated from keyboard events each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Free-flying camera driven by mouse deltas and movement keys.
///
/// Orientation is yaw/pitch only; the camera never rolls, so world +y stays
/// the up vector throughout.
pub struct FlyCamera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    yaw_deg: f32,
    pitch_deg: f32,
    params: CameraParams,
}

impl FlyCamera {
    /// Create a camera at the configured starting pose.
    pub fn new(params: CameraParams) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(params.position),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            yaw_deg: params.yaw_deg,
            pitch_deg: params.pitch_deg,
            params,
        };
        camera.update_front();
        camera
    }

    /// Apply a relative mouse motion (pixels) to yaw and pitch.
    ///
    /// Pitch is clamped short of straight up/down so the look-at basis never
    /// degenerates.
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw_deg += dx * self.params.mouse_sensitivity;
        self.pitch_deg -= dy * self.params.mouse_sensitivity;
        self.pitch_deg = self
            .pitch_deg
            .clamp(-self.params.pitch_limit_deg, self.params.pitch_limit_deg);
        self.update_front();
    }

    fn update_front(&mut self) {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }

    /// Move the camera according to held keys and the frame delta (ms).
    pub fn advance(&mut self, input: &MovementInput, delta_ms: f32) {
        let speed = delta_ms * self.params.speed_per_ms;
        let strafe = self.front.cross(self.up).normalize();

        if input.forward {
            self.position += self.front * speed;
        }
        if input.backward {
            self.position -= self.front * speed;
        }
        if input.left {
            self.position -= strafe * speed;
        }
        if input.right {
            self.position += strafe * speed;
        }
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Combined view-projection matrix for the current pose.
    pub fn view_proj(&self, config: &RenderConfig) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, self.position + self.front, self.up);
        let proj = Mat4::perspective_rh(
            config.fov_degrees.to_radians(),
            config.aspect_ratio(),
            config.near_plane,
            config.far_plane,
        );
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_front_looks_down_negative_z() {
        let camera = FlyCamera::new(CameraParams::default());
        // Default yaw -90, pitch 0.
        assert!((camera.front() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = FlyCamera::new(CameraParams::default());
        // Drag the mouse far downward-up; pitch must stop at the limit.
        camera.process_mouse(0.0, -10_000.0);
        assert!(camera.front().y <= 1.0);
        assert!(camera.front().y > 0.999); // ~89 degrees up, not past it
        assert!(camera.front().length() > 0.999);

        camera.process_mouse(0.0, 20_000.0);
        assert!(camera.front().y < -0.999);
    }

    #[test]
    fn test_forward_movement_follows_front() {
        let mut camera = FlyCamera::new(CameraParams::default());
        let start = camera.position;
        let input = MovementInput {
            forward: true,
            ..Default::default()
        };
        camera.advance(&input, 1000.0);

        let moved = camera.position - start;
        let expected = camera.front() * 1000.0 * CameraParams::default().speed_per_ms;
        assert!((moved - expected).length() < 1e-5);
    }

    #[test]
    fn test_strafe_is_orthogonal_to_front() {
        let mut camera = FlyCamera::new(CameraParams::default());
        camera.process_mouse(137.0, -42.0); // Arbitrary orientation
        let start = camera.position;
        let input = MovementInput {
            right: true,
            ..Default::default()
        };
        camera.advance(&input, 500.0);

        let moved = camera.position - start;
        assert!(moved.length() > 0.0);
        assert!(moved.dot(camera.front()).abs() < 1e-5);
        assert_eq!(moved.y, 0.0); // Strafing never climbs (front x up is horizontal)
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut camera = FlyCamera::new(CameraParams::default());
        let start = camera.position;
        let input = MovementInput {
            forward: true,
            backward: true,
            left: true,
            right: true,
        };
        camera.advance(&input, 16.0);
        assert!((camera.position - start).length() < 1e-6);
    }

    #[test]
    fn test_view_proj_is_finite_and_nontrivial() {
        let camera = FlyCamera::new(CameraParams::default());
        let config = RenderConfig::default();
        let m = camera.view_proj(&config);

        assert_ne!(m, Mat4::IDENTITY);
        assert_ne!(m, Mat4::ZERO);
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
