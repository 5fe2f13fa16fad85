use crate::constants::*;
use deskglow_core::constants::DESK_HEIGHT;
use glam::{Mat4, Vec3};

/// Damped orbit camera around the desk. Pointer drags steer target
/// yaw/pitch, the wheel dollies; the actual pose eases toward the targets
/// every frame.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_target: f32,
    pitch_target: f32,
    distance_target: f32,
    target: Vec3,
}

impl OrbitCamera {
    pub fn new() -> Self {
        let target = Vec3::new(0.0, DESK_HEIGHT * 0.6, 0.0);
        let eye = Vec3::from(CAMERA_EYE);
        let offset = eye - target;
        let distance = offset.length();
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).asin();
        Self {
            yaw,
            pitch,
            distance,
            yaw_target: yaw,
            pitch_target: pitch,
            distance_target: distance,
            target,
        }
    }

    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.yaw_target -= dx * ORBIT_RADIANS_PER_PX;
        self.pitch_target =
            (self.pitch_target + dy * ORBIT_RADIANS_PER_PX).clamp(PITCH_MIN, PITCH_MAX);
    }

    pub fn zoom(&mut self, wheel_delta: f32) {
        self.distance_target = (self.distance_target * (1.0 + wheel_delta * ZOOM_PER_WHEEL_UNIT))
            .clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Ease the pose toward the interaction targets. `dt` keeps the
    /// damping frame-rate independent.
    pub fn update(&mut self, dt_sec: f32) {
        let alpha = 1.0 - (1.0 - ORBIT_SMOOTHING_ALPHA).powf(dt_sec * 60.0);
        self.yaw += (self.yaw_target - self.yaw) * alpha;
        self.pitch += (self.pitch_target - self.pitch) * alpha;
        self.distance += (self.distance_target - self.distance) * alpha;
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(CAMERA_FOV_RADIANS, aspect.max(1e-3), CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        proj * view
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
