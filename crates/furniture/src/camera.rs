//! Viewer camera used to resolve camera-relative directions.

use glam::Vec3;

/// Camera pose. Yaw 0 looks along +Z; positive yaw turns toward +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Camera position in world space
    pub position: Vec3,
    /// Heading around the Y axis, radians.
    pub yaw: f32,
    /// Elevation, radians. Negative looks down.
    pub pitch: f32,
}

impl CameraRig {
    /// Camera `height` above `center`, looking straight down with +Z as
    /// screen-up.
    pub fn overhead(center: Vec3, height: f32) -> Self {
        Self {
            position: center + Vec3::new(0.0, height, 0.0),
            yaw: 0.0,
            pitch: -std::f32::consts::FRAC_PI_2,
        }
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        Vec3::new(yaw_sin * pitch_cos, pitch_sin, yaw_cos * pitch_cos).normalize()
    }

    /// Forward projected onto the floor plane.
    ///
    /// Derived from the heading alone so it stays defined when the camera
    /// looks straight down.
    pub fn planar_forward(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        Vec3::new(yaw_sin, 0.0, yaw_cos)
    }

    /// Right projected onto the floor plane.
    pub fn planar_right(&self) -> Vec3 {
        Vec3::Y.cross(self.planar_forward()).normalize()
    }

    /// Rotate the camera by yaw/pitch deltas.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(
            -std::f32::consts::FRAC_PI_2,
            std::f32::consts::FRAC_PI_2,
        );
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::overhead(Vec3::ZERO, 870.0)
    }
}
