//! # Perspective Camera
//!
//! Camera with position, look-at target and perspective projection
//! parameters. The projection matrix is cached: changing `fov`, `aspect`,
//! `near` or `far` has no effect on [`Camera::projection_matrix`] until
//! [`Camera::update_projection_matrix`] is called.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// 3D perspective camera
///
/// # Coordinate System
/// Right-handed, Y-up. The camera looks down its local -Z axis toward
/// `target`; clip-space depth spans `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,

    projection: Mat4,
    projection_updates: u64,
}

impl Camera {
    /// Create a new perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees (stored in radians)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane
    /// * `far` - Distance to far clipping plane
    ///
    /// # Example
    /// ```rust
    /// use tiny_scene::foundation::math::Vec3;
    /// use tiny_scene::render::primitives::Camera;
    ///
    /// let camera = Camera::perspective(Vec3::new(0.0, 0.0, 2.0), 75.0, 4.0 / 3.0, 0.1, 1000.0);
    /// assert!((camera.fov_degrees() - 75.0).abs() < 1e-4);
    /// ```
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let fov = utils::deg_to_rad(fov_degrees);
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov,
            aspect,
            near,
            far,
            projection: Mat4::perspective(fov, aspect, near, far),
            projection_updates: 0,
        }
    }

    /// Vertical field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        utils::rad_to_deg(self.fov)
    }

    /// Recompute the cached projection matrix from the current parameters
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective(self.fov, self.aspect, self.near, self.far);
        self.projection_updates += 1;
        log::trace!(
            "Camera projection updated: fov={:.1} aspect={:.3} near={} far={}",
            self.fov_degrees(),
            self.aspect,
            self.near,
            self.far
        );
    }

    /// Number of times [`Camera::update_projection_matrix`] has run
    pub fn projection_updates(&self) -> u64 {
        self.projection_updates
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Cached projection matrix
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// Combined `projection × view` transform
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::perspective(Vec3::new(0.0, 0.0, 2.0), 75.0, 2.0, 0.1, 1000.0)
    }

    #[test]
    fn test_perspective_parameters() {
        let camera = camera();
        assert_relative_eq!(camera.fov_degrees(), 75.0, epsilon = 1e-4);
        assert_relative_eq!(camera.aspect, 2.0);
        assert_relative_eq!(camera.near, 0.1);
        assert_relative_eq!(camera.far, 1000.0);
        assert_eq!(camera.target, Vec3::zeros());
        assert_eq!(camera.projection_updates(), 0);
    }

    #[test]
    fn test_projection_is_cached_until_update() {
        let mut camera = camera();
        let before = *camera.projection_matrix();

        camera.aspect = 1.0;
        assert_eq!(*camera.projection_matrix(), before);

        camera.update_projection_matrix();
        assert_eq!(camera.projection_updates(), 1);
        assert_relative_eq!(
            *camera.projection_matrix(),
            Mat4::perspective(camera.fov, 1.0, 0.1, 1000.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(camera.projection_matrix()[(0, 0)], camera.projection_matrix()[(1, 1)], epsilon = 1e-6);
    }

    #[test]
    fn test_origin_projects_to_screen_centre() {
        let camera = camera();
        let clip = camera.view_projection_matrix() * crate::foundation::math::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-6);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-6);
        assert!(clip.w > 0.0);
    }
}
