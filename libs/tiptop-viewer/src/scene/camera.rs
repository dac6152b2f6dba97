//! Perspective camera and object framing.

use config::constants::{
    approx_zero, CAMERA_FAR, CAMERA_INITIAL_POSITION, CAMERA_NEAR, FIT_MIN_DIMENSION, FIT_OFFSET,
};
use glam::{DMat4, DVec3};
use serde::Serialize;
use tiptop_mesh::Aabb;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: DVec3,
    pub target: DVec3,
}

/// Computes the pose that frames `bounds`.
///
/// The distance is `|max_dim / 2 / tan(fov / 2)| * padding`, and the camera
/// is offset from the box center along a fixed diagonal. A box with no extent
/// is framed as if its largest dimension were [`FIT_MIN_DIMENSION`].
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tiptop_mesh::Aabb;
/// use tiptop_viewer::scene::fit_pose;
///
/// let bounds = Aabb::new(DVec3::splat(-1.0), DVec3::splat(1.0));
/// let pose = fit_pose(&bounds, 90.0, 1.0);
/// assert_eq!(pose.target, DVec3::ZERO);
/// assert!((pose.position.y - 0.5).abs() < 1e-12);
/// ```
pub fn fit_pose(bounds: &Aabb, fov_degrees: f64, padding: f64) -> CameraPose {
    let center = bounds.center();
    let mut max_dim = bounds.max_dimension();
    if approx_zero(max_dim) || !max_dim.is_finite() {
        max_dim = FIT_MIN_DIMENSION;
    }

    let half_fov = fov_degrees.to_radians() / 2.0;
    let distance = (max_dim / 2.0 / half_fov.tan()).abs() * padding;

    CameraPose {
        position: center + DVec3::from_array(FIT_OFFSET) * distance,
        target: center,
    }
}

/// Perspective camera state mirrored to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveCamera {
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: DVec3,
    pub target: DVec3,
}

impl PerspectiveCamera {
    /// Camera at the initial position, looking at the origin.
    pub fn new(fov_degrees: f64, aspect: f64) -> Self {
        Self {
            fov_degrees,
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: DVec3::from_array(CAMERA_INITIAL_POSITION),
            target: DVec3::ZERO,
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
        }
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.target = pose.target;
    }

    /// World-to-view matrix with +Y up.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, DVec3::Y)
    }

    /// OpenGL-style clip-space projection.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}
