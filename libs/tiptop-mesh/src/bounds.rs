//! # Axis-Aligned Bounds
//!
//! Bounding boxes used to center assets and to frame the camera.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
///
/// # Example
///
/// ```rust
/// use tiptop_mesh::Aabb;
/// use glam::DVec3;
///
/// let aabb = Aabb::from_points([DVec3::ZERO, DVec3::new(2.0, 4.0, 6.0)]).unwrap();
/// assert_eq!(aabb.center(), DVec3::new(1.0, 2.0, 3.0));
/// assert_eq!(aabb.max_dimension(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from two corners, ordering the components.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty set.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Largest extent along any axis.
    #[inline]
    pub fn max_dimension(&self) -> f64 {
        self.size().max_element()
    }

    /// The eight corners of the box.
    pub fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(b.x, b.y, b.z),
            DVec3::new(a.x, b.y, b.z),
        ]
    }

    /// Box enclosing this one after an affine transform.
    pub fn transformed(&self, matrix: &DMat4) -> Self {
        let corners = self.corners().map(|c| matrix.transform_point3(c));
        // Eight corners always yield a box.
        Self::from_points(corners).unwrap_or(*self)
    }
}
