//! Collision boundary generation for the umbrella canopy.
//!
//! The physics collaborator consumes these shapes as static edge loops. The
//! notched loop is a gameplay shape: the two downward slopes shed falling
//! objects, and the notches keep them from resting on the lower corners.
use glam::Vec2;

use crate::CANOPY_NOTCH_INSET;

/// Builds the six-vertex notched canopy loop for a canopy of `size`.
///
/// Vertices run from the lower-left corner up to the apex, down to the
/// lower-right corner, inward to the right notch, back up to just below the
/// apex, and down to the left notch. The loop closes onto the first vertex.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use brolly::geometry::notched_canopy_loop;
///
/// let points = notched_canopy_loop(Vec2::new(100.0, 40.0));
/// assert_eq!(points[1], Vec2::new(0.0, 20.0));
/// assert_eq!(points[3], Vec2::new(40.0, -20.0));
/// ```
#[must_use]
pub fn notched_canopy_loop(size: Vec2) -> [Vec2; 6] {
    let half = size * 0.5;
    [
        Vec2::new(-half.x, -half.y),
        Vec2::new(0.0, half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x - CANOPY_NOTCH_INSET, -half.y),
        Vec2::new(0.0, half.y - CANOPY_NOTCH_INSET),
        Vec2::new(-half.x + CANOPY_NOTCH_INSET, -half.y),
    ]
}

/// Static contact boundary attached to the canopy.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionBoundary {
    /// Closed polygon in canopy-local coordinates.
    EdgeLoop(Vec<Vec2>),
    /// The canopy art's own alpha outline at the given size. The physics
    /// collaborator traces it from the texture.
    Silhouette {
        /// Art dimensions the outline is traced at.
        size: Vec2,
    },
}

impl CollisionBoundary {
    /// Notched edge loop for a canopy of `size`.
    #[must_use]
    pub fn notched_canopy(size: Vec2) -> Self {
        Self::EdgeLoop(notched_canopy_loop(size).to_vec())
    }

    /// Texture-derived outline for a canopy of `size`.
    #[must_use]
    pub const fn silhouette(size: Vec2) -> Self {
        Self::Silhouette { size }
    }

    /// Polygon vertices; empty for a silhouette.
    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        match self {
            Self::EdgeLoop(points) => points,
            Self::Silhouette { .. } => &[],
        }
    }

    /// Every segment of the closed loop, including the closing edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use brolly::geometry::CollisionBoundary;
    ///
    /// let boundary = CollisionBoundary::notched_canopy(Vec2::new(100.0, 40.0));
    /// let edges: Vec<_> = boundary.edges().collect();
    /// assert_eq!(edges.len(), 6);
    /// assert_eq!(edges[5], (Vec2::new(-40.0, -20.0), Vec2::new(-50.0, -20.0)));
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let points = self.vertices();
        points
            .iter()
            .copied()
            .zip(points.iter().copied().cycle().skip(1))
    }

    /// Axis-aligned half extents around the canopy origin.
    #[must_use]
    pub fn half_extents(&self) -> Vec2 {
        match self {
            Self::EdgeLoop(points) => points
                .iter()
                .fold(Vec2::ZERO, |extent, point| extent.max(point.abs())),
            Self::Silhouette { size } => *size * 0.5,
        }
    }
}
