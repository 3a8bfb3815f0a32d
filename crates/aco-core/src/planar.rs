//! Planar coordinate instances.
//!
//! Most symmetric benchmark instances are sets of 2-D points with Euclidean
//! edge weights.  `PlanarInstance` turns such a point set into a
//! [`DistanceProvider`].  With `rounded = true` distances follow the TSPLIB
//! `EUC_2D` convention (`nint(sqrt(dx² + dy²))`), which makes results
//! comparable with published optimal tour lengths.

use crate::DistanceProvider;

/// A point in the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: PlanarPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Euclidean distance provider over a point set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarInstance {
    pub points:  Vec<PlanarPoint>,
    /// Round every distance to the nearest integer (TSPLIB `EUC_2D`).
    pub rounded: bool,
}

impl PlanarInstance {
    pub fn new(points: Vec<PlanarPoint>) -> Self {
        Self { points, rounded: false }
    }

    /// Same points, TSPLIB `EUC_2D` integer distances.
    pub fn euc_2d(points: Vec<PlanarPoint>) -> Self {
        Self { points, rounded: true }
    }
}

impl DistanceProvider for PlanarInstance {
    fn node_count(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        let d = self.points[i].distance(self.points[j]);
        // TSPLIB nint(x) = (int)(x + 0.5)
        if self.rounded { (d + 0.5).floor() } else { d }
    }
}
