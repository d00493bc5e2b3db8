use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Rect {
    /// Creates a rectangle from two opposite corners in any order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a rectangle from its minimum corner and size.
    #[must_use]
    pub fn from_origin_size(origin: Point2, width: f64, height: f64) -> Self {
        Self::new(origin, Point2::new(origin.x + width, origin.y + height))
    }

    /// Smallest rectangle enclosing all `points`, or `None` when empty.
    #[must_use]
    pub fn bounding(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut rect = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            rect.min.x = rect.min.x.min(p.x);
            rect.min.y = rect.min.y.min(p.y);
            rect.max.x = rect.max.x.max(p.x);
            rect.max.y = rect.max.y.max(p.y);
        }
        Some(rect)
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Moves every side inward by `margin`.
    ///
    /// The result may be inverted (min > max) when the margin exceeds half the
    /// extent; callers treat that as an empty region.
    #[must_use]
    pub fn shrink(&self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x + margin, self.min.y + margin),
            max: Point2::new(self.max.x - margin, self.max.y - margin),
        }
    }

    /// Uniformly scales both corners about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            Point2::from(self.min.coords * factor),
            Point2::from(self.max.coords * factor),
        )
    }

    /// Corners in order: min, (max.x, min.y), max, (min.x, max.y).
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Returns `true` if `other` lies within `self`, allowing `tolerance` slack.
    #[must_use]
    pub fn contains_rect(&self, other: &Self, tolerance: f64) -> bool {
        other.min.x >= self.min.x - tolerance
            && other.min.y >= self.min.y - tolerance
            && other.max.x <= self.max.x + tolerance
            && other.max.y <= self.max.y + tolerance
    }
}
