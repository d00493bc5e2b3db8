use serde::{Deserialize, Serialize};

use crate::error::{check_positive, check_range, GeometryError};
use crate::math::Vector2;

slotmap::new_key_type! {
    /// Stable identifier for a wall in a floor plan.
    pub struct WallId;
}

/// A directed wall segment.
///
/// `angle` is in degrees from +X towards +Y (clockwise on a Y-down screen).
/// It is not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallData {
    /// Length in meters.
    pub length: f64,
    pub angle: f64,
}

impl WallData {
    /// Creates a wall, rejecting non-finite or non-positive lengths and
    /// non-finite angles.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError` if a value is out of range.
    pub fn new(length: f64, angle: f64) -> Result<Self, GeometryError> {
        check_positive("length", length)?;
        check_range("angle", angle, f64::MIN, f64::MAX)?;
        Ok(Self { length, angle })
    }

    /// Vector from the wall's start to its end.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        let rad = self.angle.to_radians();
        Vector2::new(rad.cos() * self.length, rad.sin() * self.length)
    }
}

/// Snaps an angle in degrees to the nearest multiple of 90°, in `[0, 360)`.
#[must_use]
pub fn snap_orthogonal(angle: f64) -> f64 {
    ((angle / 90.0).round() * 90.0).rem_euclid(360.0)
}
