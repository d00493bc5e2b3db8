use super::ResolveVertices;
use crate::math::TOLERANCE;
use crate::topology::WallData;

/// Computes the wall that would close the path exactly.
///
/// The closing wall starts where the last wall starts and ends at the origin,
/// i.e. it is the replacement for the last wall. Returns `None` when there are
/// fewer than two walls or the replacement would have zero length.
#[derive(Debug)]
pub struct ClosingSegment<'a> {
    walls: &'a [WallData],
}

impl<'a> ClosingSegment<'a> {
    /// Creates a new closing-segment query.
    #[must_use]
    pub fn new(walls: &'a [WallData]) -> Self {
        Self { walls }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Option<WallData> {
        if self.walls.len() < 2 {
            return None;
        }
        let vertices = ResolveVertices::new(self.walls).execute();
        let start = vertices[vertices.len() - 2];
        let closing = vertices[0] - start;
        let length = closing.norm();
        if length < TOLERANCE {
            return None;
        }
        let angle = closing.y.atan2(closing.x).to_degrees().rem_euclid(360.0);
        Some(WallData { length, angle })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn wall(length: f64, angle: f64) -> WallData {
        WallData { length, angle }
    }

    #[test]
    fn replaces_short_last_wall() {
        let walls = [wall(3.0, 0.0), wall(4.0, 90.0), wall(1.0, 180.0)];
        let closing = ClosingSegment::new(&walls).execute().unwrap();
        // From (3, 4) back to the origin.
        assert_abs_diff_eq!(closing.length, 5.0, epsilon = 1e-9);
        let expected = (-4.0f64).atan2(-3.0).to_degrees().rem_euclid(360.0);
        assert_abs_diff_eq!(closing.angle, expected, epsilon = 1e-9);
    }

    #[test]
    fn needs_two_walls() {
        let walls = [wall(3.0, 0.0)];
        assert!(ClosingSegment::new(&walls).execute().is_none());
    }

    #[test]
    fn closing_starts_at_last_wall_start() {
        let walls = [wall(3.0, 0.0), wall(1.0, 90.0), wall(1.0, 270.0)];
        // The last wall starts at (3, 1); closing is well defined.
        assert!(ClosingSegment::new(&walls).execute().is_some());

        let walls = [wall(3.0, 0.0), wall(3.0, 180.0)];
        // The last wall starts at (3, 0); its replacement runs due west.
        let closing = ClosingSegment::new(&walls).execute().unwrap();
        assert_abs_diff_eq!(closing.angle, 180.0, epsilon = 1e-9);
    }
}
