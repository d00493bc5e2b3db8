use tracing::trace;

use crate::math::Point2;
use crate::topology::WallData;

/// Turns an ordered wall sequence into absolute vertex coordinates.
///
/// Vertex `0` is the origin and vertex `i` is the sum of the vectors of walls
/// `0..i`, so the output always holds `walls.len() + 1` points.
#[derive(Debug)]
pub struct ResolveVertices<'a> {
    walls: &'a [WallData],
    auto_close: bool,
}

impl<'a> ResolveVertices<'a> {
    /// Creates a new resolve operation over `walls` with auto-close disabled.
    #[must_use]
    pub fn new(walls: &'a [WallData]) -> Self {
        Self {
            walls,
            auto_close: false,
        }
    }

    /// When enabled, the last vertex is snapped onto the first.
    ///
    /// Only the derived vertex moves. The last wall keeps its stored length and
    /// angle, so its drawn length may differ from its nominal one.
    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// Executes the operation, returning `walls.len() + 1` vertices.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let mut vertices = Vec::with_capacity(self.walls.len() + 1);
        let mut cursor = Point2::origin();
        vertices.push(cursor);
        for wall in self.walls {
            cursor += wall.vector();
            vertices.push(cursor);
        }

        if self.auto_close && vertices.len() >= 2 {
            let first = vertices[0];
            if let Some(last) = vertices.last_mut() {
                trace!(gap = (*last - first).norm(), "snapping path closed");
                *last = first;
            }
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn wall(length: f64, angle: f64) -> WallData {
        WallData { length, angle }
    }

    #[test]
    fn empty_walls_yield_origin() {
        let vertices = ResolveVertices::new(&[]).auto_close(true).execute();
        assert_eq!(vertices, vec![Point2::origin()]);
    }

    #[test]
    fn single_wall_auto_close_collapses() {
        let walls = [wall(2.0, 45.0)];
        let vertices = ResolveVertices::new(&walls).auto_close(true).execute();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1], vertices[0]);
    }

    #[test]
    fn square_returns_near_origin() {
        let walls = [
            wall(2.0, 0.0),
            wall(2.0, 90.0),
            wall(2.0, 180.0),
            wall(2.0, 270.0),
        ];
        let vertices = ResolveVertices::new(&walls).execute();
        assert_eq!(vertices.len(), 5);
        assert_abs_diff_eq!(vertices[2].x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vertices[2].y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vertices[4].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vertices[4].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn auto_close_overrides_last_vertex_only() {
        let walls = [wall(3.0, 0.0), wall(2.0, 90.0), wall(2.5, 180.0)];
        let open = ResolveVertices::new(&walls).execute();
        let closed = ResolveVertices::new(&walls).auto_close(true).execute();
        assert_eq!(open[..3], closed[..3]);
        assert_abs_diff_eq!(open[3].x, 0.5, epsilon = 1e-12);
        assert_eq!(closed[3], Point2::origin());
        // Wall data is untouched.
        assert_abs_diff_eq!(walls[2].length, 2.5);
    }
}
