use super::{Point2, CONTAINMENT_TOLERANCE, TOLERANCE};
use crate::geometry::Rect;

/// Computes the signed area of a polygon ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (in a Y-up frame).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned area enclosed by the ring.
#[must_use]
pub fn area_2d(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Total edge length of the ring, including the closing edge.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// Distance from `p` to the segment `a`–`b`.
#[must_use]
pub fn distance_to_segment(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Returns `true` if `p` lies on one of the ring's edges.
#[must_use]
pub fn point_on_boundary(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    (0..n).any(|i| {
        let j = if i == 0 { n - 1 } else { i - 1 };
        distance_to_segment(p, &polygon[i], &polygon[j]) <= CONTAINMENT_TOLERANCE
    })
}

/// Point-in-polygon test over the vertex sequence interpreted as a closed ring.
///
/// Points on an edge count as inside. Otherwise a horizontal ray is cast
/// towards +X and the parity of edge crossings decides. Rings with fewer than
/// three vertices contain nothing.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    if point_on_boundary(p, polygon) {
        return true;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Axis-aligned rectangle containment by corner sampling.
///
/// The rectangle spans `origin` to `origin + (width, height)`. It is reported
/// inside iff all four corners pass [`point_in_polygon`]. Edges of a concave
/// ring that cut through the rectangle without enclosing a corner are not
/// detected.
#[must_use]
pub fn rectangle_in_polygon(origin: &Point2, width: f64, height: f64, polygon: &[Point2]) -> bool {
    Rect::from_origin_size(*origin, width, height)
        .corners()
        .iter()
        .all(|c| point_in_polygon(c, polygon))
}
