pub mod polygon_2d;

/// 2D point type (meters unless stated otherwise).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Distance under which a point is treated as lying on a polygon edge.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-9;
