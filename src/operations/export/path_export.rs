use std::fmt::Write as _;

use crate::geometry::Rect;
use crate::math::Point2;

/// Default scale used by the export surface.
pub const DEFAULT_PIXELS_PER_METER: f64 = 100.0;

/// Converts a resolved vertex path into pixel-space vector path data.
///
/// Produces a move command for the first vertex and line commands for the
/// rest, in vertex order, plus the bounding rectangle of the scaled path.
#[derive(Debug)]
pub struct PathExport<'a> {
    vertices: &'a [Point2],
    scale: f64,
}

impl<'a> PathExport<'a> {
    /// Creates a new export with [`DEFAULT_PIXELS_PER_METER`].
    #[must_use]
    pub fn new(vertices: &'a [Point2]) -> Self {
        Self {
            vertices,
            scale: DEFAULT_PIXELS_PER_METER,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, pixels_per_meter: f64) -> Self {
        self.scale = pixels_per_meter;
        self
    }

    /// Path data such as `M 0 0 L 377 0 L 377 379`. Empty for no vertices.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        for (i, v) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(
                out,
                "{cmd} {} {}",
                fmt_coord(v.x * self.scale),
                fmt_coord(v.y * self.scale)
            );
        }
        out
    }

    /// Bounding rectangle of the path in pixels.
    #[must_use]
    pub fn bounds_px(&self) -> Option<Rect> {
        Rect::bounding(self.vertices).map(|r| r.scaled(self.scale))
    }

    /// Minimal standalone SVG document drawing the path.
    ///
    /// The view box is the pixel bounding rectangle; an empty path yields an
    /// empty document with a zero view box.
    #[must_use]
    pub fn document(&self) -> String {
        let bounds = self
            .bounds_px()
            .unwrap_or(Rect::new(Point2::origin(), Point2::origin()));
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"width="{w}" height="{h}" viewBox="{x} {y} {w} {h}">"#,
                r#"<path d="{d}" fill="none" stroke="black" stroke-width="2"/>"#,
                "</svg>"
            ),
            x = fmt_coord(bounds.min.x),
            y = fmt_coord(bounds.min.y),
            w = fmt_coord(bounds.width()),
            h = fmt_coord(bounds.height()),
            d = self.path_data(),
        )
    }
}

/// Formats a pixel coordinate with at most two decimals and no trailing zeros.
fn fmt_coord(value: f64) -> String {
    // Adding zero turns "-0" into "0".
    let rounded = (value * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}
