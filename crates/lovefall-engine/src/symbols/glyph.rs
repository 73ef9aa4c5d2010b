//! Shape geometry for each symbol kind.
//!
//! All outlines are centered on the local origin on a y-down surface and
//! scale linearly with `size`. A glyph is a list of separately painted
//! parts; overlapping parts of a translucent symbol blend over each other.

use lyon::math::{point, vector, Angle, Point};
use lyon::path::{Path, Winding};

/// How a glyph's parts are painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphStyle {
    Fill,
    Stroke { width: f32 },
}

/// Paths making up one symbol at one size.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub parts: Vec<Path>,
    pub style: GlyphStyle,
}

impl Glyph {
    fn filled(parts: Vec<Path>) -> Self {
        Self {
            parts,
            style: GlyphStyle::Fill,
        }
    }

    pub fn is_stroked(&self) -> bool {
        matches!(self.style, GlyphStyle::Stroke { .. })
    }
}

fn polar(degrees: f32, radius: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    point(cos * radius, sin * radius)
}

fn disk(cx: f32, cy: f32, radius: f32) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(point(cx, cy), radius, Winding::Positive);
    builder.build()
}

/// Five-pointed star: outer radius `size`, inner radius `size / 2`.
pub fn star(size: f32) -> Glyph {
    let mut builder = Path::builder();
    builder.begin(polar(18.0, size));
    builder.line_to(polar(54.0, size / 2.0));
    for i in 1..5 {
        let step = i as f32 * 72.0;
        builder.line_to(polar(18.0 + step, size));
        builder.line_to(polar(54.0 + step, size / 2.0));
    }
    builder.close();
    Glyph::filled(vec![builder.build()])
}

/// Heart made of two mirrored cubic lobes meeting at `(0, size)`.
pub fn heart(size: f32) -> Glyph {
    let s = size;
    let mut builder = Path::builder();
    builder.begin(point(0.0, s / 4.0));
    builder.cubic_bezier_to(point(s / 2.0, -s / 2.0), point(s, 0.0), point(0.0, s));
    builder.cubic_bezier_to(point(-s, 0.0), point(-s / 2.0, -s / 2.0), point(0.0, s / 4.0));
    builder.close();
    Glyph::filled(vec![builder.build()])
}

/// Center disk plus three smaller petal disks.
pub fn flower(size: f32) -> Glyph {
    let s = size;
    Glyph::filled(vec![
        disk(0.0, 0.0, s / 2.0),
        disk(s / 4.0, -s / 4.0, s / 3.0),
        disk(-s / 4.0, -s / 4.0, s / 3.0),
        disk(0.0, s / 4.0, s / 3.0),
    ])
}

/// Elliptical body, round head, triangular tail and an arched wing.
pub fn bird(size: f32) -> Glyph {
    let s = size;

    let mut body = Path::builder();
    body.add_ellipse(
        point(0.0, 0.0),
        vector(s * 0.7, s * 0.4),
        Angle::radians(0.0),
        Winding::Positive,
    );

    let head = disk(s * 0.6, -s * 0.2, s * 0.2);

    let mut tail = Path::builder();
    tail.begin(point(-s * 0.7, 0.0));
    tail.line_to(point(-s, s * 0.3));
    tail.line_to(point(-s * 0.7, s * 0.1));
    tail.close();

    let mut wing = Path::builder();
    wing.begin(point(0.0, -s * 0.4));
    wing.quadratic_bezier_to(point(s * 0.5, -s * 0.8), point(s * 0.7, -s * 0.4));
    wing.line_to(point(0.0, -s * 0.4));
    wing.close();

    Glyph::filled(vec![body.build(), head, tail.build(), wing.build()])
}

/// Plus-shaped cross of two `size`-long strokes.
pub fn sparkle(size: f32, line_width: f32) -> Glyph {
    let half = size / 2.0;
    let mut builder = Path::builder();
    builder.begin(point(-half, 0.0));
    builder.line_to(point(half, 0.0));
    builder.end(false);
    builder.begin(point(0.0, -half));
    builder.line_to(point(0.0, half));
    builder.end(false);

    Glyph {
        parts: vec![builder.build()],
        style: GlyphStyle::Stroke { width: line_width },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::path::PathEvent;

    /// Every on-curve and control point of a path.
    fn hull(path: &Path) -> Vec<Point> {
        let mut out = Vec::new();
        for event in path.iter() {
            match event {
                PathEvent::Begin { at } => out.push(at),
                PathEvent::Line { to, .. } => out.push(to),
                PathEvent::Quadratic { ctrl, to, .. } => out.extend([ctrl, to]),
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => out.extend([ctrl1, ctrl2, to]),
                PathEvent::End { .. } => {}
            }
        }
        out
    }

    fn extent(points: &[Point]) -> (f32, f32, f32, f32) {
        points.iter().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        )
    }

    /// On-curve points only (segment endpoints).
    fn endpoints(path: &Path) -> Vec<Point> {
        path.iter()
            .filter_map(|e| match e {
                PathEvent::Begin { at } => Some(at),
                PathEvent::Line { to, .. }
                | PathEvent::Quadratic { to, .. }
                | PathEvent::Cubic { to, .. } => Some(to),
                PathEvent::End { .. } => None,
            })
            .collect()
    }

    fn on_curve(path: &Path) -> Vec<Point> {
        path.iter()
            .filter_map(|e| match e {
                PathEvent::Begin { at } => Some(at),
                PathEvent::Line { to, .. } => Some(to),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn star_alternates_outer_and_inner_radius() {
        let glyph = star(20.0);
        assert_eq!(glyph.parts.len(), 1);
        let pts = on_curve(&glyph.parts[0]);
        assert_eq!(pts.len(), 10);
        for (i, p) in pts.iter().enumerate() {
            let r = p.to_vector().length();
            let expected = if i % 2 == 0 { 20.0 } else { 10.0 };
            assert!((r - expected).abs() < 1e-4, "vertex {i}: r={r}");
        }
    }

    #[test]
    fn star_bottom_point_is_straight_down() {
        // 18° + 72° = 90°: on a y-down surface that is the lowest tip.
        let pts = on_curve(&star(10.0).parts[0]);
        assert!((pts[2].x).abs() < 1e-4);
        assert!((pts[2].y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn heart_spans_roughly_twice_size_vertically() {
        let glyph = heart(20.0);
        let (_, y0, _, y1) = extent(&hull(&glyph.parts[0]));
        assert_eq!(y0, -10.0);
        assert_eq!(y1, 20.0);
    }

    #[test]
    fn heart_is_mirrored() {
        let (x0, _, x1, _) = extent(&hull(&heart(16.0).parts[0]));
        assert_eq!(x0, -x1);
    }

    #[test]
    fn flower_has_center_and_three_petals() {
        let glyph = flower(30.0);
        assert_eq!(glyph.parts.len(), 4);
        let (x0, y0, x1, y1) = extent(&endpoints(&glyph.parts[0]));
        assert!((x1 - x0 - 30.0).abs() < 0.5, "center disk diameter {}", x1 - x0);
        assert!((y1 - y0 - 30.0).abs() < 0.5);
    }

    #[test]
    fn bird_has_four_parts_and_tail_reaches_back() {
        let glyph = bird(10.0);
        assert_eq!(glyph.parts.len(), 4);
        let (x0, ..) = extent(&hull(&glyph.parts[2]));
        assert_eq!(x0, -10.0);
    }

    #[test]
    fn bird_body_is_wider_than_tall() {
        let glyph = bird(10.0);
        let (x0, y0, x1, y1) = extent(&endpoints(&glyph.parts[0]));
        assert!((x1 - x0) > (y1 - y0));
    }

    #[test]
    fn sparkle_is_two_segments_of_size_length() {
        let glyph = sparkle(24.0, 1.0);
        assert_eq!(glyph.style, GlyphStyle::Stroke { width: 1.0 });
        let pts = on_curve(&glyph.parts[0]);
        assert_eq!(pts.len(), 4);
        assert!(((pts[1] - pts[0]).length() - 24.0).abs() < 1e-4);
        assert!(((pts[3] - pts[2]).length() - 24.0).abs() < 1e-4);
        assert_eq!((pts[1] - pts[0]).dot(pts[3] - pts[2]), 0.0);
    }
}
