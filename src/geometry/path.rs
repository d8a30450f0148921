//! Bridge outline as vector path commands
//!
//! Paths are kept structured so renderers without an SVG parser can sample
//! them directly; `Display` emits SVG path syntax.

use std::fmt;

use glam::Vec2;

/// One vector path drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    LineTo(Vec2),
    Close,
}

impl PathCommand {
    /// End point of the command (None for Close)
    pub fn end_point(&self) -> Option<Vec2> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo { to, .. } | PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }

    /// Control points of the command, in order
    pub fn control_points(&self) -> Vec<Vec2> {
        match *self {
            PathCommand::QuadTo { ctrl, .. } => vec![ctrl],
            PathCommand::CubicTo { ctrl1, ctrl2, .. } => vec![ctrl1, ctrl2],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => write!(f, "M {:.2} {:.2}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {:.2} {:.2}", p.x, p.y),
            PathCommand::QuadTo { ctrl, to } => {
                write!(f, "Q {:.2} {:.2} {:.2} {:.2}", ctrl.x, ctrl.y, to.x, to.y)
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                f,
                "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// A closed bridge outline, or empty when there is no bridge to draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BridgePath {
    pub commands: Vec<PathCommand>,
}

impl BridgePath {
    /// No bridge this frame
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// SVG path data (empty string for an empty path)
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// On-curve points (command end points), in drawing order
    pub fn anchor_points(&self) -> Vec<Vec2> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    /// Off-curve control points, in drawing order
    pub fn control_points(&self) -> Vec<Vec2> {
        self.commands.iter().flat_map(|c| c.control_points()).collect()
    }

    /// Flatten the outline into a polyline
    ///
    /// Each curve contributes `samples_per_curve` points; straight segments
    /// contribute their end point only.
    pub fn sample_outline(&self, samples_per_curve: usize) -> Vec<Vec2> {
        let n = samples_per_curve.max(1);
        let mut points = Vec::with_capacity(self.commands.len() * n);
        let mut current = Vec2::ZERO;
        let mut start = Vec2::ZERO;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    points.push(p);
                    current = p;
                    start = p;
                }
                PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    points.extend((1..=n).map(|i| quad_point(current, ctrl, to, i as f32 / n as f32)));
                    current = to;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    points.extend(
                        (1..=n).map(|i| cubic_point(current, ctrl1, ctrl2, to, i as f32 / n as f32)),
                    );
                    current = to;
                }
                PathCommand::Close => {
                    if current != start {
                        points.push(start);
                    }
                    current = start;
                }
            }
        }

        points
    }

    /// Shoelace area of the flattened outline; the sign gives the winding
    /// (positive is counter-clockwise in y-up coordinates)
    pub fn signed_area(&self, samples_per_curve: usize) -> f32 {
        let points = self.sample_outline(samples_per_curve);
        let n = points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f32 = (0..n)
            .map(|i| points[i].perp_dot(points[(i + 1) % n]))
            .sum();
        twice * 0.5
    }

    /// Axis-aligned bounds of anchors and controls (convex-hull bound of the curve)
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut iter = self
            .commands
            .iter()
            .flat_map(|c| c.end_point().into_iter().chain(c.control_points()));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl fmt::Display for BridgePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

/// Point on a quadratic Bezier at `t`
#[inline]
pub fn quad_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

/// Point on a cubic Bezier at `t`
#[inline]
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> BridgePath {
        let mut path = BridgePath::with_capacity(4);
        path.move_to(Vec2::new(0.0, 0.0))
            .line_to(Vec2::new(10.0, 0.0))
            .cubic_to(Vec2::new(10.0, 5.0), Vec2::new(5.0, 10.0), Vec2::new(0.0, 10.0))
            .close();
        path
    }

    #[test]
    fn test_svg_output() {
        assert_eq!(
            triangle().to_svg(),
            "M 0.00 0.00 L 10.00 0.00 C 10.00 5.00 5.00 10.00 0.00 10.00 Z"
        );
        assert_eq!(BridgePath::empty().to_svg(), "");
    }

    #[test]
    fn test_quad_svg_output() {
        let mut path = BridgePath::default();
        path.move_to(Vec2::ZERO).quad_to(Vec2::new(1.5, 2.25), Vec2::new(3.0, 0.0));
        assert_eq!(path.to_svg(), "M 0.00 0.00 Q 1.50 2.25 3.00 0.00");
    }

    #[test]
    fn test_anchor_and_control_points() {
        let path = triangle();
        assert_eq!(path.anchor_points().len(), 3);
        assert_eq!(
            path.control_points(),
            vec![Vec2::new(10.0, 5.0), Vec2::new(5.0, 10.0)]
        );
    }

    #[test]
    fn test_sample_outline_closes() {
        let points = triangle().sample_outline(8);
        // move + line + 8 curve samples + closing point
        assert_eq!(points.len(), 11);
        assert_eq!(points.first(), points.last());
        assert!(points[9].distance(Vec2::new(0.0, 10.0)) < 1e-5);
    }

    #[test]
    fn test_bezier_endpoints() {
        let (a, b, c, d) = (Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE);
        assert_eq!(cubic_point(a, b, c, d, 0.0), a);
        assert!(cubic_point(a, b, c, d, 1.0).distance(d) < 1e-6);
        assert!(quad_point(a, b, d, 1.0).distance(d) < 1e-6);
    }

    #[test]
    fn test_signed_area_follows_winding() {
        let mut ccw = BridgePath::default();
        ccw.move_to(Vec2::ZERO)
            .line_to(Vec2::new(4.0, 0.0))
            .line_to(Vec2::new(4.0, 3.0))
            .close();
        assert!((ccw.signed_area(1) - 6.0).abs() < 1e-5);

        let mut cw = BridgePath::default();
        cw.move_to(Vec2::ZERO)
            .line_to(Vec2::new(4.0, 3.0))
            .line_to(Vec2::new(4.0, 0.0))
            .close();
        assert!((cw.signed_area(1) + 6.0).abs() < 1e-5);
        assert_eq!(BridgePath::empty().signed_area(8), 0.0);
    }

    #[test]
    fn test_bounds() {
        let (min, max) = triangle().bounds().unwrap();
        assert_eq!(min, Vec2::ZERO);
        assert_eq!(max, Vec2::new(10.0, 10.0));
        assert!(BridgePath::empty().bounds().is_none());
    }
}
