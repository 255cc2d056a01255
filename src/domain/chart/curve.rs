use super::value_objects::Point;
use serde::Serialize;
use std::fmt::Write;

/// One SVG path instruction in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
}

impl PathCommand {
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::CurveTo { to, .. } => to,
        }
    }
}

/// Monotone cubic interpolation along x (Steffen-style tangents).
///
/// Points are joined in the order given. The curve passes through every
/// point and never overshoots a local extremum, so a price peak stays the
/// highest point of the line.
pub fn monotone_x(points: &[Point]) -> Vec<PathCommand> {
    match points {
        [] => Vec::new(),
        [only] => vec![PathCommand::MoveTo(*only)],
        [a, b] => vec![PathCommand::MoveTo(*a), PathCommand::LineTo(*b)],
        _ => {
            let n = points.len();
            let mut tangents = vec![0.0; n];
            for i in 1..n - 1 {
                tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
            }
            tangents[0] = endpoint_tangent(points[0], points[1], tangents[1]);
            tangents[n - 1] = endpoint_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

            let mut commands = Vec::with_capacity(n);
            commands.push(PathCommand::MoveTo(points[0]));
            for i in 0..n - 1 {
                commands.push(hermite_segment(points[i], points[i + 1], tangents[i], tangents[i + 1]));
            }
            commands
        }
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

fn endpoint_tangent(p0: Point, p1: Point, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        return neighbour;
    }
    (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
}

fn hermite_segment(p0: Point, p1: Point, t0: f64, t1: f64) -> PathCommand {
    let dx = (p1.x - p0.x) / 3.0;
    PathCommand::CurveTo {
        c1: Point::new(p0.x + dx, p0.y + dx * t0),
        c2: Point::new(p1.x - dx, p1.y - dx * t1),
        to: p1,
    }
}

/// Serialize commands into an SVG `d` attribute
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut d = String::with_capacity(commands.len() * 40);
    for command in commands {
        let _ = match command {
            PathCommand::MoveTo(p) => write!(d, "M{:.2},{:.2}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L{:.2},{:.2}", p.x, p.y),
            PathCommand::CurveTo { c1, c2, to } => write!(
                d,
                "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                c1.x, c1.y, c2.x, c2.y, to.x, to.y
            ),
        };
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_has_flat_tangent() {
        let pts = [Point::new(0.0, 10.0), Point::new(1.0, 0.0), Point::new(2.0, 10.0)];
        let path = monotone_x(&pts);
        let PathCommand::CurveTo { c2, to, .. } = path[1] else { panic!("expected curve") };
        assert_eq!(c2.y, to.y);
    }

    #[test]
    fn svg_path_formatting() {
        let d = to_svg_path(&[
            PathCommand::MoveTo(Point::new(0.0, 1.0)),
            PathCommand::LineTo(Point::new(2.5, 3.0)),
        ]);
        assert_eq!(d, "M0.00,1.00L2.50,3.00");
    }
}
