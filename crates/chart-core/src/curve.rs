// File: crates/chart-core/src/curve.rs
// Summary: Uniform cubic B-spline ("basis") smoothing of a polyline into path commands.

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CubicTo { c1: (f64, f64), c2: (f64, f64), to: (f64, f64) },
    Close,
}

/// Smooth `points` with a basis spline. The curve starts and ends on the first and last
/// point and is pulled toward, but does not pass through, the interior points.
pub fn basis(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let n = points.len();
    match n {
        0 => return Vec::new(),
        1 => {
            let (x, y) = points[0];
            return vec![PathCommand::MoveTo(x, y), PathCommand::Close];
        }
        _ => {}
    }

    let mut out = Vec::with_capacity(n + 2);
    let (x0, y0) = points[0];
    let (x1, y1) = points[1];
    out.push(PathCommand::MoveTo(x0, y0));
    if n == 2 {
        out.push(PathCommand::LineTo(x1, y1));
        return out;
    }

    out.push(PathCommand::LineTo((5.0 * x0 + x1) / 6.0, (5.0 * y0 + y1) / 6.0));
    // window of the two previous points
    let (mut a, mut b) = (points[0], points[1]);
    for &p in &points[2..] {
        out.push(segment(a, b, p));
        a = b;
        b = p;
    }
    out.push(segment(a, b, b));
    out.push(PathCommand::LineTo(b.0, b.1));
    out
}

fn segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> PathCommand {
    PathCommand::CubicTo {
        c1: ((2.0 * a.0 + b.0) / 3.0, (2.0 * a.1 + b.1) / 3.0),
        c2: ((a.0 + 2.0 * b.0) / 3.0, (a.1 + 2.0 * b.1) / 3.0),
        to: ((a.0 + 4.0 * b.0 + p.0) / 6.0, (a.1 + 4.0 * b.1 + p.1) / 6.0),
    }
}

/// Serialise commands as SVG path data (`M`, `L`, `C`, `Z`).
pub fn path_data(cmds: &[PathCommand]) -> String {
    let mut d = String::new();
    for c in cmds {
        // writing into a String cannot fail
        let _ = match *c {
            PathCommand::MoveTo(x, y) => write!(d, "M{x},{y}"),
            PathCommand::LineTo(x, y) => write!(d, "L{x},{y}"),
            PathCommand::CubicTo { c1, c2, to } => write!(
                d,
                "C{},{},{},{},{},{}",
                c1.0, c1.1, c2.0, c2.1, to.0, to.1
            ),
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}
