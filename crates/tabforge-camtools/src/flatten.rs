//! Curve flattening
//!
//! Thin wrappers over `lyon::geom` segments in `f64`, with a tolerance that
//! scales with the size of the curve and a minimum step between emitted
//! points so tiny arcs do not explode into hundreds of vertices.

use lyon::geom::{point, vector, Angle, Arc, CubicBezierSegment, QuadraticBezierSegment};
use tabforge_core::constants::MIN_FLATTEN_STEP;
use tabforge_core::Point;

/// Flattening tolerance for a curve of roughly `size` millimetres.
pub fn adaptive_tolerance(size: f64) -> f64 {
    if !size.is_finite() {
        return 0.1;
    }
    (size.abs() / 200.0).clamp(0.005, 0.1)
}

/// Circular arc from `start_angle` sweeping `sweep_angle` radians (positive is
/// counter-clockwise in a y-up frame). The start point is included.
pub fn flatten_arc(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> Vec<Point> {
    let arc = Arc {
        center: point(center.x, center.y),
        radii: vector(radius, radius),
        start_angle: Angle::radians(start_angle),
        sweep_angle: Angle::radians(sweep_angle),
        x_rotation: Angle::radians(0.0),
    };

    let from = arc.from();
    let mut points = vec![Point::new(from.x, from.y)];
    arc.for_each_flattened(adaptive_tolerance(radius), &mut |segment| {
        points.push(Point::new(segment.to.x, segment.to.y));
    });
    thin_steps(&points, MIN_FLATTEN_STEP)
}

/// Cubic Bézier from `from`; the start point is excluded.
pub fn flatten_cubic(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> Vec<Point> {
    let curve = CubicBezierSegment {
        from: point(from.x, from.y),
        ctrl1: point(ctrl1.x, ctrl1.y),
        ctrl2: point(ctrl2.x, ctrl2.y),
        to: point(to.x, to.y),
    };
    let size = from.distance(&ctrl1) + ctrl1.distance(&ctrl2) + ctrl2.distance(&to);
    let mut points = vec![from];
    curve.for_each_flattened(adaptive_tolerance(size), &mut |segment| {
        points.push(Point::new(segment.to.x, segment.to.y));
    });
    end_exactly_at(thin_steps(&points, MIN_FLATTEN_STEP).split_off(1), to)
}

/// Quadratic Bézier from `from`; the start point is excluded.
pub fn flatten_quadratic(from: Point, ctrl: Point, to: Point) -> Vec<Point> {
    let curve = QuadraticBezierSegment {
        from: point(from.x, from.y),
        ctrl: point(ctrl.x, ctrl.y),
        to: point(to.x, to.y),
    };
    let size = from.distance(&ctrl) + ctrl.distance(&to);
    let mut points = vec![from];
    curve.for_each_flattened(adaptive_tolerance(size), &mut |segment| {
        points.push(Point::new(segment.to.x, segment.to.y));
    });
    end_exactly_at(thin_steps(&points, MIN_FLATTEN_STEP).split_off(1), to)
}

fn end_exactly_at(mut points: Vec<Point>, to: Point) -> Vec<Point> {
    match points.last_mut() {
        Some(last) => *last = to,
        None => points.push(to),
    }
    points
}

/// Drop interior points closer than `min_step` to the previously kept point.
/// The first and last points always survive.
pub fn thin_steps(points: &[Point], min_step: f64) -> Vec<Point> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 2 => (*first, *last),
        _ => return points.to_vec(),
    };

    let mut kept = vec![first];
    for p in &points[1..points.len() - 1] {
        let previous = kept[kept.len() - 1];
        if previous.distance(p) >= min_step && p.distance(&last) >= min_step {
            kept.push(*p);
        }
    }
    kept.push(last);
    kept
}
