//! Polygon helpers.

use crate::types::Point;

/// Shoelace signed area; positive for counter-clockwise winding in a y-up frame.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice / 2.0
}

pub fn is_counter_clockwise(points: &[Point]) -> bool {
    signed_area(points) > 0.0
}

/// Length of the polyline, including the closing segment when `closed`.
pub fn perimeter(points: &[Point], closed: bool) -> f64 {
    let open: f64 = points.windows(2).map(|w| w[0].distance(&w[1])).sum();
    match (closed, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 2 => open + last.distance(first),
        _ => open,
    }
}

/// Number of proper crossings between non-adjacent edges of a closed polygon.
///
/// Edges that only touch at a shared vertex do not count, so a simple
/// polygon gives zero.
pub fn crossing_count(points: &[Point]) -> usize {
    let n = points.len();
    if n < 4 {
        return 0;
    }
    let edge = |i: usize| (points[i], points[(i + 1) % n]);
    let mut crossings = 0;
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = edge(i);
            let (c, d) = edge(j);
            if segments_cross(a, b, c, d) {
                crossings += 1;
            }
        }
    }
    crossings
}

fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    const EPS: f64 = 1e-12;
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    ((o1 > EPS && o2 < -EPS) || (o1 < -EPS && o2 > EPS))
        && ((o3 > EPS && o4 < -EPS) || (o3 < -EPS && o4 > EPS))
}
