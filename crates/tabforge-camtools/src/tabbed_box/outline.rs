//! Closed outline clean-up and kerf offset

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use std::panic;
use tabforge_core::constants::POINT_EPSILON;
use tabforge_core::{crossing_count, is_counter_clockwise, signed_area, Point};
use tracing::{debug, warn};

/// Remove coincident vertices and vertices that sit on a straight
/// axis-aligned run, treating the outline as a closed loop.
///
/// The result has no two neighbours (including last/first) within 1e-6 and
/// no three consecutive vertices sharing an x or a y. Running it twice gives
/// the same vertices.
pub fn simplify_closed(points: &[Point]) -> Vec<Point> {
    let mut result = dedupe_closed(points.to_vec());

    while result.len() >= 3 {
        let n = result.len();
        let collinear = (0..n).find(|&i| {
            let prev = result[(i + n - 1) % n];
            let cur = result[i];
            let next = result[(i + 1) % n];
            same_axis(prev.x, cur.x, next.x) || same_axis(prev.y, cur.y, next.y)
        });

        match collinear {
            Some(index) => {
                result.remove(index);
                result = dedupe_closed(result);
            }
            None => break,
        }
    }

    result
}

fn same_axis(a: f64, b: f64, c: f64) -> bool {
    (a - b).abs() <= POINT_EPSILON && (b - c).abs() <= POINT_EPSILON
}

fn dedupe_closed(points: Vec<Point>) -> Vec<Point> {
    let mut result: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if result.last().is_some_and(|last| last.coincides(&point)) {
            continue;
        }
        result.push(point);
    }
    while result.len() > 1 {
        match (result.first(), result.last()) {
            (Some(first), Some(last)) if first.coincides(last) => {
                result.pop();
            }
            _ => break,
        }
    }
    result
}

/// Push a closed outline outward by `distance` with mitred corners.
///
/// The offset itself is computed by `cavalier_contours`, which trims the
/// loops that form where a gap is narrower than twice the offset; the rounded
/// joins it adds at convex corners are mitred back to sharp corners. A gap
/// that closes up leaves a shallow V where its two sides met. Non-positive
/// distances and degenerate outlines come back unchanged, and an outline the
/// offset cannot grow into a simple polygon is returned uncompensated.
pub fn offset_outline(points: &[Point], distance: f64) -> Vec<Point> {
    if !distance.is_finite() || distance <= 0.0 || points.len() < 3 {
        return points.to_vec();
    }

    let mut ring = simplify_closed(points);
    if ring.len() < 3 {
        return points.to_vec();
    }
    if !is_counter_clockwise(&ring) {
        ring.reverse();
    }

    let mut polyline: Polyline = Polyline::new();
    for p in &ring {
        polyline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    polyline.set_is_closed(true);

    // Negative offsets grow a counter-clockwise polyline.
    let loops = match panic::catch_unwind(panic::AssertUnwindSafe(|| {
        polyline.parallel_offset(-distance)
    })) {
        Ok(loops) => loops,
        Err(_) => {
            warn!(distance, "Panic during kerf offset; outline left uncompensated");
            return ring;
        }
    };
    if loops.len() > 1 {
        warn!(
            loops = loops.len(),
            "Kerf offset split the outline; keeping the outer loop"
        );
    }
    let Some(outer) = loops
        .into_iter()
        .max_by(|a, b| a.area().abs().total_cmp(&b.area().abs()))
    else {
        warn!(distance, "Kerf offset collapsed the outline; left uncompensated");
        return ring;
    };

    let mitred = counter_clockwise(simplify_closed(&mitre_corners(&outer)));
    if is_grown_simple(&mitred, &ring) {
        return mitred;
    }

    let chords: Vec<Point> = outer
        .vertex_data
        .iter()
        .map(|v| Point::new(v.x, v.y))
        .collect();
    let chords = counter_clockwise(simplify_closed(&chords));
    if is_grown_simple(&chords, &ring) {
        debug!(
            vertices = chords.len(),
            "Mitred kerf corners overlapped; kept chorded joins"
        );
        return chords;
    }

    warn!(distance, "Kerf offset is not a simple polygon; outline left uncompensated");
    ring
}

fn counter_clockwise(mut points: Vec<Point>) -> Vec<Point> {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}

fn is_grown_simple(candidate: &[Point], original: &[Point]) -> bool {
    candidate.len() >= 3
        && is_counter_clockwise(candidate)
        && signed_area(candidate) > signed_area(original)
        && crossing_count(candidate) == 0
}

/// Vertices of `polyline` with each arc segment between two straight
/// segments replaced by the intersection of those segments' lines. Arcs next
/// to other arcs keep their end points.
fn mitre_corners(polyline: &Polyline) -> Vec<Point> {
    let n = polyline.vertex_count();
    if n < 3 {
        return polyline
            .vertex_data
            .iter()
            .map(|v| Point::new(v.x, v.y))
            .collect();
    }

    let at = |i: usize| {
        let v = polyline.at(i % n);
        Point::new(v.x, v.y)
    };
    let is_arc = |i: usize| polyline.at(i % n).bulge.abs() > BULGE_EPSILON;
    let corner = |i: usize| -> Option<Point> {
        if !is_arc(i) || is_arc(i + n - 1) || is_arc(i + 1) {
            return None;
        }
        line_intersection(at(i + n - 1), at(i), at(i + 1), at(i + 2))
    };

    let corners: Vec<Option<Point>> = (0..n).map(corner).collect();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        if corners[(i + n - 1) % n].is_some() {
            continue;
        }
        match corners[i] {
            Some(point) => points.push(point),
            None => points.push(at(i)),
        }
    }
    points
}

const BULGE_EPSILON: f64 = 1e-9;

fn line_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let (ax, ay) = (a2.x - a1.x, a2.y - a1.y);
    let (bx, by) = (b2.x - b1.x, b2.y - b1.y);
    let denom = ax * by - ay * bx;
    if denom.abs() < 1e-12 {
        return None;
    }
    let t = ((b1.x - a1.x) * by - (b1.y - a1.y) * bx) / denom;
    Some(Point::new(a1.x + t * ax, a1.y + t * ay))
}
