//! Outline interchange format.
//!
//! Paths use only absolute `M`, `L`, `H`, `V` and `Z` commands with fixed
//! three-decimal precision so outputs diff cleanly between runs.

use crate::constants::{PATH_PRECISION, POINT_EPSILON};
use crate::types::Point;

/// Format a coordinate with fixed precision, normalising negative zero.
pub fn format_coord(value: f64) -> String {
    let half_ulp = 0.5 * 10f64.powi(-(PATH_PRECISION as i32));
    let v = if value.abs() < half_ulp { 0.0 } else { value };
    format!("{:.*}", PATH_PRECISION, v)
}

/// Encode a polyline as path data.
///
/// Axis-aligned moves use `H`/`V`; everything else uses `L`. A closed path ends
/// with `Z` and never repeats its first point.
pub fn format_path_data(points: &[Point], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let rest = match (closed, rest.split_last()) {
        (true, Some((last, head))) if last.coincides(first) => head,
        _ => rest,
    };

    let mut out = format!("M{} {}", format_coord(first.x), format_coord(first.y));
    let mut prev = *first;
    for p in rest {
        let same_x = (p.x - prev.x).abs() <= POINT_EPSILON;
        let same_y = (p.y - prev.y).abs() <= POINT_EPSILON;
        if same_x && same_y {
            continue;
        }
        let command = if same_y {
            format!(" H{}", format_coord(p.x))
        } else if same_x {
            format!(" V{}", format_coord(p.y))
        } else {
            format!(" L{} {}", format_coord(p.x), format_coord(p.y))
        };
        out.push_str(&command);
        prev = *p;
    }
    if closed {
        out.push_str(" Z");
    }
    out
}
