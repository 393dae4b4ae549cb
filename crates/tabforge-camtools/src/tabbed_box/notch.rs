//! Thumb notch carving for drawer fronts

use super::outline::simplify_closed;
use super::types::ThumbNotchSettings;
use crate::flatten::flatten_arc;
use std::f64::consts::PI;
use tabforge_core::constants::POINT_EPSILON;
use tabforge_core::{Bounds, Point};
use tracing::debug;

/// Carve a centred semicircular finger pull into the longest straight run of
/// the outline's top edge.
///
/// The arc is spliced between the run's endpoints in traversal order, so it
/// bends into the panel whichever way the run is walked. Returns `None` when
/// there is no top run, or when the run is too short to keep `min_chord` of
/// straight material on both sides of an arc of at least `min_chord` radius.
pub fn carve_thumb_notch(outline: &[Point], settings: &ThumbNotchSettings) -> Option<Vec<Point>> {
    let bounds = Bounds::from_points(outline)?;
    let top = bounds.max_y;
    let n = outline.len();
    if n < 3 {
        return None;
    }

    let on_top = |p: &Point| (p.y - top).abs() <= POINT_EPSILON;
    let (index, run) = (0..n)
        .filter_map(|i| {
            let a = outline[i];
            let b = outline[(i + 1) % n];
            (on_top(&a) && on_top(&b)).then(|| (i, (b.x - a.x).abs()))
        })
        .fold(None, |best: Option<(usize, f64)>, candidate| match best {
            Some(current) if current.1 >= candidate.1 => Some(current),
            _ => Some(candidate),
        })?;

    let radius = settings
        .radius_for(bounds.width(), bounds.height())
        .min((run - 2.0 * settings.min_chord) / 2.0);
    if radius < settings.min_chord {
        debug!(run, radius, "Top edge too short for a thumb notch");
        return None;
    }

    let a = outline[index];
    let b = outline[(index + 1) % n];
    let dir = if b.x > a.x { 1.0 } else { -1.0 };
    let cx = (a.x + b.x) / 2.0;
    let start_angle = if dir > 0.0 { PI } else { 0.0 };

    let mut arc = flatten_arc(Point::new(cx, top), radius, start_angle, dir * PI);
    if let Some(first) = arc.first_mut() {
        *first = Point::new(cx - dir * radius, top);
    }
    if let Some(last) = arc.last_mut() {
        *last = Point::new(cx + dir * radius, top);
    }

    debug!(radius, vertices = arc.len(), "Carved thumb notch");

    let carved: Vec<Point> = outline[..=index]
        .iter()
        .copied()
        .chain(arc)
        .chain(outline[index + 1..].iter().copied())
        .collect();
    Some(simplify_closed(&carved))
}
