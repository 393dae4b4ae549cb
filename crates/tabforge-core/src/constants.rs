//! Numeric tolerances and input floors used across the engine.

/// Two points closer than this on both axes are treated as the same vertex.
pub const POINT_EPSILON: f64 = 1e-6;

/// Tolerance for comparing extents of panels that must physically align.
pub const ALIGNMENT_EPSILON: f64 = 0.01;

/// Decimal places emitted in path data.
pub const PATH_PRECISION: usize = 3;

/// Minimum material thickness in mm.
pub const MIN_THICKNESS: f64 = 0.1;

/// Minimum requested or derived box dimension in mm.
pub const MIN_DIMENSION: f64 = 1.0;

/// Largest requested box dimension in mm.
pub const MAX_DIMENSION: f64 = 10_000.0;

/// Minimum finger width bound in mm.
pub const MIN_FINGER: f64 = 0.1;

/// Most segments one finger seam is split into; always odd.
pub const MAX_FINGER_SEGMENTS: usize = 2001;

/// Most tabs accepted for a manual vertical-seam tab count.
pub const MAX_TAB_COUNT: u32 = 1000;

/// Most compartments along one axis of a divider grid.
pub const MAX_COMPARTMENTS: u32 = 100;

/// Smallest step emitted when flattening curves, in mm.
pub const MIN_FLATTEN_STEP: f64 = 0.25;

/// Replace non-finite values with `floor` and clamp everything else to at least `floor`.
pub fn clamp_floor(value: f64, floor: f64) -> f64 {
    if value.is_finite() {
        value.max(floor)
    } else {
        floor
    }
}

/// Like [`clamp_floor`] with an upper bound as well; non-finite values become `floor`.
pub fn clamp_range(value: f64, floor: f64, ceiling: f64) -> f64 {
    clamp_floor(value, floor).min(ceiling)
}
