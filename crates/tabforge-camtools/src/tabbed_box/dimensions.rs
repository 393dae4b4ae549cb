//! Inner/outer dimension derivation

use super::types::{BoxSettings, DimensionReference, LidStyle};
use serde::{Deserialize, Serialize};
use tabforge_core::constants::MIN_DIMENSION;

/// Cavity and envelope sizes of a box, derived once from its settings.
///
/// `outer = inner + 2t` on width and depth. On height the box gains one
/// thickness per capping panel: the bottom always, and the top when there is
/// a lid or the fixed top of an open-front shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub inner_width: f64,
    pub inner_height: f64,
    pub inner_depth: f64,
    pub outer_width: f64,
    pub outer_height: f64,
    pub outer_depth: f64,
}

impl BoxDimensions {
    pub fn derive(settings: &BoxSettings) -> Self {
        let t = settings.thickness;
        let caps = if settings.has_top_cap() { 2.0 } else { 1.0 };

        let (inner_width, inner_height, inner_depth) = match settings.reference {
            DimensionReference::Inside => (settings.width, settings.height, settings.depth),
            DimensionReference::Outside => (
                (settings.width - 2.0 * t).max(MIN_DIMENSION),
                (settings.height - caps * t).max(MIN_DIMENSION),
                (settings.depth - 2.0 * t).max(MIN_DIMENSION),
            ),
        };

        Self {
            inner_width,
            inner_height,
            inner_depth,
            outer_width: inner_width + 2.0 * t,
            outer_height: inner_height + caps * t,
            outer_depth: inner_depth + 2.0 * t,
        }
    }

    /// Height of the side walls: the full envelope, less the lid thickness
    /// when a flat lid sits on top of the walls.
    pub fn wall_height(&self, settings: &BoxSettings) -> f64 {
        let flat_lid = !settings.open_front
            && matches!(settings.lid, LidStyle::FlatLid | LidStyle::FlatLidWithLip);
        if flat_lid {
            self.outer_height - settings.thickness
        } else {
            self.outer_height
        }
    }
}
