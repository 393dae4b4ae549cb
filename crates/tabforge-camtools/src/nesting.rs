//! Sheet packing
//!
//! Shelf packing of panel bounding boxes onto a stock sheet. Panels are placed
//! largest first along a row; a panel that does not fit on the current row
//! starts a new one below it. Placements are reported in sheet coordinates
//! (y down, origin at the top-left of the sheet).

use crate::tabbed_box::Panel;
use serde::{Deserialize, Serialize};
use tabforge_core::constants::POINT_EPSILON;
use tabforge_core::Point;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    /// Sheet width in mm; `None` sizes a virtual sheet from the panels
    pub width: Option<f64>,
    /// Sheet height in mm; `None` is unbounded
    pub height: Option<f64>,
    /// Gap kept between panels
    pub spacing: f64,
    /// Try each non-square panel turned by 90 degrees as well
    pub auto_rotate: bool,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            width: Some(600.0),
            height: Some(400.0),
            spacing: 5.0,
            auto_rotate: true,
        }
    }
}

impl SheetSettings {
    /// Unbounded sheet whose width is derived from the panels.
    pub fn virtual_sheet(spacing: f64) -> Self {
        Self {
            width: None,
            height: None,
            spacing,
            auto_rotate: true,
        }
    }

    fn finite(value: Option<f64>) -> Option<f64> {
        value.filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// A panel and where it ended up on the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedFace {
    pub panel: Panel,
    pub x: f64,
    pub y: f64,
    /// Turned 90 degrees
    pub rotated: bool,
    /// Did not fit; parked at the origin
    pub overflow: bool,
}

impl PlacedFace {
    /// Footprint width on the sheet.
    pub fn width(&self) -> f64 {
        if self.rotated {
            self.panel.height
        } else {
            self.panel.width
        }
    }

    pub fn height(&self) -> f64 {
        if self.rotated {
            self.panel.width
        } else {
            self.panel.height
        }
    }

    /// Map a panel-local (y-up) point to sheet coordinates.
    pub fn to_sheet(&self, point: &Point) -> Point {
        let bounds = self.panel.bounds();
        let u = point.x - bounds.min_x;
        let v = bounds.max_y - point.y;
        let (sx, sy) = if self.rotated {
            (self.panel.height - v, u)
        } else {
            (u, v)
        };
        Point::new(self.x + sx, self.y + sy)
    }

    pub fn sheet_outline(&self) -> Vec<Point> {
        self.panel.outline.iter().map(|p| self.to_sheet(p)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Input panels with their sheet offset filled in
    pub panels: Vec<Panel>,
    pub placements: Vec<PlacedFace>,
    /// Extent of the placed panels plus spacing
    pub width: f64,
    pub height: f64,
    pub warnings: Vec<String>,
}

impl Layout {
    pub fn overflow_count(&self) -> usize {
        self.placements.iter().filter(|p| p.overflow).count()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotated: bool,
    wraps: bool,
    row_height: f64,
}

impl Candidate {
    fn better_than(&self, other: &Candidate) -> bool {
        (self.wraps, self.row_height, self.rotated) < (other.wraps, other.row_height, other.rotated)
    }
}

/// Row cursor: `x` along the current row whose top is at `row_y`.
#[derive(Debug, Clone, Copy)]
struct LayoutCursor {
    x: f64,
    row_y: f64,
    row_height: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            row_y: 0.0,
            row_height: 0.0,
            spacing,
        }
    }

    fn candidate(
        &self,
        width: f64,
        height: f64,
        rotated: bool,
        sheet_width: f64,
        sheet_height: f64,
    ) -> Option<Candidate> {
        if width > sheet_width + POINT_EPSILON || height > sheet_height + POINT_EPSILON {
            return None;
        }
        if self.x + width <= sheet_width + POINT_EPSILON
            && self.row_y + height <= sheet_height + POINT_EPSILON
        {
            return Some(Candidate {
                x: self.x,
                y: self.row_y,
                width,
                height,
                rotated,
                wraps: false,
                row_height: self.row_height.max(height),
            });
        }
        if self.x <= 0.0 {
            return None;
        }
        let y = self.row_y + self.row_height + self.spacing;
        (y + height <= sheet_height + POINT_EPSILON).then_some(Candidate {
            x: 0.0,
            y,
            width,
            height,
            rotated,
            wraps: true,
            row_height: height,
        })
    }

    fn place(&mut self, candidate: &Candidate) {
        if candidate.wraps {
            self.row_y = candidate.y;
            self.row_height = 0.0;
        }
        self.x = candidate.x + candidate.width + self.spacing;
        self.row_height = self.row_height.max(candidate.height);
    }
}

pub struct SheetPacker {
    settings: SheetSettings,
}

impl SheetPacker {
    pub fn new(settings: SheetSettings) -> Self {
        let spacing = if settings.spacing.is_finite() {
            settings.spacing.max(0.0)
        } else {
            0.0
        };
        Self {
            settings: SheetSettings {
                spacing,
                ..settings
            },
        }
    }

    /// Sheet extents used for `panels`: the configured size, or a virtual
    /// sheet `max(sqrt(total area) * 1.5, widest panel)` wide and unbounded.
    pub fn sheet_size(&self, panels: &[Panel]) -> (f64, f64) {
        let width = SheetSettings::finite(self.settings.width).unwrap_or_else(|| {
            let total_area: f64 = panels.iter().map(|p| p.width * p.height).sum();
            let widest = panels.iter().map(|p| p.width).fold(0.0, f64::max);
            (total_area.sqrt() * 1.5).max(widest)
        });
        let height = SheetSettings::finite(self.settings.height).unwrap_or(f64::INFINITY);
        (width, height)
    }

    pub fn pack(&self, panels: &[Panel]) -> Layout {
        let spacing = self.settings.spacing;
        let (sheet_width, sheet_height) = self.sheet_size(panels);

        let mut order: Vec<usize> = (0..panels.len()).collect();
        order.sort_by(|&a, &b| {
            let (pa, pb) = (&panels[a], &panels[b]);
            (pb.width * pb.height)
                .total_cmp(&(pa.width * pa.height))
                .then(pb.height.total_cmp(&pa.height))
                .then(pb.width.total_cmp(&pa.width))
        });

        let mut cursor = LayoutCursor::new(spacing);
        let mut placements = Vec::with_capacity(panels.len());
        let mut warnings = Vec::new();

        for index in order {
            let panel = &panels[index];
            let mut options = vec![(panel.width, panel.height, false)];
            if self.settings.auto_rotate && (panel.width - panel.height).abs() > POINT_EPSILON {
                options.push((panel.height, panel.width, true));
            }

            let best = options
                .into_iter()
                .filter_map(|(w, h, rotated)| {
                    cursor.candidate(w, h, rotated, sheet_width, sheet_height)
                })
                .fold(None, |best: Option<Candidate>, c| match best {
                    Some(current) if !c.better_than(&current) => Some(current),
                    _ => Some(c),
                });

            match best {
                Some(choice) => {
                    cursor.place(&choice);
                    debug!(
                        panel = %panel.id,
                        x = choice.x,
                        y = choice.y,
                        rotated = choice.rotated,
                        "Placed panel"
                    );
                    placements.push((
                        index,
                        PlacedFace {
                            panel: panel.clone(),
                            x: choice.x,
                            y: choice.y,
                            rotated: choice.rotated,
                            overflow: false,
                        },
                    ));
                }
                None => {
                    let message = format!(
                        "Panel '{}' ({:.3} x {:.3} mm) does not fit on the {:.3} x {:.3} mm sheet",
                        panel.id, panel.width, panel.height, sheet_width, sheet_height
                    );
                    warn!("{message}");
                    warnings.push(message);
                    placements.push((
                        index,
                        PlacedFace {
                            panel: panel.clone(),
                            x: 0.0,
                            y: 0.0,
                            rotated: false,
                            overflow: true,
                        },
                    ));
                }
            }
        }

        Self::finish(panels, placements, spacing, warnings)
    }

    /// Lay panels out left to right in input order without a sheet limit.
    pub fn single_row(&self, panels: &[Panel]) -> Layout {
        let spacing = self.settings.spacing;
        let (placements, _) = panels.iter().enumerate().fold(
            (Vec::with_capacity(panels.len()), 0.0),
            |(mut placements, x), (index, panel)| {
                placements.push((
                    index,
                    PlacedFace {
                        panel: panel.clone(),
                        x,
                        y: 0.0,
                        rotated: false,
                        overflow: false,
                    },
                ));
                (placements, x + panel.width + spacing)
            },
        );
        Self::finish(panels, placements, spacing, Vec::new())
    }

    /// Build the layout from placements tagged with their input index.
    fn finish(
        panels: &[Panel],
        placed: Vec<(usize, PlacedFace)>,
        spacing: f64,
        warnings: Vec<String>,
    ) -> Layout {
        let mut panels = panels.to_vec();
        for (index, face) in placed.iter().filter(|(_, face)| !face.overflow) {
            if let Some(panel) = panels.get_mut(*index) {
                panel.offset = Some(Point::new(face.x, face.y));
                panel.rotated = face.rotated;
            }
        }
        let placements: Vec<PlacedFace> = placed.into_iter().map(|(_, face)| face).collect();

        let (width, height) = placements
            .iter()
            .filter(|p| !p.overflow)
            .fold(None, |acc: Option<(f64, f64)>, p| {
                let (w, h) = acc.unwrap_or((0.0, 0.0));
                Some((w.max(p.x + p.width()), h.max(p.y + p.height())))
            })
            .map(|(w, h)| (w + spacing, h + spacing))
            .unwrap_or((0.0, 0.0));

        Layout {
            panels,
            placements,
            width,
            height,
            warnings,
        }
    }
}
