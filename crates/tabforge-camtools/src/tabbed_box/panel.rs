//! Generated panels and their auxiliary paths

use serde::{Deserialize, Serialize};
use std::fmt;
use tabforge_core::{format_path_data, signed_area, Bounds, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelRole {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    Lid,
    LidLip,
    DividerX,
    DividerZ,
    DrawerFront,
}

impl PanelRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelRole::Front => "front",
            PanelRole::Back => "back",
            PanelRole::Left => "left",
            PanelRole::Right => "right",
            PanelRole::Top => "top",
            PanelRole::Bottom => "bottom",
            PanelRole::Lid => "lid",
            PanelRole::LidLip => "lid-lip",
            PanelRole::DividerX => "divider-x",
            PanelRole::DividerZ => "divider-z",
            PanelRole::DrawerFront => "drawer-front",
        }
    }
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Laser operation a path is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutKind {
    Cut,
    Score,
    Engrave,
}

impl CutKind {
    pub const ALL: [CutKind; 3] = [CutKind::Cut, CutKind::Score, CutKind::Engrave];

    pub fn as_str(&self) -> &'static str {
        match self {
            CutKind::Cut => "cut",
            CutKind::Score => "score",
            CutKind::Engrave => "engrave",
        }
    }
}

impl fmt::Display for CutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra path drawn on a panel in panel-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPath {
    pub kind: CutKind,
    pub points: Vec<Point>,
    pub closed: bool,
    pub path_data: String,
}

impl CutPath {
    pub fn new(kind: CutKind, points: Vec<Point>, closed: bool) -> Self {
        let path_data = format_path_data(&points, closed);
        Self {
            kind,
            points,
            closed,
            path_data,
        }
    }

    /// Closed axis-aligned rectangle with its lower-left corner at `(x, y)`.
    pub fn rectangle(kind: CutKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            kind,
            vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            true,
        )
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    pub fn length(&self) -> f64 {
        tabforge_core::perimeter(&self.points, self.closed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    pub role: PanelRole,
    /// Bounding-box extents of the outline
    pub width: f64,
    pub height: f64,
    /// Closed CCW polygon without a closing duplicate
    pub outline: Vec<Point>,
    pub path_data: String,
    pub cut_paths: Vec<CutPath>,
    /// Sheet position once packed
    pub offset: Option<Point>,
    /// Turned 90 degrees on the sheet
    #[serde(default)]
    pub rotated: bool,
}

impl Panel {
    pub fn from_outline(id: impl Into<String>, role: PanelRole, outline: Vec<Point>) -> Self {
        let bounds = Bounds::from_points(&outline).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0));
        let path_data = format_path_data(&outline, true);
        Self {
            id: id.into(),
            role,
            width: bounds.width(),
            height: bounds.height(),
            outline,
            path_data,
            cut_paths: Vec::new(),
            offset: None,
            rotated: false,
        }
    }

    /// Copy of this panel under another id and role, e.g. the back from the front.
    pub fn renamed(&self, id: impl Into<String>, role: PanelRole) -> Self {
        Self {
            id: id.into(),
            role,
            ..self.clone()
        }
    }

    pub fn with_cut_path(mut self, path: CutPath) -> Self {
        self.cut_paths.push(path);
        self
    }

    pub fn with_id_prefix(mut self, prefix: &str) -> Self {
        self.id = format!("{prefix}{}", self.id);
        self
    }

    pub fn cut_paths_of(&self, kind: CutKind) -> impl Iterator<Item = &CutPath> {
        self.cut_paths.iter().filter(move |p| p.kind == kind)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.outline).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.outline).abs()
    }
}
