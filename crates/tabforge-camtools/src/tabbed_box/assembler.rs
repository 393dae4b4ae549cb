//! Panel assembly from four jointed edges
//!
//! Edges are walked bottom, right, top, left so the outline winds
//! counter-clockwise in the panel's y-up frame. The panel rectangle is the
//! outer envelope and every effective tab is a recess `thickness` deep, so the
//! mating panel (same pattern, inverted) carries material exactly where this
//! one is cut away.

use super::edge::{EdgeBuilder, EdgeDirection};
use super::finger::FingerPattern;
use super::outline::{offset_outline, simplify_closed};
use super::panel::{Panel, PanelRole};
use tabforge_core::Point;
use tracing::debug;

/// How one side of a panel meets its neighbour.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeJoint {
    /// Pattern as generated.
    Tab(FingerPattern),
    /// Pattern inverted; mates with a `Tab` edge of the same pattern.
    Slot(FingerPattern),
    /// Straight edge.
    Plain,
}

impl EdgeJoint {
    fn pattern(&self) -> Option<(&FingerPattern, bool)> {
        match self {
            EdgeJoint::Tab(pattern) => Some((pattern, false)),
            EdgeJoint::Slot(pattern) => Some((pattern, true)),
            EdgeJoint::Plain => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bottom,
    Right,
    Top,
    Left,
}

impl Side {
    pub const ORDER: [Side; 4] = [Side::Bottom, Side::Right, Side::Top, Side::Left];

    /// Unit vector pointing into the panel from this side.
    fn inward(&self) -> (f64, f64) {
        match self {
            Side::Bottom => (0.0, 1.0),
            Side::Right => (-1.0, 0.0),
            Side::Top => (0.0, -1.0),
            Side::Left => (1.0, 0.0),
        }
    }

    /// Corner reached at the end of this side in traversal order.
    fn end_corner(&self, width: f64, height: f64) -> Point {
        match self {
            Side::Bottom => Point::new(width, 0.0),
            Side::Right => Point::new(width, height),
            Side::Top => Point::new(0.0, height),
            Side::Left => Point::new(0.0, 0.0),
        }
    }

    /// Start point, direction and recess sign used to build the side, and
    /// whether the built points must be reversed to follow the traversal.
    fn frame(&self, width: f64, height: f64) -> (Point, EdgeDirection, f64, bool) {
        match self {
            Side::Bottom => (Point::new(0.0, 0.0), EdgeDirection::Horizontal, 1.0, false),
            Side::Right => (Point::new(width, 0.0), EdgeDirection::Vertical, -1.0, false),
            Side::Top => (Point::new(0.0, height), EdgeDirection::Horizontal, -1.0, true),
            Side::Left => (Point::new(0.0, 0.0), EdgeDirection::Vertical, 1.0, true),
        }
    }

    fn length(&self, width: f64, height: f64) -> f64 {
        match self {
            Side::Bottom | Side::Top => width,
            Side::Right | Side::Left => height,
        }
    }
}

/// Geometry request for one rectangular panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub bottom: EdgeJoint,
    pub right: EdgeJoint,
    pub top: EdgeJoint,
    pub left: EdgeJoint,
    /// Merge the two recesses meeting at a corner into one inner corner
    pub suppress_corners: bool,
}

impl PanelSpec {
    pub fn new(width: f64, height: f64, thickness: f64) -> Self {
        Self {
            width,
            height,
            thickness,
            bottom: EdgeJoint::Plain,
            right: EdgeJoint::Plain,
            top: EdgeJoint::Plain,
            left: EdgeJoint::Plain,
            suppress_corners: true,
        }
    }

    pub fn bottom(mut self, joint: EdgeJoint) -> Self {
        self.bottom = joint;
        self
    }

    pub fn right(mut self, joint: EdgeJoint) -> Self {
        self.right = joint;
        self
    }

    pub fn top(mut self, joint: EdgeJoint) -> Self {
        self.top = joint;
        self
    }

    pub fn left(mut self, joint: EdgeJoint) -> Self {
        self.left = joint;
        self
    }

    /// Same joint on every side.
    pub fn all(self, joint: EdgeJoint) -> Self {
        self.bottom(joint.clone())
            .right(joint.clone())
            .top(joint.clone())
            .left(joint)
    }

    pub fn suppress_corners(mut self, enabled: bool) -> Self {
        self.suppress_corners = enabled;
        self
    }

    pub fn joint(&self, side: Side) -> &EdgeJoint {
        match side {
            Side::Bottom => &self.bottom,
            Side::Right => &self.right,
            Side::Top => &self.top,
            Side::Left => &self.left,
        }
    }
}

struct BuiltEdge {
    points: Vec<Point>,
    notched_at_start: bool,
    notched_at_end: bool,
}

/// Builds panel outlines and applies kerf compensation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelAssembler {
    /// Outward offset applied to finished outlines (half the kerf, or zero)
    pub kerf_offset: f64,
}

impl PanelAssembler {
    pub fn new(kerf_offset: f64) -> Self {
        Self {
            kerf_offset: if kerf_offset.is_finite() {
                kerf_offset.max(0.0)
            } else {
                0.0
            },
        }
    }

    /// Simplified outline of `spec` in panel-local coordinates, before any kerf offset.
    pub fn outline(&self, spec: &PanelSpec) -> Vec<Point> {
        let mut edges: Vec<BuiltEdge> = Side::ORDER
            .iter()
            .map(|side| build_side(spec, *side))
            .collect();

        if spec.suppress_corners {
            for (index, side) in Side::ORDER.iter().enumerate() {
                let next_index = (index + 1) % edges.len();
                let next_side = Side::ORDER[next_index];
                if !(edges[index].notched_at_end && edges[next_index].notched_at_start) {
                    continue;
                }
                if edges[index].points.len() < 4 || edges[next_index].points.len() < 4 {
                    continue;
                }

                let corner = side.end_corner(spec.width, spec.height);
                let (ax, ay) = side.inward();
                let (bx, by) = next_side.inward();
                let inner = corner.translate(
                    spec.thickness * (ax + bx),
                    spec.thickness * (ay + by),
                );

                let current = &mut edges[index].points;
                current.truncate(current.len() - 2);
                current.push(inner);
                edges[next_index].points.drain(0..2);
            }
        }

        let raw: Vec<Point> = edges.into_iter().flat_map(|edge| edge.points).collect();
        simplify_closed(&raw)
    }

    /// Apply the kerf offset to an assembled outline.
    pub fn finish(&self, outline: &[Point]) -> Vec<Point> {
        offset_outline(outline, self.kerf_offset)
    }

    pub fn assemble(&self, id: impl Into<String>, role: PanelRole, spec: &PanelSpec) -> Panel {
        let id = id.into();
        let outline = self.finish(&self.outline(spec));
        debug!(
            panel = %id,
            vertices = outline.len(),
            width = spec.width,
            height = spec.height,
            "Assembled panel"
        );
        Panel::from_outline(id, role, outline)
    }

    /// Plain rectangle of the given size.
    pub fn rectangle(
        &self,
        id: impl Into<String>,
        role: PanelRole,
        width: f64,
        height: f64,
    ) -> Panel {
        let spec = PanelSpec::new(width, height, 0.0);
        self.assemble(id, role, &spec)
    }
}

fn build_side(spec: &PanelSpec, side: Side) -> BuiltEdge {
    let (start, direction, sign, reversed) = side.frame(spec.width, spec.height);

    let (mut points, at_pattern_start, at_pattern_end) = match spec.joint(side).pattern() {
        Some((pattern, invert)) => {
            let points = EdgeBuilder::new(spec.thickness, direction)
                .inverted(invert)
                .with_sign(sign)
                .build(pattern, start);
            (
                points,
                pattern.tab_at_start(invert),
                pattern.tab_at_end(invert),
            )
        }
        None => {
            let length = side.length(spec.width, spec.height);
            let end = match direction {
                EdgeDirection::Horizontal => start.translate(length, 0.0),
                EdgeDirection::Vertical => start.translate(0.0, length),
            };
            (vec![start, end], false, false)
        }
    };

    if reversed {
        points.reverse();
        BuiltEdge {
            points,
            notched_at_start: at_pattern_end,
            notched_at_end: at_pattern_start,
        }
    } else {
        BuiltEdge {
            points,
            notched_at_start: at_pattern_start,
            notched_at_end: at_pattern_end,
        }
    }
}
