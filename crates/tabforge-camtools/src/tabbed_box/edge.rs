//! Edge construction from a finger pattern

use super::finger::FingerPattern;
use serde::{Deserialize, Serialize};
use tabforge_core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Runs along +x; tabs step along y.
    Horizontal,
    /// Runs along +y; tabs step along x.
    Vertical,
}

/// Turns a [`FingerPattern`] into the vertices of one panel edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBuilder {
    pub thickness: f64,
    pub direction: EdgeDirection,
    /// Swap tabs and gaps (the mating side of a seam)
    pub invert: bool,
    /// +1 or -1: which way along the perpendicular axis a tab steps
    pub sign: f64,
}

impl EdgeBuilder {
    pub fn new(thickness: f64, direction: EdgeDirection) -> Self {
        Self {
            thickness,
            direction,
            invert: false,
            sign: 1.0,
        }
    }

    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_sign(mut self, sign: f64) -> Self {
        self.sign = if sign < 0.0 { -1.0 } else { 1.0 };
        self
    }

    /// Vertices from `start` to the far end of the edge, both included.
    ///
    /// An effective tab (`is_tab` xor `invert`) contributes three points:
    /// the step across by `thickness * sign`, the run along the segment and
    /// the step back. Anything else contributes the segment end only.
    pub fn build(&self, pattern: &FingerPattern, start: Point) -> Vec<Point> {
        let depth = self.thickness * self.sign;
        pattern
            .segments
            .iter()
            .fold(vec![start], |mut points, segment| {
                if segment.is_tab != self.invert {
                    points.push(self.at(start, segment.start, depth));
                    points.push(self.at(start, segment.end, depth));
                }
                points.push(self.at(start, segment.end, 0.0));
                points
            })
    }

    fn at(&self, origin: Point, along: f64, across: f64) -> Point {
        match self.direction {
            EdgeDirection::Horizontal => origin.translate(along, across),
            EdgeDirection::Vertical => origin.translate(across, along),
        }
    }
}

/// Shorthand for [`EdgeBuilder::build`].
pub fn build_edge(
    pattern: &FingerPattern,
    thickness: f64,
    direction: EdgeDirection,
    invert: bool,
    sign: f64,
    start: Point,
) -> Vec<Point> {
    EdgeBuilder::new(thickness, direction)
        .inverted(invert)
        .with_sign(sign)
        .build(pattern, start)
}
