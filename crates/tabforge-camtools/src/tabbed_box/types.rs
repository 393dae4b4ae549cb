//! Type definitions for the Tabbed Box Maker

use crate::error::{check_range, ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use tabforge_core::constants::{
    clamp_floor, clamp_range, MAX_COMPARTMENTS, MAX_DIMENSION, MAX_TAB_COUNT, MIN_DIMENSION,
    MIN_FINGER, MIN_THICKNESS,
};

/// With outside dimensions, make sure the walls leave a usable cavity.
fn check_cavity(
    reference: DimensionReference,
    extents: [(&str, f64, f64); 3],
    thickness: f64,
) -> ParameterResult<()> {
    if reference == DimensionReference::Inside {
        return Ok(());
    }
    for (name, value, walls) in extents {
        if value - walls * thickness < MIN_DIMENSION {
            return Err(ParameterError::InvalidDimensions(format!(
                "outside {name} {value} leaves no cavity inside {walls} walls of {thickness}"
            )));
        }
    }
    Ok(())
}

/// Which envelope the requested width/height/depth describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionReference {
    /// Dimensions describe the usable cavity.
    #[default]
    Inside,
    /// Dimensions describe the overall envelope.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxStyle {
    /// Finger joints on every seam.
    #[default]
    FingerAllEdges,
    /// Finger joints on vertical seams only; plain bottom.
    FingerVerticalEdges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LidStyle {
    #[default]
    None,
    FlatLid,
    FlatLidWithLip,
    SlidingLid,
}

impl LidStyle {
    /// Whether a panel caps the top of the box, adding a thickness to its height.
    pub fn caps_top(&self) -> bool {
        !matches!(self, LidStyle::None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerSettings {
    /// Smallest acceptable finger width in mm
    pub min_finger: f64,
    /// Largest acceptable finger width in mm
    pub max_finger: f64,
    /// Tabs per vertical seam in vertical-edge mode; derived from the height when unset
    pub tab_count: Option<u32>,
}

impl Default for FingerSettings {
    fn default() -> Self {
        Self {
            min_finger: 5.0,
            max_finger: 15.0,
            tab_count: None,
        }
    }
}

impl FingerSettings {
    pub fn sanitized(&self) -> Self {
        let min_finger = clamp_floor(self.min_finger, MIN_FINGER);
        Self {
            min_finger,
            max_finger: clamp_floor(self.max_finger, MIN_FINGER).max(min_finger),
            tab_count: self.tab_count.map(|n| n.clamp(2, MAX_TAB_COUNT)),
        }
    }

    pub fn validate(&self) -> ParameterResult<()> {
        check_range("min_finger", self.min_finger, MIN_FINGER, f64::MAX)?;
        check_range("max_finger", self.max_finger, self.min_finger, f64::MAX)?;
        if let Some(count) = self.tab_count {
            if count < 2 {
                return Err(ParameterError::InvalidValue {
                    name: "tab_count".to_string(),
                    reason: "at least two tabs are needed per seam".to_string(),
                });
            }
            check_range("tab_count", count as f64, 2.0, MAX_TAB_COUNT as f64)?;
        }
        Ok(())
    }
}

/// Stepped lid: strips glued under the lid that seat inside the box mouth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LipSettings {
    /// Gap between the lip and the inner walls, per side
    pub inset: f64,
    /// Height of the lip strips
    pub height: f64,
}

impl Default for LipSettings {
    fn default() -> Self {
        Self {
            inset: 0.5,
            height: 8.0,
        }
    }
}

/// Scored guide for a sliding lid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrooveSettings {
    /// Vertical size of the groove
    pub depth: f64,
    /// Distance from the wall top to the top of the groove
    pub offset: f64,
}

impl Default for GrooveSettings {
    fn default() -> Self {
        Self {
            depth: 3.2,
            offset: 3.0,
        }
    }
}

/// Compartment grid; a count of 1 on an axis means no dividers on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerSettings {
    pub count_x: u32,
    pub count_z: u32,
    /// Extra slot width beyond the material thickness
    pub clearance: f64,
}

impl Default for DividerSettings {
    fn default() -> Self {
        Self {
            count_x: 1,
            count_z: 1,
            clearance: 0.2,
        }
    }
}

impl DividerSettings {
    pub fn enabled(&self) -> bool {
        self.count_x > 1 || self.count_z > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSettings {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub reference: DimensionReference,
    pub thickness: f64,
    /// Width of material removed by the beam
    pub kerf: f64,
    /// Offset outlines outward by half the kerf
    pub apply_kerf: bool,
    pub box_style: BoxStyle,
    pub lid: LidStyle,
    /// Omit the front panel and add a fixed top (drawer shell)
    pub open_front: bool,
    pub finger: FingerSettings,
    pub lip: LipSettings,
    pub groove: GrooveSettings,
    pub dividers: DividerSettings,
}

impl Default for BoxSettings {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 60.0,
            depth: 80.0,
            reference: DimensionReference::Inside,
            thickness: 3.0,
            kerf: 0.1,
            apply_kerf: false,
            box_style: BoxStyle::FingerAllEdges,
            lid: LidStyle::None,
            open_front: false,
            finger: FingerSettings::default(),
            lip: LipSettings::default(),
            groove: GrooveSettings::default(),
            dividers: DividerSettings::default(),
        }
    }
}

impl BoxSettings {
    /// Clamp every numeric field to a safe minimum so generation never sees
    /// NaNs, negative sizes or zero thickness.
    pub fn sanitized(&self) -> Self {
        Self {
            width: clamp_range(self.width, MIN_DIMENSION, MAX_DIMENSION),
            height: clamp_range(self.height, MIN_DIMENSION, MAX_DIMENSION),
            depth: clamp_range(self.depth, MIN_DIMENSION, MAX_DIMENSION),
            reference: self.reference,
            thickness: clamp_floor(self.thickness, MIN_THICKNESS),
            kerf: clamp_floor(self.kerf, 0.0),
            apply_kerf: self.apply_kerf,
            box_style: self.box_style,
            lid: self.lid,
            open_front: self.open_front,
            finger: self.finger.sanitized(),
            lip: LipSettings {
                inset: clamp_floor(self.lip.inset, 0.0),
                height: clamp_floor(self.lip.height, MIN_DIMENSION),
            },
            groove: GrooveSettings {
                depth: clamp_floor(self.groove.depth, MIN_THICKNESS),
                offset: clamp_floor(self.groove.offset, 0.0),
            },
            dividers: DividerSettings {
                count_x: self.dividers.count_x.clamp(1, MAX_COMPARTMENTS),
                count_z: self.dividers.count_z.clamp(1, MAX_COMPARTMENTS),
                clearance: clamp_floor(self.dividers.clearance, 0.0),
            },
        }
    }

    /// Whether the top of the box is capped (any lid, or the fixed top of an open-front shell).
    pub fn has_top_cap(&self) -> bool {
        self.open_front || self.lid.caps_top()
    }

    /// Distance each outline is pushed outward to compensate for the kerf.
    pub fn kerf_offset(&self) -> f64 {
        if self.apply_kerf {
            self.kerf / 2.0
        } else {
            0.0
        }
    }

    /// Strict validation for callers that want to reject rather than clamp.
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            check_range(name, value, MIN_DIMENSION, MAX_DIMENSION)?;
        }
        let smallest = self.width.min(self.height).min(self.depth);
        check_range("thickness", self.thickness, MIN_THICKNESS, smallest / 2.0)?;
        check_range("kerf", self.kerf, 0.0, self.thickness)?;
        let caps = if self.has_top_cap() { 2.0 } else { 1.0 };
        check_cavity(
            self.reference,
            [
                ("width", self.width, 2.0),
                ("height", self.height, caps),
                ("depth", self.depth, 2.0),
            ],
            self.thickness,
        )?;
        self.finger.validate()?;
        check_range("lip.inset", self.lip.inset, 0.0, f64::MAX)?;
        check_range("lip.height", self.lip.height, MIN_DIMENSION, f64::MAX)?;
        check_range("groove.depth", self.groove.depth, MIN_THICKNESS, f64::MAX)?;
        check_range("groove.offset", self.groove.offset, 0.0, f64::MAX)?;
        check_range("dividers.clearance", self.dividers.clearance, 0.0, f64::MAX)?;
        if self.dividers.count_x == 0 || self.dividers.count_z == 0 {
            return Err(ParameterError::InvalidValue {
                name: "dividers".to_string(),
                reason: "compartment counts start at 1".to_string(),
            });
        }
        for (name, count) in [
            ("dividers.count_x", self.dividers.count_x),
            ("dividers.count_z", self.dividers.count_z),
        ] {
            check_range(name, count as f64, 1.0, MAX_COMPARTMENTS as f64)?;
        }
        if self.open_front && self.lid != LidStyle::None {
            return Err(ParameterError::Incompatible(
                "an open-front shell has a fixed top and takes no lid".to_string(),
            ));
        }
        Ok(())
    }
}

/// Finger-pull cut into the top edge of a drawer front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbNotchSettings {
    /// Radius as a fraction of the smaller panel extent
    pub ratio: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Straight material kept on each side of the arc, and the smallest radius worth cutting
    pub min_chord: f64,
}

impl Default for ThumbNotchSettings {
    fn default() -> Self {
        Self {
            ratio: 0.18,
            min_radius: 4.0,
            max_radius: 18.0,
            min_chord: 1.5,
        }
    }
}

impl ThumbNotchSettings {
    pub fn sanitized(&self) -> Self {
        let min_radius = clamp_floor(self.min_radius, MIN_FINGER);
        Self {
            ratio: clamp_floor(self.ratio, 0.0),
            min_radius,
            max_radius: clamp_floor(self.max_radius, min_radius),
            min_chord: clamp_floor(self.min_chord, MIN_FINGER),
        }
    }

    /// Nominal radius for a panel of the given extents.
    pub fn radius_for(&self, width: f64, height: f64) -> f64 {
        (width.min(height) * self.ratio)
            .max(self.min_radius)
            .min(self.max_radius)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerClearance {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for DrawerClearance {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

impl DrawerClearance {
    pub fn smallest(&self) -> f64 {
        self.width.min(self.height).min(self.depth)
    }
}

/// A shell with a drawer that slides into its open front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerSettings {
    /// Shell size
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub reference: DimensionReference,
    pub thickness: f64,
    pub kerf: f64,
    pub apply_kerf: bool,
    pub finger: FingerSettings,
    pub clearance: DrawerClearance,
    /// Gap between the shell floor and the drawer bottom
    pub bottom_offset: f64,
    pub thumb_notch: ThumbNotchSettings,
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 80.0,
            depth: 150.0,
            reference: DimensionReference::Outside,
            thickness: 3.0,
            kerf: 0.1,
            apply_kerf: false,
            finger: FingerSettings::default(),
            clearance: DrawerClearance::default(),
            bottom_offset: 0.0,
            thumb_notch: ThumbNotchSettings::default(),
        }
    }
}

impl DrawerSettings {
    pub fn sanitized(&self) -> Self {
        Self {
            width: clamp_range(self.width, MIN_DIMENSION, MAX_DIMENSION),
            height: clamp_range(self.height, MIN_DIMENSION, MAX_DIMENSION),
            depth: clamp_range(self.depth, MIN_DIMENSION, MAX_DIMENSION),
            reference: self.reference,
            thickness: clamp_floor(self.thickness, MIN_THICKNESS),
            kerf: clamp_floor(self.kerf, 0.0),
            apply_kerf: self.apply_kerf,
            finger: self.finger.sanitized(),
            clearance: DrawerClearance {
                width: clamp_floor(self.clearance.width, 0.0),
                height: clamp_floor(self.clearance.height, 0.0),
                depth: clamp_floor(self.clearance.depth, 0.0),
            },
            bottom_offset: clamp_floor(self.bottom_offset, 0.0),
            thumb_notch: self.thumb_notch.sanitized(),
        }
    }

    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            check_range(name, value, MIN_DIMENSION, MAX_DIMENSION)?;
        }
        let smallest = self.width.min(self.height).min(self.depth);
        check_range("thickness", self.thickness, MIN_THICKNESS, smallest / 4.0)?;
        check_range("kerf", self.kerf, 0.0, self.thickness)?;
        check_cavity(
            self.reference,
            [
                ("width", self.width, 2.0),
                ("height", self.height, 2.0),
                ("depth", self.depth, 2.0),
            ],
            self.thickness,
        )?;
        self.finger.validate()?;
        for (name, value) in [
            ("clearance.width", self.clearance.width),
            ("clearance.height", self.clearance.height),
            ("clearance.depth", self.clearance.depth),
            ("bottom_offset", self.bottom_offset),
        ] {
            check_range(name, value, 0.0, f64::MAX)?;
        }
        check_range("thumb_notch.ratio", self.thumb_notch.ratio, 0.0, 0.5)?;
        check_range(
            "thumb_notch.max_radius",
            self.thumb_notch.max_radius,
            self.thumb_notch.min_radius,
            f64::MAX,
        )?;
        Ok(())
    }
}
