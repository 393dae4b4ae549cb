//! # TabForge CAM Tools
//!
//! Generators for laser-cut, finger-jointed boxes and drawers, and the sheet
//! packer that lays their panels out on stock.
//!
//! ## Tools Included
//!
//! - **Tabbed Box Maker**: finger patterns, edge and panel assembly, lids and dividers
//! - **Sliding Drawer Maker**: open-front shell plus a drawer with a thumb notch
//! - **Sheet Packer**: shelf packing with rotation and overflow reporting
//! - **Metrics**: per-panel areas and path lengths, cross-panel alignment checks

pub mod drawer;
pub mod error;
pub mod flatten;
pub mod metrics;
pub mod nesting;
pub mod tabbed_box;

// Re-export commonly used items
pub use drawer::{compose_drawer, DrawerDesign, SlidingDrawerMaker};
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use metrics::{check_alignment, DesignMetrics, PanelMetrics};
pub use nesting::{Layout, PlacedFace, SheetPacker, SheetSettings};
pub use tabbed_box::{
    compose_box, BoxDesign, BoxDimensions, BoxSettings, BoxStyle, CutKind, CutPath,
    DimensionReference, DrawerSettings, FingerPattern, FingerSettings, LidStyle, Panel,
    PanelRole, TabbedBoxMaker,
};
