//! # TabForge Designer
//!
//! Path import and layered export for generated panels.
//!
//! ## Components
//!
//! - **Path Parser**: `M`/`L`/`H`/`V`/`Z` path data plus flattened `C`/`Q` curves
//! - **Artwork Import**: places parsed paths onto a panel as cut, score or engrave lines
//! - **SVG Export**: millimetre-sized documents with one group per operation
//! - **DXF Export**: R2000 drawings with `CUT`, `SCORE` and `ENGRAVE` layers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tabforge_camtools::{compose_box, BoxSettings, SheetPacker, SheetSettings};
//! use tabforge_designer::{export_layout_svg, SvgExportOptions};
//!
//! let design = compose_box(&BoxSettings::default());
//! let layout = SheetPacker::new(SheetSettings::default()).pack(&design.panels);
//! let svg = export_layout_svg(&layout, &SvgExportOptions::default());
//! ```

pub mod dxf_export;
pub mod error;
pub mod import;
pub mod path_parser;
pub mod svg_export;

pub use dxf_export::{export_layout_dxf, layer_name, layout_drawing, write_dxf};
pub use error::{DesignerError, DesignerResult};
pub use import::ArtworkImporter;
pub use path_parser::{parse_path_data, Subpath};
pub use svg_export::{export_layout_svg, write_svg, SvgExportOptions, SvgStyle};
