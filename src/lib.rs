//! # TabForge
//!
//! Parametric finger-jointed boxes and sliding drawers for laser cutting.
//!
//! ## Architecture
//!
//! TabForge is organized as a workspace with multiple crates:
//!
//! 1. **tabforge-core** - Points, bounds, tolerances, path data formatting
//! 2. **tabforge-camtools** - Finger patterns, panel assembly, box and drawer composers, sheet packing
//! 3. **tabforge-designer** - Path data import, layered SVG and DXF export
//! 4. **tabforge-settings** - JSON/TOML job files
//! 5. **tabforge** - Job runner and the command line binary
//!
//! ## Features
//!
//! - **Finger Joints**: odd segment counts, complementary mating edges, corner suppression
//! - **Lids**: flat, flat with a locating lip, sliding in grooves
//! - **Dividers**: slotted cross-lap partitions
//! - **Drawers**: open-front shell with a clearance-sized drawer and thumb notch
//! - **Kerf Compensation**: outward offset by half the beam width
//! - **Packing**: shelf packing onto stock sheets with rotation and overflow warnings

pub mod cli;
pub mod job;

pub use job::{run_job, JobOutput};
pub use tabforge_camtools::{
    compose_box, compose_drawer, BoxSettings, DrawerSettings, Layout, Panel, SheetPacker,
    SheetSettings,
};
pub use tabforge_settings::{Project, ProjectConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so stdout stays free for summaries
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
