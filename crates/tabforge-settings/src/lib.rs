//! # TabForge Settings
//!
//! Job files for the TabForge command line: which box or drawer to build, the
//! sheet to pack it onto, artwork to merge and export styling. Files are read
//! and written as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{ArtworkSettings, ExportSettings, Project, ProjectConfig};
pub use error::{SettingsError, SettingsResult};
