//! # TabForge Core
//!
//! Core types and utilities shared by the TabForge crates:
//!
//! - [`types`]: 2D points and axis-aligned bounds
//! - [`geometry`]: polygon helpers (signed area, perimeter, winding, self-crossings)
//! - [`path_data`]: the `M`/`L`/`H`/`V`/`Z` outline interchange format
//! - [`constants`]: numeric tolerances and input floors

pub mod constants;
pub mod geometry;
pub mod path_data;
pub mod types;

pub use geometry::{crossing_count, is_counter_clockwise, perimeter, signed_area};
pub use path_data::{format_coord, format_path_data};
pub use types::{Bounds, Point};
