//! Error types for path import and export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignerError {
    /// The path data uses a command this parser does not handle.
    #[error("Unsupported path command '{command}' at offset {position}")]
    UnsupportedPathCommand { command: char, position: usize },

    /// A token that should be a number is not.
    #[error("Invalid number '{token}' at offset {position}")]
    InvalidNumber { token: String, position: usize },

    /// A command ran out of coordinates.
    #[error("Command '{command}' at offset {position} expects more coordinates")]
    MissingCoordinates { command: char, position: usize },

    /// Path data must start with a moveto.
    #[error("Path data must start with a moveto command")]
    MissingMoveTo,

    #[error("DXF error: {0}")]
    Dxf(#[from] dxf::DxfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DesignerResult<T> = Result<T, DesignerError>;
