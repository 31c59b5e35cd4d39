//! Error types for the graphics crate.

use thiserror::Error;

/// Errors that can occur while building or parsing vector graphics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphicsError {
    /// Malformed SVG path data.
    #[error("invalid path data at offset {offset}: {message}")]
    PathSyntax { offset: usize, message: String },

    /// A color literal that is not `#RRGGBB`, `#AARRGGBB` or `0xAARRGGBB`.
    #[error("invalid color literal '{0}'")]
    InvalidColor(String),

    /// A gradient that cannot be drawn (too few stops, bad offsets, bad radius).
    #[error("invalid gradient: {0}")]
    InvalidGradient(String),

    /// Zero, negative or non-finite icon size or viewport.
    #[error("invalid dimensions for '{name}': size {width}x{height}, viewport {viewport_width}x{viewport_height}")]
    InvalidDimensions {
        name: String,
        width: f32,
        height: f32,
        viewport_width: f32,
        viewport_height: f32,
    },

    /// A path node or group transform with a NaN or infinite value.
    #[error("non-finite geometry in '{name}': {detail}")]
    NonFiniteGeometry { name: String, detail: String },
}

impl GraphicsError {
    /// Create a path syntax error.
    pub fn path_syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::PathSyntax {
            offset,
            message: message.into(),
        }
    }
}

/// Result type for graphics operations.
pub type GraphicsResult<T> = Result<T, GraphicsError>;
