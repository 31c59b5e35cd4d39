//! Error types for the icon pack.

use std::path::PathBuf;

use vecticon_graphics::GraphicsError;

/// Result type alias for pack operations.
pub type PackResult<T> = std::result::Result<T, PackError>;

/// Errors that can occur while loading, registering or exporting icons.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// File I/O error.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML manifest or configuration.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON manifest, or JSON output that failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A manifest file whose extension is neither `.toml` nor `.json`.
    #[error("unsupported manifest format for '{0}' (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// Invalid geometry, color or gradient data.
    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    /// A manifest entry that cannot be turned into an icon.
    #[error("invalid icon '{icon}' in manifest: {message}")]
    Manifest { icon: String, message: String },

    /// An icon name that is already taken.
    #[error("icon '{0}' is already registered")]
    DuplicateIcon(String),

    /// A name that matches no built-in or registered icon.
    #[error("unknown icon '{0}'")]
    UnknownIcon(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Two exported icons that would write the same file.
    #[error("icons '{first}' and '{second}' would both be exported to '{file}'")]
    ExportCollision {
        file: String,
        first: String,
        second: String,
    },
}

impl PackError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a manifest error for one icon.
    pub fn manifest(icon: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Manifest {
            icon: icon.into(),
            message: message.into(),
        }
    }

    /// The underlying graphics error, if this error wraps one.
    ///
    /// Manifest errors caused by bad path data keep the original error here.
    pub fn graphics(&self) -> Option<&GraphicsError> {
        match self {
            Self::Graphics(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PackError::manifest("Badge", "missing path data");
        assert_eq!(err.to_string(), "invalid icon 'Badge' in manifest: missing path data");

        let err = PackError::io(
            "icons.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "failed to access 'icons.toml': gone");

        let err = PackError::from(GraphicsError::path_syntax(3, "expected a number"));
        assert_eq!(err.to_string(), "invalid path data at offset 3: expected a number");
        assert!(err.graphics().is_some());
    }
}
