//! Pack configuration.
//!
//! Loaded from a TOML file. Every section and field is optional:
//!
//! ```toml
//! [registry]
//! manifests = ["extra-icons.toml"]
//! override_builtin = false
//!
//! [lint]
//! viewport_tolerance = 0.25
//! require_closed_fills = true
//!
//! [export]
//! output_dir = "out/icons"
//! pretty = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vecticon_graphics::ValidationOptions;

use crate::error::{PackError, PackResult};
use crate::export::ExportOptions;
use crate::logging::targets;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    pub registry: RegistryConfig,
    pub lint: LintConfig,
    pub export: ExportConfig,
}

/// Which manifests to load and how they interact with built-ins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Manifest files. Relative paths resolve against the config file.
    pub manifests: Vec<PathBuf>,
    /// Let manifest icons replace built-ins with the same name.
    pub override_builtin: bool,
}

/// Validation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub viewport_tolerance: f32,
    pub require_closed_fills: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        let options = ValidationOptions::default();
        Self {
            viewport_tolerance: options.viewport_tolerance,
            require_closed_fills: options.require_closed_fills,
        }
    }
}

impl LintConfig {
    pub fn to_options(&self) -> ValidationOptions {
        ValidationOptions {
            viewport_tolerance: self.viewport_tolerance,
            require_closed_fills: self.require_closed_fills,
        }
    }
}

/// SVG export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            pretty: true,
        }
    }
}

impl ExportConfig {
    pub fn to_options(&self) -> ExportOptions {
        ExportOptions {
            pretty: self.pretty,
        }
    }
}

impl PackConfig {
    /// Parse configuration text. Relative paths are left as written.
    pub fn from_toml_str(text: &str) -> PackResult<Self> {
        let config: PackConfig = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration file, resolving relative paths against its
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> PackResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        tracing::info!(
            target: targets::CONFIG,
            path = %path.display(),
            manifests = config.registry.manifests.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Make relative paths absolute with respect to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for manifest in &mut self.registry.manifests {
            if manifest.is_relative() {
                *manifest = base.join(&*manifest);
            }
        }
        if let Some(dir) = &mut self.export.output_dir
            && dir.is_relative()
        {
            *dir = base.join(&*dir);
        }
    }

    fn check(&self) -> PackResult<()> {
        let tolerance = self.lint.viewport_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(PackError::Config(format!(
                "lint.viewport_tolerance must be a non-negative number, got {tolerance}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PackConfig::from_toml_str("").unwrap();
        assert_eq!(config, PackConfig::default());
        assert_eq!(config.lint.viewport_tolerance, 0.25);
        assert!(config.lint.require_closed_fills);
        assert!(config.export.pretty);
        assert!(!config.registry.override_builtin);
    }

    #[test]
    fn test_partial_sections() {
        let config = PackConfig::from_toml_str(
            r#"
[lint]
viewport_tolerance = 0.5

[export]
pretty = false
"#,
        )
        .unwrap();
        assert_eq!(config.lint.viewport_tolerance, 0.5);
        assert!(config.lint.require_closed_fills);
        assert!(!config.export.to_options().pretty);
        assert_eq!(config.lint.to_options().viewport_tolerance, 0.5);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = PackConfig::from_toml_str("[lint]\nviewport_tolerance = -1.0\n").unwrap_err();
        assert!(matches!(err, PackError::Config(_)));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            PackConfig::from_toml_str("[registry\n"),
            Err(PackError::Toml(_))
        ));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = PackConfig::from_toml_str(
            r#"
[registry]
manifests = ["extra.toml", "/abs/other.json"]

[export]
output_dir = "out"
"#,
        )
        .unwrap();
        config.resolve_paths(Path::new("/etc/vecticon"));
        assert_eq!(
            config.registry.manifests,
            vec![
                PathBuf::from("/etc/vecticon/extra.toml"),
                PathBuf::from("/abs/other.json")
            ]
        );
        assert_eq!(config.export.output_dir, Some(PathBuf::from("/etc/vecticon/out")));
    }
}
