//! Built-in icon catalog and runtime registry for Vecticon.
//!
//! Every built-in icon is built from literal data on first access and cached
//! for the life of the process:
//!
//! ```
//! use vecticon_pack::icons;
//!
//! let first = icons::add_account();
//! let again = icons::add_account();
//! assert!(std::ptr::eq(first, again));
//! ```
//!
//! # Lookup by Name
//!
//! ```
//! use vecticon_pack::{icon_by_name, IconId};
//!
//! assert_eq!(IconId::from_name("check-circle"), Some(IconId::CheckCircle));
//! assert_eq!(icon_by_name("Report").unwrap().path_count(), 3);
//! ```
//!
//! # Manifests
//!
//! Additional icons can be declared in TOML or JSON manifests and loaded
//! into an [`IconRegistry`], which falls back to the built-ins for every
//! other name. See [`manifest`] for the format and [`PackConfig`] for the
//! configuration file that lists manifests.

mod catalog;
mod config;
mod error;
mod export;
pub mod logging;
pub mod manifest;
mod registry;
mod slot;

pub use catalog::{all, icon, icon_by_name, icons, is_initialized, IconId};
pub use config::{ExportConfig, LintConfig, PackConfig, RegistryConfig};
pub use error::{PackError, PackResult};
pub use export::{export_icons, export_vector_icons, file_name, ExportOptions, ExportSummary};
pub use manifest::{Manifest, ManifestFormat};
pub use registry::{IconHandle, IconRegistry};
pub use slot::IconSlot;

// Re-export the model crate so users need only one dependency
pub use vecticon_graphics;
