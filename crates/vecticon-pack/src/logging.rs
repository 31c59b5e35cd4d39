//! Logging targets for the icon pack.
//!
//! Vecticon logs through the `tracing` crate. Install a subscriber in your
//! application to see the events:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("vecticon_pack::catalog=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Pack crate target.
    pub const PACK: &str = "vecticon_pack";
    /// Built-in icon slots being populated.
    pub const CATALOG: &str = "vecticon_pack::catalog";
    /// Manifest parsing and conversion.
    pub const MANIFEST: &str = "vecticon_pack::manifest";
    /// Registry loads and lookups.
    pub const REGISTRY: &str = "vecticon_pack::registry";
    /// Configuration loading.
    pub const CONFIG: &str = "vecticon_pack::config";
    /// SVG export.
    pub const EXPORT: &str = "vecticon_pack::export";
}
