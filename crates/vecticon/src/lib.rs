//! Vecticon - a vector icon pack.
//!
//! This is the umbrella crate that re-exports the icon model and the pack,
//! and hosts the `vecticon` command-line tool.
//!
//! # Example
//!
//! ```
//! use vecticon::{icons, to_svg_document};
//!
//! let svg = to_svg_document(icons::report());
//! assert!(svg.contains(r#"viewBox="0 0 20 20""#));
//! ```

pub use vecticon_graphics::*;
pub use vecticon_pack::*;

pub mod cli;
