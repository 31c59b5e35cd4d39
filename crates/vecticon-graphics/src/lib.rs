//! Vector icon model for Vecticon.
//!
//! This crate provides the immutable icon representation shared by the
//! built-in catalog and loaded manifests: colors and brushes, path nodes,
//! fluent builders, SVG path-data parsing and serialization, geometry via
//! lyon, validation and SVG document export.
//!
//! # Building an Icon
//!
//! ```
//! use vecticon_graphics::{Color, FillRule, PathStyle, VectorIcon};
//!
//! let icon = VectorIcon::builder("Report", 20.0, 20.0, 20.0, 20.0)
//!     .path(PathStyle::fill(Color::from_argb32(0xFFFA3C3C)), |p| {
//!         p.add_rect(9.0, 5.0, 11.0, 11.0);
//!     })
//!     .path(
//!         PathStyle::fill(Color::from_argb32(0xFFFA3C3C)).with_fill_rule(FillRule::EvenOdd),
//!         |p| {
//!             p.add_circle(10.0, 10.0, 9.0).add_circle(10.0, 10.0, 7.5);
//!         },
//!     )
//!     .build();
//!
//! assert_eq!(icon.path_count(), 2);
//! ```
//!
//! # Path Data
//!
//! Icons can also be described with SVG path data:
//!
//! ```
//! use vecticon_graphics::{parse_path_data, to_path_data};
//!
//! let nodes = parse_path_data("M2,2 H22 V22 H2 Z")?;
//! assert_eq!(to_path_data(&nodes), "M2 2H22V22H2Z");
//! # Ok::<(), vecticon_graphics::GraphicsError>(())
//! ```
//!
//! # Checking and Exporting
//!
//! ```
//! use vecticon_graphics::{validate, to_svg_document, Color, PathStyle, ValidationOptions, VectorIcon};
//!
//! let icon = VectorIcon::builder("Dot", 24.0, 24.0, 24.0, 24.0)
//!     .path(PathStyle::fill(Color::BLACK), |p| {
//!         p.add_circle(12.0, 12.0, 4.0);
//!     })
//!     .build();
//!
//! assert!(validate(&icon, &ValidationOptions::default()).is_ok());
//! assert!(to_svg_document(&icon).starts_with("<svg"));
//! ```

mod error;
mod geometry;
mod paint;
mod parser;
mod path;
mod svg;
mod types;
mod validate;
mod vector;

pub use error::{GraphicsError, GraphicsResult};

// Drawing types
pub use paint::{
    Brush, FillRule, GradientStop, LineCap, LineJoin, LinearGradient, RadialGradient, Stroke,
};
pub use types::{Color, Point, Rect, Size};

// Icon model
pub use path::{PathBuilder, PathNode};
pub use vector::{
    GroupStyle, PathStyle, Paths, VectorGroup, VectorIcon, VectorIconBuilder, VectorNode,
    VectorPath,
};

// Path data, geometry and output
pub use geometry::{group_transform, nodes_bounds, to_lyon_path};
pub use parser::parse_path_data;
pub use svg::{to_path_data, to_svg_document, to_svg_document_with, SvgOptions};
pub use validate::{
    has_unclosed_subpath, validate, Issue, IssueKind, Severity, ValidationOptions,
    ValidationReport,
};

// Re-export lyon so callers can work with converted paths
pub use lyon;
