//! SVG serialization.
//!
//! [`to_path_data`] writes nodes back to path-data syntax so that parsing
//! the result reproduces the same nodes. [`to_svg_document`] writes a whole
//! icon as a standalone SVG file.

use std::fmt::Write as FmtWrite;

use crate::paint::{Brush, GradientStop};
use crate::path::PathNode;
use crate::vector::{VectorGroup, VectorIcon, VectorNode, VectorPath};

/// Serialize nodes to compact SVG path data.
///
/// ```
/// use vecticon_graphics::{parse_path_data, to_path_data};
///
/// let nodes = parse_path_data("M11 4 V2.5 C11 1.67 10.33 1 9.5 1 Z").unwrap();
/// let data = to_path_data(&nodes);
/// assert_eq!(data, "M11 4V2.5C11 1.67 10.33 1 9.5 1Z");
/// assert_eq!(parse_path_data(&data).unwrap(), nodes);
/// ```
pub fn to_path_data(nodes: &[PathNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push(node.command());
        for (i, value) in node.args().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_number(&mut out, *value);
        }
    }
    out
}

// Shortest representation that parses back to the same f32.
fn push_number(out: &mut String, value: f32) {
    if value == 0.0 {
        out.push('0');
    } else {
        let _ = write!(out, "{value}");
    }
}

/// Options for [`to_svg_document_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    /// Indent elements on separate lines.
    pub pretty: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Write an icon as a standalone SVG document with default options.
pub fn to_svg_document(icon: &VectorIcon) -> String {
    to_svg_document_with(icon, &SvgOptions::default())
}

/// Write an icon as a standalone SVG document.
pub fn to_svg_document_with(icon: &VectorIcon, options: &SvgOptions) -> String {
    let mut writer = SvgWriter {
        out: String::new(),
        defs: String::new(),
        pretty: options.pretty,
        id_prefix: sanitize_id(icon.name()),
        next_id: 0,
    };

    let mut body = String::new();
    std::mem::swap(&mut writer.out, &mut body);
    writer.write_children(icon.root(), 1);
    std::mem::swap(&mut writer.out, &mut body);

    let nl = if options.pretty { "\n" } else { "" };
    let mut doc = String::new();
    let _ = write!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">{nl}"#,
        fmt_num(icon.width()),
        fmt_num(icon.height()),
        fmt_num(icon.viewport_width()),
        fmt_num(icon.viewport_height()),
    );
    if !writer.defs.is_empty() {
        let indent = if options.pretty { "  " } else { "" };
        let _ = write!(doc, "{indent}<defs>{nl}{}{indent}</defs>{nl}", writer.defs);
    }
    doc.push_str(&body);
    doc.push_str("</svg>");
    doc.push_str(nl);
    doc
}

struct SvgWriter {
    out: String,
    defs: String,
    pretty: bool,
    id_prefix: String,
    next_id: usize,
}

impl SvgWriter {
    fn indent(&self, depth: usize) -> String {
        if self.pretty {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.pretty { "\n" } else { "" }
    }

    fn fresh_id(&mut self, kind: &str) -> String {
        self.next_id += 1;
        format!("{}-{}{}", self.id_prefix, kind, self.next_id)
    }

    fn write_children(&mut self, group: &VectorGroup, depth: usize) {
        for child in group.children() {
            match child {
                VectorNode::Path(path) => self.write_path(path, depth),
                VectorNode::Group(inner) => self.write_group(inner, depth),
            }
        }
    }

    fn write_group(&mut self, group: &VectorGroup, depth: usize) {
        let style = group.style();
        let mut attrs = String::new();

        if !group.is_identity() {
            let _ = write!(
                attrs,
                r#" transform="translate({} {}) rotate({}) scale({} {}) translate({} {})""#,
                fmt_num(style.translation.x + style.pivot.x),
                fmt_num(style.translation.y + style.pivot.y),
                fmt_num(style.rotation),
                fmt_num(style.scale_x),
                fmt_num(style.scale_y),
                fmt_num(-style.pivot.x),
                fmt_num(-style.pivot.y),
            );
        }

        if !style.clip.is_empty() {
            let id = self.fresh_id("clip");
            let nl = self.newline();
            let indent = self.indent(2);
            let _ = write!(
                self.defs,
                r#"{indent}<clipPath id="{id}"><path d="{}"/></clipPath>{nl}"#,
                to_path_data(&style.clip)
            );
            let _ = write!(attrs, r#" clip-path="url(#{id})""#);
        }

        let indent = self.indent(depth);
        let nl = self.newline();
        let _ = write!(self.out, "{indent}<g{attrs}>{nl}");
        self.write_children(group, depth + 1);
        let _ = write!(self.out, "{indent}</g>{nl}");
    }

    fn write_path(&mut self, path: &VectorPath, depth: usize) {
        let mut attrs = format!(r#" d="{}""#, to_path_data(path.nodes()));

        match path.fill() {
            Some(brush) => {
                let paint = self.paint(brush);
                let _ = write!(attrs, r#" fill="{}""#, paint.value);
                let opacity = paint.opacity * path.fill_alpha();
                if opacity < 1.0 {
                    let _ = write!(attrs, r#" fill-opacity="{}""#, fmt_num(opacity));
                }
                let _ = write!(attrs, r#" fill-rule="{}""#, path.fill_rule().as_svg());
            }
            None => attrs.push_str(r#" fill="none""#),
        }

        if let Some(stroke) = path.stroke() {
            let paint = self.paint(&stroke.brush);
            let _ = write!(
                attrs,
                r#" stroke="{}" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}" stroke-miterlimit="{}""#,
                paint.value,
                fmt_num(stroke.width),
                stroke.cap.as_svg(),
                stroke.join.as_svg(),
                fmt_num(stroke.miter_limit),
            );
            let opacity = paint.opacity * path.stroke_alpha();
            if opacity < 1.0 {
                let _ = write!(attrs, r#" stroke-opacity="{}""#, fmt_num(opacity));
            }
        }

        let indent = self.indent(depth);
        let nl = self.newline();
        let _ = write!(self.out, "{indent}<path{attrs}/>{nl}");
    }

    fn paint(&mut self, brush: &Brush) -> SvgPaint {
        match brush {
            Brush::Solid(color) => SvgPaint {
                value: color.to_rgb_hex(),
                opacity: color.alpha_f32(),
            },
            Brush::LinearGradient(gradient) => {
                let id = self.fresh_id("linear");
                let attrs = format!(
                    r#"x1="{}" y1="{}" x2="{}" y2="{}""#,
                    fmt_num(gradient.start.x),
                    fmt_num(gradient.start.y),
                    fmt_num(gradient.end.x),
                    fmt_num(gradient.end.y),
                );
                self.write_gradient("linearGradient", &id, &attrs, &gradient.stops);
                SvgPaint {
                    value: format!("url(#{id})"),
                    opacity: 1.0,
                }
            }
            Brush::RadialGradient(gradient) => {
                let id = self.fresh_id("radial");
                let attrs = format!(
                    r#"cx="{}" cy="{}" r="{}""#,
                    fmt_num(gradient.center.x),
                    fmt_num(gradient.center.y),
                    fmt_num(gradient.radius),
                );
                self.write_gradient("radialGradient", &id, &attrs, &gradient.stops);
                SvgPaint {
                    value: format!("url(#{id})"),
                    opacity: 1.0,
                }
            }
        }
    }

    fn write_gradient(&mut self, tag: &str, id: &str, attrs: &str, stops: &[GradientStop]) {
        let nl = self.newline();
        let indent = self.indent(2);
        let stop_indent = self.indent(3);
        let _ = write!(
            self.defs,
            r#"{indent}<{tag} id="{id}" gradientUnits="userSpaceOnUse" {attrs}>{nl}"#
        );
        for stop in stops {
            let _ = write!(
                self.defs,
                r#"{stop_indent}<stop offset="{}" stop-color="{}""#,
                fmt_num(stop.offset),
                stop.color.to_rgb_hex()
            );
            if !stop.color.is_opaque() {
                let _ = write!(
                    self.defs,
                    r#" stop-opacity="{}""#,
                    fmt_num(stop.color.alpha_f32())
                );
            }
            let _ = write!(self.defs, "/>{nl}");
        }
        let _ = write!(self.defs, "{indent}</{tag}>{nl}");
    }
}

struct SvgPaint {
    value: String,
    opacity: f32,
}

fn fmt_num(value: f32) -> String {
    let mut s = String::new();
    push_number(&mut s, value);
    s
}

/// Reduce a name to characters that are safe in an XML id.
fn sanitize_id(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if id.is_empty() { "icon".to_string() } else { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{FillRule, LineCap, Stroke};
    use crate::parser::parse_path_data;
    use crate::types::{Color, Point};
    use crate::vector::{GroupStyle, PathStyle};

    #[test]
    fn test_path_data_round_trip() {
        let source = "M11 4V2.5C11 1.672 10.328 1 9.5 1H2.5a1.5 1.5 0 01-1.5-1.5s1 2 3 4q1 1 2 2t3 3l-.25.125Z";
        let nodes = parse_path_data(source).unwrap();
        let written = to_path_data(&nodes);
        assert_eq!(parse_path_data(&written).unwrap(), nodes);
    }

    #[test]
    fn test_integer_coordinates_have_no_fraction() {
        let nodes = parse_path_data("M1.0 -0 L20 3.50").unwrap();
        assert_eq!(to_path_data(&nodes), "M1 0L20 3.5");
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("Add Account"), "Add_Account");
        assert_eq!(sanitize_id(""), "icon");
    }

    #[test]
    fn test_document_header() {
        let icon = VectorIcon::builder("Square", 16.0, 16.0, 24.0, 24.0)
            .path(PathStyle::fill(Color::WHITE).with_fill_rule(FillRule::EvenOdd), |p| {
                p.add_rect(2.0, 2.0, 22.0, 22.0);
            })
            .build();

        let svg = to_svg_document(&icon);
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24">"#
        ));
        assert!(svg.contains(r##"<path d="M2 2H22V22H2Z" fill="#FFFFFF" fill-rule="evenodd"/>"##));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_translucent_fill_and_stroke() {
        let icon = VectorIcon::builder("Outline", 24.0, 24.0, 24.0, 24.0)
            .path(
                PathStyle::stroke(Stroke::new(Color::from_argb32(0x80000000), 2.0).with_cap(LineCap::Round)),
                |p| {
                    p.move_to(4.0, 12.0).line_to(20.0, 12.0);
                },
            )
            .build();

        let svg = to_svg_document_with(&icon, &SvgOptions { pretty: false });
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#000000" stroke-width="2" stroke-linecap="round""##));
        assert!(svg.contains("stroke-opacity=\"0.5"));
        assert!(!svg.contains('\n'));
    }

    #[test]
    fn test_gradient_goes_to_defs() {
        let brush = Brush::linear_gradient(
            Point::new(0.0, 0.0),
            Point::new(24.0, 24.0),
            vec![
                GradientStop::new(0.0, Color::from_argb32(0xFFFF8A00)),
                GradientStop::new(1.0, Color::from_argb32(0x80E52E71)),
            ],
        );
        let icon = VectorIcon::builder("Badge", 24.0, 24.0, 24.0, 24.0)
            .path(PathStyle::fill(brush), |p| {
                p.add_circle(12.0, 12.0, 10.0);
            })
            .build();

        let svg = to_svg_document(&icon);
        assert!(svg.contains("<defs>"));
        assert!(svg.contains(r#"<linearGradient id="Badge-linear1" gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="24" y2="24">"#));
        assert!(svg.contains(r##"<stop offset="1" stop-color="#E52E71" stop-opacity="0.5""##));
        assert!(svg.contains(r##"fill="url(#Badge-linear1)""##));
    }

    #[test]
    fn test_group_transform_and_clip() {
        let mut clip = crate::path::PathBuilder::new();
        clip.add_rect(0.0, 0.0, 12.0, 24.0);

        let icon = VectorIcon::builder("Half", 24.0, 24.0, 24.0, 24.0)
            .group(
                GroupStyle::new()
                    .with_rotation(45.0, Point::new(12.0, 12.0))
                    .with_clip(clip.into_nodes()),
                |b| {
                    b.path(PathStyle::fill(Color::BLACK), |p| {
                        p.add_circle(12.0, 12.0, 8.0);
                    })
                },
            )
            .build();

        let svg = to_svg_document(&icon);
        assert!(svg.contains(r#"transform="translate(12 12) rotate(45) scale(1 1) translate(-12 -12)""#));
        assert!(svg.contains(r#"<clipPath id="Half-clip1"><path d="M0 0H12V24H0Z"/></clipPath>"#));
        assert!(svg.contains(r#"clip-path="url(#Half-clip1)""#));
        assert!(svg.contains("</g>"));
    }
}
