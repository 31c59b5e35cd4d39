//! Declarative icon manifests.
//!
//! A manifest lists icons as data rather than code. TOML and JSON carry the
//! same structure:
//!
//! ```toml
//! [[icon]]
//! name = "Badge"
//! width = 24.0
//! height = 24.0
//!
//! [[icon.path]]
//! data = "M2,2H22V22H2Z"
//! fill = "#FF00FF00"
//! fill_rule = "even_odd"
//! ```
//!
//! `viewport_width` and `viewport_height` default to the size. A path may
//! carry `fill`, `fill_gradient` or neither, plus an optional `stroke`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vecticon_graphics::{
    parse_path_data, Brush, Color, FillRule, GradientStop, GraphicsError, LineCap, LineJoin,
    PathStyle, Point, Stroke, VectorIcon,
};

use crate::error::{PackError, PackResult};
use crate::logging::targets;

/// Manifest file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> PackResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(PackError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// A parsed manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "icon")]
    pub icons: Vec<IconEntry>,
}

/// One icon in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconEntry {
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_height: Option<f32>,
    #[serde(default)]
    pub auto_mirror: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,
    #[serde(default, rename = "path")]
    pub paths: Vec<PathEntry>,
}

/// One path of a manifest icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_gradient: Option<GradientEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_alpha: Option<f32>,
    #[serde(default)]
    pub fill_rule: FillRuleEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_alpha: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRuleEntry {
    #[default]
    NonZero,
    EvenOdd,
}

impl From<FillRuleEntry> for FillRule {
    fn from(rule: FillRuleEntry) -> Self {
        match rule {
            FillRuleEntry::NonZero => FillRule::NonZero,
            FillRuleEntry::EvenOdd => FillRule::EvenOdd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    Linear,
    Radial,
}

/// A gradient fill. Linear gradients use `start` and `end`; radial ones use
/// `center` and `radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientEntry {
    pub kind: GradientKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// `(offset, color)` pairs.
    pub stops: Vec<(f32, String)>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapEntry {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinEntry {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A stroke. Only `color` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeEntry {
    pub color: String,
    #[serde(default = "default_stroke_width")]
    pub width: f32,
    #[serde(default)]
    pub cap: CapEntry,
    #[serde(default)]
    pub join: JoinEntry,
    #[serde(default = "default_miter_limit")]
    pub miter_limit: f32,
}

fn default_stroke_width() -> f32 {
    1.0
}

fn default_miter_limit() -> f32 {
    4.0
}

impl Manifest {
    /// Parse manifest text.
    pub fn parse(text: &str, format: ManifestFormat) -> PackResult<Self> {
        let manifest: Manifest = match format {
            ManifestFormat::Toml => toml::from_str(text)?,
            ManifestFormat::Json => serde_json::from_str(text)?,
        };
        tracing::trace!(
            target: targets::MANIFEST,
            ?format,
            icons = manifest.icons.len(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    /// Read and parse a manifest file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> PackResult<Self> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;
        Self::parse(&text, format)
    }

    /// Build every icon, stopping at the first invalid entry.
    pub fn into_icons(self) -> PackResult<Vec<VectorIcon>> {
        self.icons.iter().map(IconEntry::to_icon).collect()
    }
}

impl IconEntry {
    /// Build the icon this entry describes.
    pub fn to_icon(&self) -> PackResult<VectorIcon> {
        if self.name.trim().is_empty() {
            return Err(PackError::manifest(&self.name, "icon name is empty"));
        }

        let mut builder = VectorIcon::builder(
            self.name.clone(),
            self.width,
            self.height,
            self.viewport_width.unwrap_or(self.width),
            self.viewport_height.unwrap_or(self.height),
        )
        .auto_mirror(self.auto_mirror);

        if let Some(tint) = &self.tint {
            builder = builder.tint(parse_color(tint)?);
        }

        for path in &self.paths {
            let nodes = parse_path_data(&path.data).inspect_err(|err| {
                tracing::warn!(target: targets::MANIFEST, icon = %self.name, %err, "bad path data");
            })?;
            builder = builder.path_nodes(path.style(&self.name)?, nodes);
        }

        Ok(builder.try_build()?)
    }
}

impl PathEntry {
    fn style(&self, icon: &str) -> PackResult<PathStyle> {
        let mut style = PathStyle::default().with_fill_rule(self.fill_rule.into());

        style.fill = match (&self.fill, &self.fill_gradient) {
            (Some(_), Some(_)) => {
                return Err(PackError::manifest(
                    icon,
                    "a path cannot have both fill and fill_gradient",
                ));
            }
            (Some(color), None) => Some(Brush::Solid(parse_color(color)?)),
            (None, Some(gradient)) => Some(gradient.to_brush(icon)?),
            (None, None) => None,
        };

        if let Some(alpha) = self.fill_alpha {
            style = style.with_fill_alpha(check_alpha(icon, alpha)?);
        }
        if let Some(stroke) = &self.stroke {
            style = style.with_stroke(stroke.to_stroke()?);
        }
        if let Some(alpha) = self.stroke_alpha {
            style = style.with_stroke_alpha(check_alpha(icon, alpha)?);
        }
        if let Some(name) = &self.name {
            style = style.with_name(name.clone());
        }
        Ok(style)
    }
}

impl GradientEntry {
    fn to_brush(&self, icon: &str) -> PackResult<Brush> {
        let stops = self
            .stops
            .iter()
            .map(|(offset, color)| Ok(GradientStop::new(*offset, parse_color(color)?)))
            .collect::<PackResult<Vec<_>>>()?;

        let point = |value: Option<[f32; 2]>, field: &str| {
            value.map(Point::from).ok_or_else(|| {
                PackError::manifest(icon, format!("{:?} gradient needs '{field}'", self.kind))
            })
        };

        let brush = match self.kind {
            GradientKind::Linear => {
                Brush::linear_gradient(point(self.start, "start")?, point(self.end, "end")?, stops)
            }
            GradientKind::Radial => {
                let radius = self.radius.ok_or_else(|| {
                    PackError::manifest(icon, "Radial gradient needs 'radius'")
                })?;
                Brush::radial_gradient(point(self.center, "center")?, radius, stops)
            }
        };
        brush.check()?;
        Ok(brush)
    }
}

impl StrokeEntry {
    fn to_stroke(&self) -> PackResult<Stroke> {
        let cap = match self.cap {
            CapEntry::Butt => LineCap::Butt,
            CapEntry::Round => LineCap::Round,
            CapEntry::Square => LineCap::Square,
        };
        let join = match self.join {
            JoinEntry::Miter => LineJoin::Miter,
            JoinEntry::Round => LineJoin::Round,
            JoinEntry::Bevel => LineJoin::Bevel,
        };
        Ok(Stroke::new(parse_color(&self.color)?, self.width)
            .with_cap(cap)
            .with_join(join)
            .with_miter_limit(self.miter_limit))
    }
}

fn parse_color(text: &str) -> PackResult<Color> {
    Color::from_hex(text).ok_or_else(|| GraphicsError::InvalidColor(text.to_string()).into())
}

fn check_alpha(icon: &str, alpha: f32) -> PackResult<f32> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(PackError::manifest(icon, format!("alpha {alpha} outside 0..=1")))
    }
}
