//! Immutable vector icons and their builder.
//!
//! A [`VectorIcon`] is a tree: a root [`VectorGroup`] whose children are
//! [`VectorPath`]s or nested groups. Most icons are flat, so
//! [`VectorIcon::paths`] walks the tree depth-first and yields the paths in
//! declaration order.
//!
//! # Example
//!
//! ```
//! use vecticon_graphics::{Color, FillRule, PathStyle, VectorIcon};
//!
//! let icon = VectorIcon::builder("Square", 24.0, 24.0, 24.0, 24.0)
//!     .path(PathStyle::fill(Color::WHITE).with_fill_rule(FillRule::EvenOdd), |p| {
//!         p.add_rect(2.0, 2.0, 22.0, 22.0);
//!     })
//!     .build();
//!
//! assert_eq!(icon.paths().count(), 1);
//! ```

use crate::error::{GraphicsError, GraphicsResult};
use crate::paint::{Brush, FillRule, Stroke};
use crate::path::{PathBuilder, PathNode};
use crate::types::{Color, Point, Size};

/// One fillable and strokable shape.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    name: Option<String>,
    nodes: Vec<PathNode>,
    fill: Option<Brush>,
    fill_alpha: f32,
    stroke: Option<Stroke>,
    stroke_alpha: f32,
    fill_rule: FillRule,
}

impl VectorPath {
    /// Create a path from a style and its nodes.
    pub fn new(style: PathStyle, nodes: Vec<PathNode>) -> Self {
        Self {
            name: style.name,
            nodes,
            fill: style.fill,
            fill_alpha: style.fill_alpha,
            stroke: style.stroke,
            stroke_alpha: style.stroke_alpha,
            fill_rule: style.fill_rule,
        }
    }

    /// Optional path name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The drawing instructions.
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Fill brush, if the path is filled.
    pub fn fill(&self) -> Option<&Brush> {
        self.fill.as_ref()
    }

    /// Fill opacity multiplier.
    pub fn fill_alpha(&self) -> f32 {
        self.fill_alpha
    }

    /// Stroke style, if the path is stroked.
    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    /// Stroke opacity multiplier.
    pub fn stroke_alpha(&self) -> f32 {
        self.stroke_alpha
    }

    /// Fill rule.
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Whether the path paints any fill.
    pub fn is_filled(&self) -> bool {
        self.fill.is_some() && self.fill_alpha > 0.0
    }

    /// Whether the path paints any stroke.
    pub fn is_stroked(&self) -> bool {
        self.stroke
            .as_ref()
            .is_some_and(|s| s.width > 0.0 && self.stroke_alpha > 0.0)
    }

    /// Every color literal referenced by the fill and stroke.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors = Vec::new();
        if let Some(fill) = &self.fill {
            colors.extend(fill.colors());
        }
        if let Some(stroke) = &self.stroke {
            colors.extend(stroke.brush.colors());
        }
        colors
    }
}

/// Styling applied to a path when it is added to an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    /// Optional path name.
    pub name: Option<String>,
    /// Fill brush.
    pub fill: Option<Brush>,
    /// Fill opacity multiplier (0.0 to 1.0).
    pub fill_alpha: f32,
    /// Stroke style.
    pub stroke: Option<Stroke>,
    /// Stroke opacity multiplier (0.0 to 1.0).
    pub stroke_alpha: f32,
    /// Fill rule.
    pub fill_rule: FillRule,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            name: None,
            fill: None,
            fill_alpha: 1.0,
            stroke: None,
            stroke_alpha: 1.0,
            fill_rule: FillRule::NonZero,
        }
    }
}

impl PathStyle {
    /// A filled path with the given brush.
    pub fn fill(brush: impl Into<Brush>) -> Self {
        Self {
            fill: Some(brush.into()),
            ..Default::default()
        }
    }

    /// A stroked, unfilled path.
    pub fn stroke(stroke: Stroke) -> Self {
        Self {
            stroke: Some(stroke),
            ..Default::default()
        }
    }

    /// Set the path name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the fill rule.
    #[must_use]
    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    /// Use the even-odd fill rule.
    #[must_use]
    pub fn even_odd(self) -> Self {
        self.with_fill_rule(FillRule::EvenOdd)
    }

    /// Set the fill opacity.
    #[must_use]
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha;
        self
    }

    /// Add or replace the stroke.
    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the stroke opacity.
    #[must_use]
    pub fn with_stroke_alpha(mut self, alpha: f32) -> Self {
        self.stroke_alpha = alpha;
        self
    }
}

/// Transform and clip applied to a group's children.
///
/// Children are scaled and rotated about `pivot`, then translated.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStyle {
    /// Optional group name.
    pub name: Option<String>,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Pivot for rotation and scale.
    pub pivot: Point,
    /// Horizontal scale.
    pub scale_x: f32,
    /// Vertical scale.
    pub scale_y: f32,
    /// Translation applied after rotation and scale.
    pub translation: Point,
    /// Clip path nodes; empty means no clip.
    pub clip: Vec<PathNode>,
}

impl Default for GroupStyle {
    fn default() -> Self {
        Self {
            name: None,
            rotation: 0.0,
            pivot: Point::ZERO,
            scale_x: 1.0,
            scale_y: 1.0,
            translation: Point::ZERO,
            clip: Vec::new(),
        }
    }
}

impl GroupStyle {
    /// An identity group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Rotate by `degrees` about `pivot`.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f32, pivot: Point) -> Self {
        self.rotation = degrees;
        self.pivot = pivot;
        self
    }

    /// Scale about the pivot.
    #[must_use]
    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale_x = sx;
        self.scale_y = sy;
        self
    }

    /// Translate by an offset.
    #[must_use]
    pub fn with_translation(mut self, dx: f32, dy: f32) -> Self {
        self.translation = Point::new(dx, dy);
        self
    }

    /// Clip children to the given path.
    #[must_use]
    pub fn with_clip(mut self, clip: Vec<PathNode>) -> Self {
        self.clip = clip;
        self
    }

    /// Whether the transform and clip hold only finite values.
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite()
            && self.pivot.is_finite()
            && self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.translation.is_finite()
            && self.clip.iter().all(PathNode::is_finite)
    }
}

/// A child of a group.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorNode {
    /// A drawable path.
    Path(VectorPath),
    /// A nested group.
    Group(VectorGroup),
}

/// A transformed, optionally clipped collection of children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorGroup {
    style: GroupStyle,
    children: Vec<VectorNode>,
}

impl VectorGroup {
    /// Create an empty group with the given style.
    pub fn new(style: GroupStyle) -> Self {
        Self {
            style,
            children: Vec::new(),
        }
    }

    /// Group name.
    pub fn name(&self) -> Option<&str> {
        self.style.name.as_deref()
    }

    /// Transform and clip settings.
    pub fn style(&self) -> &GroupStyle {
        &self.style
    }

    /// Ordered children.
    pub fn children(&self) -> &[VectorNode] {
        &self.children
    }

    /// Whether the group applies no transform.
    pub fn is_identity(&self) -> bool {
        let s = &self.style;
        s.rotation == 0.0 && s.scale_x == 1.0 && s.scale_y == 1.0 && s.translation == Point::ZERO
    }

    fn push(&mut self, node: VectorNode) {
        self.children.push(node);
    }
}

/// An immutable, resolution-independent icon.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorIcon {
    name: String,
    default_size: Size,
    viewport: Size,
    tint_color: Option<Color>,
    auto_mirror: bool,
    root: VectorGroup,
}

static_assertions::assert_impl_all!(VectorIcon: Send, Sync);

impl VectorIcon {
    /// Start building an icon.
    pub fn builder(
        name: impl Into<String>,
        width: f32,
        height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> VectorIconBuilder {
        VectorIconBuilder::new(name, width, height, viewport_width, viewport_height)
    }

    /// Icon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nominal display width.
    pub fn width(&self) -> f32 {
        self.default_size.width
    }

    /// Nominal display height.
    pub fn height(&self) -> f32 {
        self.default_size.height
    }

    /// Nominal display size.
    pub fn default_size(&self) -> Size {
        self.default_size
    }

    /// Coordinate-space width for path data.
    pub fn viewport_width(&self) -> f32 {
        self.viewport.width
    }

    /// Coordinate-space height for path data.
    pub fn viewport_height(&self) -> f32 {
        self.viewport.height
    }

    /// Coordinate-space bounds for path data.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Color the host should tint the icon with, if any.
    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    /// Whether the icon mirrors in right-to-left layouts.
    pub fn auto_mirror(&self) -> bool {
        self.auto_mirror
    }

    /// The root group.
    pub fn root(&self) -> &VectorGroup {
        &self.root
    }

    /// All paths, depth-first in declaration order.
    pub fn paths(&self) -> Paths<'_> {
        Paths {
            stack: vec![self.root.children.iter()],
        }
    }

    /// Number of paths in the icon.
    pub fn path_count(&self) -> usize {
        self.paths().count()
    }
}

/// Depth-first iterator over an icon's paths.
pub struct Paths<'a> {
    stack: Vec<std::slice::Iter<'a, VectorNode>>,
}

impl<'a> Iterator for Paths<'a> {
    type Item = &'a VectorPath;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(VectorNode::Path(path)) => return Some(path),
                Some(VectorNode::Group(group)) => self.stack.push(group.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Builder for [`VectorIcon`].
///
/// Groups nest through [`VectorIconBuilder::group`]; the closure receives
/// the builder with the new group open and returns it.
#[derive(Debug, Clone)]
pub struct VectorIconBuilder {
    name: String,
    default_size: Size,
    viewport: Size,
    tint_color: Option<Color>,
    auto_mirror: bool,
    stack: Vec<VectorGroup>,
}

impl VectorIconBuilder {
    /// Create a builder for an icon with the given size and viewport.
    pub fn new(
        name: impl Into<String>,
        width: f32,
        height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        Self {
            name: name.into(),
            default_size: Size::new(width, height),
            viewport: Size::new(viewport_width, viewport_height),
            tint_color: None,
            auto_mirror: false,
            stack: vec![VectorGroup::default()],
        }
    }

    /// Set a tint color.
    #[must_use]
    pub fn tint(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    /// Mirror in right-to-left layouts.
    #[must_use]
    pub fn auto_mirror(mut self, mirror: bool) -> Self {
        self.auto_mirror = mirror;
        self
    }

    /// Add a path drawn by `draw`.
    #[must_use]
    pub fn path(self, style: PathStyle, draw: impl FnOnce(&mut PathBuilder)) -> Self {
        let mut builder = PathBuilder::new();
        draw(&mut builder);
        self.path_nodes(style, builder.into_nodes())
    }

    /// Add a path from prepared nodes.
    #[must_use]
    pub fn path_nodes(mut self, style: PathStyle, nodes: Vec<PathNode>) -> Self {
        self.current().push(VectorNode::Path(VectorPath::new(style, nodes)));
        self
    }

    /// Add a group whose children are added by `build`.
    #[must_use]
    pub fn group(mut self, style: GroupStyle, build: impl FnOnce(Self) -> Self) -> Self {
        let depth = self.stack.len();
        self.stack.push(VectorGroup::new(style));
        let mut this = build(self);
        while this.stack.len() > depth {
            this.close_group();
        }
        this
    }

    fn current(&mut self) -> &mut VectorGroup {
        if self.stack.is_empty() {
            self.stack.push(VectorGroup::default());
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn close_group(&mut self) {
        if self.stack.len() > 1
            && let Some(group) = self.stack.pop()
        {
            self.current().push(VectorNode::Group(group));
        }
    }

    /// Finish the icon.
    pub fn build(mut self) -> VectorIcon {
        while self.stack.len() > 1 {
            self.close_group();
        }
        let root = self.stack.pop().unwrap_or_default();
        VectorIcon {
            name: self.name,
            default_size: self.default_size,
            viewport: self.viewport,
            tint_color: self.tint_color,
            auto_mirror: self.auto_mirror,
            root,
        }
    }

    /// Finish the icon, rejecting invalid sizes and undrawable brushes.
    pub fn try_build(self) -> GraphicsResult<VectorIcon> {
        if !self.default_size.is_valid() || !self.viewport.is_valid() {
            return Err(GraphicsError::InvalidDimensions {
                name: self.name,
                width: self.default_size.width,
                height: self.default_size.height,
                viewport_width: self.viewport.width,
                viewport_height: self.viewport.height,
            });
        }
        let icon = self.build();
        if let Some(detail) = non_finite_detail(icon.root()) {
            return Err(GraphicsError::NonFiniteGeometry {
                name: icon.name,
                detail,
            });
        }
        for path in icon.paths() {
            if let Some(fill) = path.fill() {
                fill.check()?;
            }
            if let Some(stroke) = path.stroke() {
                stroke.brush.check()?;
            }
        }
        Ok(icon)
    }
}

// Describes the first non-finite value in a group tree, if any.
fn non_finite_detail(group: &VectorGroup) -> Option<String> {
    if !group.style.is_finite() {
        let name = group.name().unwrap_or("unnamed");
        return Some(format!("group '{name}' has a non-finite transform or clip"));
    }
    group.children.iter().find_map(|child| match child {
        VectorNode::Path(path) => path.nodes().iter().find(|n| !n.is_finite()).map(|node| {
            format!("'{}' command has a non-finite argument", node.command())
        }),
        VectorNode::Group(inner) => non_finite_detail(inner),
    })
}
