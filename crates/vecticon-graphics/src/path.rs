//! Path nodes and the fluent path builder.
//!
//! A [`PathNode`] is one drawing instruction with literal coordinates, in the
//! same vocabulary as SVG path data: absolute and relative moves, lines,
//! cubic and quadratic curves (with their reflective shorthand forms),
//! elliptical arcs and close.

use crate::types::Point;

/// A single path drawing instruction.
///
/// Relative variants are offsets from the current point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathNode {
    /// Start a new subpath at a point.
    MoveTo { x: f32, y: f32 },
    /// Start a new subpath relative to the current point.
    RelativeMoveTo { dx: f32, dy: f32 },
    /// Straight line to a point.
    LineTo { x: f32, y: f32 },
    /// Straight line by an offset.
    RelativeLineTo { dx: f32, dy: f32 },
    /// Horizontal line to an x coordinate.
    HorizontalTo { x: f32 },
    /// Horizontal line by an offset.
    RelativeHorizontalTo { dx: f32 },
    /// Vertical line to a y coordinate.
    VerticalTo { y: f32 },
    /// Vertical line by an offset.
    RelativeVerticalTo { dy: f32 },
    /// Cubic bezier curve.
    CurveTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
    },
    /// Cubic bezier curve with relative points.
    RelativeCurveTo {
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
        dx3: f32,
        dy3: f32,
    },
    /// Cubic bezier whose first control point mirrors the previous curve's second.
    ReflectiveCurveTo { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Relative form of [`PathNode::ReflectiveCurveTo`].
    RelativeReflectiveCurveTo {
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
    },
    /// Quadratic bezier curve.
    QuadTo { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Quadratic bezier curve with relative points.
    RelativeQuadTo {
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
    },
    /// Quadratic bezier whose control point mirrors the previous curve's.
    ReflectiveQuadTo { x: f32, y: f32 },
    /// Relative form of [`PathNode::ReflectiveQuadTo`].
    RelativeReflectiveQuadTo { dx: f32, dy: f32 },
    /// Elliptical arc to a point.
    ArcTo {
        horizontal_radius: f32,
        vertical_radius: f32,
        /// X-axis rotation of the ellipse, in degrees.
        theta: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    },
    /// Elliptical arc by an offset.
    RelativeArcTo {
        horizontal_radius: f32,
        vertical_radius: f32,
        theta: f32,
        large_arc: bool,
        sweep: bool,
        dx: f32,
        dy: f32,
    },
    /// Close the current subpath.
    Close,
}

impl PathNode {
    /// The SVG path-data command letter for this node.
    pub fn command(&self) -> char {
        match self {
            Self::MoveTo { .. } => 'M',
            Self::RelativeMoveTo { .. } => 'm',
            Self::LineTo { .. } => 'L',
            Self::RelativeLineTo { .. } => 'l',
            Self::HorizontalTo { .. } => 'H',
            Self::RelativeHorizontalTo { .. } => 'h',
            Self::VerticalTo { .. } => 'V',
            Self::RelativeVerticalTo { .. } => 'v',
            Self::CurveTo { .. } => 'C',
            Self::RelativeCurveTo { .. } => 'c',
            Self::ReflectiveCurveTo { .. } => 'S',
            Self::RelativeReflectiveCurveTo { .. } => 's',
            Self::QuadTo { .. } => 'Q',
            Self::RelativeQuadTo { .. } => 'q',
            Self::ReflectiveQuadTo { .. } => 'T',
            Self::RelativeReflectiveQuadTo { .. } => 't',
            Self::ArcTo { .. } => 'A',
            Self::RelativeArcTo { .. } => 'a',
            Self::Close => 'Z',
        }
    }

    /// Whether the node's coordinates are relative to the current point.
    pub fn is_relative(&self) -> bool {
        self.command().is_ascii_lowercase()
    }

    /// Whether this node starts a new subpath.
    pub fn is_move(&self) -> bool {
        matches!(self, Self::MoveTo { .. } | Self::RelativeMoveTo { .. })
    }

    /// The numeric arguments in path-data order. Arc flags are 0.0 or 1.0.
    pub fn args(&self) -> Vec<f32> {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        match *self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::ReflectiveQuadTo { x, y } => {
                vec![x, y]
            }
            Self::RelativeMoveTo { dx, dy }
            | Self::RelativeLineTo { dx, dy }
            | Self::RelativeReflectiveQuadTo { dx, dy } => vec![dx, dy],
            Self::HorizontalTo { x } => vec![x],
            Self::RelativeHorizontalTo { dx } => vec![dx],
            Self::VerticalTo { y } => vec![y],
            Self::RelativeVerticalTo { dy } => vec![dy],
            Self::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => vec![x1, y1, x2, y2, x3, y3],
            Self::RelativeCurveTo {
                dx1,
                dy1,
                dx2,
                dy2,
                dx3,
                dy3,
            } => vec![dx1, dy1, dx2, dy2, dx3, dy3],
            Self::ReflectiveCurveTo { x1, y1, x2, y2 } | Self::QuadTo { x1, y1, x2, y2 } => {
                vec![x1, y1, x2, y2]
            }
            Self::RelativeReflectiveCurveTo { dx1, dy1, dx2, dy2 }
            | Self::RelativeQuadTo { dx1, dy1, dx2, dy2 } => vec![dx1, dy1, dx2, dy2],
            Self::ArcTo {
                horizontal_radius,
                vertical_radius,
                theta,
                large_arc,
                sweep,
                x,
                y,
            } => vec![
                horizontal_radius,
                vertical_radius,
                theta,
                flag(large_arc),
                flag(sweep),
                x,
                y,
            ],
            Self::RelativeArcTo {
                horizontal_radius,
                vertical_radius,
                theta,
                large_arc,
                sweep,
                dx,
                dy,
            } => vec![
                horizontal_radius,
                vertical_radius,
                theta,
                flag(large_arc),
                flag(sweep),
                dx,
                dy,
            ],
            Self::Close => Vec::new(),
        }
    }

    /// Check that every argument is finite.
    pub fn is_finite(&self) -> bool {
        self.args().iter().all(|v| v.is_finite())
    }
}

/// Fluent builder for a list of [`PathNode`]s.
///
/// ```
/// use vecticon_graphics::{PathBuilder, PathNode};
///
/// let mut builder = PathBuilder::new();
/// builder.move_to(2.0, 2.0).horizontal_line_to(22.0).vertical_line_to(22.0).close();
/// assert_eq!(builder.nodes()[0], PathNode::MoveTo { x: 2.0, y: 2.0 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    nodes: Vec<PathNode>,
}

impl PathBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a raw node.
    pub fn push(&mut self, node: PathNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Start a new subpath.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PathNode::MoveTo { x, y })
    }

    /// Start a new subpath relative to the current point.
    pub fn move_to_relative(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.push(PathNode::RelativeMoveTo { dx, dy })
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PathNode::LineTo { x, y })
    }

    /// Draw a line by an offset.
    pub fn line_to_relative(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.push(PathNode::RelativeLineTo { dx, dy })
    }

    /// Draw a horizontal line to `x`.
    pub fn horizontal_line_to(&mut self, x: f32) -> &mut Self {
        self.push(PathNode::HorizontalTo { x })
    }

    /// Draw a horizontal line by `dx`.
    pub fn horizontal_line_to_relative(&mut self, dx: f32) -> &mut Self {
        self.push(PathNode::RelativeHorizontalTo { dx })
    }

    /// Draw a vertical line to `y`.
    pub fn vertical_line_to(&mut self, y: f32) -> &mut Self {
        self.push(PathNode::VerticalTo { y })
    }

    /// Draw a vertical line by `dy`.
    pub fn vertical_line_to_relative(&mut self, dy: f32) -> &mut Self {
        self.push(PathNode::RelativeVerticalTo { dy })
    }

    /// Draw a cubic bezier curve.
    pub fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> &mut Self {
        self.push(PathNode::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        })
    }

    /// Draw a cubic bezier curve with relative points.
    pub fn curve_to_relative(
        &mut self,
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
        dx3: f32,
        dy3: f32,
    ) -> &mut Self {
        self.push(PathNode::RelativeCurveTo {
            dx1,
            dy1,
            dx2,
            dy2,
            dx3,
            dy3,
        })
    }

    /// Draw a smooth cubic bezier curve.
    pub fn reflective_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        self.push(PathNode::ReflectiveCurveTo { x1, y1, x2, y2 })
    }

    /// Draw a smooth cubic bezier curve with relative points.
    pub fn reflective_curve_to_relative(
        &mut self,
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
    ) -> &mut Self {
        self.push(PathNode::RelativeReflectiveCurveTo { dx1, dy1, dx2, dy2 })
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        self.push(PathNode::QuadTo { x1, y1, x2, y2 })
    }

    /// Draw a quadratic bezier curve with relative points.
    pub fn quad_to_relative(&mut self, dx1: f32, dy1: f32, dx2: f32, dy2: f32) -> &mut Self {
        self.push(PathNode::RelativeQuadTo { dx1, dy1, dx2, dy2 })
    }

    /// Draw a smooth quadratic bezier curve.
    pub fn reflective_quad_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PathNode::ReflectiveQuadTo { x, y })
    }

    /// Draw a smooth quadratic bezier curve by an offset.
    pub fn reflective_quad_to_relative(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.push(PathNode::RelativeReflectiveQuadTo { dx, dy })
    }

    /// Draw an elliptical arc to a point. `theta` is in degrees.
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        horizontal_radius: f32,
        vertical_radius: f32,
        theta: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.push(PathNode::ArcTo {
            horizontal_radius,
            vertical_radius,
            theta,
            large_arc,
            sweep,
            x,
            y,
        })
    }

    /// Draw an elliptical arc by an offset. `theta` is in degrees.
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to_relative(
        &mut self,
        horizontal_radius: f32,
        vertical_radius: f32,
        theta: f32,
        large_arc: bool,
        sweep: bool,
        dx: f32,
        dy: f32,
    ) -> &mut Self {
        self.push(PathNode::RelativeArcTo {
            horizontal_radius,
            vertical_radius,
            theta,
            large_arc,
            sweep,
            dx,
            dy,
        })
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.push(PathNode::Close)
    }

    /// Add a closed circle as two half arcs, clockwise.
    pub fn add_circle(&mut self, cx: f32, cy: f32, radius: f32) -> &mut Self {
        self.add_oval(cx, cy, radius, radius)
    }

    /// Add a closed axis-aligned ellipse as two half arcs, clockwise.
    pub fn add_oval(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) -> &mut Self {
        self.move_to(cx - rx, cy)
            .arc_to(rx, ry, 0.0, false, true, cx + rx, cy)
            .arc_to(rx, ry, 0.0, false, true, cx - rx, cy)
            .close()
    }

    /// Add a closed rectangle from its edges, clockwise.
    pub fn add_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32) -> &mut Self {
        self.move_to(left, top)
            .horizontal_line_to(right)
            .vertical_line_to(bottom)
            .horizontal_line_to(left)
            .close()
    }

    /// Add a closed rectangle with uniformly rounded corners, clockwise.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn add_rounded_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        radius: f32,
    ) -> &mut Self {
        let r = radius
            .min((right - left) / 2.0)
            .min((bottom - top) / 2.0)
            .max(0.0);
        if r == 0.0 {
            return self.add_rect(left, top, right, bottom);
        }
        self.move_to(left + r, top)
            .horizontal_line_to(right - r)
            .arc_to(r, r, 0.0, false, true, right, top + r)
            .vertical_line_to(bottom - r)
            .arc_to(r, r, 0.0, false, true, right - r, bottom)
            .horizontal_line_to(left + r)
            .arc_to(r, r, 0.0, false, true, left, bottom - r)
            .vertical_line_to(top + r)
            .arc_to(r, r, 0.0, false, true, left + r, top)
            .close()
    }

    /// Add a closed polygon through the given points.
    pub fn add_polygon(&mut self, points: &[Point]) -> &mut Self {
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.move_to(first.x, first.y);
            for p in iter {
                self.line_to(p.x, p.y);
            }
            self.close();
        }
        self
    }

    /// Get the nodes built so far.
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Check if no nodes were added.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the builder and return its nodes.
    pub fn into_nodes(self) -> Vec<PathNode> {
        self.nodes
    }
}
