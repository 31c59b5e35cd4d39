//! Path geometry using lyon.
//!
//! Converts [`PathNode`] lists to lyon paths, which resolves relative
//! coordinates, reflective curves and arcs, and computes bounds in viewport
//! space with group transforms applied.

use lyon::algorithms::aabb::bounding_box;
use lyon::math::{point as lyon_point, vector as lyon_vector, Angle, Transform};
use lyon::path::builder::SvgPathBuilder;
use lyon::path::{ArcFlags, Path as LyonPath};

use crate::path::PathNode;
use crate::types::{Point, Rect};
use crate::vector::{VectorGroup, VectorIcon, VectorNode, VectorPath};

/// Convert path nodes to lyon's path format.
///
/// Drawing commands before the first move start at the origin, as SVG does.
/// Nodes must be finite; lyon asserts on NaN and infinite points.
pub fn to_lyon_path(nodes: &[PathNode]) -> LyonPath {
    let mut builder = LyonPath::svg_builder();

    for node in nodes {
        match *node {
            PathNode::MoveTo { x, y } => {
                builder.move_to(lyon_point(x, y));
            }
            PathNode::RelativeMoveTo { dx, dy } => {
                builder.relative_move_to(lyon_vector(dx, dy));
            }
            PathNode::LineTo { x, y } => {
                builder.line_to(lyon_point(x, y));
            }
            PathNode::RelativeLineTo { dx, dy } => {
                builder.relative_line_to(lyon_vector(dx, dy));
            }
            PathNode::HorizontalTo { x } => {
                builder.horizontal_line_to(x);
            }
            PathNode::RelativeHorizontalTo { dx } => {
                builder.relative_horizontal_line_to(dx);
            }
            PathNode::VerticalTo { y } => {
                builder.vertical_line_to(y);
            }
            PathNode::RelativeVerticalTo { dy } => {
                builder.relative_vertical_line_to(dy);
            }
            PathNode::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => {
                builder.cubic_bezier_to(lyon_point(x1, y1), lyon_point(x2, y2), lyon_point(x3, y3));
            }
            PathNode::RelativeCurveTo {
                dx1,
                dy1,
                dx2,
                dy2,
                dx3,
                dy3,
            } => {
                builder.relative_cubic_bezier_to(
                    lyon_vector(dx1, dy1),
                    lyon_vector(dx2, dy2),
                    lyon_vector(dx3, dy3),
                );
            }
            PathNode::ReflectiveCurveTo { x1, y1, x2, y2 } => {
                builder.smooth_cubic_bezier_to(lyon_point(x1, y1), lyon_point(x2, y2));
            }
            PathNode::RelativeReflectiveCurveTo { dx1, dy1, dx2, dy2 } => {
                builder.smooth_relative_cubic_bezier_to(lyon_vector(dx1, dy1), lyon_vector(dx2, dy2));
            }
            PathNode::QuadTo { x1, y1, x2, y2 } => {
                builder.quadratic_bezier_to(lyon_point(x1, y1), lyon_point(x2, y2));
            }
            PathNode::RelativeQuadTo { dx1, dy1, dx2, dy2 } => {
                builder.relative_quadratic_bezier_to(lyon_vector(dx1, dy1), lyon_vector(dx2, dy2));
            }
            PathNode::ReflectiveQuadTo { x, y } => {
                builder.smooth_quadratic_bezier_to(lyon_point(x, y));
            }
            PathNode::RelativeReflectiveQuadTo { dx, dy } => {
                builder.smooth_relative_quadratic_bezier_to(lyon_vector(dx, dy));
            }
            PathNode::ArcTo {
                horizontal_radius,
                vertical_radius,
                theta,
                large_arc,
                sweep,
                x,
                y,
            } => {
                builder.arc_to(
                    lyon_vector(horizontal_radius, vertical_radius),
                    Angle::degrees(theta),
                    ArcFlags { large_arc, sweep },
                    lyon_point(x, y),
                );
            }
            PathNode::RelativeArcTo {
                horizontal_radius,
                vertical_radius,
                theta,
                large_arc,
                sweep,
                dx,
                dy,
            } => {
                builder.relative_arc_to(
                    lyon_vector(horizontal_radius, vertical_radius),
                    Angle::degrees(theta),
                    ArcFlags { large_arc, sweep },
                    lyon_vector(dx, dy),
                );
            }
            PathNode::Close => {
                builder.close();
            }
        }
    }

    builder.build()
}

/// The transform a group applies to its children.
///
/// Scale and rotation happen about the pivot, then the translation applies.
pub fn group_transform(group: &VectorGroup) -> Transform {
    let style = group.style();
    Transform::translation(-style.pivot.x, -style.pivot.y)
        .then_scale(style.scale_x, style.scale_y)
        .then_rotate(Angle::degrees(style.rotation))
        .then_translate(lyon_vector(
            style.translation.x + style.pivot.x,
            style.translation.y + style.pivot.y,
        ))
}

/// Bounds of a node list, or `None` when it draws nothing or holds a
/// non-finite value.
pub fn nodes_bounds(nodes: &[PathNode], transform: &Transform) -> Option<Rect> {
    if !nodes.iter().any(|n| !matches!(n, PathNode::Close)) {
        return None;
    }
    if !nodes.iter().all(PathNode::is_finite) {
        return None;
    }
    let path = to_lyon_path(nodes).transformed(transform);
    if path.iter().next().is_none() {
        return None;
    }
    let aabb = bounding_box(path.iter());
    if !(aabb.min.x.is_finite()
        && aabb.min.y.is_finite()
        && aabb.max.x.is_finite()
        && aabb.max.y.is_finite())
    {
        return None;
    }
    Some(Rect::from_corners(
        Point::new(aabb.min.x, aabb.min.y),
        Point::new(aabb.max.x, aabb.max.y),
    ))
}

impl VectorPath {
    /// Bounds of the path's geometry in its own coordinate space.
    ///
    /// Stroke width is not included.
    pub fn bounds(&self) -> Option<Rect> {
        nodes_bounds(self.nodes(), &Transform::identity())
    }
}

impl VectorIcon {
    /// Bounds of every path in viewport space, with group transforms applied.
    pub fn bounds(&self) -> Option<Rect> {
        group_bounds(self.root(), &Transform::identity())
    }
}

fn group_bounds(group: &VectorGroup, parent: &Transform) -> Option<Rect> {
    if !group.style().is_finite() {
        return None;
    }
    let transform = group_transform(group).then(parent);
    group
        .children()
        .iter()
        .filter_map(|child| match child {
            VectorNode::Path(path) => nodes_bounds(path.nodes(), &transform),
            VectorNode::Group(inner) => group_bounds(inner, &transform),
        })
        .reduce(|a, b| a.union(&b))
}
