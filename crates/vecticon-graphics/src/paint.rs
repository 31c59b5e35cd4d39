//! Brushes and stroke styles for filling and outlining paths.

use crate::error::{GraphicsError, GraphicsResult};
use crate::types::{Color, Point};

/// How a path's fill is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// Solid color fill.
    Solid(Color),
    /// Linear gradient fill.
    LinearGradient(LinearGradient),
    /// Radial gradient fill.
    RadialGradient(RadialGradient),
}

impl Brush {
    /// Create a solid color brush.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Create a linear gradient brush.
    #[inline]
    pub fn linear_gradient(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient(LinearGradient { start, end, stops })
    }

    /// Create a radial gradient brush.
    #[inline]
    pub fn radial_gradient(center: Point, radius: f32, stops: Vec<GradientStop>) -> Self {
        Self::RadialGradient(RadialGradient {
            center,
            radius,
            stops,
        })
    }

    /// Check if this is a solid color brush.
    #[inline]
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// Get the solid color, if this is a solid brush.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(c) => Some(*c),
            _ => None,
        }
    }

    /// Every color literal the brush references.
    pub fn colors(&self) -> Vec<Color> {
        match self {
            Self::Solid(c) => vec![*c],
            Self::LinearGradient(g) => g.stops.iter().map(|s| s.color).collect(),
            Self::RadialGradient(g) => g.stops.iter().map(|s| s.color).collect(),
        }
    }

    /// Check that the brush can be drawn.
    ///
    /// Gradients need at least two stops with offsets in `0.0..=1.0` in
    /// non-decreasing order; radial gradients need a positive radius.
    pub fn check(&self) -> GraphicsResult<()> {
        match self {
            Self::Solid(_) => Ok(()),
            Self::LinearGradient(g) => {
                if !g.start.is_finite() || !g.end.is_finite() {
                    return Err(GraphicsError::InvalidGradient(
                        "non-finite gradient endpoint".into(),
                    ));
                }
                check_stops(&g.stops)
            }
            Self::RadialGradient(g) => {
                if !g.center.is_finite() || !(g.radius.is_finite() && g.radius > 0.0) {
                    return Err(GraphicsError::InvalidGradient(format!(
                        "radial gradient needs a finite center and positive radius, got {}",
                        g.radius
                    )));
                }
                check_stops(&g.stops)
            }
        }
    }
}

fn check_stops(stops: &[GradientStop]) -> GraphicsResult<()> {
    if stops.len() < 2 {
        return Err(GraphicsError::InvalidGradient(format!(
            "expected at least 2 stops, got {}",
            stops.len()
        )));
    }
    let mut previous = 0.0f32;
    for stop in stops {
        if !(0.0..=1.0).contains(&stop.offset) {
            return Err(GraphicsError::InvalidGradient(format!(
                "stop offset {} outside 0..=1",
                stop.offset
            )));
        }
        if stop.offset < previous {
            return Err(GraphicsError::InvalidGradient(format!(
                "stop offset {} follows {}",
                stop.offset, previous
            )));
        }
        previous = stop.offset;
    }
    Ok(())
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

/// A linear gradient definition, in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Start point of the gradient.
    pub start: Point,
    /// End point of the gradient.
    pub end: Point,
    /// Color stops.
    pub stops: Vec<GradientStop>,
}

/// A radial gradient definition, in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// Center point of the gradient.
    pub center: Point,
    /// Radius of the gradient.
    pub radius: f32,
    /// Color stops.
    pub stops: Vec<GradientStop>,
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0).
    pub offset: f32,
    /// Color at this stop.
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop.
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stroke style options.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke brush (color or gradient).
    pub brush: Brush,
    /// Stroke width in viewport units.
    pub width: f32,
    /// Line cap style.
    pub cap: LineCap,
    /// Line join style.
    pub join: LineJoin,
    /// Miter limit for miter joins.
    pub miter_limit: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            brush: Brush::Solid(Color::BLACK),
            width: 0.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 4.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given brush and width.
    #[inline]
    pub fn new(brush: impl Into<Brush>, width: f32) -> Self {
        Self {
            brush: brush.into(),
            width,
            ..Default::default()
        }
    }

    /// Set the line cap style.
    #[inline]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the line join style.
    #[inline]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Set the miter limit.
    #[inline]
    pub fn with_miter_limit(mut self, limit: f32) -> Self {
        self.miter_limit = limit;
        self
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat cap at the exact endpoint.
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint.
    Round,
    /// Square cap extending past the endpoint.
    Square,
}

impl LineCap {
    /// The SVG `stroke-linecap` keyword.
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner (may be limited by miter limit).
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Beveled corner.
    Bevel,
}

impl LineJoin {
    /// The SVG `stroke-linejoin` keyword.
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Rule deciding which regions enclosed by a path's subpaths are inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Non-zero winding.
    #[default]
    NonZero,
    /// Even-odd parity.
    EvenOdd,
}

impl FillRule {
    /// The SVG `fill-rule` keyword.
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_brush() {
        let b = Brush::solid(Color::RED);
        assert!(b.is_solid());
        assert_eq!(b.as_solid(), Some(Color::RED));
        assert_eq!(b.colors(), vec![Color::RED]);
        assert!(b.check().is_ok());
    }

    #[test]
    fn test_gradient_stops() {
        let stops = vec![
            GradientStop::new(0.0, Color::RED),
            GradientStop::new(0.5, Color::GREEN),
            GradientStop::new(1.0, Color::BLUE),
        ];

        let gradient = Brush::linear_gradient(Point::new(0.0, 0.0), Point::new(24.0, 0.0), stops);

        assert!(!gradient.is_solid());
        assert_eq!(gradient.colors().len(), 3);
        assert!(gradient.check().is_ok());
    }

    #[test]
    fn test_gradient_rejects_single_stop() {
        let gradient = Brush::linear_gradient(
            Point::ZERO,
            Point::new(1.0, 1.0),
            vec![GradientStop::new(0.0, Color::RED)],
        );
        assert!(matches!(gradient.check(), Err(GraphicsError::InvalidGradient(_))));
    }

    #[test]
    fn test_gradient_rejects_unordered_stops() {
        let gradient = Brush::radial_gradient(
            Point::new(12.0, 12.0),
            10.0,
            vec![
                GradientStop::new(0.8, Color::RED),
                GradientStop::new(0.2, Color::BLUE),
            ],
        );
        assert!(gradient.check().is_err());

        let zero_radius = Brush::radial_gradient(
            Point::new(12.0, 12.0),
            0.0,
            vec![
                GradientStop::new(0.0, Color::RED),
                GradientStop::new(1.0, Color::BLUE),
            ],
        );
        assert!(zero_radius.check().is_err());
    }

    #[test]
    fn test_stroke_builder() {
        let stroke = Stroke::new(Color::BLUE, 2.0)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Bevel);

        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.join, LineJoin::Bevel);
        assert_eq!(stroke.miter_limit, 4.0);
    }

    #[test]
    fn test_svg_keywords() {
        assert_eq!(FillRule::EvenOdd.as_svg(), "evenodd");
        assert_eq!(LineCap::Square.as_svg(), "square");
        assert_eq!(LineJoin::Round.as_svg(), "round");
    }
}
