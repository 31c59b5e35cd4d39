//! SVG path-data parsing.
//!
//! Accepts the full path-data grammar: every command letter in both cases,
//! implicit command repetition, the implicit line-to after a move-to,
//! compact numbers (`1.5.5`, `-1-2`, `1e-3`) and arc flags written without
//! separators (`a1 1 0 01 2 2`).

use crate::error::{GraphicsError, GraphicsResult};
use crate::path::PathNode;

/// Parse an SVG path-data string into nodes.
///
/// Errors carry the byte offset where parsing failed.
///
/// ```
/// use vecticon_graphics::{parse_path_data, PathNode};
///
/// let nodes = parse_path_data("M11,4V2.5h-1z").unwrap();
/// assert_eq!(nodes[0], PathNode::MoveTo { x: 11.0, y: 4.0 });
/// assert_eq!(nodes.len(), 4);
/// ```
pub fn parse_path_data(data: &str) -> GraphicsResult<Vec<PathNode>> {
    let nodes = PathDataParser::new(data).parse()?;
    tracing::trace!(target: "vecticon_graphics::parser", node_count = nodes.len(), "parsed path data");
    Ok(nodes)
}

struct PathDataParser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> PathDataParser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn parse(mut self) -> GraphicsResult<Vec<PathNode>> {
        let mut nodes = Vec::new();
        let mut current: Option<u8> = None;

        loop {
            self.skip_separators();
            let Some(&b) = self.bytes.get(self.pos) else {
                break;
            };

            let command = if b.is_ascii_alphabetic() {
                self.pos += 1;
                if !is_command(b) {
                    return Err(GraphicsError::path_syntax(
                        self.pos - 1,
                        format!("unknown command '{}'", b as char),
                    ));
                }
                b
            } else {
                match current {
                    None => {
                        return Err(GraphicsError::path_syntax(
                            self.pos,
                            "path data must start with a command",
                        ));
                    }
                    Some(b'Z' | b'z') => {
                        return Err(GraphicsError::path_syntax(
                            self.pos,
                            "unexpected number after close",
                        ));
                    }
                    Some(c) => c,
                }
            };

            nodes.push(self.parse_segment(command)?);
            current = Some(match command {
                b'M' => b'L',
                b'm' => b'l',
                other => other,
            });
        }

        Ok(nodes)
    }

    fn parse_segment(&mut self, command: u8) -> GraphicsResult<PathNode> {
        let node = match command {
            b'Z' | b'z' => PathNode::Close,
            b'M' => {
                let (x, y) = self.pair()?;
                PathNode::MoveTo { x, y }
            }
            b'm' => {
                let (dx, dy) = self.pair()?;
                PathNode::RelativeMoveTo { dx, dy }
            }
            b'L' => {
                let (x, y) = self.pair()?;
                PathNode::LineTo { x, y }
            }
            b'l' => {
                let (dx, dy) = self.pair()?;
                PathNode::RelativeLineTo { dx, dy }
            }
            b'H' => PathNode::HorizontalTo { x: self.number()? },
            b'h' => PathNode::RelativeHorizontalTo { dx: self.number()? },
            b'V' => PathNode::VerticalTo { y: self.number()? },
            b'v' => PathNode::RelativeVerticalTo { dy: self.number()? },
            b'C' => {
                let (x1, y1) = self.pair()?;
                let (x2, y2) = self.pair()?;
                let (x3, y3) = self.pair()?;
                PathNode::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x3,
                    y3,
                }
            }
            b'c' => {
                let (dx1, dy1) = self.pair()?;
                let (dx2, dy2) = self.pair()?;
                let (dx3, dy3) = self.pair()?;
                PathNode::RelativeCurveTo {
                    dx1,
                    dy1,
                    dx2,
                    dy2,
                    dx3,
                    dy3,
                }
            }
            b'S' => {
                let (x1, y1) = self.pair()?;
                let (x2, y2) = self.pair()?;
                PathNode::ReflectiveCurveTo { x1, y1, x2, y2 }
            }
            b's' => {
                let (dx1, dy1) = self.pair()?;
                let (dx2, dy2) = self.pair()?;
                PathNode::RelativeReflectiveCurveTo { dx1, dy1, dx2, dy2 }
            }
            b'Q' => {
                let (x1, y1) = self.pair()?;
                let (x2, y2) = self.pair()?;
                PathNode::QuadTo { x1, y1, x2, y2 }
            }
            b'q' => {
                let (dx1, dy1) = self.pair()?;
                let (dx2, dy2) = self.pair()?;
                PathNode::RelativeQuadTo { dx1, dy1, dx2, dy2 }
            }
            b'T' => {
                let (x, y) = self.pair()?;
                PathNode::ReflectiveQuadTo { x, y }
            }
            b't' => {
                let (dx, dy) = self.pair()?;
                PathNode::RelativeReflectiveQuadTo { dx, dy }
            }
            b'A' => {
                let (horizontal_radius, vertical_radius) = self.pair()?;
                let theta = self.number()?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                let (x, y) = self.pair()?;
                PathNode::ArcTo {
                    horizontal_radius,
                    vertical_radius,
                    theta,
                    large_arc,
                    sweep,
                    x,
                    y,
                }
            }
            b'a' => {
                let (horizontal_radius, vertical_radius) = self.pair()?;
                let theta = self.number()?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                let (dx, dy) = self.pair()?;
                PathNode::RelativeArcTo {
                    horizontal_radius,
                    vertical_radius,
                    theta,
                    large_arc,
                    sweep,
                    dx,
                    dy,
                }
            }
            other => {
                return Err(GraphicsError::path_syntax(
                    self.pos,
                    format!("unknown command '{}'", other as char),
                ));
            }
        };
        Ok(node)
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn pair(&mut self) -> GraphicsResult<(f32, f32)> {
        let a = self.number()?;
        let b = self.number()?;
        Ok((a, b))
    }

    fn flag(&mut self) -> GraphicsResult<bool> {
        self.skip_separators();
        match self.bytes.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            _ => Err(GraphicsError::path_syntax(self.pos, "expected arc flag 0 or 1")),
        }
    }

    fn number(&mut self) -> GraphicsResult<f32> {
        self.skip_separators();
        let start = self.pos;

        if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.bytes.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            frac_digits = self.digits();
        }

        if int_digits == 0 && frac_digits == 0 {
            self.pos = start;
            return Err(GraphicsError::path_syntax(start, "expected a number"));
        }

        // An exponent only counts when digits follow it.
        if matches!(self.bytes.get(self.pos), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                self.pos = mark;
            }
        }

        let value = self.src[start..self.pos]
            .parse::<f32>()
            .map_err(|e| GraphicsError::path_syntax(start, e.to_string()))?;
        if !value.is_finite() {
            return Err(GraphicsError::path_syntax(start, "number out of range"));
        }
        Ok(value)
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        self.pos - start
    }
}

fn is_command(b: u8) -> bool {
    matches!(
        b.to_ascii_uppercase(),
        b'M' | b'L' | b'H' | b'V' | b'C' | b'S' | b'Q' | b'T' | b'A' | b'Z'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_square() {
        let nodes = parse_path_data("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
        assert_eq!(
            nodes,
            vec![
                PathNode::MoveTo { x: 0.0, y: 0.0 },
                PathNode::LineTo { x: 10.0, y: 0.0 },
                PathNode::LineTo { x: 10.0, y: 10.0 },
                PathNode::LineTo { x: 0.0, y: 10.0 },
                PathNode::Close,
            ]
        );
    }

    #[test]
    fn test_implicit_line_after_move() {
        let nodes = parse_path_data("m1 2 3 4 5 6").unwrap();
        assert_eq!(
            nodes,
            vec![
                PathNode::RelativeMoveTo { dx: 1.0, dy: 2.0 },
                PathNode::RelativeLineTo { dx: 3.0, dy: 4.0 },
                PathNode::RelativeLineTo { dx: 5.0, dy: 6.0 },
            ]
        );
    }

    #[test]
    fn test_implicit_repetition() {
        let nodes = parse_path_data("M0 0H1 2 3").unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[3], PathNode::HorizontalTo { x: 3.0 });
    }

    #[test]
    fn test_compact_numbers() {
        let nodes = parse_path_data("M1.5.5l-1-2").unwrap();
        assert_eq!(nodes[0], PathNode::MoveTo { x: 1.5, y: 0.5 });
        assert_eq!(nodes[1], PathNode::RelativeLineTo { dx: -1.0, dy: -2.0 });

        let nodes = parse_path_data("M1e1,2E-1").unwrap();
        assert_eq!(nodes[0], PathNode::MoveTo { x: 10.0, y: 0.2 });
    }

    #[test]
    fn test_compact_arc_flags() {
        let nodes = parse_path_data("M0 0a5 5 0 015 5").unwrap();
        assert_eq!(
            nodes[1],
            PathNode::RelativeArcTo {
                horizontal_radius: 5.0,
                vertical_radius: 5.0,
                theta: 0.0,
                large_arc: false,
                sweep: true,
                dx: 5.0,
                dy: 5.0,
            }
        );
    }

    #[test]
    fn test_all_curve_commands() {
        let nodes = parse_path_data("M0 0C1 1 2 2 3 3S4 4 5 5Q6 6 7 7T8 8c1 1 1 1 1 1s1 1 1 1q1 1 1 1t1 1z")
            .unwrap();
        let letters: String = nodes.iter().map(PathNode::command).collect();
        assert_eq!(letters, "MCSQTcsqtZ");
    }

    #[test]
    fn test_error_on_missing_command() {
        let err = parse_path_data("10 10").unwrap_err();
        assert_eq!(
            err,
            GraphicsError::PathSyntax {
                offset: 0,
                message: "path data must start with a command".into()
            }
        );
    }

    #[test]
    fn test_error_on_unknown_command() {
        let err = parse_path_data("M0 0 X 1 1").unwrap_err();
        assert!(matches!(err, GraphicsError::PathSyntax { offset: 5, .. }));
    }

    #[test]
    fn test_error_on_truncated_segment() {
        let err = parse_path_data("M0 0 L5").unwrap_err();
        assert!(matches!(err, GraphicsError::PathSyntax { offset: 7, .. }));
    }

    #[test]
    fn test_error_on_bad_flag() {
        let err = parse_path_data("M0 0 A1 1 0 2 0 3 3").unwrap_err();
        assert!(matches!(err, GraphicsError::PathSyntax { offset: 12, .. }));
    }

    #[test]
    fn test_error_on_overflowing_number() {
        let err = parse_path_data("M1e39 0L1 1Z").unwrap_err();
        assert_eq!(err, GraphicsError::path_syntax(1, "number out of range"));

        let err = parse_path_data("M0 0L1 -4e38").unwrap_err();
        assert!(matches!(err, GraphicsError::PathSyntax { offset: 7, .. }));
    }

    #[test]
    fn test_error_on_number_after_close() {
        assert!(parse_path_data("M0 0 L1 1 Z 5").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_path_data("  ").unwrap(), Vec::new());
    }
}
