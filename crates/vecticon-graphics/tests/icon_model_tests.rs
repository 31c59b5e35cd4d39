//! Integration tests for the icon model: building, path data, bounds,
//! validation and SVG output working together.

use vecticon_graphics::{
    parse_path_data, to_path_data, to_svg_document, validate, Brush, Color, FillRule,
    GradientStop, GraphicsError, GroupStyle, IssueKind, LineCap, LineJoin, PathNode, PathStyle,
    Point, Rect, Stroke, ValidationOptions, VectorIcon,
};

const RED: Color = Color::from_argb32(0xFFFA3C3C);

fn report_icon() -> VectorIcon {
    VectorIcon::builder("Report", 20.0, 20.0, 20.0, 20.0)
        .path(PathStyle::fill(RED), |p| {
            p.add_rounded_rect(9.0, 4.5, 11.0, 11.5, 1.0);
        })
        .path(PathStyle::fill(RED), |p| {
            p.add_circle(10.0, 14.0, 1.25);
        })
        .path(PathStyle::fill(RED).even_odd(), |p| {
            p.add_circle(10.0, 10.0, 9.0).add_circle(10.0, 10.0, 7.5);
        })
        .build()
}

#[test]
fn test_built_icon_is_valid_and_contained() {
    let icon = report_icon();
    let report = validate(&icon, &ValidationOptions::default());
    assert!(report.is_clean(), "{:?}", report.issues);

    let bounds = icon.bounds().unwrap();
    assert!(Rect::new(0.0, 0.0, 20.0, 20.0).inflate(0.01, 0.01).contains_rect(&bounds));
}

#[test]
fn test_every_path_survives_path_data_round_trip() {
    let icon = report_icon();
    for path in icon.paths() {
        let data = to_path_data(path.nodes());
        assert_eq!(parse_path_data(&data).unwrap(), path.nodes());
    }
}

#[test]
fn test_even_odd_ring_has_two_subpaths() {
    let icon = report_icon();
    let ring = icon.paths().nth(2).unwrap();
    assert_eq!(ring.fill_rule(), FillRule::EvenOdd);
    let moves = ring.nodes().iter().filter(|n| n.is_move()).count();
    assert_eq!(moves, 2);
    assert_eq!(ring.nodes()[0], PathNode::MoveTo { x: 1.0, y: 10.0 });
}

#[test]
fn test_parsed_nodes_drive_builder() {
    let nodes = parse_path_data("M11,4V2.5C11,1.672 10.328,1 9.5,1H2.5Z").unwrap();
    let icon = VectorIcon::builder("Partial", 16.0, 16.0, 16.0, 16.0)
        .path_nodes(PathStyle::fill(Color::WHITE).even_odd(), nodes.clone())
        .build();
    assert_eq!(icon.paths().next().unwrap().nodes(), nodes.as_slice());
}

#[test]
fn test_parse_error_offsets() {
    match parse_path_data("M0 0 L5 5 Q1") {
        Err(GraphicsError::PathSyntax { offset, .. }) => assert_eq!(offset, 12),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_try_build_rejects_bad_input() {
    let bad_size = VectorIcon::builder("Flat", 24.0, 0.0, 24.0, 24.0).try_build();
    assert!(matches!(bad_size, Err(GraphicsError::InvalidDimensions { .. })));

    let bad_gradient = VectorIcon::builder("Fade", 24.0, 24.0, 24.0, 24.0)
        .path(
            PathStyle::fill(Brush::radial_gradient(Point::new(12.0, 12.0), 0.0, Vec::new())),
            |p| {
                p.add_circle(12.0, 12.0, 6.0);
            },
        )
        .try_build();
    assert!(matches!(bad_gradient, Err(GraphicsError::InvalidGradient(_))));
}

#[test]
fn test_svg_document_for_mixed_icon() {
    let icon = VectorIcon::builder("Mixed", 32.0, 32.0, 24.0, 24.0)
        .path(
            PathStyle::fill(Brush::radial_gradient(
                Point::new(12.0, 12.0),
                10.0,
                vec![
                    GradientStop::new(0.0, Color::WHITE),
                    GradientStop::new(1.0, Color::BLUE),
                ],
            )),
            |p| {
                p.add_circle(12.0, 12.0, 10.0);
            },
        )
        .group(GroupStyle::new().with_scale(0.5, 0.5), |b| {
            b.path(
                PathStyle::stroke(
                    Stroke::new(Color::BLACK, 2.0)
                        .with_cap(LineCap::Square)
                        .with_join(LineJoin::Bevel),
                ),
                |p| {
                    p.move_to(4.0, 4.0).line_to(20.0, 20.0);
                },
            )
        })
        .build();

    let svg = to_svg_document(&icon);
    assert!(svg.contains(r#"width="32" height="32" viewBox="0 0 24 24""#));
    assert!(svg.contains("<radialGradient id=\"Mixed-radial1\""));
    assert!(svg.contains(r#"stroke-linecap="square" stroke-linejoin="bevel""#));
    assert!(svg.contains("scale(0.5 0.5)"));
    assert_eq!(svg.matches("<path ").count(), 2);
}

#[test]
fn test_validation_flags_unclosed_manifest_style_path() {
    let icon = VectorIcon::builder("Open", 24.0, 24.0, 24.0, 24.0)
        .path_nodes(PathStyle::fill(Color::BLACK), parse_path_data("M2 2H22V22").unwrap())
        .build();
    let report = validate(&icon, &ValidationOptions::default());
    assert!(report.has(IssueKind::UnclosedFill));
    assert!(!report.is_ok());
}
