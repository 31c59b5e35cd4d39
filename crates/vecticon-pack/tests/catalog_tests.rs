//! Behavior of the built-in catalog: the documented icons, accessor identity
//! and the structural checks every built-in must pass.

use vecticon_graphics::{
    parse_path_data, to_path_data, validate, Brush, Color, FillRule, PathNode, ValidationOptions,
};
use vecticon_pack::{all, icon, icons, IconId};

#[test]
fn test_copy_icon() {
    let copy = icons::copy();
    assert_eq!(copy.name(), "Copy");
    assert_eq!(copy.viewport_width(), 16.0);
    assert_eq!(copy.viewport_height(), 16.0);
    assert_eq!(copy.path_count(), 1);

    let path = copy.paths().next().unwrap();
    assert_eq!(path.fill_rule(), FillRule::EvenOdd);
    assert_eq!(path.fill(), Some(&Brush::Solid(Color::from_argb32(0xFFFFFFFF))));
    assert_eq!(path.nodes()[0], PathNode::MoveTo { x: 11.0, y: 4.0 });
}

#[test]
fn test_report_icon() {
    let report = icons::report();
    assert_eq!(report.viewport_width(), 20.0);
    assert_eq!(report.viewport_height(), 20.0);
    assert_eq!(report.path_count(), 3);

    for path in report.paths() {
        assert_eq!(path.fill().and_then(Brush::as_solid), Some(Color::from_argb32(0xFFFA3C3C)));
    }

    let ring = report.paths().nth(2).unwrap();
    assert_eq!(ring.fill_rule(), FillRule::EvenOdd);

    // Two closed circles sharing the viewport center
    let starts: Vec<&PathNode> = ring.nodes().iter().filter(|n| n.is_move()).collect();
    assert_eq!(
        starts,
        [&PathNode::MoveTo { x: 1.0, y: 10.0 }, &PathNode::MoveTo { x: 2.5, y: 10.0 }]
    );
    let radii: Vec<f32> = ring
        .nodes()
        .iter()
        .filter_map(|n| match n {
            PathNode::ArcTo {
                horizontal_radius,
                vertical_radius,
                ..
            } => {
                assert_eq!(horizontal_radius, vertical_radius);
                Some(*horizontal_radius)
            }
            _ => None,
        })
        .collect();
    assert_eq!(radii, [9.0, 9.0, 7.5, 7.5]);
    assert_eq!(ring.nodes().iter().filter(|n| **n == PathNode::Close).count(), 2);

    let bounds = ring.bounds().unwrap();
    assert!((bounds.center().x - 10.0).abs() < 0.01);
    assert!((bounds.center().y - 10.0).abs() < 0.01);
}

#[test]
fn test_add_account_returns_same_reference() {
    let first = icons::add_account();
    for _ in 1..1000 {
        assert!(std::ptr::eq(first, icons::add_account()));
    }
}

#[test]
fn test_accessors_are_idempotent() {
    for &id in IconId::ALL {
        let a = icon(id);
        let b = icon(id);
        assert!(std::ptr::eq(a, b), "{id} returned two instances");
        assert_eq!(a, b);
    }
}

#[test]
fn test_all_visits_every_icon_in_order() {
    let ids: Vec<IconId> = all().map(|(id, _)| id).collect();
    assert_eq!(ids, IconId::ALL);
    assert_eq!(ids.len(), IconId::COUNT);
}

#[test]
fn test_builtins_are_clean() {
    let options = ValidationOptions::default();
    for (id, icon) in all() {
        let report = validate(icon, &options);
        assert!(report.is_clean(), "{id}: {:?}", report.issues);
    }
}

#[test]
fn test_builtin_path_data_round_trips() {
    for (id, icon) in all() {
        for path in icon.paths() {
            let data = to_path_data(path.nodes());
            let parsed = parse_path_data(&data).unwrap();
            assert_eq!(parsed, path.nodes(), "{id}: {data}");
        }
    }
}

#[test]
fn test_builtin_colors_decompose() {
    for (_, icon) in all() {
        for path in icon.paths() {
            for color in path.colors() {
                let rebuilt =
                    Color::from_argb(color.alpha(), color.red(), color.green(), color.blue());
                assert_eq!(rebuilt, color);
            }
        }
    }
}

#[test]
fn test_directional_icons_mirror() {
    assert!(icons::arrow_back().auto_mirror());
    assert!(icons::arrow_forward().auto_mirror());
    assert!(!icons::copy().auto_mirror());
}
