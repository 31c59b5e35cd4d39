use vecticon_graphics::{LineCap, LineJoin, PathBuilder, PathStyle, Point, Stroke, VectorIcon};

use super::{DANGER, FOREGROUND};

fn line_stroke(width: f32) -> Stroke {
    Stroke::new(FOREGROUND, width)
        .with_cap(LineCap::Round)
        .with_join(LineJoin::Round)
}

fn polygon(p: &mut PathBuilder, points: &[(f32, f32)]) {
    let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
    p.add_polygon(&points);
}

pub(super) fn add() -> VectorIcon {
    VectorIcon::builder("Add", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.move_to(11.0, 5.0)
                .horizontal_line_to(13.0)
                .vertical_line_to(11.0)
                .horizontal_line_to(19.0)
                .vertical_line_to(13.0)
                .horizontal_line_to(13.0)
                .vertical_line_to(19.0)
                .horizontal_line_to(11.0)
                .vertical_line_to(13.0)
                .horizontal_line_to(5.0)
                .vertical_line_to(11.0)
                .horizontal_line_to(11.0)
                .close();
        })
        .build()
}

/// Two stacked sheets drawn as one even-odd path: the back sheet's visible
/// band, then the front sheet with its interior cut out.
pub(super) fn copy() -> VectorIcon {
    VectorIcon::builder("Copy", 16.0, 16.0, 16.0, 16.0)
        .path(PathStyle::fill(FOREGROUND).even_odd(), |p| {
            p.move_to(11.0, 4.0)
                .vertical_line_to(2.5)
                .curve_to(11.0, 1.672, 10.328, 1.0, 9.5, 1.0)
                .horizontal_line_to(2.5)
                .curve_to(1.672, 1.0, 1.0, 1.672, 1.0, 2.5)
                .vertical_line_to(9.5)
                .curve_to(1.0, 10.328, 1.672, 11.0, 2.5, 11.0)
                .horizontal_line_to(4.0)
                .vertical_line_to(9.5)
                .horizontal_line_to(2.5)
                .vertical_line_to(2.5)
                .horizontal_line_to(9.5)
                .vertical_line_to(4.0)
                .close();
            p.add_rounded_rect(5.0, 5.0, 15.0, 15.0, 1.5);
            p.move_to(6.5, 6.5)
                .vertical_line_to(13.5)
                .horizontal_line_to(13.5)
                .vertical_line_to(6.5)
                .close();
        })
        .build()
}

pub(super) fn delete() -> VectorIcon {
    VectorIcon::builder("Delete", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(DANGER).with_name("handle"), |p| {
            p.add_rect(9.0, 2.0, 15.0, 4.0);
        })
        .path(PathStyle::fill(DANGER).with_name("lid"), |p| {
            p.add_rounded_rect(4.0, 5.0, 20.0, 7.0, 0.5);
        })
        .path(PathStyle::fill(DANGER).with_name("can"), |p| {
            p.move_to(6.0, 8.0)
                .horizontal_line_to(18.0)
                .line_to(17.0, 21.0)
                .horizontal_line_to(7.0)
                .close();
        })
        .build()
}

pub(super) fn download() -> VectorIcon {
    VectorIcon::builder("Download", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::stroke(line_stroke(2.0)), |p| {
            p.move_to(12.0, 3.0)
                .vertical_line_to(15.0)
                .move_to(7.0, 10.0)
                .line_to(12.0, 15.0)
                .line_to(17.0, 10.0);
        })
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.add_rounded_rect(4.0, 19.0, 20.0, 21.0, 1.0);
        })
        .build()
}

pub(super) fn edit() -> VectorIcon {
    VectorIcon::builder("Edit", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND).with_name("body"), |p| {
            p.move_to(3.0, 17.25)
                .vertical_line_to(21.0)
                .horizontal_line_to(6.75)
                .line_to(17.81, 9.94)
                .line_to(14.06, 6.19)
                .close();
        })
        .path(PathStyle::fill(FOREGROUND).with_name("tip"), |p| {
            p.move_to(20.71, 7.04)
                .curve_to(21.1, 6.65, 21.1, 6.02, 20.71, 5.63)
                .line_to(18.37, 3.29)
                .curve_to(17.98, 2.9, 17.35, 2.9, 16.96, 3.29)
                .line_to(15.13, 5.12)
                .line_to(18.88, 8.87)
                .close();
        })
        .build()
}

pub(super) fn remove() -> VectorIcon {
    VectorIcon::builder("Remove", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.add_rect(5.0, 11.0, 19.0, 13.0);
        })
        .build()
}

pub(super) fn search() -> VectorIcon {
    VectorIcon::builder("Search", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::stroke(line_stroke(2.0)), |p| {
            p.add_circle(10.5, 10.5, 6.5)
                .move_to(15.5, 15.5)
                .line_to(21.0, 21.0);
        })
        .build()
}

pub(super) fn settings() -> VectorIcon {
    VectorIcon::builder("Settings", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND).even_odd(), |p| {
            polygon(
                p,
                &[
                    (19.57, 10.11),
                    (21.9, 10.61),
                    (21.9, 13.39),
                    (19.57, 13.89),
                    (18.69, 16.02),
                    (19.99, 18.02),
                    (18.02, 19.99),
                    (16.02, 18.69),
                    (13.89, 19.57),
                    (13.39, 21.9),
                    (10.61, 21.9),
                    (10.11, 19.57),
                    (7.98, 18.69),
                    (5.98, 19.99),
                    (4.01, 18.02),
                    (5.31, 16.02),
                    (4.43, 13.89),
                    (2.1, 13.39),
                    (2.1, 10.61),
                    (4.43, 10.11),
                    (5.31, 7.98),
                    (4.01, 5.98),
                    (5.98, 4.01),
                    (7.98, 5.31),
                    (10.11, 4.43),
                    (10.61, 2.1),
                    (13.39, 2.1),
                    (13.89, 4.43),
                    (16.02, 5.31),
                    (18.02, 4.01),
                    (19.99, 5.98),
                    (18.69, 7.98),
                ],
            );
            p.add_circle(12.0, 12.0, 3.0);
        })
        .build()
}

pub(super) fn share() -> VectorIcon {
    VectorIcon::builder("Share", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::stroke(line_stroke(1.5)).with_name("links"), |p| {
            p.move_to(8.6, 13.5)
                .line_to(15.4, 17.5)
                .move_to(15.4, 6.5)
                .line_to(8.6, 10.5);
        })
        .path(PathStyle::fill(FOREGROUND).with_name("nodes"), |p| {
            p.add_circle(18.0, 5.0, 3.0)
                .add_circle(6.0, 12.0, 3.0)
                .add_circle(18.0, 19.0, 3.0);
        })
        .build()
}

pub(super) fn sync() -> VectorIcon {
    VectorIcon::builder("Sync", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::stroke(line_stroke(2.0)).with_name("arcs"), |p| {
            p.move_to(4.0, 12.0)
                .arc_to(8.0, 8.0, 0.0, false, true, 18.93, 8.0)
                .move_to(20.0, 12.0)
                .arc_to(8.0, 8.0, 0.0, false, true, 5.07, 16.0);
        })
        .path(PathStyle::fill(FOREGROUND).with_name("heads"), |p| {
            p.move_to(21.0, 4.0)
                .vertical_line_to(10.0)
                .horizontal_line_to(15.0)
                .close()
                .move_to(3.0, 20.0)
                .vertical_line_to(14.0)
                .horizontal_line_to(9.0)
                .close();
        })
        .build()
}

pub(super) fn upload() -> VectorIcon {
    VectorIcon::builder("Upload", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::stroke(line_stroke(2.0)), |p| {
            p.move_to(12.0, 15.0)
                .vertical_line_to(3.0)
                .move_to(7.0, 8.0)
                .line_to(12.0, 3.0)
                .line_to(17.0, 8.0);
        })
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.add_rounded_rect(4.0, 19.0, 20.0, 21.0, 1.0);
        })
        .build()
}
