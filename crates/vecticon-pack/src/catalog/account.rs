use vecticon_graphics::{LineCap, LineJoin, PathStyle, Stroke, VectorIcon};

use super::FOREGROUND;

pub(super) fn account() -> VectorIcon {
    VectorIcon::builder("Account", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.add_circle(12.0, 8.0, 4.0);
        })
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.move_to(4.0, 20.0)
                .curve_to(4.0, 16.7, 7.6, 14.0, 12.0, 14.0)
                .curve_to(16.4, 14.0, 20.0, 16.7, 20.0, 20.0)
                .vertical_line_to(21.0)
                .horizontal_line_to(4.0)
                .close();
        })
        .build()
}

pub(super) fn add_account() -> VectorIcon {
    VectorIcon::builder("AddAccount", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.add_circle(9.0, 8.0, 4.0);
        })
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.move_to(1.0, 20.0)
                .curve_to(1.0, 16.7, 4.6, 14.0, 9.0, 14.0)
                .curve_to(13.4, 14.0, 17.0, 16.7, 17.0, 20.0)
                .vertical_line_to(21.0)
                .horizontal_line_to(1.0)
                .close();
        })
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.move_to(19.0, 7.0)
                .horizontal_line_to(21.0)
                .vertical_line_to(10.0)
                .horizontal_line_to(24.0)
                .vertical_line_to(12.0)
                .horizontal_line_to(21.0)
                .vertical_line_to(15.0)
                .horizontal_line_to(19.0)
                .vertical_line_to(12.0)
                .horizontal_line_to(16.0)
                .vertical_line_to(10.0)
                .horizontal_line_to(19.0)
                .close();
        })
        .build()
}

pub(super) fn logout() -> VectorIcon {
    let stroke = Stroke::new(FOREGROUND, 2.0)
        .with_cap(LineCap::Round)
        .with_join(LineJoin::Round);

    VectorIcon::builder("Logout", 24.0, 24.0, 24.0, 24.0)
        .auto_mirror(true)
        .path(PathStyle::stroke(stroke.clone()).with_name("door"), |p| {
            p.move_to(10.0, 4.0)
                .horizontal_line_to(5.0)
                .vertical_line_to(20.0)
                .horizontal_line_to(10.0);
        })
        .path(PathStyle::stroke(stroke).with_name("arrow"), |p| {
            p.move_to(15.0, 8.0)
                .line_to(19.0, 12.0)
                .line_to(15.0, 16.0)
                .move_to(19.0, 12.0)
                .horizontal_line_to(9.0);
        })
        .build()
}
