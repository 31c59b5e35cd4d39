use vecticon_graphics::{
    Brush, Color, GradientStop, GroupStyle, LineCap, PathBuilder, PathStyle, Point, Stroke,
    VectorIcon,
};

use super::{CAUTION, DANGER, FOREGROUND};

pub(super) fn badge() -> VectorIcon {
    let gradient = Brush::linear_gradient(
        Point::new(2.0, 2.0),
        Point::new(22.0, 22.0),
        vec![GradientStop::new(0.0, CAUTION), GradientStop::new(1.0, DANGER)],
    );

    VectorIcon::builder("Badge", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(gradient).even_odd(), |p| {
            p.add_circle(12.0, 12.0, 10.0)
                .move_to(12.0, 15.67)
                .line_to(15.4, 17.73)
                .line_to(14.5, 13.86)
                .line_to(17.5, 11.26)
                .line_to(13.55, 10.92)
                .line_to(12.0, 7.27)
                .line_to(10.45, 10.92)
                .line_to(6.5, 11.26)
                .line_to(9.5, 13.86)
                .line_to(8.6, 17.73)
                .close();
        })
        .build()
}

pub(super) fn bookmark() -> VectorIcon {
    VectorIcon::builder("Bookmark", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.move_to(17.0, 3.0)
                .horizontal_line_to(7.0)
                .curve_to(5.9, 3.0, 5.0, 3.9, 5.0, 5.0)
                .vertical_line_to(21.0)
                .line_to(12.0, 18.0)
                .line_to(19.0, 21.0)
                .vertical_line_to(5.0)
                .curve_to(19.0, 3.9, 18.1, 3.0, 17.0, 3.0)
                .close();
        })
        .build()
}

pub(super) fn calendar() -> VectorIcon {
    VectorIcon::builder("Calendar", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND).even_odd(), |p| {
            p.add_rounded_rect(3.0, 4.0, 21.0, 21.0, 2.0)
                .add_rect(5.0, 9.0, 19.0, 19.0)
                .add_rect(7.0, 11.0, 11.0, 15.0)
                .add_rect(7.0, 2.0, 9.0, 4.0)
                .add_rect(15.0, 2.0, 17.0, 4.0);
        })
        .build()
}

/// A ring with its right half filled, using a clipped group.
pub(super) fn contrast() -> VectorIcon {
    let mut half = PathBuilder::new();
    half.add_rect(12.0, 0.0, 24.0, 24.0);

    VectorIcon::builder("Contrast", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::stroke(Stroke::new(FOREGROUND, 2.0)).with_name("ring"), |p| {
            p.add_circle(12.0, 12.0, 9.0);
        })
        .group(
            GroupStyle::new().with_name("half").with_clip(half.into_nodes()),
            |b| {
                b.path(PathStyle::fill(FOREGROUND), |p| {
                    p.add_circle(12.0, 12.0, 9.0);
                })
            },
        )
        .build()
}

pub(super) fn favorite() -> VectorIcon {
    VectorIcon::builder("Favorite", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(DANGER), |p| {
            p.move_to(12.0, 21.35)
                .line_to(10.55, 20.03)
                .curve_to(5.4, 15.36, 2.0, 12.28, 2.0, 8.5)
                .curve_to(2.0, 5.42, 4.42, 3.0, 7.5, 3.0)
                .curve_to(9.24, 3.0, 10.91, 3.81, 12.0, 5.09)
                .curve_to(13.09, 3.81, 14.76, 3.0, 16.5, 3.0)
                .curve_to(19.58, 3.0, 22.0, 5.42, 22.0, 8.5)
                .curve_to(22.0, 12.28, 18.6, 15.36, 13.45, 20.04)
                .close();
        })
        .build()
}

pub(super) fn folder() -> VectorIcon {
    VectorIcon::builder("Folder", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.move_to(10.0, 4.0)
                .horizontal_line_to(4.0)
                .curve_to(2.9, 4.0, 2.0, 4.9, 2.0, 6.0)
                .vertical_line_to(18.0)
                .curve_to(2.0, 19.1, 2.9, 20.0, 4.0, 20.0)
                .horizontal_line_to(20.0)
                .curve_to(21.1, 20.0, 22.0, 19.1, 22.0, 18.0)
                .vertical_line_to(8.0)
                .curve_to(22.0, 6.9, 21.1, 6.0, 20.0, 6.0)
                .horizontal_line_to(12.0)
                .close();
        })
        .build()
}

pub(super) fn lock() -> VectorIcon {
    VectorIcon::builder("Lock", 24.0, 24.0, 24.0, 24.0)
        .path(
            PathStyle::stroke(Stroke::new(FOREGROUND, 2.0).with_cap(LineCap::Round))
                .with_name("shackle"),
            |p| {
                p.move_to(8.0, 10.0)
                    .vertical_line_to(7.0)
                    .arc_to(4.0, 4.0, 0.0, false, true, 16.0, 7.0)
                    .vertical_line_to(10.0);
            },
        )
        .path(PathStyle::fill(FOREGROUND).even_odd().with_name("body"), |p| {
            p.add_rounded_rect(5.0, 10.0, 19.0, 21.0, 2.0)
                .add_circle(12.0, 15.5, 1.5);
        })
        .build()
}

pub(super) fn mail() -> VectorIcon {
    VectorIcon::builder("Mail", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND).even_odd(), |p| {
            p.move_to(20.0, 4.0)
                .horizontal_line_to(4.0)
                .curve_to(2.9, 4.0, 2.01, 4.9, 2.01, 6.0)
                .line_to(2.0, 18.0)
                .curve_to(2.0, 19.1, 2.9, 20.0, 4.0, 20.0)
                .horizontal_line_to(20.0)
                .curve_to(21.1, 20.0, 22.0, 19.1, 22.0, 18.0)
                .vertical_line_to(6.0)
                .curve_to(22.0, 4.9, 21.1, 4.0, 20.0, 4.0)
                .close()
                .move_to(20.0, 8.0)
                .line_to(12.0, 13.0)
                .line_to(4.0, 8.0)
                .vertical_line_to(6.0)
                .line_to(12.0, 11.0)
                .line_to(20.0, 6.0)
                .close();
        })
        .build()
}

pub(super) fn notifications() -> VectorIcon {
    VectorIcon::builder("Notifications", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND).with_name("clapper"), |p| {
            p.move_to(12.0, 22.0)
                .curve_to(13.1, 22.0, 14.0, 21.1, 14.0, 20.0)
                .horizontal_line_to(10.0)
                .curve_to(10.0, 21.1, 10.9, 22.0, 12.0, 22.0)
                .close();
        })
        .path(PathStyle::fill(FOREGROUND).with_name("bell"), |p| {
            p.move_to(18.0, 16.0)
                .vertical_line_to(11.0)
                .curve_to(18.0, 7.93, 16.36, 5.36, 13.5, 4.68)
                .vertical_line_to(4.0)
                .curve_to(13.5, 3.17, 12.83, 2.5, 12.0, 2.5)
                .curve_to(11.17, 2.5, 10.5, 3.17, 10.5, 4.0)
                .vertical_line_to(4.68)
                .curve_to(7.63, 5.36, 6.0, 7.92, 6.0, 11.0)
                .vertical_line_to(16.0)
                .line_to(4.0, 18.0)
                .vertical_line_to(19.0)
                .horizontal_line_to(20.0)
                .vertical_line_to(18.0)
                .close();
        })
        .build()
}

pub(super) fn star() -> VectorIcon {
    VectorIcon::builder("Star", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(CAUTION), |p| {
            p.move_to(12.0, 17.27)
                .line_to(18.18, 21.0)
                .line_to(16.54, 13.97)
                .line_to(22.0, 9.24)
                .line_to(14.81, 8.63)
                .line_to(12.0, 2.0)
                .line_to(9.19, 8.63)
                .line_to(2.0, 9.24)
                .line_to(7.46, 13.97)
                .line_to(5.82, 21.0)
                .close();
        })
        .build()
}

pub(super) fn visibility() -> VectorIcon {
    VectorIcon::builder("Visibility", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND).even_odd(), |p| {
            p.move_to(12.0, 4.5)
                .curve_to(7.0, 4.5, 2.73, 7.61, 1.0, 12.0)
                .curve_to(2.73, 16.39, 7.0, 19.5, 12.0, 19.5)
                .curve_to(17.0, 19.5, 21.27, 16.39, 23.0, 12.0)
                .curve_to(21.27, 7.61, 17.0, 4.5, 12.0, 4.5)
                .close()
                .add_circle(12.0, 12.0, 5.0)
                .add_circle(12.0, 12.0, 3.0);
        })
        // Translucent highlight on the pupil.
        .path(
            PathStyle::fill(Color::from_argb32(0x66000000)).with_fill_alpha(0.8),
            |p| {
                p.add_circle(13.0, 11.0, 1.0);
            },
        )
        .build()
}
