use vecticon_graphics::{PathStyle, VectorIcon};

use super::{ACCENT, CAUTION, DANGER, SUCCESS};

pub(super) fn cancel() -> VectorIcon {
    VectorIcon::builder("Cancel", 20.0, 20.0, 20.0, 20.0)
        .path(PathStyle::fill(DANGER).even_odd(), |p| {
            p.add_circle(10.0, 10.0, 9.0)
                .move_to(6.4, 7.5)
                .line_to(7.5, 6.4)
                .line_to(10.0, 8.9)
                .line_to(12.5, 6.4)
                .line_to(13.6, 7.5)
                .line_to(11.1, 10.0)
                .line_to(13.6, 12.5)
                .line_to(12.5, 13.6)
                .line_to(10.0, 11.1)
                .line_to(7.5, 13.6)
                .line_to(6.4, 12.5)
                .line_to(8.9, 10.0)
                .close();
        })
        .build()
}

pub(super) fn check_circle() -> VectorIcon {
    VectorIcon::builder("CheckCircle", 20.0, 20.0, 20.0, 20.0)
        .path(PathStyle::fill(SUCCESS).even_odd(), |p| {
            p.add_circle(10.0, 10.0, 9.0)
                .move_to(8.5, 13.6)
                .line_to(5.0, 10.1)
                .line_to(6.1, 9.0)
                .line_to(8.5, 11.4)
                .line_to(13.9, 6.0)
                .line_to(15.0, 7.1)
                .close();
        })
        .build()
}

pub(super) fn info() -> VectorIcon {
    VectorIcon::builder("Info", 20.0, 20.0, 20.0, 20.0)
        .path(PathStyle::fill(ACCENT).with_name("dot"), |p| {
            p.add_circle(10.0, 6.0, 1.25);
        })
        .path(PathStyle::fill(ACCENT).with_name("stem"), |p| {
            p.add_rounded_rect(9.0, 8.5, 11.0, 15.5, 1.0);
        })
        .path(PathStyle::fill(ACCENT).even_odd().with_name("ring"), |p| {
            p.add_circle(10.0, 10.0, 9.0).add_circle(10.0, 10.0, 7.5);
        })
        .build()
}

/// An exclamation mark inside a ring: the bar, the dot, then two concentric
/// circles filled even-odd.
pub(super) fn report() -> VectorIcon {
    VectorIcon::builder("Report", 20.0, 20.0, 20.0, 20.0)
        .path(PathStyle::fill(DANGER), |p| {
            p.add_rounded_rect(9.0, 4.5, 11.0, 11.5, 1.0);
        })
        .path(PathStyle::fill(DANGER), |p| {
            p.add_circle(10.0, 14.0, 1.25);
        })
        .path(PathStyle::fill(DANGER).even_odd(), |p| {
            p.add_circle(10.0, 10.0, 9.0).add_circle(10.0, 10.0, 7.5);
        })
        .build()
}

pub(super) fn warning() -> VectorIcon {
    VectorIcon::builder("Warning", 20.0, 20.0, 20.0, 20.0)
        .path(PathStyle::fill(CAUTION).even_odd().with_name("frame"), |p| {
            p.move_to(10.0, 1.5)
                .line_to(19.0, 17.5)
                .horizontal_line_to(1.0)
                .close()
                .move_to(10.0, 4.6)
                .line_to(16.4, 16.0)
                .horizontal_line_to(3.6)
                .close();
        })
        .path(PathStyle::fill(CAUTION).with_name("mark"), |p| {
            p.add_rounded_rect(9.25, 7.5, 10.75, 12.0, 0.75)
                .add_circle(10.0, 14.0, 0.9);
        })
        .build()
}
