use vecticon_graphics::{LineCap, LineJoin, PathStyle, Stroke, VectorIcon};

use super::FOREGROUND;

fn chevron_stroke() -> PathStyle {
    PathStyle::stroke(
        Stroke::new(FOREGROUND, 2.0)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Round),
    )
}

pub(super) fn arrow_back() -> VectorIcon {
    VectorIcon::builder("ArrowBack", 24.0, 24.0, 24.0, 24.0)
        .auto_mirror(true)
        .path(chevron_stroke(), |p| {
            p.move_to(20.0, 12.0)
                .horizontal_line_to(4.0)
                .move_to(10.0, 6.0)
                .line_to(4.0, 12.0)
                .line_to(10.0, 18.0);
        })
        .build()
}

pub(super) fn arrow_forward() -> VectorIcon {
    VectorIcon::builder("ArrowForward", 24.0, 24.0, 24.0, 24.0)
        .auto_mirror(true)
        .path(chevron_stroke(), |p| {
            p.move_to(4.0, 12.0)
                .horizontal_line_to(20.0)
                .move_to(14.0, 6.0)
                .line_to(20.0, 12.0)
                .line_to(14.0, 18.0);
        })
        .build()
}

pub(super) fn chevron_down() -> VectorIcon {
    VectorIcon::builder("ChevronDown", 24.0, 24.0, 24.0, 24.0)
        .path(chevron_stroke(), |p| {
            p.move_to(6.0, 9.0).line_to(12.0, 15.0).line_to(18.0, 9.0);
        })
        .build()
}

pub(super) fn chevron_up() -> VectorIcon {
    VectorIcon::builder("ChevronUp", 24.0, 24.0, 24.0, 24.0)
        .path(chevron_stroke(), |p| {
            p.move_to(6.0, 15.0).line_to(12.0, 9.0).line_to(18.0, 15.0);
        })
        .build()
}

pub(super) fn close() -> VectorIcon {
    VectorIcon::builder("Close", 24.0, 24.0, 24.0, 24.0)
        .path(chevron_stroke(), |p| {
            p.move_to(6.0, 6.0)
                .line_to(18.0, 18.0)
                .move_to(18.0, 6.0)
                .line_to(6.0, 18.0);
        })
        .build()
}

pub(super) fn home() -> VectorIcon {
    VectorIcon::builder("Home", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.move_to(12.0, 3.0)
                .line_to(2.0, 12.0)
                .horizontal_line_to(5.0)
                .vertical_line_to(21.0)
                .horizontal_line_to(10.0)
                .vertical_line_to(15.0)
                .horizontal_line_to(14.0)
                .vertical_line_to(21.0)
                .horizontal_line_to(19.0)
                .vertical_line_to(12.0)
                .horizontal_line_to(22.0)
                .close();
        })
        .build()
}

pub(super) fn menu() -> VectorIcon {
    VectorIcon::builder("Menu", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.add_rounded_rect(3.0, 5.0, 21.0, 7.0, 1.0)
                .add_rounded_rect(3.0, 11.0, 21.0, 13.0, 1.0)
                .add_rounded_rect(3.0, 17.0, 21.0, 19.0, 1.0);
        })
        .build()
}

pub(super) fn more_vertical() -> VectorIcon {
    VectorIcon::builder("MoreVertical", 24.0, 24.0, 24.0, 24.0)
        .path(PathStyle::fill(FOREGROUND), |p| {
            p.add_circle(12.0, 5.0, 2.0)
                .add_circle(12.0, 12.0, 2.0)
                .add_circle(12.0, 19.0, 2.0);
        })
        .build()
}
