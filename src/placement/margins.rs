use crate::geometry::{Point, Rect, Side};

use super::types::{BoxMargins, Margin};

/// Box inspector: derive the four container-relative side margins from two
/// viewport-space bounding-box snapshots. Pure function; the caller is
/// responsible for treating a missing reference element as "no placement".
pub fn box_margins(reference: Rect, container: Rect) -> BoxMargins {
    let vw = container.width;
    let vh = container.height;
    let width = reference.width;
    let height = reference.height;

    let top = reference.top() - container.top();
    let left = reference.left() - container.left();
    let right = reference.right() - container.left();
    let bottom = reference.bottom() - container.top();

    let mid_x = left + width / 2.0;
    let mid_y = top + height / 2.0;

    // Reference-box corners, container-relative.
    let tl = Point::new(left, top);
    let tr = Point::new(right, top);
    let br = Point::new(right, bottom);
    let bl = Point::new(left, bottom);

    BoxMargins {
        width,
        height,
        top: Margin {
            side: Side::Top,
            available: top,
            start: tl,
            mid: Point::new(mid_x, top),
            end: tr,
        },
        bottom: Margin {
            side: Side::Bottom,
            available: vh - bottom,
            start: bl,
            mid: Point::new(mid_x, bottom),
            end: br,
        },
        left: Margin {
            side: Side::Left,
            available: left,
            start: tl,
            mid: Point::new(left, mid_y),
            end: bl,
        },
        right: Margin {
            side: Side::Right,
            available: vw - right,
            start: tr,
            mid: Point::new(right, mid_y),
            end: br,
        },
    }
}
