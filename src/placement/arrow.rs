use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::geometry::{Alignment, PlacementTag, Side};

/// One resolved arrow coordinate: a pixel offset or a percentage of the
/// overlay edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowCoord {
    Px(f32),
    Percent(f32),
}

/// Where the pointer arrow anchors on the overlay box, one entry per edge
/// the arrow pins to. Mirrors the CSS inset properties the host applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ArrowPosition {
    pub top: Option<ArrowCoord>,
    pub right: Option<ArrowCoord>,
    pub bottom: Option<ArrowCoord>,
    pub left: Option<ArrowCoord>,
}

/// Anchor shape per edge, before pixel values are filled in.
#[derive(Debug, Clone, Copy)]
enum AnchorKind {
    /// Flush with the edge (`0`).
    Zero,
    /// Past the far edge (`100%`) — the arrow pokes out of the overlay.
    Full,
    /// Centered (`50%`).
    Half,
    /// `arrow_offset` px from the leading edge.
    Start,
    /// `arrow_offset − 2·arrow_size` px from the trailing edge.
    End,
}

#[derive(Debug, Clone, Copy, Default)]
struct AnchorShape {
    top: Option<AnchorKind>,
    right: Option<AnchorKind>,
    bottom: Option<AnchorKind>,
    left: Option<AnchorKind>,
}

fn tag(side: Side, alignment: Alignment) -> PlacementTag {
    PlacementTag::new(side, alignment)
}

static ARROW_ANCHORS: Lazy<BTreeMap<PlacementTag, AnchorShape>> = Lazy::new(|| {
    use Alignment::{End, Mid, Start};
    use AnchorKind as K;
    let mut map = BTreeMap::new();

    // Overlay above the reference: arrow hangs below the overlay.
    map.insert(
        tag(Side::Top, Start),
        AnchorShape {
            top: Some(K::Full),
            left: Some(K::Start),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Top, Mid),
        AnchorShape {
            top: Some(K::Full),
            left: Some(K::Half),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Top, End),
        AnchorShape {
            top: Some(K::Full),
            right: Some(K::End),
            ..AnchorShape::default()
        },
    );

    map.insert(
        tag(Side::Bottom, Start),
        AnchorShape {
            top: Some(K::Zero),
            left: Some(K::Start),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Bottom, Mid),
        AnchorShape {
            top: Some(K::Zero),
            left: Some(K::Half),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Bottom, End),
        AnchorShape {
            top: Some(K::Zero),
            right: Some(K::End),
            ..AnchorShape::default()
        },
    );

    map.insert(
        tag(Side::Left, Start),
        AnchorShape {
            top: Some(K::Start),
            left: Some(K::Full),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Left, Mid),
        AnchorShape {
            top: Some(K::Half),
            left: Some(K::Full),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Left, End),
        AnchorShape {
            bottom: Some(K::End),
            left: Some(K::Full),
            ..AnchorShape::default()
        },
    );

    map.insert(
        tag(Side::Right, Start),
        AnchorShape {
            top: Some(K::Start),
            left: Some(K::Zero),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Right, Mid),
        AnchorShape {
            top: Some(K::Half),
            left: Some(K::Zero),
            ..AnchorShape::default()
        },
    );
    map.insert(
        tag(Side::Right, End),
        AnchorShape {
            bottom: Some(K::End),
            left: Some(K::Zero),
            ..AnchorShape::default()
        },
    );

    map
});

/// Stateless lookup mapping an alignment tag to the arrow's anchor position
/// on the overlay. `arrow_offset` is the value reported by the placement
/// pass (ignored for mid alignments) and `arrow_size` the arrow's
/// half-diagonal in pixels.
pub fn arrow_position(
    placement: PlacementTag,
    arrow_offset: f32,
    arrow_size: f32,
) -> ArrowPosition {
    let Some(shape) = ARROW_ANCHORS.get(&placement) else {
        // The table covers all 12 tags.
        return ArrowPosition::default();
    };

    let fill = |kind: Option<AnchorKind>| {
        kind.map(|kind| match kind {
            AnchorKind::Zero => ArrowCoord::Px(0.0),
            AnchorKind::Full => ArrowCoord::Percent(100.0),
            AnchorKind::Half => ArrowCoord::Percent(50.0),
            AnchorKind::Start => ArrowCoord::Px(arrow_offset),
            AnchorKind::End => ArrowCoord::Px(arrow_offset - arrow_size * 2.0),
        })
    };

    ArrowPosition {
        top: fill(shape.top),
        right: fill(shape.right),
        bottom: fill(shape.bottom),
        left: fill(shape.left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_tags_pin_at_the_reported_offset() {
        let pos = arrow_position(tag(Side::Top, Alignment::Start), 10.0, 8.0);
        assert_eq!(pos.top, Some(ArrowCoord::Percent(100.0)));
        assert_eq!(pos.left, Some(ArrowCoord::Px(10.0)));
        assert_eq!(pos.right, None);
        assert_eq!(pos.bottom, None);
    }

    #[test]
    fn mid_tags_center_the_arrow() {
        let pos = arrow_position(tag(Side::Bottom, Alignment::Mid), 0.0, 8.0);
        assert_eq!(pos.top, Some(ArrowCoord::Px(0.0)));
        assert_eq!(pos.left, Some(ArrowCoord::Percent(50.0)));

        let pos = arrow_position(tag(Side::Right, Alignment::Mid), 0.0, 8.0);
        assert_eq!(pos.top, Some(ArrowCoord::Percent(50.0)));
        assert_eq!(pos.left, Some(ArrowCoord::Px(0.0)));
    }

    #[test]
    fn end_tags_back_off_by_the_arrow_diagonal() {
        let pos = arrow_position(tag(Side::Left, Alignment::End), 10.0, 8.0);
        assert_eq!(pos.left, Some(ArrowCoord::Percent(100.0)));
        assert_eq!(pos.bottom, Some(ArrowCoord::Px(-6.0)));
    }

    #[test]
    fn every_tag_resolves_to_a_non_empty_position() {
        for side in Side::EVALUATION_ORDER {
            for alignment in [Alignment::Start, Alignment::Mid, Alignment::End] {
                let pos = arrow_position(tag(side, alignment), 12.0, 8.0);
                assert_ne!(pos, ArrowPosition::default(), "{side}-{}", alignment.as_str());
            }
        }
    }
}
