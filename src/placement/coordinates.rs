use crate::geometry::{Alignment, PlacementTag, Side, Size};

use super::types::{Candidate, FitTier, SelectedPlacement};

/// Coordinate calculator: turn the winning candidate into final pixel
/// coordinates. The fit tier picks the strategy; coordinates come out
/// container-relative, before any scroll compensation.
pub(super) fn resolve_coordinate(
    candidate: &Candidate,
    overlay: Size,
    reference: Size,
    offset: f32,
) -> SelectedPlacement {
    match candidate.tier {
        FitTier::Mid => midpoint_coordinate(candidate, overlay, offset),
        FitTier::Edge => edge_coordinate(candidate, overlay, reference, offset),
    }
}

/// Center the overlay on the midpoint of the chosen side. The arrow sits at
/// 50%, so no pixel offset is reported.
fn midpoint_coordinate(candidate: &Candidate, overlay: Size, offset: f32) -> SelectedPlacement {
    let mid = candidate.margin.mid;
    let tw = overlay.width;
    let th = overlay.height;

    let (x, y) = match candidate.side {
        Side::Top => (mid.x - tw / 2.0, mid.y - th - offset),
        Side::Bottom => (mid.x - tw / 2.0, mid.y + offset),
        Side::Left => (mid.x - tw - offset, mid.y - th / 2.0),
        Side::Right => (mid.x + offset, mid.y - th / 2.0),
    };

    SelectedPlacement {
        tag: PlacementTag::new(candidate.side, Alignment::Mid),
        x,
        y,
        arrow_offset: None,
    }
}

/// Align the overlay to whichever reference corner leaves more cross-axis
/// room. A positive margin imbalance pulls the overlay toward the trailing
/// corner (`end`); zero resolves to `start` deterministically. The arrow
/// offset re-centers the pointer on the reference element regardless of
/// which corner the overlay hugs.
fn edge_coordinate(
    candidate: &Candidate,
    overlay: Size,
    reference: Size,
    offset: f32,
) -> SelectedPlacement {
    let start = candidate.margin.start;
    let end = candidate.margin.end;
    let tw = overlay.width;
    let th = overlay.height;
    let near_trailing = candidate.cross_axis_delta > 0.0;
    let alignment = if near_trailing {
        Alignment::End
    } else {
        Alignment::Start
    };

    let (x, y, arrow_offset) = match candidate.side {
        Side::Top => (
            if near_trailing { end.x - tw } else { start.x },
            start.y - th - offset,
            reference.width / 2.0,
        ),
        Side::Bottom => (
            if near_trailing { end.x - tw } else { start.x },
            end.y + offset,
            reference.width / 2.0,
        ),
        Side::Left => (
            start.x - tw - offset,
            if near_trailing { end.y - th } else { start.y },
            reference.height / 2.0,
        ),
        Side::Right => (
            end.x + offset,
            if near_trailing { end.y - th } else { start.y },
            reference.height / 2.0,
        ),
    };

    SelectedPlacement {
        tag: PlacementTag::new(candidate.side, alignment),
        x,
        y,
        arrow_offset: Some(arrow_offset),
    }
}
