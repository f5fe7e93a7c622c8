mod arrow;
mod candidates;
mod coordinates;
mod margins;
pub(crate) mod types;

pub use arrow::{ArrowCoord, ArrowPosition, arrow_position};
pub use candidates::evaluate_candidates;
pub use margins::box_margins;
pub use types::*;

use crate::config::PlacementConfig;
use crate::element::{ElementId, ElementProvider};
use crate::geometry::{Rect, Side, Size};

/// Default allowed-side queue; priority decreases with position.
pub const DEFAULT_PLACEMENT_QUEUE: [Side; 4] =
    [Side::Top, Side::Right, Side::Bottom, Side::Left];

/// Placement selector: the maximum-score candidate wins, ties broken by
/// evaluation order (first seen). When nothing fits even on a single axis
/// the largest-margin side is returned instead: the overlay will clip, but
/// a placement always exists once the inputs do.
///
/// Panics when `candidates` is empty; `evaluate_candidates` always yields
/// all four sides.
pub fn select_best(candidates: &[Candidate]) -> &Candidate {
    let any_fit = candidates.iter().any(|c| c.fits_single_axis);
    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        let better = if any_fit {
            candidate.score > best.score
        } else {
            candidate.margin.available > best.margin.available
        };
        if better {
            best = candidate;
        }
    }
    best
}

/// Run the full pipeline over rect snapshots: margins, candidate scoring,
/// selection, coordinates. Total function; degenerate fits fall back to a
/// defined placement rather than failing. Coordinates are
/// container-relative, without scroll compensation.
pub fn place(
    reference: Rect,
    container: Rect,
    overlay: Size,
    config: &PlacementConfig,
) -> SelectedPlacement {
    let margins = box_margins(reference, container);
    let allowed: &[Side] = if config.placements.is_empty() {
        &DEFAULT_PLACEMENT_QUEUE
    } else {
        &config.placements
    };
    let candidates = evaluate_candidates(&margins, overlay, allowed, config.offset);
    let best = select_best(&candidates);
    coordinates::resolve_coordinate(
        best,
        overlay,
        Size::new(margins.width, margins.height),
        config.offset,
    )
}

/// Provider-level entry point: measure the three elements, place, then add
/// the container's scroll offset so the overlay lands where the reference
/// is actually drawn. `None` when the reference, container, or overlay
/// cannot be measured; callers treat that as "do not show the overlay".
pub fn compute_placement(
    provider: &dyn ElementProvider,
    reference: ElementId,
    container: ElementId,
    overlay: ElementId,
    config: &PlacementConfig,
) -> Option<SelectedPlacement> {
    let reference_rect = provider.bounding_rect(reference)?;
    let container_rect = provider.bounding_rect(container)?;
    let overlay_rect = provider.bounding_rect(overlay)?;

    let mut placement = place(reference_rect, container_rect, overlay_rect.size(), config);
    let scroll = provider.scroll_offset(container);
    placement.x += scroll.x;
    placement.y += scroll.y;
    Some(placement)
}
