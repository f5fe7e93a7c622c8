use crate::geometry::{Side, Size};

use super::types::{BoxMargins, Candidate, FitTier};

/// Base score of the most preferred side; priority decreases by one per
/// list position.
const MAX_WEIGHT: f32 = 4.0;

/// Single policy point for every fit check. Historical versions of this
/// logic disagreed between `>` and `>=`; strict `>` is the rule, and both
/// the single-axis and the cross-axis checks go through here.
#[inline]
pub(super) fn fits(space: f32, needed: f32) -> bool {
    space > needed
}

/// Candidate evaluator: score all four sides against the overlay size and
/// the caller's ordered allowed-side list. Sides missing from the list are
/// still evaluated; they score in the lowest priority tier and serve as
/// fallback only.
pub fn evaluate_candidates(
    margins: &BoxMargins,
    overlay: Size,
    allowed: &[Side],
    offset: f32,
) -> Vec<Candidate> {
    let tw = overlay.width;
    let th = overlay.height;

    // Cross-axis room needed to center the overlay on the reference midpoint
    // without overflowing the container.
    let half_dw = (tw - margins.width) / 2.0;
    let half_dh = (th - margins.height) / 2.0;

    let d_hor = margins.left.available - margins.right.available;
    let d_ver = margins.top.available - margins.bottom.available;

    Side::EVALUATION_ORDER
        .iter()
        .map(|&side| {
            let margin = *margins.side(side);
            let priority_index = allowed.iter().position(|&s| s == side);
            let base = match priority_index {
                Some(index) => MAX_WEIGHT - index as f32,
                None => MAX_WEIGHT - allowed.len() as f32,
            };

            let (fits_single_axis, fits_both_axes, cross_axis_delta) = if side.is_vertical() {
                let single = fits(margin.available, th + offset);
                let full = single
                    && fits(margins.left.available, half_dw)
                    && fits(margins.right.available, half_dw);
                (single, full, d_hor)
            } else {
                let single = fits(margin.available, tw + offset);
                let full = single
                    && fits(margins.top.available, half_dh)
                    && fits(margins.bottom.available, half_dh);
                (single, full, d_ver)
            };

            // Fit quality dominates, but the fractional term keeps the
            // caller's priority order as the ranking within a tier.
            let (score, tier) = if fits_both_axes {
                (base + 3.0 + base / MAX_WEIGHT, FitTier::Mid)
            } else if fits_single_axis {
                (base + 2.0 + base / MAX_WEIGHT, FitTier::Edge)
            } else {
                (base, FitTier::Edge)
            };

            Candidate {
                side,
                margin,
                priority_index,
                fits_single_axis,
                fits_both_axes,
                cross_axis_delta,
                score,
                tier,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::margins::box_margins;
    use super::*;
    use crate::geometry::Rect;

    const DEFAULT_ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    fn ample_margins() -> BoxMargins {
        box_margins(
            Rect::new(400.0, 300.0, 100.0, 40.0),
            Rect::new(0.0, 0.0, 1000.0, 800.0),
        )
    }

    #[test]
    fn full_fit_scores_follow_priority_order() {
        let margins = ample_margins();
        let candidates =
            evaluate_candidates(&margins, Size::new(80.0, 30.0), &DEFAULT_ORDER, 8.0);

        assert!(candidates.iter().all(|c| c.fits_both_axes));
        let score_of = |side: Side| {
            candidates
                .iter()
                .find(|c| c.side == side)
                .map(|c| c.score)
                .unwrap()
        };
        // base + 3 + base/4
        assert_eq!(score_of(Side::Top), 8.0);
        assert_eq!(score_of(Side::Right), 6.75);
        assert_eq!(score_of(Side::Bottom), 5.5);
        assert_eq!(score_of(Side::Left), 4.25);
    }

    #[test]
    fn single_axis_fit_is_strict() {
        // top margin exactly equals th + offset: strict comparison fails.
        let margins = box_margins(
            Rect::new(100.0, 38.0, 100.0, 40.0),
            Rect::new(0.0, 0.0, 1000.0, 800.0),
        );
        assert_eq!(margins.top.available, 38.0);
        let candidates =
            evaluate_candidates(&margins, Size::new(80.0, 30.0), &DEFAULT_ORDER, 8.0);
        let top = candidates.iter().find(|c| c.side == Side::Top).unwrap();
        assert!(!top.fits_single_axis);

        // One pixel more and it fits.
        let margins = box_margins(
            Rect::new(100.0, 39.0, 100.0, 40.0),
            Rect::new(0.0, 0.0, 1000.0, 800.0),
        );
        let candidates =
            evaluate_candidates(&margins, Size::new(80.0, 30.0), &DEFAULT_ORDER, 8.0);
        let top = candidates.iter().find(|c| c.side == Side::Top).unwrap();
        assert!(top.fits_single_axis);
    }

    #[test]
    fn unlisted_sides_fall_into_lowest_tier() {
        let margins = ample_margins();
        let candidates = evaluate_candidates(&margins, Size::new(80.0, 30.0), &[Side::Top], 8.0);

        let top = candidates.iter().find(|c| c.side == Side::Top).unwrap();
        let bottom = candidates.iter().find(|c| c.side == Side::Bottom).unwrap();
        assert_eq!(top.priority_index, Some(0));
        assert_eq!(bottom.priority_index, None);
        // Unlisted base is 4 - len = 3, still boosted when it fits.
        assert_eq!(bottom.score, 3.0 + 3.0 + 0.75);
        assert!(top.score > bottom.score);
    }

    #[test]
    fn cross_axis_delta_reflects_margin_imbalance() {
        let margins = box_margins(
            Rect::new(100.0, 300.0, 100.0, 40.0),
            Rect::new(0.0, 0.0, 1000.0, 800.0),
        );
        let candidates =
            evaluate_candidates(&margins, Size::new(80.0, 30.0), &DEFAULT_ORDER, 8.0);
        let top = candidates.iter().find(|c| c.side == Side::Top).unwrap();
        let left = candidates.iter().find(|c| c.side == Side::Left).unwrap();
        // left margin 100, right margin 800: reference sits near the left edge.
        assert_eq!(top.cross_axis_delta, -700.0);
        // top margin 300, bottom margin 460.
        assert_eq!(left.cross_axis_delta, -160.0);
    }

    #[test]
    fn overlay_wider_than_cross_space_degrades_to_single_axis() {
        // Reference centered, but the overlay is wide enough that centering
        // would overflow both cross edges.
        let margins = box_margins(
            Rect::new(40.0, 100.0, 20.0, 20.0),
            Rect::new(0.0, 0.0, 100.0, 400.0),
        );
        let candidates =
            evaluate_candidates(&margins, Size::new(110.0, 30.0), &DEFAULT_ORDER, 8.0);
        let top = candidates.iter().find(|c| c.side == Side::Top).unwrap();
        assert!(top.fits_single_axis);
        assert!(!top.fits_both_axes);
        assert_eq!(top.tier, FitTier::Edge);
    }
}
