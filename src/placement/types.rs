use serde::Serialize;

use crate::geometry::{PlacementTag, Point, Side};

/// Free space between one side of the reference element and the matching
/// container edge, plus the reference-box corners touching that side.
/// All coordinates are container-relative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub side: Side,
    /// Distance from the reference edge to the container edge on this side.
    pub available: f32,
    /// Leading corner of the reference box on this side.
    pub start: Point,
    /// Center of the reference box edge on this side.
    pub mid: Point,
    /// Trailing corner of the reference box on this side.
    pub end: Point,
}

/// Reference-element size and the four side margins, as produced by the box
/// inspector. Snapshot semantics: recomputed every pass, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxMargins {
    pub width: f32,
    pub height: f32,
    pub top: Margin,
    pub right: Margin,
    pub bottom: Margin,
    pub left: Margin,
}

impl BoxMargins {
    pub fn side(&self, side: Side) -> &Margin {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

/// Which coordinate strategy the winning candidate selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FitTier {
    /// Full fit on both axes: overlay centered on the side midpoint.
    Mid,
    /// Single-axis fit (or degenerate fallback): overlay aligned to the
    /// reference corner with more cross-axis room.
    Edge,
}

/// Scored placement option for one side. Derived per pass and consumed by
/// the selector; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub side: Side,
    pub margin: Margin,
    /// Position in the caller's allowed-side list, `None` when unlisted.
    pub priority_index: Option<usize>,
    pub fits_single_axis: bool,
    pub fits_both_axes: bool,
    /// Margin imbalance on the cross axis (left−right for vertical sides,
    /// top−bottom for horizontal ones); its sign picks start vs end
    /// alignment in the edge strategy.
    pub cross_axis_delta: f32,
    pub score: f32,
    pub tier: FitTier,
}

/// Final output of one computation pass, consumed immediately by the
/// rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedPlacement {
    pub tag: PlacementTag,
    pub x: f32,
    pub y: f32,
    /// Pixel offset of the pointer arrow along the chosen side. `None` for
    /// mid alignments, where the arrow anchors at 50%.
    pub arrow_offset: Option<f32>,
}
