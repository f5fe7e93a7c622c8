use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::config::PlacementConfig;
use crate::geometry::{Rect, Side, Size};
use crate::placement::{
    DEFAULT_PLACEMENT_QUEUE, SelectedPlacement, box_margins, evaluate_candidates,
};

#[derive(Debug, Serialize)]
pub struct PlacementDump {
    pub reference: Rect,
    pub container: Rect,
    pub overlay: Size,
    pub offset: f32,
    pub margins: Vec<MarginDump>,
    pub candidates: Vec<CandidateDump>,
    pub selected: SelectedDump,
}

#[derive(Debug, Serialize)]
pub struct MarginDump {
    pub side: String,
    pub available: f32,
    pub start: [f32; 2],
    pub mid: [f32; 2],
    pub end: [f32; 2],
}

#[derive(Debug, Serialize)]
pub struct CandidateDump {
    pub side: String,
    pub priority_index: Option<usize>,
    pub fits_single_axis: bool,
    pub fits_both_axes: bool,
    pub cross_axis_delta: f32,
    pub score: f32,
    pub tier: String,
}

#[derive(Debug, Serialize)]
pub struct SelectedDump {
    pub tag: String,
    pub side: String,
    pub alignment: String,
    pub x: f32,
    pub y: f32,
    pub arrow_offset: Option<f32>,
}

impl SelectedDump {
    pub fn from_placement(placement: &SelectedPlacement) -> Self {
        SelectedDump {
            tag: placement.tag.to_string(),
            side: placement.tag.side.as_str().to_string(),
            alignment: placement.tag.alignment.as_str().to_string(),
            x: placement.x,
            y: placement.y,
            arrow_offset: placement.arrow_offset,
        }
    }
}

impl PlacementDump {
    /// Re-run every pipeline stage over the given snapshots and record the
    /// intermediate values. Debugging aid: the selected coordinates here
    /// are container-relative, without scroll compensation.
    pub fn compute(
        reference: Rect,
        container: Rect,
        overlay: Size,
        config: &PlacementConfig,
    ) -> Self {
        let margins = box_margins(reference, container);
        let allowed: &[Side] = if config.placements.is_empty() {
            &DEFAULT_PLACEMENT_QUEUE
        } else {
            &config.placements
        };
        let candidates = evaluate_candidates(&margins, overlay, allowed, config.offset);
        let selected = crate::placement::place(reference, container, overlay, config);

        let margin_dump = Side::EVALUATION_ORDER
            .iter()
            .map(|&side| {
                let margin = margins.side(side);
                MarginDump {
                    side: side.as_str().to_string(),
                    available: margin.available,
                    start: [margin.start.x, margin.start.y],
                    mid: [margin.mid.x, margin.mid.y],
                    end: [margin.end.x, margin.end.y],
                }
            })
            .collect();

        let candidate_dump = candidates
            .iter()
            .map(|candidate| CandidateDump {
                side: candidate.side.as_str().to_string(),
                priority_index: candidate.priority_index,
                fits_single_axis: candidate.fits_single_axis,
                fits_both_axes: candidate.fits_both_axes,
                cross_axis_delta: candidate.cross_axis_delta,
                score: candidate.score,
                tier: format!("{:?}", candidate.tier).to_lowercase(),
            })
            .collect();

        PlacementDump {
            reference,
            container,
            overlay,
            offset: config.offset,
            margins: margin_dump,
            candidates: candidate_dump,
            selected: SelectedDump::from_placement(&selected),
        }
    }
}

pub fn write_placement_dump(path: &Path, dump: &PlacementDump) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dump)?;
    Ok(())
}
