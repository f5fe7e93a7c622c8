#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod element;
pub mod geometry;
pub mod placement;
pub mod placement_dump;
pub mod reactor;
pub mod scene;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ConfigError, PlacementConfig, ReactorConfig, load_config};
pub use element::{ElementId, ElementProvider};
pub use geometry::{Alignment, Overflow, OverflowStyle, PlacementTag, Point, Rect, Side, Size};
pub use placement::{
    ArrowCoord, ArrowPosition, BoxMargins, Candidate, DEFAULT_PLACEMENT_QUEUE, FitTier, Margin,
    SelectedPlacement, arrow_position, box_margins, compute_placement, evaluate_candidates,
    place, select_best,
};
pub use reactor::{
    Debouncer, ListenerUpdate, OverlayInstance, OverlayRegistry, ScrollBinding,
    find_scroll_container,
};
