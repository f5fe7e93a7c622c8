use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box in viewport or container-relative coordinates.
/// Always a snapshot taken at computation time, never a live handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Placement side relative to the reference element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Fixed candidate evaluation order. Ties between equally-scored sides
    /// resolve to the earlier entry, independent of the caller's priority
    /// list.
    pub const EVALUATION_ORDER: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of the overlay along the chosen side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Mid,
    End,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Mid => "mid",
            Alignment::End => "end",
        }
    }
}

/// One of the 12 side/alignment states (`top-start` through `right-end`).
/// Doubles as the key the arrow-position lookup consumes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlacementTag {
    pub side: Side,
    pub alignment: Alignment,
}

impl PlacementTag {
    pub fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }
}

impl fmt::Display for PlacementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.side.as_str(), self.alignment.as_str())
    }
}

/// Computed overflow value for a single CSS-like overflow property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn is_scrollable(self) -> bool {
        matches!(self, Overflow::Scroll | Overflow::Auto)
    }
}

/// The three overflow properties an element carries. A container counts as
/// scrollable when any of the three resolves to `scroll` or `auto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowStyle {
    pub overflow: Overflow,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
}

impl OverflowStyle {
    pub fn any_scrollable(&self) -> bool {
        self.overflow.is_scrollable()
            || self.overflow_x.is_scrollable()
            || self.overflow_y.is_scrollable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn tag_formats_as_css_class() {
        let tag = PlacementTag::new(Side::Top, Alignment::Mid);
        assert_eq!(tag.to_string(), "top-mid");
        let tag = PlacementTag::new(Side::Right, Alignment::End);
        assert_eq!(tag.to_string(), "right-end");
    }

    #[test]
    fn overflow_scrollability() {
        assert!(Overflow::Scroll.is_scrollable());
        assert!(Overflow::Auto.is_scrollable());
        assert!(!Overflow::Visible.is_scrollable());
        assert!(!Overflow::Hidden.is_scrollable());

        let style = OverflowStyle {
            overflow_y: Overflow::Auto,
            ..OverflowStyle::default()
        };
        assert!(style.any_scrollable());
        assert!(!OverflowStyle::default().any_scrollable());
    }

    #[test]
    fn side_serde_uses_lowercase_names() {
        let sides: Vec<Side> = serde_json::from_str(r#"["top","right","bottom","left"]"#)
            .expect("side list parses");
        assert_eq!(
            sides,
            vec![Side::Top, Side::Right, Side::Bottom, Side::Left]
        );
    }
}
