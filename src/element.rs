use serde::{Deserialize, Serialize};

use crate::geometry::{OverflowStyle, Point, Rect};

/// Opaque handle identifying an element owned by the host. The engine never
/// dereferences handles itself; every lookup goes through the provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ElementId(pub u64);

/// Measurement collaborator supplied by the host (a DOM adapter, a UI
/// toolkit, or a test fixture). All geometry is read through this trait so
/// the core stays a pure function of snapshots.
pub trait ElementProvider {
    /// Current bounding rectangle in viewport coordinates, or `None` when
    /// the element is absent. Absence of the reference or overlay makes the
    /// whole placement pass return no result.
    fn bounding_rect(&self, el: ElementId) -> Option<Rect>;

    fn parent(&self, el: ElementId) -> Option<ElementId>;

    fn overflow(&self, el: ElementId) -> OverflowStyle {
        let _ = el;
        OverflowStyle::default()
    }

    /// Current scroll position of a container. Added to the computed
    /// coordinates so an overlay positioned inside a scrolled container
    /// lands where the reference is actually drawn.
    fn scroll_offset(&self, el: ElementId) -> Point {
        let _ = el;
        Point::default()
    }
}
