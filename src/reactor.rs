use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::{PlacementConfig, ReactorConfig};
use crate::element::{ElementId, ElementProvider};
use crate::placement::{SelectedPlacement, compute_placement};

/// Walk ancestors from the element's parent up to (exclusive past) `root`,
/// returning the first one with scrollable overflow on any axis, or `root`
/// itself when none qualifies.
pub fn find_scroll_container(
    provider: &dyn ElementProvider,
    element: ElementId,
    root: ElementId,
) -> ElementId {
    let mut current = provider.parent(element);
    while let Some(el) = current {
        if el == root {
            break;
        }
        if provider.overflow(el).any_scrollable() {
            return el;
        }
        current = provider.parent(el);
    }
    root
}

/// Trailing-edge debouncer with explicit state: each trigger resets the
/// pending deadline (last write wins), so a burst of events fires exactly
/// once, `delay` after the last one. Time is passed in rather than read, to
/// keep the reactor synchronous and testable.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Returns true at most once per
    /// burst.
    pub fn fire_ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Listener effect the host must apply after a rebind. The reactor only
/// tracks state; actual event (un)subscription is the host's side of the
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerUpdate {
    Unchanged,
    Attach(ElementId),
    Replace {
        detach: ElementId,
        attach: ElementId,
    },
    Detach(ElementId),
}

/// Association between one overlay instance and the scroll container it
/// listens to. At most one container is tracked at a time; rebinding
/// always reports the old listener before the new one attaches.
#[derive(Debug, Default)]
pub struct ScrollBinding {
    reference_parent: Option<ElementId>,
    container: Option<ElementId>,
    listening: bool,
}

impl ScrollBinding {
    pub fn container(&self) -> Option<ElementId> {
        self.container
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Re-resolve the scroll container for `reference`. Fast path: an
    /// unchanged reference parent skips resolution entirely; an unchanged
    /// container skips rebinding. A listener is only attached when the
    /// container is itself scrollable.
    pub fn rebind(
        &mut self,
        provider: &dyn ElementProvider,
        reference: ElementId,
        root: ElementId,
        override_container: Option<ElementId>,
    ) -> ListenerUpdate {
        let parent = provider.parent(reference);
        if parent == self.reference_parent && self.container.is_some() {
            return ListenerUpdate::Unchanged;
        }
        self.reference_parent = parent;

        let new = override_container
            .unwrap_or_else(|| find_scroll_container(provider, reference, root));
        if Some(new) == self.container {
            return ListenerUpdate::Unchanged;
        }

        let old = if self.listening { self.container } else { None };
        let scrollable = provider.overflow(new).any_scrollable();
        self.container = Some(new);
        self.listening = scrollable;

        match (old, scrollable) {
            (Some(old), true) => ListenerUpdate::Replace {
                detach: old,
                attach: new,
            },
            (Some(old), false) => ListenerUpdate::Detach(old),
            (None, true) => ListenerUpdate::Attach(new),
            (None, false) => ListenerUpdate::Unchanged,
        }
    }

    /// Drop the binding, reporting the listener to detach (if any). The
    /// cleared parent forces full re-resolution on the next rebind.
    pub fn teardown(&mut self) -> Option<ElementId> {
        self.reference_parent = None;
        let detach = if self.listening {
            self.container.take()
        } else {
            self.container = None;
            None
        };
        self.listening = false;
        detach
    }
}

/// One live overlay: its element roles, scroll binding, debouncer, and the
/// last computed placement. Owned by the registry, never by the elements.
#[derive(Debug)]
pub struct OverlayInstance {
    reference: ElementId,
    overlay: ElementId,
    root: ElementId,
    container_override: Option<ElementId>,
    binding: ScrollBinding,
    debouncer: Debouncer,
    pending: bool,
    last: Option<SelectedPlacement>,
}

impl OverlayInstance {
    fn new(reference: ElementId, overlay: ElementId, root: ElementId, config: &ReactorConfig) -> Self {
        Self {
            reference,
            overlay,
            root,
            container_override: None,
            binding: ScrollBinding::default(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            pending: false,
            last: None,
        }
    }

    /// Pin the container instead of resolving it from overflow styles.
    pub fn set_container(&mut self, container: Option<ElementId>) {
        self.container_override = container;
    }

    pub fn binding(&self) -> &ScrollBinding {
        &self.binding
    }

    pub fn last_placement(&self) -> Option<SelectedPlacement> {
        self.last
    }

    /// Repair the scroll binding and mark the placement dirty. Coordinates
    /// are not computed here: the host calls `flush` after its next layout
    /// pass, once the overlay box exists to be measured.
    pub fn request_update(&mut self, provider: &dyn ElementProvider) -> ListenerUpdate {
        let update =
            self.binding
                .rebind(provider, self.reference, self.root, self.container_override);
        self.pending = true;
        update
    }

    /// Compute the placement if one is pending; otherwise return the cached
    /// result. `None` means the reference or overlay could not be measured
    /// and the overlay should not be shown.
    pub fn flush(
        &mut self,
        provider: &dyn ElementProvider,
        config: &PlacementConfig,
    ) -> Option<SelectedPlacement> {
        if !self.pending {
            return self.last;
        }
        self.pending = false;
        let container = self.binding.container().unwrap_or(self.root);
        self.last = compute_placement(provider, self.reference, container, self.overlay, config);
        self.last
    }

    /// Record a scroll event; recomputation happens later, via `tick`.
    pub fn on_scroll(&mut self, now: Instant) {
        self.debouncer.trigger(now);
    }

    /// Advance the debounce clock. Recomputes and returns the fresh
    /// placement exactly once per settled scroll burst.
    pub fn tick(
        &mut self,
        now: Instant,
        provider: &dyn ElementProvider,
        config: &PlacementConfig,
    ) -> Option<SelectedPlacement> {
        if !self.debouncer.fire_ready(now) {
            return None;
        }
        self.pending = true;
        self.flush(provider, config)
    }
}

/// Explicit registry of live overlays keyed by the owning element,
/// replacing any notion of a shared singleton instance. State never lives
/// on the elements themselves.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    instances: HashMap<ElementId, OverlayInstance>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or create the instance owned by `owner`, updating its element
    /// roles. Re-acquiring never duplicates listeners: the existing binding
    /// is kept and repaired on the next `request_update`.
    pub fn acquire(
        &mut self,
        owner: ElementId,
        reference: ElementId,
        overlay: ElementId,
        root: ElementId,
        config: &ReactorConfig,
    ) -> &mut OverlayInstance {
        let instance = self
            .instances
            .entry(owner)
            .or_insert_with(|| OverlayInstance::new(reference, overlay, root, config));
        instance.reference = reference;
        instance.overlay = overlay;
        instance.root = root;
        instance
    }

    pub fn get_mut(&mut self, owner: ElementId) -> Option<&mut OverlayInstance> {
        self.instances.get_mut(&owner)
    }

    /// Tear an overlay down: cancel any pending debounce, drop the
    /// instance, and report the scroll listener the host must detach.
    pub fn release(&mut self, owner: ElementId) -> Option<ElementId> {
        let mut instance = self.instances.remove(&owner)?;
        instance.debouncer.cancel();
        instance.binding.teardown()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
