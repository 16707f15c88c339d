use virtual_scroll::{Bounds, ScrollMetrics};

/// An opaque handle to a host element (a DOM node, a widget id, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);

/// An opaque handle to a scheduled frame callback.
///
/// The host hands one out from [`Scheduler::request_frame`] and later passes it back to the
/// component's `on_frame` when the frame fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameToken(pub u64);

/// Layout queries and scroll writes against the scroll container and its rows.
pub trait Geometry {
    /// The element's box in page coordinates, or `None` if it is not laid out.
    fn bounding_box(&self, element: ElementId) -> Option<Bounds>;

    /// The scroll container's client box in page coordinates.
    fn container_bounds(&self) -> Bounds;

    fn scroll_metrics(&self) -> ScrollMetrics;

    fn set_scroll_top(&mut self, scroll_top: f64);

    /// The topmost hit-testable element at a page point.
    fn element_at_point(&self, x: f64, y: f64) -> Option<ElementId>;

    /// Every element at a page point, topmost first.
    ///
    /// Return `None` when the host has no such query; [`elements_from_point`] then falls back
    /// to repeated [`Self::element_at_point`] calls.
    fn elements_at_point(&self, _x: f64, _y: f64) -> Option<Vec<ElementId>> {
        None
    }

    /// Enables or disables hit testing for an element. Returns the previous setting.
    fn set_hit_testable(&mut self, element: ElementId, hit_testable: bool) -> bool;

    fn has_class(&self, element: ElementId, class: &str) -> bool;
}

/// Frame scheduling ("run before the next repaint").
pub trait Scheduler {
    fn request_frame(&mut self) -> FrameToken;

    fn cancel_frame(&mut self, token: FrameToken);

    /// Schedules a callback for the next tick, after pending layout work has settled.
    fn defer(&mut self) -> FrameToken {
        self.request_frame()
    }
}

/// Visuals and listener scoping for a drag session.
pub trait DragSurface {
    /// Clones `row` into the floating transit layer and returns the clone.
    fn spawn_transit(&mut self, row: ElementId) -> ElementId;

    /// Positions the transit clone relative to the scroll container, using a transform.
    fn translate(&mut self, transit: ElementId, x: f64, y: f64);

    fn remove_transit(&mut self, transit: ElementId);

    /// Applies (or restores) the placeholder styling of the row being dragged.
    fn mark_drag_source(&mut self, row: ElementId, active: bool);

    /// Starts delivering move/up/cancel events for a drag that began on `target`.
    fn bind_session(&mut self, target: ElementId);

    fn release_session(&mut self);
}

/// Everything a [`crate::VirtualScroll`] needs from its host.
pub trait Host: Geometry + Scheduler + DragSurface {}

impl<T: Geometry + Scheduler + DragSurface + ?Sized> Host for T {}

/// Collects every element at a page point, topmost first.
///
/// Uses [`Geometry::elements_at_point`] when available. Otherwise hit tests repeatedly,
/// disabling hit testing on each element found so the next query sees the one below it, and
/// restores the previous settings in reverse order before returning.
pub fn elements_from_point<G: Geometry + ?Sized>(
    geometry: &mut G,
    x: f64,
    y: f64,
) -> Vec<ElementId> {
    if let Some(stack) = geometry.elements_at_point(x, y) {
        return stack;
    }

    let mut elements = Vec::new();
    let mut previous = Vec::new();
    while let Some(element) = geometry.element_at_point(x, y) {
        if elements.contains(&element) {
            vwarn!(?element, "elements_from_point: hit testing could not be disabled");
            break;
        }
        elements.push(element);
        previous.push(geometry.set_hit_testable(element, false));
    }

    for (&element, hit_testable) in elements.iter().zip(previous).rev() {
        geometry.set_hit_testable(element, hit_testable);
    }
    elements
}
