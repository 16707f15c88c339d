use std::sync::Arc;

use crate::{Easing, OptionsError, VirtualScrollEvent};

/// Rows rendered above and below the visible range when no padding is configured.
pub const DEFAULT_PADDING: usize = 3;

/// A callback fired for every event a virtual scroll component emits.
pub type OnEventCallback = Arc<dyn Fn(&VirtualScrollEvent) + Send + Sync>;

/// Configuration for a virtual scroll component.
///
/// This type is cheap to clone: the event callback is stored in an `Arc`, so adapters can tweak
/// a few fields and hand the result back without reallocating closures.
pub struct VirtualScrollOptions {
    /// Uniform row height in pixels. Every row must have exactly this height.
    pub row_height: f64,
    pub item_count: usize,
    /// Extra rows rendered beyond the visible range to mask scroll latency.
    pub padding: usize,

    /// Class that marks an element as a drag handle.
    pub draggable_class: String,
    pub allow_horizontal_drag: bool,
    pub allow_vertical_drag: bool,
    /// Keeps the dragged row inside the viewport and enables the end-of-list drop sentinel.
    pub contain_drag_to_viewport: bool,

    /// Duration of `scroll_to_index` animations.
    pub scroll_duration_ms: u64,
    pub easing: Easing,

    pub on_event: Option<OnEventCallback>,
}

impl Clone for VirtualScrollOptions {
    fn clone(&self) -> Self {
        Self {
            row_height: self.row_height,
            item_count: self.item_count,
            padding: self.padding,
            draggable_class: self.draggable_class.clone(),
            allow_horizontal_drag: self.allow_horizontal_drag,
            allow_vertical_drag: self.allow_vertical_drag,
            contain_drag_to_viewport: self.contain_drag_to_viewport,
            scroll_duration_ms: self.scroll_duration_ms,
            easing: self.easing,
            on_event: self.on_event.clone(),
        }
    }
}

impl VirtualScrollOptions {
    /// Creates options for `item_count` rows of `row_height` pixels each.
    pub fn new(item_count: usize, row_height: f64) -> Self {
        Self {
            row_height,
            item_count,
            padding: DEFAULT_PADDING,
            draggable_class: "drag".to_owned(),
            allow_horizontal_drag: false,
            allow_vertical_drag: true,
            contain_drag_to_viewport: true,
            scroll_duration_ms: 300,
            easing: Easing::Linear,
            on_event: None,
        }
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_draggable_class(mut self, class: impl Into<String>) -> Self {
        self.draggable_class = class.into();
        self
    }

    pub fn with_drag_axes(mut self, horizontal: bool, vertical: bool) -> Self {
        self.allow_horizontal_drag = horizontal;
        self.allow_vertical_drag = vertical;
        self
    }

    pub fn with_contain_drag_to_viewport(mut self, contain: bool) -> Self {
        self.contain_drag_to_viewport = contain;
        self
    }

    pub fn with_scroll_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.scroll_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&VirtualScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
        self
    }

    /// Total height of all rows, in pixels.
    pub fn scroll_height(&self) -> f64 {
        self.row_height * self.item_count as f64
    }

    pub fn has_valid_row_height(&self) -> bool {
        self.row_height.is_finite() && self.row_height > 0.0
    }

    /// Checks the options for values the runtime would only tolerate by doing nothing.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.has_valid_row_height() {
            return Err(OptionsError::InvalidRowHeight(self.row_height));
        }
        if self.draggable_class.trim().is_empty() {
            return Err(OptionsError::EmptyDraggableClass);
        }
        if !self.allow_horizontal_drag && !self.allow_vertical_drag {
            return Err(OptionsError::NoDragAxis);
        }
        if self.scroll_duration_ms == 0 {
            return Err(OptionsError::ZeroScrollDuration);
        }
        Ok(())
    }

    /// Fires the event callback, if one is configured.
    pub fn notify(&self, event: VirtualScrollEvent) {
        vtrace!(?event, "VirtualScrollOptions::notify");
        if let Some(cb) = &self.on_event {
            cb(&event);
        }
    }
}

impl core::fmt::Debug for VirtualScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualScrollOptions")
            .field("row_height", &self.row_height)
            .field("item_count", &self.item_count)
            .field("padding", &self.padding)
            .field("draggable_class", &self.draggable_class)
            .field("allow_horizontal_drag", &self.allow_horizontal_drag)
            .field("allow_vertical_drag", &self.allow_vertical_drag)
            .field("contain_drag_to_viewport", &self.contain_drag_to_viewport)
            .field("scroll_duration_ms", &self.scroll_duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
