use virtual_scroll::{Index, OptionsError, VirtualScrollOptions};

use crate::{DragEngine, FrameToken, Host, PointerEvent, RowRegistry, ScrollController};

/// A virtual scroll list component: windowing, programmatic scrolling and drag reordering.
///
/// Wire it up like this:
/// - call [`Self::mount`] once the scroll container exists
/// - forward scroll/resize events, pointer events and fired frame tokens
/// - on every `Update(Some(index))`, render rows `index.start..index.end` and record them in
///   [`Self::rows_mut`]
#[derive(Clone, Debug)]
pub struct VirtualScroll {
    controller: ScrollController,
    drag: DragEngine,
    rows: RowRegistry,
}

impl VirtualScroll {
    /// Creates a component without validating `options`; bad geometry simply never emits.
    pub fn new(options: VirtualScrollOptions) -> Self {
        Self {
            controller: ScrollController::new(options),
            drag: DragEngine::new(),
            rows: RowRegistry::new(),
        }
    }

    pub fn try_new(options: VirtualScrollOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// Schedules the initial windowing pass.
    pub fn mount<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.controller.schedule_refresh(host);
    }

    pub fn options(&self) -> &VirtualScrollOptions {
        self.controller.options()
    }

    pub fn set_options<H: Host + ?Sized>(&mut self, options: VirtualScrollOptions, host: &mut H) {
        self.controller.set_options(options, host);
    }

    pub fn update_options<H: Host + ?Sized>(
        &mut self,
        f: impl FnOnce(&mut VirtualScrollOptions),
        host: &mut H,
    ) {
        self.controller.update_options(f, host);
    }

    /// The last window emitted.
    pub fn index(&self) -> Option<Index> {
        self.controller.current()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn controller(&self) -> &ScrollController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScrollController {
        &mut self.controller
    }

    pub fn drag(&self) -> &DragEngine {
        &self.drag
    }

    pub fn rows(&self) -> &RowRegistry {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut RowRegistry {
        &mut self.rows
    }

    pub fn on_scroll<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.controller.on_scroll(host);
    }

    pub fn on_resize<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.controller.on_resize(host);
    }

    /// Dispatches a fired frame. Returns `false` for tokens this component never requested.
    pub fn on_frame<H: Host + ?Sized>(&mut self, token: FrameToken, now_ms: u64, host: &mut H) -> bool {
        if self.controller.on_frame(token, now_ms, host) {
            return true;
        }
        self.drag.on_frame(token, self.controller.options(), host)
    }

    pub fn on_pointer_down<H: Host + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        self.drag.pointer_down(
            event,
            self.controller.current(),
            &self.rows,
            self.controller.options(),
            host,
        )
    }

    pub fn on_pointer_move<H: Host + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        self.drag.pointer_move(event, &self.rows, self.controller.options(), host);
    }

    pub fn on_pointer_up<H: Host + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        self.drag.pointer_up(event, &self.rows, self.controller.options(), host);
    }

    pub fn on_pointer_cancel<H: Host + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        self.drag.pointer_cancel(event, &self.rows, self.controller.options(), host);
    }

    pub fn scroll_to_index<H: Host + ?Sized>(
        &mut self,
        index: usize,
        offset: f64,
        now_ms: u64,
        host: &mut H,
    ) -> f64 {
        self.controller.scroll_to_index(index, offset, now_ms, host)
    }

    pub fn scroll_to_top<H: Host + ?Sized>(&mut self, now_ms: u64, host: &mut H) -> f64 {
        self.controller.scroll_to_top(now_ms, host)
    }

    pub fn scroll_to_bottom<H: Host + ?Sized>(&mut self, now_ms: u64, host: &mut H) -> f64 {
        self.controller.scroll_to_bottom(now_ms, host)
    }

    pub fn reset_scroll_top<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.controller.reset_scroll_top(host);
    }

    /// Cancels every outstanding frame and ends any drag without emitting.
    pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.drag.teardown(host);
        self.controller.teardown(host);
        self.rows.clear();
    }
}
