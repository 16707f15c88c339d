use virtual_scroll::{Index, ViewportState, VirtualScrollEvent, VirtualScrollOptions, WindowCalculator};

use crate::{FrameToken, Geometry, Scheduler, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Refresh {
    Idle,
    /// Waiting for the next frame after a scroll/resize.
    AwaitingFrame(FrameToken),
    /// Frame fired; waiting one more tick for layout to settle before measuring.
    Settling(FrameToken),
}

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation {
    id: u64,
    tween: Tween,
    token: FrameToken,
}

/// Decides when the windowing pass runs and animates programmatic scrolling.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` when the scroll container reports those events
/// - `on_frame(token, now_ms, host)` when a frame it requested fires
///
/// Scroll and resize bursts are coalesced: at most one windowing pass is pending at a time, and
/// it measures the container only after the frame fires and one further tick has passed.
#[derive(Clone, Debug)]
pub struct ScrollController {
    options: VirtualScrollOptions,
    window: WindowCalculator,
    viewport: ViewportState,
    refresh: Refresh,
    initial: bool,
    animation: Option<ScrollAnimation>,
    animation_id: u64,
}

impl ScrollController {
    pub fn new(options: VirtualScrollOptions) -> Self {
        vdebug!(
            item_count = options.item_count,
            row_height = options.row_height,
            padding = options.padding,
            "ScrollController::new"
        );
        let viewport = ViewportState {
            row_height: options.row_height,
            item_count: options.item_count,
            padding: options.padding,
            ..ViewportState::default()
        };
        Self {
            options,
            window: WindowCalculator::new(),
            viewport,
            refresh: Refresh::Idle,
            initial: true,
            animation: None,
            animation_id: 0,
        }
    }

    pub fn options(&self) -> &VirtualScrollOptions {
        &self.options
    }

    /// Replaces the options, forgets the last reported range and schedules a windowing pass.
    pub fn set_options<H: Scheduler + ?Sized>(&mut self, options: VirtualScrollOptions, host: &mut H) {
        vdebug!(
            item_count = options.item_count,
            row_height = options.row_height,
            padding = options.padding,
            "ScrollController::set_options"
        );
        self.options = options;
        self.viewport.row_height = self.options.row_height;
        self.viewport.item_count = self.options.item_count;
        self.viewport.padding = self.options.padding;
        self.window.reset();
        self.schedule_refresh(host);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options<H: Scheduler + ?Sized>(
        &mut self,
        f: impl FnOnce(&mut VirtualScrollOptions),
        host: &mut H,
    ) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, host);
    }

    pub fn set_item_count<H: Scheduler + ?Sized>(&mut self, item_count: usize, host: &mut H) {
        self.update_options(|o| o.item_count = item_count, host);
    }

    pub fn set_row_height<H: Scheduler + ?Sized>(&mut self, row_height: f64, host: &mut H) {
        self.update_options(|o| o.row_height = row_height, host);
    }

    /// The last window emitted.
    pub fn current(&self) -> Option<Index> {
        self.window.current()
    }

    /// The viewport geometry seen by the last windowing pass.
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport
    }

    pub fn is_refresh_pending(&self) -> bool {
        self.refresh != Refresh::Idle
    }

    pub fn on_scroll<H: Scheduler + ?Sized>(&mut self, host: &mut H) {
        self.schedule_refresh(host);
    }

    pub fn on_resize<H: Scheduler + ?Sized>(&mut self, host: &mut H) {
        self.schedule_refresh(host);
    }

    /// Requests a windowing pass on the next frame, unless one is already pending.
    pub fn schedule_refresh<H: Scheduler + ?Sized>(&mut self, host: &mut H) {
        if self.refresh != Refresh::Idle {
            return;
        }
        let token = host.request_frame();
        vtrace!(?token, "ScrollController::schedule_refresh");
        self.refresh = Refresh::AwaitingFrame(token);
    }

    /// Handles a fired frame. Returns `false` if the token does not belong to this controller.
    pub fn on_frame<H: Geometry + Scheduler + ?Sized>(
        &mut self,
        token: FrameToken,
        now_ms: u64,
        host: &mut H,
    ) -> bool {
        match self.refresh {
            Refresh::AwaitingFrame(t) if t == token => {
                self.refresh = Refresh::Settling(host.defer());
                return true;
            }
            Refresh::Settling(t) if t == token => {
                self.refresh = Refresh::Idle;
                self.update_items(host);
                return true;
            }
            _ => {}
        }

        if self.animation.is_some_and(|a| a.token == token) {
            self.step_animation(now_ms, host);
            return true;
        }
        false
    }

    /// Measures the container and runs the windowing calculator.
    fn update_items<H: Geometry + Scheduler + ?Sized>(&mut self, host: &mut H) {
        let metrics = host.scroll_metrics();
        self.viewport = ViewportState {
            scroll_top: metrics.scroll_top,
            container_width: metrics.client_width,
            container_height: metrics.client_height,
            scrollbar_width: metrics.scrollbar_width,
            scrollbar_height: metrics.scrollbar_height,
            row_height: self.options.row_height,
            item_count: self.options.item_count,
            padding: self.options.padding,
        };

        if metrics.is_overscrolled() {
            vtrace!(scroll_top = metrics.scroll_top, "ScrollController: overscroll");
            self.options.notify(VirtualScrollEvent::Update(None));
            return;
        }

        let mut scroll_top = metrics.scroll_top;
        let scroll_height = self.options.scroll_height();
        if self.options.has_valid_row_height() && scroll_top > scroll_height {
            scroll_top = scroll_height;
            host.set_scroll_top(scroll_top);
        }

        let changed = self.window.update(
            scroll_top,
            metrics.content_height(),
            self.options.row_height,
            self.options.item_count,
            self.options.padding,
        );
        match changed {
            Some(index) => {
                self.options.notify(VirtualScrollEvent::Update(Some(index)));
                // Keep measuring until the first layout has settled.
                if self.initial {
                    self.schedule_refresh(host);
                }
            }
            None => self.initial = false,
        }
    }

    /// The scroll offset that roughly centers row `index`, shifted by `offset` pixels.
    ///
    /// Row `0` and row `item_count` map exactly to the top and to the full content height.
    pub fn scroll_target(&self, index: usize, offset: f64, container_height: f64) -> f64 {
        if !self.options.has_valid_row_height() || index == 0 {
            return 0.0;
        }
        let max = self.options.scroll_height();
        if index >= self.options.item_count {
            return max;
        }
        let row_height = self.options.row_height;
        let target = index as f64 * row_height - (container_height + row_height) / 2.0 + offset;
        if target.is_nan() {
            return 0.0;
        }
        target.clamp(0.0, max)
    }

    /// Animates the scroll position toward row `index`. Returns the target offset.
    ///
    /// Any animation already in flight is cancelled.
    pub fn scroll_to_index<H: Geometry + Scheduler + ?Sized>(
        &mut self,
        index: usize,
        offset: f64,
        now_ms: u64,
        host: &mut H,
    ) -> f64 {
        let metrics = host.scroll_metrics();
        let to = self.scroll_target(index, offset, metrics.client_height);
        if self.stop_animation(host) {
            self.options.notify(VirtualScrollEvent::ScrollEnd { completed: false });
        }

        self.animation_id = self.animation_id.wrapping_add(1);
        let tween = Tween::new(
            metrics.scroll_top,
            to,
            now_ms,
            self.options.scroll_duration_ms,
            self.options.easing,
        );
        vdebug!(
            index,
            from = tween.from,
            to,
            id = self.animation_id,
            "ScrollController::scroll_to_index"
        );
        self.animation = Some(ScrollAnimation {
            id: self.animation_id,
            tween,
            token: host.request_frame(),
        });
        to
    }

    pub fn scroll_to_top<H: Geometry + Scheduler + ?Sized>(&mut self, now_ms: u64, host: &mut H) -> f64 {
        self.scroll_to_index(0, 0.0, now_ms, host)
    }

    pub fn scroll_to_bottom<H: Geometry + Scheduler + ?Sized>(
        &mut self,
        now_ms: u64,
        host: &mut H,
    ) -> f64 {
        self.scroll_to_index(self.options.item_count, 0.0, now_ms, host)
    }

    /// Jumps to the top without animating.
    pub fn reset_scroll_top<H: Geometry + Scheduler + ?Sized>(&mut self, host: &mut H) {
        if self.stop_animation(host) {
            self.options.notify(VirtualScrollEvent::ScrollEnd { completed: false });
        }
        host.set_scroll_top(0.0);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some_and(|a| a.id == self.animation_id)
    }

    /// Cancels the running animation.
    ///
    /// Its pending frame still fires; it notices it has been superseded, stops without touching
    /// the scroll position and emits `ScrollEnd { completed: false }`.
    pub fn cancel_animation(&mut self) {
        self.animation_id = self.animation_id.wrapping_add(1);
    }

    /// Drops the animation and its frame. Returns whether there was one.
    fn stop_animation<H: Scheduler + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(prev) = self.animation.take() else {
            return false;
        };
        vdebug!(id = prev.id, "ScrollController: animation superseded");
        host.cancel_frame(prev.token);
        true
    }

    fn step_animation<H: Geometry + Scheduler + ?Sized>(&mut self, now_ms: u64, host: &mut H) {
        let Some(mut anim) = self.animation.take() else {
            return;
        };
        if anim.id != self.animation_id {
            vdebug!(id = anim.id, "ScrollController: animation cancelled");
            self.options.notify(VirtualScrollEvent::ScrollEnd { completed: false });
            return;
        }

        let tween = anim.tween;
        if tween.is_done(now_ms) {
            host.set_scroll_top(tween.to);
            vdebug!(to = tween.to, "ScrollController: animation finished");
            self.options.notify(VirtualScrollEvent::ScrollEnd { completed: true });
            return;
        }
        if host.scroll_metrics().scroll_top == tween.to {
            self.options.notify(VirtualScrollEvent::ScrollEnd { completed: true });
            return;
        }

        host.set_scroll_top(tween.sample(now_ms));
        anim.token = host.request_frame();
        self.animation = Some(anim);
    }

    /// Cancels every frame this controller is waiting for. A running animation ends silently.
    pub fn teardown<H: Scheduler + ?Sized>(&mut self, host: &mut H) {
        match self.refresh {
            Refresh::AwaitingFrame(token) | Refresh::Settling(token) => host.cancel_frame(token),
            Refresh::Idle => {}
        }
        self.refresh = Refresh::Idle;
        self.stop_animation(host);
    }
}
